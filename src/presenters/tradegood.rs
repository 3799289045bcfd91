use crate::error::AppResult;
use crate::models::RefValue;
use crate::render::detail::{detail_item, detail_section, detail_text, detail_title};
use crate::render::html::{escape, stringify};
use crate::render::refs::{render_refs, LinkMode, ValueFmt};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct TradeGood {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    classification: Option<String>,
    #[serde(default)]
    culture: Option<RefValue>,
    /// Obtain methods arrive in assorted shapes per source; rendered through
    /// the stringify fallback rather than guessed at.
    #[serde(default)]
    obtain_method: Option<Vec<Value>>,
}

pub fn present(data: &Value) -> AppResult<String> {
    let t: TradeGood = super::decode("tradeGoods", data)?;
    let nav = LinkMode::Nav;

    let mut out = detail_title("Trade Good", &t.name);
    out.push_str(&detail_text("Description", t.description.as_deref()));

    let mut basics = String::new();
    basics.push_str(&detail_text("Category", t.category.as_deref()));
    basics.push_str(&detail_text("Classification", t.classification.as_deref()));
    basics.push_str(&detail_item(
        "Culture",
        &render_refs(t.culture.as_ref().map(std::slice::from_ref), nav, ValueFmt::Hidden),
    ));
    out.push_str(&detail_section("Basics", &basics));

    if let Some(methods) = &t.obtain_method {
        let rows: String = methods
            .iter()
            .map(|m| format!("<li>{}</li>", escape(&stringify(m))))
            .collect();
        out.push_str(&detail_item("Obtain methods", &format!("<ul>{rows}</ul>")));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn t_culture_links_and_methods_stringify() {
        let out = present(&json!({
            "id": 77,
            "name": "Nutmeg",
            "culture": {"id": 12, "name": "Southeast Asia"},
            "obtain_method": ["NPC sale", {"city": "Banda"}]
        }))
        .unwrap();
        assert!(out.contains(r#"href="/obj/12""#));
        assert!(out.contains("NPC sale"));
        assert!(out.contains(&escape(r#"{"city":"Banda"}"#)));
    }
}
