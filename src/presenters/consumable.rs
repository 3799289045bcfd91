use crate::error::AppResult;
use crate::models::RefValue;
use crate::render::detail::{detail_item, detail_section, detail_text, detail_title};
use crate::render::refs::{render_amount_table, render_refs, LinkMode, ValueFmt};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Consumable {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, rename = "type")]
    item_type: Option<String>,
    #[serde(default)]
    features: Option<String>,
    #[serde(default)]
    usage_effect: Option<RefValue>,
    #[serde(default)]
    item: Option<Vec<RefValue>>,
}

pub fn present(data: &Value) -> AppResult<String> {
    let c: Consumable = super::decode("consumable", data)?;
    let nav = LinkMode::Nav;

    let mut out = detail_title("Consumable", &c.name);
    out.push_str(&detail_text("Description", c.description.as_deref()));

    let mut basics = String::new();
    basics.push_str(&detail_text("Category", c.category.as_deref()));
    basics.push_str(&detail_text("Type", c.item_type.as_deref()));
    basics.push_str(&detail_text("Features", c.features.as_deref()));
    basics.push_str(&detail_item(
        "Usage effect",
        &render_refs(c.usage_effect.as_ref().map(std::slice::from_ref), nav, ValueFmt::Hidden),
    ));
    out.push_str(&detail_section("Basics", &basics));

    out.push_str(&detail_item("Contains", &render_amount_table(c.item.as_deref(), nav)));

    Ok(out)
}
