use crate::error::AppResult;
use crate::models::RefValue;
use crate::render::detail::{detail_item, detail_section, detail_text, detail_title};
use crate::render::html::escape;
use crate::render::refs::{render_refs, LinkMode, ValueFmt};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Discovery {
    name: String,
    #[serde(default)]
    additional_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<i64>,
    #[serde(default)]
    card_points: Option<i64>,
    #[serde(default)]
    discovery_experience: Option<i64>,
    #[serde(default)]
    report_reputation: Option<i64>,
    #[serde(default)]
    discovery_method: Option<String>,
    #[serde(default)]
    discovery_location: Option<Vec<RefValue>>,
    #[serde(default)]
    discovery_rank: Option<String>,
    #[serde(default)]
    era: Option<String>,
    #[serde(default)]
    time_period: Option<String>,
    #[serde(default)]
    weather: Option<String>,
    #[serde(default)]
    coordinates: Option<String>,
}

fn num(label: &str, v: Option<i64>) -> String {
    detail_item(label, &v.map(|n| escape(&n.to_string())).unwrap_or_default())
}

pub fn present(data: &Value) -> AppResult<String> {
    let d: Discovery = super::decode("discovery", data)?;
    let nav = LinkMode::Nav;

    let title = match &d.additional_name {
        Some(extra) if !extra.is_empty() => format!("{} {extra}", d.name),
        _ => d.name.clone(),
    };
    let mut out = detail_title("Discovery", &title);
    out.push_str(&detail_text("Description", d.description.as_deref()));

    let mut basics = String::new();
    basics.push_str(&detail_text("Category", d.category.as_deref()));
    basics.push_str(&detail_text("Rank", d.discovery_rank.as_deref()));
    basics.push_str(&num("Difficulty", d.difficulty));
    basics.push_str(&num("Card points", d.card_points));
    basics.push_str(&num("Experience", d.discovery_experience));
    basics.push_str(&num("Report reputation", d.report_reputation));
    out.push_str(&detail_section("Basics", &basics));

    let mut location = String::new();
    location.push_str(&detail_text("Method", d.discovery_method.as_deref()));
    location.push_str(&detail_item(
        "Locations",
        &render_refs(d.discovery_location.as_deref(), nav, ValueFmt::Hidden),
    ));
    location.push_str(&detail_text("Era", d.era.as_deref()));
    location.push_str(&detail_text("Time of day", d.time_period.as_deref()));
    location.push_str(&detail_text("Weather", d.weather.as_deref()));
    location.push_str(&detail_text("Coordinates", d.coordinates.as_deref()));
    out.push_str(&detail_section("Where to find", &location));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn t_locations_render_as_links() {
        let out = present(&json!({
            "id": 4,
            "name": "Aurora",
            "discovery_location": [{"id": 900, "name": "Northern Sea"}],
            "weather": "Clear"
        }))
        .unwrap();
        assert!(out.contains(r#"href="/obj/900""#));
        assert!(out.contains("Northern Sea"));
        assert!(out.contains("Clear"));
    }
}
