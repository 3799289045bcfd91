use crate::error::AppResult;
use crate::render::detail::{detail_item, detail_section, detail_text, detail_title};
use crate::render::html::escape;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Ship {
    name: String,
    #[serde(default)]
    additional_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "type")]
    ship_type: Option<String>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    lv_adventure: Option<i64>,
    #[serde(default)]
    lv_trade: Option<i64>,
    #[serde(default)]
    lv_battle: Option<i64>,
    #[serde(default)]
    default_material: Option<String>,
    #[serde(default)]
    shipbuilding: Option<String>,
    #[serde(default)]
    dry_days: Option<i64>,
    #[serde(default)]
    durability: Option<i64>,
    #[serde(default)]
    vertical_sail: Option<i64>,
    #[serde(default)]
    horizontal_sail: Option<i64>,
    #[serde(default)]
    rowing_power: Option<i64>,
    #[serde(default)]
    turning_performance: Option<i64>,
    #[serde(default)]
    wave_resistance: Option<i64>,
    #[serde(default)]
    armor: Option<i64>,
    #[serde(default)]
    cabin_capacity: Option<i64>,
    #[serde(default)]
    required_crew: Option<i64>,
    #[serde(default)]
    cannon_chambers: Option<i64>,
    #[serde(default)]
    warehouse_capacity: Option<i64>,
}

fn num(label: &str, v: Option<i64>) -> String {
    detail_item(label, &v.map(|n| escape(&n.to_string())).unwrap_or_default())
}

pub fn present(data: &Value) -> AppResult<String> {
    let s: Ship = super::decode("ship", data)?;

    // The catalog shows hull variants as "name extraname", composed here the
    // same way the list view composes its rows.
    let title = match &s.additional_name {
        Some(extra) if !extra.is_empty() => format!("{} {extra}", s.name),
        _ => s.name.clone(),
    };
    let mut out = detail_title("Ship", &title);

    out.push_str(&detail_text("Description", s.description.as_deref()));

    let mut basics = String::new();
    basics.push_str(&detail_text("Type", s.ship_type.as_deref()));
    basics.push_str(&detail_text("Size", s.size.as_deref()));
    basics.push_str(&detail_text("Category", s.category.as_deref()));
    basics.push_str(&detail_text("Default material", s.default_material.as_deref()));
    basics.push_str(&detail_text("Shipbuilding", s.shipbuilding.as_deref()));
    basics.push_str(&num("Dry-dock days", s.dry_days));
    out.push_str(&detail_section("Basics", &basics));

    let mut levels = String::new();
    levels.push_str(&num("Adventure Lv", s.lv_adventure));
    levels.push_str(&num("Trade Lv", s.lv_trade));
    levels.push_str(&num("Battle Lv", s.lv_battle));
    out.push_str(&detail_section("Required levels", &levels));

    let mut perf = String::new();
    perf.push_str(&num("Durability", s.durability));
    perf.push_str(&num("Vertical sail", s.vertical_sail));
    perf.push_str(&num("Horizontal sail", s.horizontal_sail));
    perf.push_str(&num("Rowing power", s.rowing_power));
    perf.push_str(&num("Turning", s.turning_performance));
    perf.push_str(&num("Wave resistance", s.wave_resistance));
    perf.push_str(&num("Armor", s.armor));
    out.push_str(&detail_section("Performance", &perf));

    let mut capacity = String::new();
    capacity.push_str(&num("Cabins", s.cabin_capacity));
    capacity.push_str(&num("Required crew", s.required_crew));
    capacity.push_str(&num("Cannon chambers", s.cannon_chambers));
    capacity.push_str(&num("Cargo hold", s.warehouse_capacity));
    out.push_str(&detail_section("Capacity", &capacity));

    Ok(out)
}
