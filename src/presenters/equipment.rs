use crate::error::AppResult;
use crate::models::{RefValue, Requirement};
use crate::render::detail::{detail_item, detail_section, detail_text, detail_title};
use crate::render::html::escape;
use crate::render::refs::{render_refs, render_requirements_table, LinkMode, ValueFmt};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Equipment {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "type")]
    equip_type: Option<String>,
    #[serde(default)]
    classification: Option<String>,
    #[serde(default)]
    attack_power: Option<i64>,
    #[serde(default)]
    defense_power: Option<i64>,
    #[serde(default)]
    durability: Option<i64>,
    #[serde(default)]
    disguise: Option<i64>,
    #[serde(default)]
    attire: Option<i64>,
    #[serde(default)]
    use_effect: Option<RefValue>,
    #[serde(default)]
    equipped_effect: Option<RefValue>,
    #[serde(default)]
    skills: Option<Vec<RefValue>>,
    #[serde(default)]
    requirements: Option<Vec<Requirement>>,
}

fn num(label: &str, v: Option<i64>) -> String {
    detail_item(label, &v.map(|n| escape(&n.to_string())).unwrap_or_default())
}

pub fn present(data: &Value) -> AppResult<String> {
    let e: Equipment = super::decode("equipment", data)?;
    let nav = LinkMode::Nav;

    let mut out = detail_title("Equipment", &e.name);
    out.push_str(&detail_text("Description", e.description.as_deref()));

    let mut stats = String::new();
    stats.push_str(&detail_text("Type", e.equip_type.as_deref()));
    stats.push_str(&detail_text("Classification", e.classification.as_deref()));
    stats.push_str(&num("Attack", e.attack_power));
    stats.push_str(&num("Defense", e.defense_power));
    stats.push_str(&num("Durability", e.durability));
    stats.push_str(&num("Disguise", e.disguise));
    stats.push_str(&num("Attire", e.attire));
    out.push_str(&detail_section("Stats", &stats));

    let mut effects = String::new();
    effects.push_str(&detail_item(
        "Use effect",
        &render_refs(e.use_effect.as_ref().map(std::slice::from_ref), nav, ValueFmt::Hidden),
    ));
    effects.push_str(&detail_item(
        "Equipped effect",
        &render_refs(e.equipped_effect.as_ref().map(std::slice::from_ref), nav, ValueFmt::Hidden),
    ));
    effects.push_str(&detail_item(
        // skill bonuses read as "+N" rather than a bare quantity
        "Skills",
        &render_refs(e.skills.as_deref(), nav, ValueFmt::Plus),
    ));
    out.push_str(&detail_section("Effects", &effects));

    out.push_str(&detail_item(
        "Requirements",
        &render_requirements_table(e.requirements.as_deref(), nav),
    ));

    Ok(out)
}
