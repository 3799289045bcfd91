use crate::error::AppResult;
use crate::models::RefValue;
use crate::render::detail::{detail_item, detail_section, detail_text, detail_title};
use crate::render::html::escape;
use crate::render::refs::{
    render_amount_table, render_ref_groups, render_refs, LinkMode, ValueFmt,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Quest {
    name: String,
    #[serde(default)]
    additional_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "type")]
    quest_type: Option<String>,
    #[serde(default)]
    series: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    era: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    destination: Option<RefValue>,
    #[serde(default)]
    destination_coordinates: Option<String>,
    #[serde(default)]
    discovery: Option<RefValue>,
    #[serde(default)]
    preceding_discovery_quest: Option<Vec<Vec<RefValue>>>,
    #[serde(default)]
    previous_continuous_quest: Option<RefValue>,
    #[serde(default)]
    required_items: Option<Vec<RefValue>>,
    #[serde(default)]
    skills: Option<Vec<RefValue>>,
    #[serde(default)]
    guide: Option<String>,
    #[serde(default)]
    progress: Option<String>,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default)]
    reward_money: Option<i64>,
    #[serde(default)]
    advance_payment: Option<i64>,
    #[serde(default)]
    reward_items: Option<Vec<RefValue>>,
    #[serde(default)]
    reward_title: Option<String>,
}

pub fn present(data: &Value) -> AppResult<String> {
    let q: Quest = super::decode("quest", data)?;
    let nav = LinkMode::Nav;

    let title = match &q.additional_name {
        Some(extra) if !extra.is_empty() => format!("{} {extra}", q.name),
        _ => q.name.clone(),
    };
    let mut out = detail_title("Quest", &title);

    out.push_str(&detail_text("Description", q.description.as_deref()));

    let mut basics = String::new();
    basics.push_str(&detail_text("Type", q.quest_type.as_deref()));
    basics.push_str(&detail_text("Series", q.series.as_deref()));
    basics.push_str(&detail_text("Difficulty", q.difficulty.as_deref()));
    basics.push_str(&detail_text("Era", q.era.as_deref()));
    basics.push_str(&detail_text("Accepted at", q.location.as_deref()));
    basics.push_str(&detail_item(
        "Destination",
        &render_refs(q.destination.as_ref().map(std::slice::from_ref), nav, ValueFmt::Hidden),
    ));
    basics.push_str(&detail_text("Coordinates", q.destination_coordinates.as_deref()));
    basics.push_str(&detail_text("Deadline", q.deadline.as_deref()));
    out.push_str(&detail_section("Basics", &basics));

    let mut prereqs = String::new();
    prereqs.push_str(&detail_item(
        "Required skills",
        &render_refs(q.skills.as_deref(), nav, ValueFmt::Paren),
    ));
    prereqs.push_str(&detail_item(
        "Required items",
        &render_amount_table(q.required_items.as_deref(), nav),
    ));
    prereqs.push_str(&detail_item(
        "Preceding discovery quests",
        &render_ref_groups(q.preceding_discovery_quest.as_deref(), nav),
    ));
    prereqs.push_str(&detail_item(
        "Previous quest in series",
        &render_refs(q.previous_continuous_quest.as_ref().map(std::slice::from_ref), nav, ValueFmt::Hidden),
    ));
    out.push_str(&detail_section("Prerequisites", &prereqs));

    let mut walkthrough = String::new();
    walkthrough.push_str(&detail_text("Guide", q.guide.as_deref()));
    walkthrough.push_str(&detail_text("Progress", q.progress.as_deref()));
    walkthrough.push_str(&detail_item(
        "Discovery",
        &render_refs(q.discovery.as_ref().map(std::slice::from_ref), nav, ValueFmt::Hidden),
    ));
    out.push_str(&detail_section("Walkthrough", &walkthrough));

    let mut rewards = String::new();
    rewards.push_str(&detail_item(
        "Money",
        &q.reward_money.map(|m| escape(&m.to_string())).unwrap_or_default(),
    ));
    rewards.push_str(&detail_item(
        "Advance payment",
        &q.advance_payment.map(|m| escape(&m.to_string())).unwrap_or_default(),
    ));
    rewards.push_str(&detail_item(
        "Items",
        &render_amount_table(q.reward_items.as_deref(), nav),
    ));
    rewards.push_str(&detail_text("Title", q.reward_title.as_deref()));
    out.push_str(&detail_section("Rewards", &rewards));

    Ok(out)
}
