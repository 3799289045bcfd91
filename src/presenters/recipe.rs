use crate::error::AppResult;
use crate::models::RefValue;
use crate::render::detail::{detail_item, detail_section, detail_text, detail_title};
use crate::render::refs::{render_amount_table, render_refs, LinkMode, ValueFmt};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Recipe {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    era: Option<String>,
    #[serde(default)]
    recipe_book: Option<RefValue>,
    #[serde(default)]
    required_skill: Option<Vec<RefValue>>,
    #[serde(default)]
    ingredients: Option<Vec<RefValue>>,
    #[serde(default)]
    success: Option<Vec<RefValue>>,
    #[serde(default)]
    greatsuccess: Option<Vec<RefValue>>,
    #[serde(default)]
    failure: Option<Vec<RefValue>>,
    #[serde(default)]
    other: Option<String>,
}

pub fn present(data: &Value) -> AppResult<String> {
    let r: Recipe = super::decode("recipe", data)?;
    let nav = LinkMode::Nav;

    let mut out = detail_title("Recipe", &r.name);
    out.push_str(&detail_text("Description", r.description.as_deref()));

    let mut basics = String::new();
    basics.push_str(&detail_text("Era", r.era.as_deref()));
    basics.push_str(&detail_item(
        "Recipe book",
        &render_refs(r.recipe_book.as_ref().map(std::slice::from_ref), nav, ValueFmt::Hidden),
    ));
    basics.push_str(&detail_item(
        "Required skills",
        &render_refs(r.required_skill.as_deref(), nav, ValueFmt::Paren),
    ));
    out.push_str(&detail_section("Basics", &basics));

    out.push_str(&detail_item(
        "Ingredients",
        &render_amount_table(r.ingredients.as_deref(), nav),
    ));

    let mut results = String::new();
    results.push_str(&detail_item("Success", &render_amount_table(r.success.as_deref(), nav)));
    results.push_str(&detail_item(
        "Great success",
        &render_amount_table(r.greatsuccess.as_deref(), nav),
    ));
    results.push_str(&detail_item("Failure", &render_amount_table(r.failure.as_deref(), nav)));
    out.push_str(&detail_section("Results", &results));

    out.push_str(&detail_text("Notes", r.other.as_deref()));

    Ok(out)
}
