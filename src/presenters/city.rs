use crate::error::AppResult;
use crate::render::detail::{detail_section, detail_text, detail_title};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct City {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    sea_area: Option<String>,
    #[serde(default)]
    culture: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    port_enter_permission: Option<String>,
    #[serde(default)]
    facility: Option<String>,
    #[serde(default)]
    investment_reward: Option<String>,
    #[serde(default)]
    fishing: Option<String>,
}

pub fn present(data: &Value) -> AppResult<String> {
    let c: City = super::decode("city", data)?;

    let mut out = detail_title("City", &c.name);
    out.push_str(&detail_text("Description", c.description.as_deref()));

    let mut geo = String::new();
    geo.push_str(&detail_text("Region", c.region.as_deref()));
    geo.push_str(&detail_text("Sea area", c.sea_area.as_deref()));
    geo.push_str(&detail_text("Culture", c.culture.as_deref()));
    geo.push_str(&detail_text("Language", c.language.as_deref()));
    geo.push_str(&detail_text("Category", c.category.as_deref()));
    out.push_str(&detail_section("Geography", &geo));

    let mut port = String::new();
    port.push_str(&detail_text("Entry permit", c.port_enter_permission.as_deref()));
    port.push_str(&detail_text("Facilities", c.facility.as_deref()));
    port.push_str(&detail_text("Investment reward", c.investment_reward.as_deref()));
    port.push_str(&detail_text("Fishing", c.fishing.as_deref()));
    out.push_str(&detail_section("Port", &port));

    Ok(out)
}
