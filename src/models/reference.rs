use super::types::EntityId;
use serde::Deserialize;

/// The atomic cross-reference unit the backend embeds in payloads: a pointer
/// to another entity plus a denormalized display name (never refetched) and an
/// optional quantity or magnitude.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RefValue {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl RefValue {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), value: None }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// One row of a free-form requirement table: a label plus content of
/// arbitrary shape (a reference list, a string, or anything else).
#[derive(Clone, Debug, Deserialize)]
pub struct Requirement {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: serde_json::Value,
}
