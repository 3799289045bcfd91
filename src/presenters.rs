pub mod city;
pub mod consumable;
pub mod discovery;
pub mod equipment;
pub mod quest;
pub mod recipe;
pub mod ship;
pub mod tradegood;

use crate::error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a resolver payload into a presenter's typed shape. A payload that
/// does not fit is a typed error state, never a panic; the id is pulled from
/// the raw payload so the message can point at the offending entity.
pub(crate) fn decode<T: DeserializeOwned>(kind: &'static str, data: &Value) -> AppResult<T> {
    serde_json::from_value(data.clone()).map_err(|e| AppError::InvalidPayload {
        kind,
        id: data
            .get("id")
            .and_then(Value::as_i64)
            .unwrap_or_default()
            .into(),
        message: e.to_string(),
    })
}
