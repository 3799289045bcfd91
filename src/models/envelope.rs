use super::types::Kind;
use serde::Deserialize;
use serde_json::Value;

/// Outcome of resolving an opaque id through `/api/obj/{id}`. The backend
/// has two distinct failure payloads and they must stay distinct all the
/// way to the rendered page, so this is a sum type rather than nullable
/// fields.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// Kind recognized, payload present.
    Found { kind: Kind, data: Value },
    /// Kind tag present but not one this build knows. Expected during
    /// incremental rollout of new backend kinds, not a bug signal.
    UnknownKind { tag: String, data: Value },
    /// `msg: "not in allData"`: the id does not exist at all.
    NotFound,
    /// `msg: "no detail found"`: the id is known but its kind has no
    /// detail payload.
    NoDetail,
}

/// Wire shape of `/api/obj/{id}`. Exactly one of `(type & data)` or a
/// failure `msg` is populated; older backend builds omit `msg` entirely.
#[derive(Debug, Deserialize)]
pub struct ObjResponse {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub data: Option<Value>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl From<ObjResponse> for Resolution {
    fn from(resp: ObjResponse) -> Self {
        match (resp.kind, resp.data) {
            (Some(tag), Some(data)) => match Kind::from_tag(&tag) {
                Some(kind) => Resolution::Found { kind, data },
                None => Resolution::UnknownKind { tag, data },
            },
            _ => match resp.msg.as_deref() {
                Some("no detail found") => Resolution::NoDetail,
                // "not in allData", anything else, or no msg at all: the id
                // leads nowhere.
                _ => Resolution::NotFound,
            },
        }
    }
}
