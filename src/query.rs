pub mod schema;
pub mod state;

pub use schema::{FieldKind, FieldSpec, QuerySchema};
pub use state::{merge_params, FilterValue, QueryState, Sort};

use std::collections::BTreeMap;

/// Decode a raw query string into parameters. Later duplicates win, matching
/// how the browser-side controller overwrote params in place.
pub fn parse_query(raw: Option<&str>) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    if let Some(raw) = raw {
        for (k, v) in url::form_urlencoded::parse(raw.as_bytes()) {
            params.insert(k.into_owned(), v.into_owned());
        }
    }
    params
}

/// Encode parameters back into a query string ("" when empty). BTreeMap
/// input keeps the output deterministic, so equal states produce equal URLs.
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in params {
        ser.append_pair(k, v);
    }
    ser.finish()
}

/// Build a same-site href from a path and parameters.
pub fn href(path: &str, params: &BTreeMap<String, String>) -> String {
    let qs = encode_query(params);
    if qs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{qs}")
    }
}
