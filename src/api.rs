use crate::error::ApiError;
use crate::models::{EntityId, ObjResponse, Page, Resolution};
use serde_json::Value;
use url::Url;

/// Thin client for the catalog backend REST API. One instance per process;
/// reqwest pools connections underneath. Every method resolves to a typed
/// value or an `ApiError`; non-success status codes are errors, not empty
/// data.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::BadBaseUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::BadBaseUrl(base_url.to_string()));
        }
        Ok(Self { http: reqwest::Client::new(), base })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        // join() would eat a non-slash-terminated base path; cannot-be-a-base
        // urls are rejected in new(), so path_segments_mut always succeeds.
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.pop_if_empty();
            for seg in path.split('/').filter(|s| !s.is_empty()) {
                segs.push(seg);
            }
        }
        url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        mut url: Url,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (k, v)));
        }
        let path = url.path().to_string();
        tracing::debug!(%url, "backend request");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), path });
        }
        resp.json::<T>()
            .await
            .map_err(|source| ApiError::Decode { path, source })
    }

    /// One page of a kind's listing, e.g. `list("quests", &query)` for
    /// `GET /api/quests?...`. Bare-array legacy responses normalize inside
    /// `Page`'s decoder.
    pub async fn list(
        &self,
        kind_path: &str,
        query: &[(String, String)],
    ) -> Result<Page<Value>, ApiError> {
        self.get_json(self.endpoint(&format!("api/{kind_path}")), query).await
    }

    /// Single entity payload from a kind-specific endpoint.
    pub async fn detail(&self, kind_path: &str, id: EntityId) -> Result<Value, ApiError> {
        self.get_json(self.endpoint(&format!("api/{kind_path}/{id}")), &[]).await
    }

    /// Generic lookup of an opaque id: `GET /api/obj/{id}`. Each call is a
    /// fresh resolution; envelopes are never cached across ids.
    pub async fn resolve(&self, id: EntityId) -> Result<Resolution, ApiError> {
        let resp: ObjResponse = self.get_json(self.endpoint(&format!("api/obj/{id}")), &[]).await?;
        Ok(resp.into())
    }
}
