use crate::models::EntityId;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// No catalog view registered under this slug
    #[error("unknown catalog: {0}")]
    UnknownView(String),

    /// Path segment where an entity id was expected did not parse
    #[error("invalid entity id: {0}")]
    InvalidId(String),

    /// Payload arrived but did not match the presenter's expected shape
    #[error("malformed {kind} payload for id {id}: {message}")]
    InvalidPayload {
        kind: &'static str,
        id: EntityId,
        message: String,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

// ApiError is the lowest level error type, wrapping failures talking to the
// backend REST API. It does not wrap any higher level errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, TLS)
    #[error("backend unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned {status} for {path}")]
    Status { status: u16, path: String },

    /// Backend answered 2xx but the body did not decode
    #[error("bad response body for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid backend url: {0}")]
    BadBaseUrl(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
