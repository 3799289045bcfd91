use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// e.g. "0.0.0.0:4080"
    #[serde(default = "default_http_addr")]
    pub http_addr: String,
    /// Base URL of the catalog backend, e.g. "http://localhost:8000"
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_http_addr() -> String {
    "0.0.0.0:4080".to_string()
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: default_http_addr(),
            backend_url: default_backend_url(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_env() -> Self {
        let _ = dotenvy::from_filename(".env");
        Self {
            http_addr: std::env::var("HTTP_ADDR").unwrap_or_else(|_| default_http_addr()),
            backend_url: std::env::var("BACKEND_URL").unwrap_or_else(|_| default_backend_url()),
        }
    }
}
