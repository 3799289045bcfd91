pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod models;
pub mod presenters;
pub mod query;
pub mod registry;
pub mod render;
pub mod views;

// Convenient re-exports (so call sites can do `uwodex::ApiClient`, etc.)
pub use api::ApiClient;
pub use config::Config;
pub use error::{ApiError, AppError, AppResult};
pub use fetch::ViewQuery;
pub use models::{EntityId, Kind, Page, Resolution, SortDir};
pub use query::QueryState;
