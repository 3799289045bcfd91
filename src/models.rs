pub mod envelope;
pub mod page;
pub mod reference;
pub mod types;

pub use envelope::{ObjResponse, Resolution};
pub use page::Page;
pub use reference::{RefValue, Requirement};
pub use types::{EntityId, Kind, SortDir};
