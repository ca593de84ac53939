//! Labelled social-media post datasets.
//!
//! Parses CSV exports into typed rows, validates the required columns once at
//! load time and keeps the current dataset in a swappable in-memory store.

pub mod error;
pub mod schema;
pub mod loader;
pub mod store;

pub use error::*;
pub use schema::*;
pub use loader::*;
pub use store::*;
