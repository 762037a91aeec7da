//! Read-only catalog loading.
//!
//! # Modules
//!
//! - `backend`: the [`CatalogSource`] abstraction
//! - `json`: JSON file implementation
//! - `models`: on-disk record types, separate from domain entities

pub mod backend;
pub mod json;
pub mod models;

pub use backend::CatalogSource;
pub use json::JsonCatalog;
pub use models::{EntityRecord, LoadedCatalog, TextField};
