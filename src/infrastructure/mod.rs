//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij plugins run in a WASI sandbox with the host filesystem mounted
//! under `/host`; everything here deals with that mapping.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_catalog_paths, strip_host_prefix};
