//! Lorekeeper: a Zellij plugin for browsing a tabletop reference catalog.
//!
//! Lorekeeper provides:
//! - Fuzzy search over every entity in one or more JSON catalogs
//! - A bottom-anchored result list with match highlighting
//! - Kind-specific rendering of the selected entity in a scrollable detail pane
//! - Catalog loading on a Zellij worker thread, off the render path

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, focus, load state                │
//! │  - List → detail selection wiring                   │
//! └─────────────────────────────────────────────────────┘
//!      │              │              │             │
//! ┌──────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐
//! │ UI       │  │ Render    │  │ Search    │  │ Worker    │
//! │ (ui/)    │  │ (render/) │  │ (search/) │  │ (worker/) │
//! │ list     │  │ kind →    │  │ fuzzy     │  │ catalog   │
//! │ detail   │  │ renderer  │  │ ranking   │  │ loading   │
//! └──────────┘  └───────────┘  └───────────┘  └───────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage (storage/), Infrastructure, Domain         │
//! │  - JSON catalog files, sandbox paths, entity model  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/lorekeeper.wasm" {
//!         catalog_paths "~/srd/5e.json,~/homebrew.json"
//!         list_width "40"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. `load` parses [`Config`], initializes tracing and builds the [`AppState`]
//! 2. Once permissions are granted, a `LoadCatalog` message goes to the worker
//! 3. The worker reads and merges the catalog files and replies with the entities
//! 4. The reply fills the list; the first result is selected and rendered
//!
//! # Example
//!
//! ```rust
//! use lorekeeper::{handle_event, initialize, Config, Event};
//! use lorekeeper::domain::{Entity, EntityKind};
//! use lorekeeper::worker::WorkerResponse;
//!
//! let mut state = initialize(&Config::default());
//! let loaded = WorkerResponse::CatalogLoaded {
//!     entities: vec![Entity::new("Grapple", EntityKind::Action)],
//!     skipped: 0,
//! };
//!
//! for event in [Event::WorkerResponse(loaded), Event::Char('g')] {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     assert!(actions.is_empty());
//! }
//! assert_eq!(state.selected_entity().map(|e| e.name.as_str()), Some("Grapple"));
//! # Ok::<(), lorekeeper::LorekeeperError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod render;
pub mod search;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus, LoadState};
pub use domain::{Entity, EntityKind, LorekeeperError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

const DEFAULT_CATALOG_PATH: &str = "~/.local/share/lorekeeper/catalog.json";
const DEFAULT_LIST_WIDTH: usize = 40;
const MIN_LIST_WIDTH: usize = 20;
const MAX_LIST_WIDTH: usize = 80;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/lorekeeper.wasm" {
///     catalog_paths "~/srd/5e.json"
///     list_width "35"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog files to load, in order. `~` maps to the sandbox home.
    pub catalog_paths: Vec<String>,

    /// Percentage of the pane width used by the result list (20–80).
    pub list_width: usize,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_paths: vec![DEFAULT_CATALOG_PATH.to_string()],
            list_width: DEFAULT_LIST_WIDTH,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_paths`: comma-separated, blanks dropped; an empty list falls
    ///   back to the default path
    /// - `list_width`: integer percentage clamped to 20–80; unparsable values
    ///   fall back to 40
    /// - `trace_level`: passed through
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use lorekeeper::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_paths".to_string(), "~/srd.json, ~/homebrew.json".to_string());
    /// map.insert("list_width".to_string(), "95".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_paths, vec!["~/srd.json", "~/homebrew.json"]);
    /// assert_eq!(config.list_width, 80);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let catalog_paths = config
            .get("catalog_paths")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v: &Vec<String>| !v.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_CATALOG_PATH.to_string()]);

        let list_width = config
            .get("list_width")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map_or(DEFAULT_LIST_WIDTH, |w| w.clamp(MIN_LIST_WIDTH, MAX_LIST_WIDTH));

        Self {
            catalog_paths,
            list_width,
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Builds the initial application state.
///
/// The catalog starts empty; it arrives later as a worker response.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        catalog_paths = ?config.catalog_paths,
        list_width = config.list_width,
        "initializing lorekeeper plugin"
    );

    AppState::new(Theme::default(), config.list_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_catalog_list_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("catalog_paths", " , ,")]));
        assert_eq!(config.catalog_paths, vec![DEFAULT_CATALOG_PATH.to_string()]);
    }

    #[test]
    fn list_width_is_clamped_or_defaulted() {
        assert_eq!(Config::from_zellij(&map(&[("list_width", "5")])).list_width, 20);
        assert_eq!(Config::from_zellij(&map(&[("list_width", " 55 ")])).list_width, 55);
        assert_eq!(Config::from_zellij(&map(&[("list_width", "wide")])).list_width, 40);
    }

    #[test]
    fn initialize_uses_configured_width() {
        let config = Config {
            list_width: 30,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.list_width, 30);
        assert_eq!(state.load_state, LoadState::Loading);
    }
}
