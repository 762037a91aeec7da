//! Request and response protocol between the plugin and its worker.
//!
//! Both directions travel as JSON payloads over Zellij's plugin message IPC.

use crate::domain::Entity;
use serde::{Deserialize, Serialize};

/// Messages sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read every configured catalog file.
    LoadCatalog {
        /// Catalog paths as configured (`~` is resolved by the worker).
        paths: Vec<String>,
    },
}

impl WorkerMessage {
    /// # Examples
    ///
    /// ```
    /// use lorekeeper::worker::WorkerMessage;
    ///
    /// let message = WorkerMessage::load_catalog(vec!["~/srd.json".to_string()]);
    /// let json = serde_json::to_string(&message).unwrap();
    /// assert!(json.contains("LoadCatalog"));
    /// ```
    #[must_use]
    pub fn load_catalog(paths: Vec<String>) -> Self {
        Self::LoadCatalog { paths }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The merged catalog, sorted by name.
    CatalogLoaded {
        entities: Vec<Entity>,
        /// Records that were dropped while loading.
        skipped: usize,
    },

    /// Loading failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
