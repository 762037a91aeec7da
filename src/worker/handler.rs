//! Worker thread that loads the catalog off the render thread.
//!
//! Reading and parsing a full catalog can take long enough to stall the UI, so
//! the plugin posts a [`WorkerMessage`] and renders an empty list until the
//! [`WorkerResponse`] arrives.

use crate::domain::error::{LorekeeperError, Result};
use crate::infrastructure::paths;
use crate::storage::{CatalogSource, JsonCatalog, LoadedCatalog};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state. Catalog files are re-read on every request, so there is
/// nothing to keep between messages.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LorekeeperWorker;

impl LorekeeperWorker {
    /// Loads from any [`CatalogSource`] and converts the outcome into a
    /// response.
    pub fn load_from(source: &dyn CatalogSource) -> WorkerResponse {
        Self::to_response("load catalog", source.load(), |catalog: LoadedCatalog| {
            tracing::debug!(
                entity_count = catalog.entities.len(),
                skipped = catalog.skipped,
                "catalog loaded"
            );
            WorkerResponse::CatalogLoaded {
                entities: catalog.entities,
                skipped: catalog.skipped,
            }
        })
    }

    fn to_response<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => on_success(value),
            Err(e) => Self::error_response(operation, &e),
        }
    }

    fn error_response(operation: &str, error: &LorekeeperError) -> WorkerResponse {
        tracing::warn!(operation = operation, error = %error, "worker operation failed");
        WorkerResponse::Error {
            message: paths::strip_host_prefix(&error.to_string()),
        }
    }

    fn catalog_for(configured: &[String]) -> Result<JsonCatalog> {
        if configured.is_empty() {
            return Err(LorekeeperError::Config("no catalog paths configured".to_string()));
        }
        Ok(JsonCatalog::new(paths::resolve_catalog_paths(configured)))
    }

    /// Processes one message.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { paths: configured } => match Self::catalog_for(&configured) {
                Ok(source) => Self::load_from(&source),
                Err(e) => Self::error_response("load catalog", &e),
            },
        }
    }
}

static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

impl ZellijWorker<'_> for LorekeeperWorker {
    /// Decodes the payload, handles it and posts the JSON response back under
    /// the same message name. An undecodable payload is answered with an
    /// error so the plugin does not wait forever.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => Self::error_response(
                "decode message",
                &LorekeeperError::Worker(format!("invalid message: {e}")),
            ),
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entity, EntityKind};

    struct FixedSource(Option<LoadedCatalog>);

    impl CatalogSource for FixedSource {
        fn load(&self) -> Result<LoadedCatalog> {
            self.0
                .clone()
                .ok_or_else(|| LorekeeperError::Catalog("/host/srd.json: broken".to_string()))
        }
    }

    #[test]
    fn successful_load_becomes_catalog_loaded() {
        let source = FixedSource(Some(LoadedCatalog {
            entities: vec![Entity::new("Dash", EntityKind::Action)],
            skipped: 2,
        }));

        match LorekeeperWorker::load_from(&source) {
            WorkerResponse::CatalogLoaded { entities, skipped } => {
                assert_eq!(entities.len(), 1);
                assert_eq!(skipped, 2);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn failure_becomes_error_with_user_facing_path() {
        let response = LorekeeperWorker::load_from(&FixedSource(None));
        assert_eq!(
            response,
            WorkerResponse::Error {
                message: "Catalog error: ~/srd.json: broken".to_string()
            }
        );
    }

    #[test]
    fn empty_path_list_is_a_configuration_error() {
        let response = LorekeeperWorker.handle_message(WorkerMessage::load_catalog(vec![]));
        assert_eq!(
            response,
            WorkerResponse::Error {
                message: "Configuration error: no catalog paths configured".to_string()
            }
        );
    }

    #[test]
    fn missing_files_are_reported_not_panicked() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json").display().to_string();

        let response = LorekeeperWorker.handle_message(WorkerMessage::load_catalog(vec![missing.clone()]));
        match response {
            WorkerResponse::Error { message } => {
                assert!(message.starts_with(&format!("IO error: {missing}: ")), "{message}");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn unreadable_home_paths_are_reported_as_configured() {
        let configured = "~/lorekeeper-test-absent/catalog.json".to_string();

        let response = LorekeeperWorker.handle_message(WorkerMessage::load_catalog(vec![configured]));
        match response {
            WorkerResponse::Error { message } => {
                assert!(
                    message.starts_with("IO error: ~/lorekeeper-test-absent/catalog.json: "),
                    "{message}"
                );
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
