//! JSON catalog files.
//!
//! # File Format
//!
//! Either a versioned object:
//!
//! ```json
//! {
//!   "version": 1,
//!   "entities": [
//!     { "name": "Fire Bolt", "kind": "spell",
//!       "properties": { "level": "0", "school": "evocation" },
//!       "text": ["You hurl a mote of fire..."] }
//!   ]
//! }
//! ```
//!
//! or just the bare `entities` array.

use crate::domain::error::{LorekeeperError, Result};
use crate::storage::backend::CatalogSource;
use crate::storage::models::{EntityRecord, LoadedCatalog};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Versioned {
        version: u32,
        #[serde(default)]
        entities: Vec<EntityRecord>,
    },
    Bare(Vec<EntityRecord>),
}

/// Catalog backed by one or more JSON files.
///
/// Files are read fresh on every [`load`](CatalogSource::load); nothing is
/// cached and nothing is ever written back.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    paths: Vec<PathBuf>,
}

impl JsonCatalog {
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Reads and converts a single catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`LorekeeperError::Io`] naming `path` if the file cannot be
    /// read, and [`LorekeeperError::Catalog`] if it is not a catalog or has
    /// an unsupported version.
    pub fn load_file(path: &Path) -> Result<LoadedCatalog> {
        let _span = tracing::debug_span!("load_catalog_file", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path).map_err(|e| LorekeeperError::io(path, e))?;
        let file: CatalogFile = serde_json::from_str(&contents)
            .map_err(|e| LorekeeperError::Catalog(format!("{}: {e}", path.display())))?;

        let records = match file {
            CatalogFile::Versioned { version, entities } => {
                if version > SUPPORTED_VERSION {
                    return Err(LorekeeperError::Catalog(format!(
                        "{}: unsupported catalog version {version}",
                        path.display()
                    )));
                }
                entities
            }
            CatalogFile::Bare(entities) => entities,
        };

        let mut catalog = LoadedCatalog::default();
        for record in records {
            let name = record.name.clone();
            match record.into_entity() {
                Ok(entity) => catalog.entities.push(entity),
                Err(reason) => {
                    tracing::warn!(name = %name, reason = %reason, "skipping catalog record");
                    catalog.skipped += 1;
                }
            }
        }

        tracing::debug!(
            entities = catalog.entities.len(),
            skipped = catalog.skipped,
            "catalog file loaded"
        );
        Ok(catalog)
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<LoadedCatalog> {
        let mut catalog = LoadedCatalog::default();
        for path in &self.paths {
            catalog.merge(Self::load_file(path)?);
        }
        catalog.sort();
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_versioned_file() {
        let file = catalog_file(
            r#"{
                "version": 1,
                "entities": [
                    { "name": "Fire Bolt", "kind": "spell", "properties": { "level": "0" } },
                    { "name": "Dash", "kind": "action" }
                ]
            }"#,
        );

        let catalog = JsonCatalog::load_file(file.path()).unwrap();
        assert_eq!(catalog.entities.len(), 2);
        assert_eq!(catalog.entities[0].property("level"), Some("0"));
        assert_eq!(catalog.skipped, 0);
    }

    #[test]
    fn loads_bare_array_and_skips_unknown_kinds() {
        let file = catalog_file(
            r#"[
                { "name": "Longsword", "kind": "item" },
                { "name": "Airship", "kind": "vehicle" },
                { "name": "  ", "kind": "rule" }
            ]"#,
        );

        let catalog = JsonCatalog::load_file(file.path()).unwrap();
        assert_eq!(catalog.entities.len(), 1);
        assert_eq!(catalog.entities[0].kind, EntityKind::Item);
        assert_eq!(catalog.skipped, 2);
    }

    #[test]
    fn merges_and_sorts_multiple_files() {
        let monsters = catalog_file(r#"[{ "name": "zombie", "kind": "monster" }]"#);
        let items = catalog_file(r#"[{ "name": "Arrow", "kind": "item" }, { "name": "Net", "kind": "item" }]"#);

        let source = JsonCatalog::new(vec![monsters.path().to_path_buf(), items.path().to_path_buf()]);
        let catalog = source.load().unwrap();

        let names: Vec<_> = catalog.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Arrow", "Net", "zombie"]);
    }

    #[test]
    fn invalid_json_is_a_catalog_error() {
        let file = catalog_file("{ not json");
        let err = JsonCatalog::load_file(file.path()).unwrap_err();
        assert!(matches!(err, LorekeeperError::Catalog(_)));
    }

    #[test]
    fn newer_versions_are_rejected() {
        let file = catalog_file(r#"{ "version": 2, "entities": [] }"#);
        assert!(matches!(
            JsonCatalog::load_file(file.path()),
            Err(LorekeeperError::Catalog(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error_naming_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = JsonCatalog::load_file(&missing).unwrap_err();
        assert!(matches!(&err, LorekeeperError::Io { path, .. } if *path == missing));
        assert!(err.to_string().contains(&format!("{}", missing.display())), "{err}");
    }
}
