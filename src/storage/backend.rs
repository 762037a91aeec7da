//! Catalog source abstraction.
//!
//! The worker only needs "give me every entity"; [`CatalogSource`] keeps it
//! independent of where the catalog actually lives.

use crate::domain::error::Result;
use crate::storage::models::LoadedCatalog;

/// Something that can produce the full entity catalog.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::storage::JsonCatalog): one or more JSON files
///
/// # Examples
///
/// ```no_run
/// use lorekeeper::storage::{CatalogSource, JsonCatalog};
/// use std::path::PathBuf;
///
/// let source = JsonCatalog::new(vec![PathBuf::from("/tmp/catalog.json")]);
/// let catalog = source.load()?;
/// println!("{} entities", catalog.entities.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CatalogSource: Send {
    /// Loads every entity, ordered case-insensitively by name.
    ///
    /// Records that cannot be turned into entities are counted in
    /// [`LoadedCatalog::skipped`] rather than failing the load.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or is not valid catalog
    /// data.
    fn load(&self) -> Result<LoadedCatalog>;
}
