//! Domain layer for the Lorekeeper plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or the terminal drawing code.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entity`]: Catalog entity model and the closed set of entity kinds
//! - [`search`]: Highlight spans and search results fed to the result list
//!
//! # Examples
//!
//! ```
//! use lorekeeper::domain::{Entity, EntityKind, HighlightSpan, SearchResult};
//! use std::rc::Rc;
//!
//! let fireball = Rc::new(Entity::new("Fireball", EntityKind::Spell));
//! let result = SearchResult::new(fireball, vec![HighlightSpan::new(0, 4).unwrap()]);
//! assert_eq!(result.name(), "Fireball");
//! ```

pub mod entity;
pub mod error;
pub mod search;

pub use entity::{Block, Entity, EntityKind, NamedEntry};
pub use error::{LorekeeperError, Result};
pub use search::{HighlightSpan, SearchResult};
