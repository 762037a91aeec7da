//! Kind-dispatched rendering of entities into detail text.
//!
//! ```text
//! Entity ─▶ RendererTable ─▶ dyn Renderer ─▶ markup text ─▶ TextSink
//!                 │
//!                 └─ no entry: bare name
//! ```
//!
//! - [`markup`]: the small line format renderers emit and the detail pane styles
//! - [`renderers`]: one renderer per entity layout
//! - [`table`]: the kind dispatch table with its fallback
//! - [`view`]: pushes the selected entity through the table into a sink

pub mod markup;
pub mod renderers;
pub mod table;
pub mod view;

pub use table::RendererTable;
pub use view::{EntityView, TextSink};

use crate::domain::Entity;

/// Produces detail text for an entity.
pub trait Renderer {
    fn render(&self, entity: &Entity) -> String;
}

impl<F> Renderer for F
where
    F: Fn(&Entity) -> String,
{
    fn render(&self, entity: &Entity) -> String {
        self(entity)
    }
}
