//! Terminal UI: cell grid, result list, detail pane and the chrome around them.
//!
//! ```text
//! AppState ─┬─ compute_viewmodel → UIViewModel → components ─┐
//!           ├─ EntityList::draw ─────────────────────────────┼─▶ CellBuffer → ANSI
//!           └─ DetailPane::draw ─────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`grid`]: the cell buffer every component draws into
//! - [`entity_list`]: the selectable, bottom-anchored result list
//! - [`detail`]: the scrollable detail text pane
//! - [`components`]: header, prompt, footer and empty state
//! - [`viewmodel`]: plain data for the components
//! - [`renderer`]: frame assembly
//! - [`helpers`]: layout and word wrapping
//! - [`theme`]: the color palette

pub mod components;
pub mod detail;
pub mod entity_list;
pub mod grid;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use detail::DetailPane;
pub use entity_list::EntityList;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
