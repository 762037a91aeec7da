//! View model types for the chrome around the list and detail pane.
//!
//! The list and detail pane draw themselves from their own state; everything
//! else on screen (header, prompt, footer, empty-state message) is computed by
//! `AppState::compute_viewmodel()` into these plain structs and handed to the
//! components.
//!
//! # Example
//!
//! ```rust
//! use lorekeeper::ui::viewmodel::{FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Lorekeeper ".to_string(), counts: "3/120".to_string() },
//!     footer: FooterInfo { keybindings: "Esc: quit".to_string() },
//!     search_bar: SearchBarInfo { query: "fire".to_string(), active: true },
//!     empty_state: None,
//! };
//! assert!(vm.empty_state.is_none());
//! ```

/// Everything the renderer needs besides the list and the detail pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,
    pub search_bar: SearchBarInfo,

    /// Replaces the list column when set.
    pub empty_state: Option<EmptyState>,
}

/// Title row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// `matches/total`, right-aligned.
    pub counts: String,
}

/// Key hints for the current focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// The `> query` prompt under the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,

    /// Whether typing currently edits the query (list focus).
    pub active: bool,
}

/// Centered message shown when there is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: Option<String>,
}
