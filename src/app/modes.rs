//! Focus and catalog-load state.
//!
//! The list and the detail pane own separate input scopes. [`Focus`] says which
//! one receives keys first; keys it does not capture fall through to the
//! global bindings.

/// Which pane receives keyboard input first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing edits the query; arrows move the selection.
    #[default]
    List,

    /// `d`/`u` and page keys scroll the detail text.
    Detail,
}

impl Focus {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::List => Self::Detail,
            Self::Detail => Self::List,
        }
    }
}

/// Progress of the background catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Waiting for the worker.
    #[default]
    Loading,

    /// Catalog received; `skipped` records were dropped while loading.
    Ready { skipped: usize },

    /// The worker reported an error.
    Failed(String),
}
