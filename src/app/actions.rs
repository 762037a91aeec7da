//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) only mutates [`AppState`]
//! (crate::app::AppState). Anything that has to go through the Zellij API is
//! returned as an [`Action`] and executed by the plugin shim in order.
//!
//! # Example
//!
//! ```rust
//! use lorekeeper::app::Action;
//! use lorekeeper::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_catalog(vec!["~/srd.json".to_string()])),
//! ];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker.
    PostToWorker(WorkerMessage),
}
