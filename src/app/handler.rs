//! Event handling and state transitions.
//!
//! The plugin shim translates Zellij key events and worker replies into
//! [`Event`]s; [`handle_event`] applies them to [`AppState`] and returns
//! whether a re-render is needed plus any [`Action`]s to execute.
//!
//! # Event Types
//!
//! - **List**: `SelectNext`, `SelectPrevious`, `ListPageUp`, `ListPageDown`,
//!   `JumpToFirst`, `JumpToLast`
//! - **Query**: `Char`, `Backspace`, `Escape`
//! - **Detail**: `ToggleFocus`, `FocusDetail`, `DetailPageForward`, `DetailPageBackward`
//! - **System**: `CloseFocus`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use lorekeeper::app::{handle_event, Action, AppState, Event};
//! use lorekeeper::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 40);
//! let (_, actions) = handle_event(&mut state, &Event::Escape)?;
//! assert_eq!(actions, vec![Action::CloseFocus]);
//! # Ok::<(), lorekeeper::LorekeeperError>(())
//! ```

use super::modes::{Focus, LoadState};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::WorkerResponse;

/// Input to [`handle_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection one row up the screen (towards lower-ranked results).
    SelectNext,
    /// Moves the selection one row down the screen (towards the best match).
    SelectPrevious,
    ListPageUp,
    ListPageDown,
    /// Selects the best match.
    JumpToFirst,
    /// Selects the lowest-ranked match.
    JumpToLast,

    /// A printable key. With detail focus, `d`/`u` scroll and any other
    /// character returns focus to the query.
    Char(char),
    Backspace,
    /// Clears a non-empty query, otherwise closes the plugin.
    Escape,

    ToggleFocus,
    FocusDetail,
    DetailPageForward,
    DetailPageBackward,

    CloseFocus,

    /// A reply from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Applies `event` to `state`.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the caller.
///
/// # Errors
///
/// Nothing in the current event set fails; the `Result` keeps the signature
/// stable for handlers that need the Zellij API.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectNext => {
            state.move_selection(1);
            Ok((true, vec![]))
        }
        Event::SelectPrevious => {
            state.move_selection(-1);
            Ok((true, vec![]))
        }
        Event::ListPageUp => {
            state.page_list(true);
            Ok((true, vec![]))
        }
        Event::ListPageDown => {
            state.page_list(false);
            Ok((true, vec![]))
        }
        Event::JumpToFirst => {
            state.jump_first();
            Ok((true, vec![]))
        }
        Event::JumpToLast => {
            state.jump_last();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.focus == Focus::Detail {
                if state.detail_key(*c) {
                    return Ok((true, vec![]));
                }
                state.set_focus(Focus::List);
            }
            state.push_char(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => Ok((state.pop_char(), vec![])),
        Event::Escape => {
            if state.query.is_empty() {
                tracing::debug!("escape with empty query, closing");
                return Ok((false, vec![Action::CloseFocus]));
            }
            state.clear_query();
            Ok((true, vec![]))
        }
        Event::ToggleFocus => {
            state.toggle_focus();
            Ok((true, vec![]))
        }
        Event::FocusDetail => {
            if state.focus == Focus::Detail || state.selected_entity().is_none() {
                return Ok((false, vec![]));
            }
            state.set_focus(Focus::Detail);
            Ok((true, vec![]))
        }
        Event::DetailPageForward => {
            state.detail_page(true);
            Ok((true, vec![]))
        }
        Event::DetailPageBackward => {
            state.detail_page(false);
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::WorkerResponse(response) => Ok((handle_worker_response(state, response), vec![])),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> bool {
    match response {
        WorkerResponse::CatalogLoaded { entities, skipped } => {
            if *skipped > 0 {
                tracing::warn!(skipped, "catalog records skipped while loading");
            }
            tracing::debug!(entity_count = entities.len(), "catalog received");
            state.set_catalog(entities.clone());
            state.load_state = LoadState::Ready { skipped: *skipped };
        }
        WorkerResponse::Error { message } => {
            tracing::warn!(error = %message, "catalog load failed");
            state.load_state = LoadState::Failed(message.clone());
        }
    }
    true
}
