//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Key / worker reply → Event → handle_event → AppState mutation → Vec<Action>
//!                                                  │
//!                                   EntityList ─── selection changed ──▶ EntityView
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects emitted by the event handler
//! - [`handler`]: event processing
//! - [`modes`]: focus and load-state types
//! - [`state`]: the state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use lorekeeper::app::{handle_event, AppState, Event};
//! use lorekeeper::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 40);
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('f'))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), lorekeeper::LorekeeperError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Focus, LoadState};
pub use state::AppState;
