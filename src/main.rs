//! Zellij plugin entry point.
//!
//! Registers the plugin and the catalog worker, turns Zellij events into
//! library [`Event`]s and carries out the [`Action`]s that come back.
//!
//! ```text
//! Key / CustomMessage ──▶ translate ──▶ handle_event ──▶ Vec<Action> ──▶ run
//!                                                                        │
//!                         LorekeeperWorker ◀──── LoadCatalog (JSON) ─────┘
//! ```
//!
//! # Keybindings
//!
//! Always:
//! - `Up` / `Ctrl+p`: move up the list (lower-ranked results)
//! - `Down` / `Ctrl+n`: move down the list (towards the best match)
//! - `Home` / `End`: best / lowest-ranked match
//! - `Tab`: toggle list and detail focus
//! - `Esc`: clear the query, or close the plugin
//!
//! List focus:
//! - printable keys edit the query, `Backspace` deletes
//! - `PageUp` / `PageDown`: page the list
//! - `Enter`: focus the detail pane
//!
//! Detail focus:
//! - `d` / `PageDown`: page forward, `u` / `PageUp`: page back
//! - any other printable key returns to the list and starts typing

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use lorekeeper::worker::{LorekeeperWorker, WorkerMessage, WorkerResponse};
use lorekeeper::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);
register_worker!(LorekeeperWorker, lorekeeper_worker, LOREKEEPER_WORKER);

/// Everything the plugin keeps between Zellij callbacks.
struct State {
    app: lorekeeper::app::AppState,

    /// Name the worker was registered under; replies arrive with it too.
    worker_name: String,

    /// Catalog files, as configured.
    catalog_paths: Vec<String>,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: lorekeeper::initialize(&default_config),
            worker_name: "lorekeeper".to_string(),
            catalog_paths: default_config.catalog_paths,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the state, requests permissions and
    /// subscribes to events. The catalog is requested once permissions are
    /// granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        lorekeeper::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(catalog_paths = ?config.catalog_paths, "parsed configuration");
        self.app = lorekeeper::initialize(&config);
        self.catalog_paths.clone_from(&config.catalog_paths);

        request_permission(&[PermissionType::ChangeApplicationState, PermissionType::FullHdAccess]);
        subscribe(&[EventType::Key, EventType::CustomMessage, EventType::PermissionRequestResult]);

        tracing::debug!("waiting for permissions before loading the catalog");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let _guard = tracing::debug_span!("plugin_update", event_type = event_label(&event)).entered();

        let Some(our_event) = self.translate(event) else {
            return false;
        };

        let outcome = handle_event(&mut self.app, &our_event);
        match outcome {
            Ok((redraw, actions)) => {
                tracing::debug!(redraw, action_count = actions.len(), "event applied");
                actions.iter().for_each(|action| self.run(action));
                redraw
            }
            Err(e) => {
                tracing::warn!(error = %e, "event handling failed");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        print!("{}", lorekeeper::ui::render(&mut self.app, rows, cols));
    }
}

impl State {
    /// Converts a Zellij event into a library event. Permission results are
    /// handled here directly and produce no event.
    fn translate(&self, event: zellij_tile::prelude::Event) -> Option<Event> {
        use zellij_tile::prelude::Event as Zellij;

        match event {
            Zellij::Key(key) => self.key_to_event(&key),
            Zellij::CustomMessage(name, payload) => self.worker_reply(&name, &payload),
            Zellij::PermissionRequestResult(status) => {
                self.on_permissions(status);
                None
            }
            _ => None,
        }
    }

    fn key_to_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectPrevious),
                BareKey::Char('p') => Some(Event::SelectNext),
                BareKey::Char('c') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        let detail = self.app.focus == Focus::Detail;

        Some(match key.bare_key {
            BareKey::Up => Event::SelectNext,
            BareKey::Down => Event::SelectPrevious,
            BareKey::PageUp if detail => Event::DetailPageBackward,
            BareKey::PageDown if detail => Event::DetailPageForward,
            BareKey::PageUp => Event::ListPageUp,
            BareKey::PageDown => Event::ListPageDown,
            BareKey::Home => Event::JumpToFirst,
            BareKey::End => Event::JumpToLast,
            BareKey::Tab => Event::ToggleFocus,
            BareKey::Enter => Event::FocusDetail,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn on_permissions(&self, status: PermissionStatus) {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - requesting catalog");
                let request = WorkerMessage::load_catalog(self.catalog_paths.clone());
                self.run(&Action::PostToWorker(request));
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - catalog cannot be read");
            }
        }
    }

    /// Decodes a reply posted under the worker's name. Other messages are
    /// ignored.
    fn worker_reply(&self, name: &str, payload: &str) -> Option<Event> {
        if name != self.worker_name {
            tracing::debug!(message_name = %name, "ignoring foreign custom message");
            return None;
        }

        serde_json::from_str::<WorkerResponse>(payload)
            .map(Event::WorkerResponse)
            .map_err(|e| tracing::warn!(error = %e, payload_len = payload.len(), "undecodable worker reply"))
            .ok()
    }

    /// Posts `message` to the worker as JSON. Serialization failures are
    /// logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        let payload = match serde_json::to_string(message) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
                return;
            }
        };

        tracing::debug!(bytes = payload.len(), "posting to worker");
        post_message_to(PluginMessage {
            name: self.worker_name.clone(),
            payload,
            worker_name: Some(self.worker_name.clone()),
        });
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn run(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => self.post_worker_message(message),
        }
    }
}

fn event_label(event: &zellij_tile::prelude::Event) -> &'static str {
    use zellij_tile::prelude::Event as Zellij;

    match event {
        Zellij::Key(_) => "key",
        Zellij::CustomMessage(..) => "custom_message",
        Zellij::PermissionRequestResult(_) => "permission_result",
        _ => "other",
    }
}
