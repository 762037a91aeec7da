//! Application state and view model computation.
//!
//! [`AppState`] owns the catalog, the query, the result list and the detail
//! view. The list and the view are wired together at construction: the list's
//! selection-changed listener pushes the newly selected entity into the view,
//! so every selection change (arrow keys, paging, a new search) updates the
//! detail text without the event handler having to remember to do it.
//!
//! # Example
//!
//! ```rust
//! use lorekeeper::app::AppState;
//! use lorekeeper::domain::{Entity, EntityKind};
//! use lorekeeper::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), 40);
//! state.set_catalog(vec![
//!     Entity::new("Fireball", EntityKind::Spell),
//!     Entity::new("Shield", EntityKind::Spell),
//! ]);
//! state.push_char('s');
//! assert_eq!(state.selected_entity().map(|e| e.name.clone()), Some("Shield".to_string()));
//! ```

use super::modes::{Focus, LoadState};
use crate::domain::Entity;
use crate::render::{EntityView, RendererTable};
use crate::search::search_catalog;
use crate::ui::detail::DetailPane;
use crate::ui::entity_list::EntityList;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
use std::cell::RefCell;
use std::rc::Rc;

const TITLE: &str = " Lorekeeper ";

const LIST_HINTS: &str = "↑/↓: select  PgUp/PgDn: page  Tab: detail  Esc: clear/quit";
const DETAIL_HINTS: &str = "d/u or PgDn/PgUp: scroll  Tab: list  Esc: quit";

/// Central state container, mutated by [`handle_event`](crate::app::handle_event).
#[derive(Debug)]
pub struct AppState {
    /// Every loaded entity, sorted by name.
    pub catalog: Vec<Rc<Entity>>,

    /// Current search query.
    pub query: String,

    /// Results of the current query.
    pub list: EntityList,

    /// Renderer dispatch plus the detail pane. Shared with the list's
    /// selection-changed listener.
    pub view: Rc<RefCell<EntityView<DetailPane>>>,

    pub focus: Focus,
    pub theme: Theme,
    pub load_state: LoadState,

    /// Percentage of the pane width given to the list column.
    pub list_width: usize,
}

impl AppState {
    /// Creates an empty state with the standard renderer table.
    #[must_use]
    pub fn new(theme: Theme, list_width: usize) -> Self {
        Self::with_renderers(theme, list_width, RendererTable::standard())
    }

    /// Creates an empty state with a custom renderer table.
    #[must_use]
    pub fn with_renderers(theme: Theme, list_width: usize, renderers: RendererTable) -> Self {
        let view = Rc::new(RefCell::new(EntityView::new(renderers, DetailPane::new())));

        let mut list = EntityList::new();
        let listener = Rc::clone(&view);
        list.set_changed_func(move |entity| listener.borrow_mut().set(entity));

        Self {
            catalog: Vec::new(),
            query: String::new(),
            list,
            view,
            focus: Focus::List,
            theme,
            load_state: LoadState::Loading,
            list_width,
        }
    }

    /// Replaces the catalog and re-runs the current query.
    pub fn set_catalog(&mut self, entities: Vec<Entity>) {
        self.catalog = entities.into_iter().map(Rc::new).collect();
        self.apply_search();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.apply_search();
    }

    /// Removes the last query character. Returns `false` if the query was
    /// already empty.
    pub fn pop_char(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.apply_search();
        true
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.apply_search();
    }

    /// Searches the catalog, replaces the list contents and selects the best
    /// match.
    pub fn apply_search(&mut self) {
        let _span = tracing::debug_span!("apply_search", query = %self.query).entered();

        let results = search_catalog(&self.catalog, &self.query);
        self.list.set_entities(results);
        self.list.set_current_item(-1);
    }

    /// Moves the selection by `delta` rows. Positive values move up the
    /// screen, towards lower-ranked results.
    pub fn move_selection(&mut self, delta: isize) {
        self.list.move_by(delta);
    }

    /// Moves the selection by one viewport height.
    pub fn page_list(&mut self, up: bool) {
        let page = isize::try_from(self.list.height().max(1)).unwrap_or(isize::MAX);
        self.list.move_by(if up { page } else { -page });
    }

    /// Selects the best match.
    pub fn jump_first(&mut self) {
        self.list.set_current_item(0);
    }

    /// Selects the lowest-ranked match.
    pub fn jump_last(&mut self) {
        self.list.set_current_item(isize::MAX);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.view.borrow_mut().sink_mut().set_focused(focus == Focus::Detail);
    }

    pub fn toggle_focus(&mut self) {
        self.set_focus(self.focus.toggled());
    }

    /// Offers a key to the detail view. Returns whether it was consumed.
    pub fn detail_key(&mut self, key: char) -> bool {
        self.view.borrow_mut().handle_key(key)
    }

    pub fn detail_page(&mut self, forward: bool) {
        self.detail_key(if forward { 'd' } else { 'u' });
    }

    #[must_use]
    pub fn selected_entity(&self) -> Option<&Entity> {
        self.list.current_entity()
    }

    /// Runs `f` against the detail pane.
    pub fn with_detail<R>(&self, f: impl FnOnce(&DetailPane) -> R) -> R {
        f(self.view.borrow().sink())
    }

    /// Builds the view model for the chrome around the list and detail pane.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
                counts: format!("{}/{}", self.list.item_count(), self.catalog.len()),
            },
            footer: FooterInfo {
                keybindings: match self.focus {
                    Focus::List => LIST_HINTS,
                    Focus::Detail => DETAIL_HINTS,
                }
                .to_string(),
            },
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                active: self.focus == Focus::List,
            },
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match &self.load_state {
            LoadState::Loading => Some(EmptyState {
                message: "Loading catalog…".to_string(),
                subtitle: None,
            }),
            LoadState::Failed(message) => Some(EmptyState {
                message: "Could not load the catalog".to_string(),
                subtitle: Some(message.clone()),
            }),
            LoadState::Ready { .. } if self.catalog.is_empty() => Some(EmptyState {
                message: "Catalog is empty".to_string(),
                subtitle: Some("Set catalog_paths in the plugin configuration".to_string()),
            }),
            LoadState::Ready { .. } if self.list.is_empty() => Some(EmptyState {
                message: "No matches".to_string(),
                subtitle: None,
            }),
            LoadState::Ready { .. } => None,
        }
    }
}
