//! Top-level rendering coordinator.
//!
//! One frame is built in three steps:
//!
//! 1. Compute the [`UIViewModel`](crate::ui::viewmodel::UIViewModel) and the
//!    screen [`Layout`](crate::ui::helpers::Layout)
//! 2. Draw the chrome, the list (or its empty state) and the detail pane into
//!    a [`CellBuffer`]
//! 3. Flush the buffer as one ANSI string
//!
//! The list and the detail pane learn their viewport size while drawing, so
//! rendering takes the state mutably.
//!
//! # Example
//!
//! ```rust
//! use lorekeeper::app::AppState;
//! use lorekeeper::ui::{render, Theme};
//!
//! let mut state = AppState::new(Theme::default(), 40);
//! let frame = render(&mut state, 24, 80);
//! assert!(frame.contains("Lorekeeper"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::grid::CellBuffer;
use crate::ui::helpers::compute_layout;

/// Renders the plugin UI and returns the ANSI frame.
pub fn render(state: &mut AppState, rows: usize, cols: usize) -> String {
    render_buffer(state, rows, cols).to_ansi()
}

/// Renders the plugin UI into a cell buffer.
pub fn render_buffer(state: &mut AppState, rows: usize, cols: usize) -> CellBuffer {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let vm = state.compute_viewmodel();
    let layout = compute_layout(rows, cols, state.list_width);
    let mut buf = CellBuffer::new(cols, rows);

    components::render_header(&mut buf, layout.header, &vm.header, &state.theme);

    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(&mut buf, layout.list, empty, &state.theme);
    } else {
        state.list.draw(&mut buf, layout.list, &state.theme);
    }
    components::render_search_bar(&mut buf, layout.prompt, &vm.search_bar, &state.theme);

    if !layout.detail.is_empty() {
        components::render_separator(&mut buf, layout.detail.x - 1, layout.detail.y, layout.detail.bottom(), &state.theme);
        state
            .view
            .borrow_mut()
            .sink_mut()
            .draw(&mut buf, layout.detail, &state.theme);
    }

    components::render_footer(&mut buf, layout.footer, &vm.footer, &state.theme);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadState;
    use crate::domain::{Entity, EntityKind};
    use crate::ui::theme::Theme;

    fn loaded() -> AppState {
        let mut state = AppState::new(Theme::default(), 40);
        state.set_catalog(vec![
            Entity::new("Fireball", EntityKind::Spell).with_text("A bright streak flashes."),
            Entity::new("Shield", EntityKind::Spell),
        ]);
        state.load_state = LoadState::Ready { skipped: 0 };
        state
    }

    #[test]
    fn frame_has_header_list_prompt_and_footer() {
        let mut state = loaded();
        let buf = render_buffer(&mut state, 12, 60);

        assert!(buf.row_text(0).contains("Lorekeeper"));
        assert!(buf.row_text(0).trim_end().ends_with("2/2"));
        // bottom-anchored: the best match sits directly above the prompt
        assert!(buf.row_text(9).contains("Fireball"));
        assert!(buf.row_text(8).contains("Shield"));
        assert!(buf.row_text(10).starts_with("> "));
        assert!(buf.row_text(11).contains("Esc"));
    }

    #[test]
    fn detail_column_shows_the_selection() {
        let mut state = loaded();
        let buf = render_buffer(&mut state, 12, 60);

        let detail: String = (1..11).map(|y| buf.row_text(y)).collect();
        assert!(detail.contains("A bright streak flashes."));
        assert!(state.with_detail(|pane| pane.text().contains("Fireball")));
    }

    #[test]
    fn list_viewport_tracks_the_layout() {
        let mut state = loaded();
        render_buffer(&mut state, 12, 60);
        assert_eq!(state.list.height(), 9);
    }

    #[test]
    fn empty_state_replaces_the_list() {
        let mut state = AppState::new(Theme::default(), 40);
        let buf = render_buffer(&mut state, 12, 60);

        let list: String = (1..10).map(|y| buf.row_text(y)).collect();
        assert!(list.contains("Loading"));
    }

    #[test]
    fn tiny_panes_do_not_panic() {
        let mut state = loaded();
        for (rows, cols) in [(0, 0), (1, 1), (2, 5), (3, 80)] {
            let _ = render(&mut state, rows, cols);
        }
    }
}
