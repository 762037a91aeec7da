//! Components for the chrome around the result list and the detail pane.
//!
//! Each component draws one view model part into a [`CellBuffer`] region. The
//! list and the detail pane draw themselves and live in
//! [`entity_list`](crate::ui::entity_list) and [`detail`](crate::ui::detail).
//!
//! - [`render_header`]: title and match counts
//! - [`render_footer`]: key hints
//! - [`render_search_bar`]: the `> query` prompt
//! - [`render_empty_state`]: centered message replacing the list
//! - [`render_separator`]: vertical rule between the columns

mod empty;
mod footer;
mod header;
mod search;

pub use empty::render_empty_state;
pub use footer::render_footer;
pub use header::render_header;
pub use search::render_search_bar;

use crate::ui::grid::{CellBuffer, Style};
use crate::ui::theme::Theme;

/// Draws a vertical rule in column `x` over rows `[top, bottom)`.
pub fn render_separator(buf: &mut CellBuffer, x: usize, top: usize, bottom: usize, theme: &Theme) {
    for y in top..bottom {
        buf.set_content(x, y, '│', Style::fg(theme.colors.border));
    }
}
