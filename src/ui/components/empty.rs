//! Empty state component.

use crate::ui::grid::{Align, CellBuffer, Rect, Style};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Draws the message centered in `area`, with the subtitle wrapped below it.
///
/// # Layout
///
/// ```text
///
///        No matches
///     subtitle, wrapped
///     to the area width
///
/// ```
///
/// The block sits slightly above the vertical middle. Subtitle lines that do
/// not fit are dropped.
pub fn render_empty_state(buf: &mut CellBuffer, area: Rect, empty: &EmptyState, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let subtitle = empty
        .subtitle
        .as_deref()
        .map(|s| wrap_text(s, area.width.saturating_sub(2).max(1)))
        .unwrap_or_default();

    let block_height = 1 + subtitle.len();
    let top = area.y + area.height.saturating_sub(block_height) / 2;

    buf.print(
        &empty.message,
        area.x,
        top,
        area.width,
        Align::Center,
        Style::fg(theme.colors.empty_state_fg).with_bold(),
    );

    for (i, line) in subtitle.iter().enumerate() {
        let y = top + 1 + i;
        if y >= area.bottom() {
            break;
        }
        buf.print(line, area.x, y, area.width, Align::Center, Style::fg(theme.colors.text_dim));
    }
}
