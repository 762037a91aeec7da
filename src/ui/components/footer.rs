//! Footer component with centered key hints.

use crate::ui::grid::{Align, CellBuffer, Rect, Style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the key hints centered in `area`, cut off on narrow panes.
pub fn render_footer(buf: &mut CellBuffer, area: Rect, footer: &FooterInfo, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    buf.print(
        &footer.keybindings,
        area.x,
        area.y,
        area.width,
        Align::Center,
        Style::fg(theme.colors.text_dim),
    );
}
