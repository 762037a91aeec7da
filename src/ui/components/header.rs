//! Header component.

use crate::ui::grid::{Align, CellBuffer, Rect, Style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use unicode_width::UnicodeWidthStr;

/// Draws the title centered and the match counts right-aligned.
///
/// # Layout
///
/// ```text
///               Lorekeeper                     12/340
/// ```
///
/// The counts keep a one-cell margin from the right edge and win over the
/// title when the row is too narrow for both.
pub fn render_header(buf: &mut CellBuffer, area: Rect, header: &HeaderInfo, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let counts_width = header.counts.width() + 1;
    let title_width = area.width.saturating_sub(counts_width * 2);
    buf.print(
        &header.title,
        area.x + counts_width.min(area.width),
        area.y,
        title_width,
        Align::Center,
        Style::fg(theme.colors.header_fg).with_bold(),
    );

    buf.print(
        &header.counts,
        area.x,
        area.y,
        area.width.saturating_sub(1),
        Align::Right,
        Style::fg(theme.colors.text_dim),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_title_is_centered_by_columns() {
        let mut buf = CellBuffer::new(20, 1);
        let area = buf.area();
        let header = HeaderInfo {
            title: "天使の書".to_string(),
            counts: "1/1".to_string(),
        };

        render_header(&mut buf, area, &header, &Theme::default());

        assert_eq!(buf.row_text(0), "      天使の書  1/1 ");
        assert_eq!(buf.row_text(0).width(), 20);
    }
}
