//! Query prompt under the result list.

use crate::ui::grid::{Align, CellBuffer, Rect, Style};
use crate::ui::helpers::char_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const PROMPT: &str = "> ";

/// Draws `> query` on the first row of `area`.
///
/// When the query is wider than the row, its tail is shown so the end being
/// typed stays visible. An active prompt gets a block cursor after the text.
///
/// # Example
///
/// ```rust
/// use lorekeeper::ui::components::render_search_bar;
/// use lorekeeper::ui::grid::CellBuffer;
/// use lorekeeper::ui::viewmodel::SearchBarInfo;
/// use lorekeeper::ui::Theme;
///
/// let mut buf = CellBuffer::new(12, 1);
/// let area = buf.area();
/// let search = SearchBarInfo { query: "fire".to_string(), active: false };
/// render_search_bar(&mut buf, area, &search, &Theme::default());
/// assert_eq!(buf.row_text(0), "> fire      ");
/// ```
pub fn render_search_bar(buf: &mut CellBuffer, area: Rect, search: &SearchBarInfo, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let prompt_width = buf.print(
        PROMPT,
        area.x,
        area.y,
        area.width,
        Align::Left,
        Style::fg(theme.colors.prompt_fg).with_bold(),
    );

    let cursor_width = usize::from(search.active);
    let room = area.width.saturating_sub(prompt_width + cursor_width);
    let visible = tail_within(&search.query, room);

    let x = area.x + prompt_width;
    let written = buf.print(visible, x, area.y, room, Align::Left, Style::fg(theme.colors.text_normal));

    if search.active && prompt_width + written < area.width {
        buf.set_content(x + written, area.y, ' ', Style::default().with_bg(theme.colors.text_normal));
    }
}

/// The longest suffix of `text` that fits in `width` columns.
fn tail_within(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, ch) in text.char_indices().rev() {
        used += char_width(ch);
        if used > width {
            break;
        }
        start = i;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_queries_show_their_tail() {
        let theme = Theme::default();
        let mut buf = CellBuffer::new(8, 1);
        let area = buf.area();
        let search = SearchBarInfo {
            query: "magic missile".to_string(),
            active: true,
        };

        render_search_bar(&mut buf, area, &search, &theme);

        assert_eq!(buf.row_text(0), "> ssile ");
        assert_eq!(buf.get_content(7, 0).unwrap().style.bg, Some(theme.colors.text_normal));
    }

    #[test]
    fn wide_query_tail_fits_the_row() {
        let theme = Theme::default();
        let mut buf = CellBuffer::new(8, 1);
        let area = buf.area();
        let search = SearchBarInfo {
            query: "天使の剣".to_string(),
            active: true,
        };

        render_search_bar(&mut buf, area, &search, &theme);

        // Room is five columns; "使" would make six.
        assert_eq!(buf.row_text(0), "> の剣  ");
        assert_eq!(buf.get_content(4, 0).unwrap().ch, '剣');
        assert_eq!(buf.get_content(6, 0).unwrap().style.bg, Some(theme.colors.text_normal));
    }
}
