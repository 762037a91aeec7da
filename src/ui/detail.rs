//! Scrollable detail pane for rendered entity text.
//!
//! [`DetailPane`] is the plugin's [`TextSink`]. Writes land in a pending slot
//! and are laid out on the next draw, so `set_text` costs nothing beyond a
//! move and rapid selection changes only ever lay out the last text. Layout is
//! cached per width and redone when the pane is resized.

use crate::render::markup::{self, Line};
use crate::render::TextSink;
use crate::ui::grid::{Align, CellBuffer, Rect, Style};
use crate::ui::helpers::wrap_text;
use crate::ui::theme::{Rgb, Theme};

/// Border plus padding when focused; padding only otherwise. Both leave the
/// text at the same position.
const FOCUSED_PADDING: (usize, usize, usize, usize) = (1, 1, 3, 3);
const UNFOCUSED_PADDING: (usize, usize, usize, usize) = (2, 2, 4, 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Heading,
    Subheading,
    Divider,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    kind: RowKind,
    text: String,
}

#[derive(Debug, Default)]
pub struct DetailPane {
    pending: Option<String>,
    text: String,
    rows: Vec<Row>,
    layout_width: Option<usize>,
    scroll: usize,
    page_height: usize,
    focused: bool,
}

impl DetailPane {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// The text currently shown, after any pending write has been painted.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a write is waiting for the next draw.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Index of the first visible row.
    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    /// Paints the pane into `area`.
    pub fn draw(&mut self, buf: &mut CellBuffer, area: Rect, theme: &Theme) {
        if let Some(text) = self.pending.take() {
            self.text = text;
            self.layout_width = None;
        }

        let colors = &theme.colors;
        let (top, bottom, left, right) = if self.focused {
            draw_border(buf, area, colors.border);
            FOCUSED_PADDING
        } else {
            UNFOCUSED_PADDING
        };

        let inner = if self.focused { area.inset(1, 1, 1, 1) } else { area };
        let content = inner.inset(top, bottom, left, right);

        if self.layout_width != Some(content.width) {
            self.rows = layout(&self.text, content.width);
            self.layout_width = Some(content.width);
            tracing::trace!(rows = self.rows.len(), width = content.width, "detail text laid out");
        }

        self.page_height = content.height;
        self.scroll = self.scroll.min(self.max_scroll());

        if content.is_empty() {
            return;
        }

        for (i, row) in self.rows.iter().skip(self.scroll).take(content.height).enumerate() {
            let y = content.y + i;
            match row.kind {
                RowKind::Divider => {
                    let rule = "─".repeat(content.width);
                    buf.print(&rule, content.x, y, content.width, Align::Left, Style::fg(colors.border));
                }
                kind => {
                    let style = match kind {
                        RowKind::Heading => Style::fg(colors.heading_fg).with_bold(),
                        RowKind::Subheading => Style::fg(colors.subheading_fg).with_bold(),
                        _ => Style::fg(colors.text_normal),
                    };
                    buf.print(&row.text, content.x, y, content.width, Align::Left, style);
                }
            }
        }
    }

    fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.page_height)
    }

    fn page(&self) -> usize {
        self.page_height.max(1)
    }
}

impl TextSink for DetailPane {
    fn set_text(&mut self, text: String) {
        self.pending = Some(text);
    }

    fn scroll_to_beginning(&mut self) {
        self.scroll = 0;
    }

    fn scroll_page_forward(&mut self) {
        let target = self.scroll.saturating_add(self.page());
        // Row count is unknown until a pending write is laid out; draw clamps.
        self.scroll = if self.pending.is_some() { target } else { target.min(self.max_scroll()) };
    }

    fn scroll_page_backward(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.page());
    }
}

fn layout(text: &str, width: usize) -> Vec<Row> {
    if width == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    for line in markup::parse(text) {
        let (kind, body) = match line {
            Line::Heading(body) => (RowKind::Heading, body),
            Line::Subheading(body) => (RowKind::Subheading, body),
            Line::Divider => {
                rows.push(Row {
                    kind: RowKind::Divider,
                    text: String::new(),
                });
                continue;
            }
            Line::Text(body) => (RowKind::Text, body),
        };

        rows.extend(wrap_text(body, width).into_iter().map(|text| Row { kind, text }));
    }
    rows
}

fn draw_border(buf: &mut CellBuffer, area: Rect, color: Rgb) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let style = Style::fg(color);
    let right = area.x + area.width - 1;
    let bottom = area.bottom() - 1;

    for x in area.x + 1..right {
        buf.set_content(x, area.y, '─', style);
        buf.set_content(x, bottom, '─', style);
    }
    for y in area.y + 1..bottom {
        buf.set_content(area.x, y, '│', style);
        buf.set_content(right, y, '│', style);
    }
    buf.set_content(area.x, area.y, '╭', style);
    buf.set_content(right, area.y, '╮', style);
    buf.set_content(area.x, bottom, '╰', style);
    buf.set_content(right, bottom, '╯', style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(lines: usize) -> String {
        (0..lines).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn set_text_is_deferred_until_draw() {
        let theme = Theme::default();
        let mut pane = DetailPane::new();
        pane.set_text("# Dash".to_string());

        assert!(pane.has_pending());
        assert_eq!(pane.text(), "");

        let mut buf = CellBuffer::new(20, 6);
        let area = buf.area();
        pane.draw(&mut buf, area, &theme);

        assert!(!pane.has_pending());
        assert_eq!(pane.text(), "# Dash");
        assert_eq!(&buf.row_text(2)[4..8], "Dash");
        assert!(buf.get_content(4, 2).unwrap().style.bold);
    }

    #[test]
    fn last_write_wins() {
        let theme = Theme::default();
        let mut pane = DetailPane::new();
        pane.set_text("first".to_string());
        pane.set_text("second".to_string());

        let mut buf = CellBuffer::new(20, 6);
        let area = buf.area();
        pane.draw(&mut buf, area, &theme);

        assert_eq!(pane.text(), "second");
    }

    #[test]
    fn paging_is_clamped_to_content() {
        let theme = Theme::default();
        let mut pane = DetailPane::new();
        pane.set_text(paragraph(10));

        // 8 rows minus 2+2 padding leaves a 4-row page.
        let mut buf = CellBuffer::new(20, 8);
        let area = buf.area();
        pane.draw(&mut buf, area, &theme);

        pane.scroll_page_forward();
        assert_eq!(pane.scroll(), 4);
        pane.scroll_page_forward();
        assert_eq!(pane.scroll(), 6);
        pane.scroll_page_forward();
        assert_eq!(pane.scroll(), 6);

        pane.scroll_page_backward();
        assert_eq!(pane.scroll(), 2);
        pane.scroll_page_backward();
        assert_eq!(pane.scroll(), 0);
    }

    #[test]
    fn new_text_starts_at_the_top() {
        let theme = Theme::default();
        let mut pane = DetailPane::new();
        pane.set_text(paragraph(10));

        let mut buf = CellBuffer::new(20, 8);
        let area = buf.area();
        pane.draw(&mut buf, area, &theme);
        pane.scroll_page_forward();

        pane.set_text("short".to_string());
        pane.scroll_to_beginning();
        pane.draw(&mut buf, area, &theme);
        assert_eq!(pane.scroll(), 0);
    }

    #[test]
    fn focus_changes_chrome_not_text_position() {
        let theme = Theme::default();
        let mut pane = DetailPane::new();
        pane.set_text("Prone".to_string());

        let mut unfocused = CellBuffer::new(20, 6);
        let area = unfocused.area();
        pane.draw(&mut unfocused, area, &theme);

        pane.set_focused(true);
        let mut focused = CellBuffer::new(20, 6);
        pane.draw(&mut focused, area, &theme);

        assert_eq!(unfocused.get_content(0, 0).unwrap().ch, ' ');
        assert_eq!(focused.get_content(0, 0).unwrap().ch, '╭');
        assert_eq!(&unfocused.row_text(2)[4..9], "Prone");
        assert_eq!(focused.row_text(2).chars().skip(4).take(5).collect::<String>(), "Prone");
    }

    #[test]
    fn layout_wraps_and_classifies() {
        let rows = layout("# Goblin\n---\nNimble Escape lets it hide", 10);
        let kinds: Vec<_> = rows.iter().map(|r| r.kind).collect();

        assert_eq!(
            kinds,
            vec![
                RowKind::Heading,
                RowKind::Divider,
                RowKind::Text,
                RowKind::Text,
                RowKind::Text,
                RowKind::Text,
            ]
        );
        assert_eq!(rows[2].text, "Nimble");
        assert_eq!(rows[3].text, "Escape");
        assert_eq!(rows[4].text, "lets it");
        assert_eq!(rows[5].text, "hide");
    }
}
