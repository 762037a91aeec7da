//! Shared rendering utilities.
//!
//! Cursor positioning for the ANSI flush, the screen layout split, display
//! widths, and the greedy word wrapper used by the detail pane.

use crate::ui::grid::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest list column, in cells.
const MIN_LIST_WIDTH: usize = 12;

/// ANSI sequence moving the cursor to a 1-indexed row and column.
///
/// # Example
///
/// ```rust
/// use lorekeeper::ui::helpers::position_cursor;
///
/// assert_eq!(position_cursor(5, 1), "\u{1b}[5;1H");
/// ```
#[must_use]
pub fn position_cursor(row: usize, col: usize) -> String {
    format!("\u{1b}[{row};{col}H")
}

/// Terminal columns taken by `ch`: 2 for wide CJK and emoji, 0 for
/// combining marks and control characters, otherwise 1.
#[must_use]
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Screen regions for one frame.
///
/// ```text
/// header ─────────────────────────────────
/// list            │ detail
/// list            │ detail
/// > prompt        │ detail
/// footer ─────────────────────────────────
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub header: Rect,
    pub list: Rect,
    pub prompt: Rect,
    pub detail: Rect,
    pub footer: Rect,
}

/// Splits the pane into header, list, prompt, detail and footer regions.
///
/// `list_percent` is the share of the width given to the list column; the
/// detail column takes the rest after a one-cell separator. Small panes
/// degrade to zero-height regions rather than failing.
#[must_use]
pub fn compute_layout(rows: usize, cols: usize, list_percent: usize) -> Layout {
    let header = Rect::new(0, 0, cols, rows.min(1));
    let footer_y = rows.saturating_sub(1).max(header.bottom());
    let footer = Rect::new(0, footer_y, cols, usize::from(rows > 1));

    let body_y = header.bottom();
    let body_height = footer_y.saturating_sub(body_y);

    let list_width = (cols * list_percent / 100).max(MIN_LIST_WIDTH).min(cols);
    let detail_x = (list_width + 1).min(cols);
    let detail_width = cols.saturating_sub(detail_x);

    let prompt_height = body_height.min(1);
    let list = Rect::new(0, body_y, list_width, body_height - prompt_height);
    let prompt = Rect::new(0, list.bottom(), list_width, prompt_height);
    let detail = Rect::new(detail_x, body_y, detail_width, body_height);

    Layout {
        header,
        list,
        prompt,
        detail,
        footer,
    }
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are split across lines between characters, never
/// through a wide character. Runs of whitespace between words collapse to a
/// single space. An empty line stays a single empty line so paragraph breaks
/// survive wrapping.
#[must_use]
pub fn wrap_text(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        for ch in word.chars() {
            let w = char_width(ch);
            if current_width + w > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}
