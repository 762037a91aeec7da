//! In-memory cell grid that components draw into before it is flushed as ANSI.
//!
//! Components never print directly. They write styled cells into a
//! [`CellBuffer`], and may read earlier writes back, which is how the result
//! list layers selection styling over highlight styling. The finished frame is
//! turned into one ANSI string by [`CellBuffer::to_ansi`].
//!
//! Positions are terminal columns. A double-width character occupies its own
//! cell plus a continuation cell to its right, which is never emitted.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::{Rgb, Theme};

/// A rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrinks the rectangle by the given padding, saturating at zero size.
    #[must_use]
    pub const fn inset(&self, top: usize, bottom: usize, left: usize, right: usize) -> Self {
        Self {
            x: self.x + left,
            y: self.y + top,
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }

    /// Index one past the last row.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }
}

/// Foreground, background and weight of a cell. `None` means terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    #[must_use]
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn with_bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn write_ansi(&self, out: &mut String) {
        out.push_str(Theme::reset());
        if self.bold {
            out.push_str(Theme::bold());
        }
        if let Some(fg) = self.fg {
            out.push_str(&Theme::fg(fg));
        }
        if let Some(bg) = self.bg {
            out.push_str(&Theme::bg(bg));
        }
    }
}

/// Marks the right half of a double-width character.
const CONTINUATION: char = '\0';

/// One character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// Placeholder written after a double-width character.
    #[must_use]
    pub const fn continuation(style: Style) -> Self {
        Self { ch: CONTINUATION, style }
    }

    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.ch == CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// Horizontal placement for [`CellBuffer::print`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A fixed-size grid of styled cells.
///
/// Writes outside the grid are ignored, so callers can clip by simply
/// writing and letting the buffer drop what does not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellBuffer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Reads a cell back.
    #[must_use]
    pub fn get_content(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Writes one cell. Out-of-bounds writes are dropped.
    pub fn set_content(&mut self, x: usize, y: usize, ch: char, style: Style) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Replaces the style of a cell, keeping its character.
    pub fn set_style(&mut self, x: usize, y: usize, style: Style) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].style = style;
        }
    }

    /// Prints `text` on row `y` within `[x, x + width)`.
    ///
    /// Text wider than `width` is cut off before the first character that
    /// would not fit whole, and zero-width characters are dropped. Returns the
    /// number of columns written, which is the on-screen width of the text.
    pub fn print(&mut self, text: &str, x: usize, y: usize, width: usize, align: Align, style: Style) -> usize {
        let fitted = fitted_width(text, width);
        let start = match align {
            Align::Left => x,
            Align::Center => x + (width - fitted) / 2,
            Align::Right => x + (width - fitted),
        };

        let mut col = start;
        for ch in text.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if col + w > start + fitted {
                break;
            }
            self.set_content(col, y, ch, style);
            for tail in col + 1..col + w {
                if let Some(i) = self.index(tail, y) {
                    self.cells[i] = Cell::continuation(style);
                }
            }
            col += w;
        }
        fitted
    }

    /// What the terminal shows for a cell, or `None` when the cell is covered
    /// by the double-width character to its left.
    ///
    /// Halves orphaned by a later overwrite show as blanks, so every row
    /// always spans exactly `width` terminal columns.
    fn glyph(&self, x: usize, y: usize) -> Option<char> {
        let row = &self.cells[y * self.width..(y + 1) * self.width];
        let cell = row[x];

        if cell.is_continuation() {
            let owned = x > 0 && !row[x - 1].is_continuation() && char_width(row[x - 1].ch) == 2;
            return if owned { None } else { Some(' ') };
        }

        match char_width(cell.ch) {
            0 => Some(' '),
            2 if !row.get(x + 1).is_some_and(Cell::is_continuation) => Some(' '),
            _ => Some(cell.ch),
        }
    }

    /// Text of one row, for tests and diagnostics.
    #[must_use]
    pub fn row_text(&self, y: usize) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width).filter_map(|x| self.glyph(x, y)).collect()
    }

    /// Serializes the grid as cursor-positioned ANSI output, one row at a time.
    ///
    /// A style escape is emitted only when the style changes between
    /// neighbouring cells.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);

        for y in 0..self.height {
            out.push_str(&position_cursor(y + 1, 1));
            let mut current: Option<Style> = None;
            for x in 0..self.width {
                let Some(ch) = self.glyph(x, y) else {
                    continue;
                };
                let style = self.cells[y * self.width + x].style;
                if current != Some(style) {
                    style.write_ansi(&mut out);
                    current = Some(style);
                }
                out.push(ch);
            }
            out.push_str(Theme::reset());
        }

        out
    }
}

/// Columns `text` occupies when cut to at most `width` columns.
fn fitted_width(text: &str, width: usize) -> usize {
    let mut used = 0;
    for w in text.chars().map(char_width) {
        if used + w > width {
            break;
        }
        used += w;
    }
    used
}
