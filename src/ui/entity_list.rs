//! Scrollable, bottom-anchored result list with highlight compositing.
//!
//! [`EntityList`] owns the current search results, the selected index and the
//! scroll offset. Row `offset` is drawn on the bottom line of the viewport and
//! later rows stack upwards, so the best match sits right above the query
//! prompt.
//!
//! Index and offset are never allowed to leave their valid ranges: every
//! mutator clamps instead of failing, and after any change to the selection or
//! the viewport the selected row is inside the visible window
//! (`offset <= current < offset + height`).
//!
//! # Compositing
//!
//! A row is drawn in three passes over the cell grid:
//!
//! 1. the name, left-inset, in the normal text color;
//! 2. every highlight span re-colors the foreground of the cells its
//!    characters cover (two cells for a double-width character);
//! 3. if the row is selected, every occupied cell gets the selection
//!    background, and its foreground is chosen by reading the cell back: cells
//!    that carry the highlight color become `selected_highlight`, the rest
//!    become `selected_fg`.

use crate::domain::{Entity, SearchResult};
use crate::ui::grid::{Align, CellBuffer, Rect, Style};
use crate::ui::helpers::char_width;
use crate::ui::theme::Theme;
use std::fmt;
use std::ops::Range;

/// Columns between the list edge and the first character of a name. Column 0
/// holds the gutter.
pub const LEFT_INSET: usize = 2;

/// Listener invoked with the newly current entity, or `None` when nothing is
/// selected.
pub type ChangedFunc = Box<dyn FnMut(Option<&Entity>)>;

/// The selectable viewport list.
#[derive(Default)]
pub struct EntityList {
    entities: Vec<SearchResult>,
    current_item: usize,
    offset: usize,
    height: usize,
    on_changed: Option<ChangedFunc>,
}

impl fmt::Debug for EntityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityList")
            .field("item_count", &self.entities.len())
            .field("current_item", &self.current_item)
            .field("offset", &self.offset)
            .field("height", &self.height)
            .field("has_listener", &self.on_changed.is_some())
            .finish()
    }
}

impl EntityList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result without touching the selection or notifying.
    pub fn add_item(&mut self, result: SearchResult) {
        self.entities.push(result);
    }

    /// Replaces all results.
    ///
    /// The selection is clamped to the new length and the scroll offset is
    /// re-validated against the current height, then the listener is told
    /// about the (possibly different) current entity.
    pub fn set_entities(&mut self, entities: Vec<SearchResult>) {
        self.entities = entities;

        if self.entities.is_empty() {
            self.current_item = 0;
            self.offset = 0;
        } else {
            self.current_item = self.current_item.min(self.entities.len() - 1);
            self.scroll_to_current();
        }

        tracing::trace!(
            item_count = self.entities.len(),
            current_item = self.current_item,
            offset = self.offset,
            "entities replaced"
        );

        self.dispatch_changed();
    }

    /// Index of the selected row.
    #[must_use]
    pub const fn current_item(&self) -> usize {
        self.current_item
    }

    /// Index of the result drawn on the bottom line.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows the last known viewport can show.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Selects a row.
    ///
    /// A negative index is the "scroll to start" path: the first row becomes
    /// current and the offset resets to 0. An index past the end selects the
    /// last row. The listener is always notified, even when the selection did
    /// not move, so callers can use this to force a re-render. Afterwards the
    /// view scrolls as little as possible to keep the selection visible.
    pub fn set_current_item(&mut self, item: isize) {
        if self.entities.is_empty() {
            self.current_item = 0;
            self.offset = 0;
            self.dispatch_changed();
            return;
        }

        let Ok(item) = usize::try_from(item) else {
            self.current_item = 0;
            self.offset = 0;
            self.dispatch_changed();
            return;
        };

        self.current_item = item.min(self.entities.len() - 1);
        self.dispatch_changed();
        self.scroll_to_current();
    }

    /// Moves the selection by `delta` rows, clamping at both ends.
    pub fn move_by(&mut self, delta: isize) {
        let current = isize::try_from(self.current_item).unwrap_or(isize::MAX);
        let target = current.saturating_add(delta).max(0);
        self.set_current_item(target);
    }

    /// The selected entity, or `None` when the list is empty.
    #[must_use]
    pub fn current_entity(&self) -> Option<&Entity> {
        self.entities.get(self.current_item).map(|r| r.entity.as_ref())
    }

    /// Removes every result and notifies the listener with `None`.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.current_item = 0;
        self.offset = 0;
        self.dispatch_changed();
    }

    /// Registers the selection-changed listener, replacing any previous one.
    ///
    /// The listener runs synchronously inside the mutating call.
    pub fn set_changed_func(&mut self, changed: impl FnMut(Option<&Entity>) + 'static) {
        self.on_changed = Some(Box::new(changed));
    }

    /// Updates the viewport size without notifying.
    ///
    /// The offset is re-validated so a shrinking viewport never hides the
    /// selected row.
    pub fn set_viewport_height(&mut self, height: usize) {
        if self.height != height {
            self.height = height;
            self.scroll_to_current();
        }
    }

    /// Draws the visible rows into `area`, bottom-anchored.
    pub fn draw(&mut self, buf: &mut CellBuffer, area: Rect, theme: &Theme) {
        self.set_viewport_height(area.height);

        if area.is_empty() || self.entities.is_empty() {
            return;
        }

        let colors = &theme.colors;
        let gutter = Style::default().with_bg(colors.selected_bg);
        let item_x = area.x + LEFT_INSET;
        let item_width = area.width.saturating_sub(LEFT_INSET);

        let visible = self.entities.iter().enumerate().skip(self.offset).take(area.height);

        for (row, (index, result)) in visible.enumerate() {
            let row_y = area.bottom() - 1 - row;

            buf.set_content(area.x, row_y, ' ', gutter);
            let drawn = buf.print(
                result.name(),
                item_x,
                row_y,
                item_width,
                Align::Left,
                Style::fg(colors.text_normal),
            );

            let columns = char_columns(result.name(), drawn);
            for span in &result.spans {
                for bx in span.clipped(columns.len()).flat_map(|i| columns[i].clone()) {
                    if let Some(cell) = buf.get_content(item_x + bx, row_y) {
                        let style = cell.style.with_fg(colors.highlight);
                        buf.set_style(item_x + bx, row_y, style);
                    }
                }
            }

            if index == self.current_item {
                let text_end = (LEFT_INSET + drawn).min(area.width);
                for bx in 1..text_end {
                    let Some(cell) = buf.get_content(area.x + bx, row_y) else {
                        continue;
                    };
                    let fg = if cell.style.fg == Some(colors.highlight) {
                        colors.selected_highlight
                    } else {
                        colors.selected_fg
                    };
                    let style = cell.style.with_bg(colors.selected_bg).with_fg(fg);
                    buf.set_style(area.x + bx, row_y, style);
                }
            }
        }
    }

    /// Minimal scroll: moves the window only as far as needed to contain the
    /// current row.
    fn scroll_to_current(&mut self) {
        if self.current_item < self.offset {
            self.offset = self.current_item;
        } else if self.height > 0 && self.current_item - self.offset >= self.height {
            self.offset = self.current_item + 1 - self.height;
        }
    }

    fn dispatch_changed(&mut self) {
        let entity = self.entities.get(self.current_item).map(|r| r.entity.as_ref());
        if let Some(changed) = self.on_changed.as_mut() {
            changed(entity);
        }
    }
}

/// Cell columns covered by each character of `name` that fits in `drawn`
/// columns, indexed by character offset.
fn char_columns(name: &str, drawn: usize) -> Vec<Range<usize>> {
    let mut columns = Vec::new();
    let mut col = 0;
    for w in name.chars().map(char_width) {
        if col + w > drawn {
            break;
        }
        columns.push(col..col + w);
        col += w;
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityKind, HighlightSpan};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn result(name: &str, spans: &[(usize, usize)]) -> SearchResult {
        SearchResult::new(
            Rc::new(Entity::new(name, EntityKind::Item)),
            spans
                .iter()
                .filter_map(|&(s, e)| HighlightSpan::new(s, e))
                .collect(),
        )
    }

    fn list_of(names: &[&str], height: usize) -> EntityList {
        let mut list = EntityList::new();
        for name in names {
            list.add_item(result(name, &[]));
        }
        list.set_viewport_height(height);
        list
    }

    /// Registers a listener that records every notification.
    fn record(list: &mut EntityList) -> Rc<RefCell<Vec<Option<String>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        list.set_changed_func(move |entity| {
            sink.borrow_mut().push(entity.map(|e| e.name.clone()));
        });
        seen
    }

    #[test]
    fn add_item_does_not_notify_or_select() {
        let mut list = EntityList::new();
        let seen = record(&mut list);

        list.add_item(result("Sword", &[]));
        list.add_item(result("Shield", &[]));

        assert_eq!(list.item_count(), 2);
        assert_eq!(list.current_item(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn set_current_item_clamps_into_range() {
        let names = ["a", "b", "c", "d", "e"];
        for requested in [-7, -1, 0, 2, 4, 5, 99] {
            let mut list = list_of(&names, 3);
            list.set_current_item(requested);
            let current = list.current_item();
            assert!(current < names.len(), "{requested} -> {current}");

            let (before_current, before_offset) = (list.current_item(), list.offset());
            list.set_current_item(isize::try_from(current).unwrap());
            assert_eq!((list.current_item(), list.offset()), (before_current, before_offset));
        }
    }

    #[test]
    fn selection_stays_visible_after_every_move() {
        let names: Vec<String> = (0..20).map(|i| format!("entity {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut list = list_of(&refs, 4);

        for target in [0, 3, 4, 10, 9, 7, 6, 19, 25, 2, -1, 15] {
            list.set_current_item(target);
            let (current, offset) = (list.current_item(), list.offset());
            assert!(offset <= current, "target {target}");
            assert!(current - offset < 4, "target {target}");
        }
    }

    #[test]
    fn moves_within_the_window_do_not_scroll() {
        let mut list = list_of(&["a", "b", "c", "d", "e", "f", "g"], 3);
        list.set_current_item(4);
        assert_eq!(list.offset(), 2);

        list.set_current_item(2);
        assert_eq!(list.offset(), 2);
        list.set_current_item(3);
        assert_eq!(list.offset(), 2);

        list.set_current_item(1);
        assert_eq!(list.offset(), 1);
        list.set_current_item(6);
        assert_eq!(list.offset(), 4);
    }

    #[test]
    fn negative_index_jumps_to_top() {
        let mut list = list_of(&["a", "b", "c", "d", "e"], 2);
        list.set_current_item(4);
        assert_eq!(list.offset(), 3);

        list.set_current_item(-1);
        assert_eq!(list.current_item(), 0);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn every_set_current_item_notifies_once() {
        let mut list = list_of(&["Sword", "Shield"], 5);
        let seen = record(&mut list);

        list.set_current_item(1);
        list.set_current_item(1);
        list.set_current_item(7);

        assert_eq!(
            *seen.borrow(),
            vec![
                Some("Shield".to_string()),
                Some("Shield".to_string()),
                Some("Shield".to_string()),
            ]
        );
    }

    #[test]
    fn last_registered_listener_wins() {
        let mut list = list_of(&["Sword"], 5);
        let first = record(&mut list);
        let second = record(&mut list);

        list.set_current_item(0);

        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn clear_resets_and_notifies_none() {
        let mut list = list_of(&["a", "b", "c"], 2);
        list.set_current_item(2);
        let seen = record(&mut list);

        list.clear();

        assert_eq!(list.item_count(), 0);
        assert!(list.current_entity().is_none());
        assert_eq!((list.current_item(), list.offset()), (0, 0));
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn empty_list_is_well_defined() {
        let mut list = EntityList::new();
        let seen = record(&mut list);

        list.set_current_item(3);
        list.set_current_item(-1);
        list.move_by(1);

        assert_eq!((list.current_item(), list.offset()), (0, 0));
        assert!(list.current_entity().is_none());
        assert_eq!(*seen.borrow(), vec![None, None, None]);

        let theme = Theme::default();
        let mut buf = CellBuffer::new(10, 3);
        let before = buf.clone();
        let area = buf.area();
        list.draw(&mut buf, area, &theme);
        assert_eq!(buf, before);
    }

    #[test]
    fn set_entities_clamps_selection_and_offset() {
        let mut list = list_of(&["a", "b", "c", "d", "e", "f"], 2);
        list.set_current_item(5);
        assert_eq!((list.current_item(), list.offset()), (5, 4));
        let seen = record(&mut list);

        list.set_entities(vec![result("x", &[]), result("y", &[]), result("z", &[])]);

        assert_eq!(list.current_item(), 2);
        assert!(list.offset() <= 2);
        assert!(list.current_item() - list.offset() < 2);
        assert_eq!(*seen.borrow(), vec![Some("z".to_string())]);

        list.set_entities(Vec::new());
        assert_eq!((list.current_item(), list.offset()), (0, 0));
        assert_eq!(seen.borrow().last(), Some(&None));
    }

    #[test]
    fn shrinking_the_viewport_keeps_selection_visible() {
        let mut list = list_of(&["a", "b", "c", "d", "e", "f"], 6);
        list.set_current_item(5);
        assert_eq!(list.offset(), 0);

        list.set_viewport_height(2);
        assert_eq!(list.offset(), 4);
    }

    #[test]
    fn move_by_clamps_at_both_ends() {
        let mut list = list_of(&["a", "b", "c"], 3);
        list.move_by(-5);
        assert_eq!(list.current_item(), 0);
        list.move_by(10);
        assert_eq!(list.current_item(), 2);
        list.move_by(-1);
        assert_eq!(list.current_item(), 1);
    }

    #[test]
    fn zero_height_draws_nothing() {
        let mut list = list_of(&["Sword"], 0);
        list.set_current_item(0);

        let theme = Theme::default();
        let mut buf = CellBuffer::new(10, 2);
        let before = buf.clone();
        list.draw(&mut buf, Rect::new(0, 0, 10, 0), &theme);
        assert_eq!(buf, before);
    }

    #[test]
    fn highlight_spans_are_clipped_to_the_name() {
        let theme = Theme::default();
        let colors = &theme.colors;
        let mut list = EntityList::new();
        list.add_item(result("Sling", &[(2, 100)]));
        list.add_item(result("Club", &[]));
        list.set_viewport_height(2);
        list.set_current_item(1);

        let mut buf = CellBuffer::new(12, 2);
        let area = buf.area();
        list.draw(&mut buf, area, &theme);

        // Sling is row 0, drawn on the bottom line and not selected.
        let y = 1;
        for bx in 0..5 {
            let cell = buf.get_content(LEFT_INSET + bx, y).unwrap();
            let expected = if bx >= 2 { colors.highlight } else { colors.text_normal };
            assert_eq!(cell.style.fg, Some(expected), "offset {bx}");
        }
        for x in LEFT_INSET + 5..12 {
            assert_eq!(buf.get_content(x, y).unwrap().style, Style::default(), "column {x}");
        }
    }

    #[test]
    fn overlapping_spans_are_idempotent() {
        let theme = Theme::default();
        let mut once = EntityList::new();
        once.add_item(result("Shortbow", &[(0, 5)]));
        let mut twice = EntityList::new();
        twice.add_item(result("Shortbow", &[(0, 3), (1, 5), (0, 5)]));

        let mut a = CellBuffer::new(12, 1);
        let mut b = CellBuffer::new(12, 1);
        let area = a.area();
        once.draw(&mut a, area, &theme);
        twice.draw(&mut b, area, &theme);
        assert_eq!(a, b);
    }

    #[test]
    fn long_names_are_cut_at_the_viewport_edge() {
        let theme = Theme::default();
        let mut list = EntityList::new();
        list.add_item(result("Staff of the Magi", &[(9, 17)]));
        list.set_current_item(0);

        let mut buf = CellBuffer::new(8, 1);
        let area = buf.area();
        list.draw(&mut buf, area, &theme);

        assert_eq!(buf.row_text(0), "  Staff ");
        let last = buf.get_content(7, 0).unwrap();
        assert_eq!(last.style.bg, Some(theme.colors.selected_bg));
    }

    #[test]
    fn draws_the_documented_scenario() {
        let theme = Theme::default();
        let colors = &theme.colors;
        let mut list = EntityList::new();
        list.add_item(result("Sword", &[]));
        list.add_item(result("Shield", &[(0, 2)]));
        list.add_item(result("Spear", &[]));

        let area = Rect::new(0, 0, 12, 2);
        list.set_viewport_height(area.height);
        list.set_current_item(2);
        assert_eq!((list.current_item(), list.offset()), (2, 1));

        let mut buf = CellBuffer::new(12, 2);
        list.draw(&mut buf, area, &theme);

        assert_eq!(buf.row_text(1), "  Shield    ");
        assert_eq!(buf.row_text(0), "  Spear     ");

        // Shield: "Sh" highlighted, rest normal, no selection background.
        for bx in 0..6 {
            let cell = buf.get_content(LEFT_INSET + bx, 1).unwrap();
            let fg = if bx < 2 { colors.highlight } else { colors.text_normal };
            assert_eq!(cell.style.fg, Some(fg));
            assert_eq!(cell.style.bg, None);
        }

        // Spear: selected across the inset and the name.
        for x in 1..LEFT_INSET + 5 {
            let cell = buf.get_content(x, 0).unwrap();
            assert_eq!(cell.style.bg, Some(colors.selected_bg), "column {x}");
            assert_eq!(cell.style.fg, Some(colors.selected_fg), "column {x}");
        }
        assert_eq!(buf.get_content(LEFT_INSET + 5, 0).unwrap().style.bg, None);

        // The gutter is painted on every visible row.
        for y in 0..2 {
            assert_eq!(buf.get_content(0, y).unwrap().style.bg, Some(colors.selected_bg));
        }
    }

    #[test]
    fn selected_highlight_keeps_its_distinction() {
        let theme = Theme::default();
        let colors = &theme.colors;
        let mut list = EntityList::new();
        list.add_item(result("Shield", &[(0, 2)]));
        list.set_current_item(0);

        let mut buf = CellBuffer::new(10, 1);
        let area = buf.area();
        list.draw(&mut buf, area, &theme);

        assert_eq!(buf.get_content(LEFT_INSET, 0).unwrap().style.fg, Some(colors.selected_highlight));
        assert_eq!(buf.get_content(LEFT_INSET + 1, 0).unwrap().style.fg, Some(colors.selected_highlight));
        assert_eq!(buf.get_content(LEFT_INSET + 2, 0).unwrap().style.fg, Some(colors.selected_fg));
    }

    #[test]
    fn wide_names_highlight_whole_characters() {
        let theme = Theme::default();
        let colors = &theme.colors;
        let mut list = EntityList::new();
        list.add_item(result("天使の剣", &[(1, 3)]));
        list.set_current_item(0);

        let mut buf = CellBuffer::new(10, 1);
        let area = buf.area();
        list.draw(&mut buf, area, &theme);

        assert_eq!(buf.row_text(0), "  天使の剣");
        assert_eq!(buf.get_content(LEFT_INSET, 0).unwrap().ch, '天');
        assert!(buf.get_content(LEFT_INSET + 1, 0).unwrap().is_continuation());

        // "使の" spans columns 4..8; the overlay reaches the right edge.
        for x in 1..10 {
            let cell = buf.get_content(x, 0).unwrap();
            let fg = if (4..8).contains(&x) { colors.selected_highlight } else { colors.selected_fg };
            assert_eq!(cell.style.bg, Some(colors.selected_bg), "column {x}");
            assert_eq!(cell.style.fg, Some(fg), "column {x}");
        }
    }

    #[test]
    fn wide_names_are_cut_between_characters() {
        let theme = Theme::default();
        let mut list = EntityList::new();
        list.add_item(result("天使の剣", &[(3, 4)]));

        let mut buf = CellBuffer::new(9, 1);
        let area = buf.area();
        list.draw(&mut buf, area, &theme);

        // Seven columns of room fit three characters; the span on the fourth
        // is dropped and the overlay stops after the third.
        assert_eq!(buf.row_text(0), "  天使の ");
        for x in 1..LEFT_INSET + 6 {
            let cell = buf.get_content(x, 0).unwrap();
            assert_eq!(cell.style.bg, Some(theme.colors.selected_bg), "column {x}");
            assert_eq!(cell.style.fg, Some(theme.colors.selected_fg), "column {x}");
        }
        assert_eq!(buf.get_content(8, 0).unwrap().style, Style::default());
    }

    #[test]
    fn draws_relative_to_an_offset_area() {
        let theme = Theme::default();
        let colors = &theme.colors;
        let mut list = EntityList::new();
        list.add_item(result("Sword", &[]));
        list.add_item(result("Shield", &[(0, 2)]));
        list.set_current_item(1);

        let mut buf = CellBuffer::new(12, 4);
        let area = Rect::new(3, 1, 9, 2);
        list.draw(&mut buf, area, &theme);

        assert_eq!(buf.row_text(0), " ".repeat(12));
        assert_eq!(buf.row_text(1), "     Shield ");
        assert_eq!(buf.row_text(2), "     Sword  ");
        assert_eq!(buf.row_text(3), " ".repeat(12));

        for y in 1..3 {
            assert_eq!(buf.get_content(3, y).unwrap().style.bg, Some(colors.selected_bg), "row {y}");
            for x in 0..3 {
                assert_eq!(buf.get_content(x, y).unwrap().style, Style::default(), "column {x}");
            }
        }

        // Shield is selected: the overlay starts right of the gutter and stops after the name.
        for x in 4..11 {
            let cell = buf.get_content(x, 1).unwrap();
            let fg = if x == 5 || x == 6 { colors.selected_highlight } else { colors.selected_fg };
            assert_eq!(cell.style.bg, Some(colors.selected_bg), "column {x}");
            assert_eq!(cell.style.fg, Some(fg), "column {x}");
        }
        assert_eq!(buf.get_content(11, 1).unwrap().style.bg, None);

        // Sword is not selected and starts two columns in from the area.
        assert_eq!(buf.get_content(5, 2).unwrap().ch, 'S');
        assert_eq!(buf.get_content(5, 2).unwrap().style.fg, Some(colors.text_normal));
        assert_eq!(buf.get_content(4, 2).unwrap().style.bg, None);
    }
}
