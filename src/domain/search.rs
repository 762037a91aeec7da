//! Search result values consumed by the result list.
//!
//! Spans are half-open character ranges into the unstyled entity name. They are
//! produced by the search stage and only ever read by the list when it
//! composites highlight styling, so they are plain values with no behavior
//! beyond range arithmetic.

use super::entity::Entity;
use std::ops::Range;
use std::rc::Rc;

/// A matched character range `[start, end)` within an entity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    /// Creates a span, returning `None` when the range is empty or reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorekeeper::domain::HighlightSpan;
    ///
    /// assert!(HighlightSpan::new(0, 2).is_some());
    /// assert!(HighlightSpan::new(3, 3).is_none());
    /// ```
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the span lies entirely within a name of `name_len` characters.
    #[must_use]
    pub const fn fits(&self, name_len: usize) -> bool {
        self.start < self.end && self.end <= name_len
    }

    /// The covered offsets, truncated to the first `limit` characters.
    ///
    /// Out-of-range spans yield an empty range rather than an error.
    #[must_use]
    pub fn clipped(&self, limit: usize) -> Range<usize> {
        let end = self.end.min(limit);
        let start = self.start.min(end);
        start..end
    }
}

/// An entity paired with the spans its name matched on.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub entity: Rc<Entity>,
    pub spans: Vec<HighlightSpan>,
}

impl SearchResult {
    #[must_use]
    pub const fn new(entity: Rc<Entity>, spans: Vec<HighlightSpan>) -> Self {
        Self { entity, spans }
    }

    /// A result with no highlighting, as produced for an empty query.
    #[must_use]
    pub const fn plain(entity: Rc<Entity>) -> Self {
        Self {
            entity,
            spans: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.entity.name
    }
}
