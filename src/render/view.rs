//! Glue between the selection and the detail text sink.

use super::table::RendererTable;
use crate::domain::Entity;

/// Destination for rendered detail text.
///
/// Implementations may defer painting, but `set_text` must return
/// immediately, and a newer text replaces any text that has not been painted
/// yet.
pub trait TextSink {
    fn set_text(&mut self, text: String);
    fn scroll_to_beginning(&mut self);
    fn scroll_page_forward(&mut self);
    fn scroll_page_backward(&mut self);
}

/// Shows the rendered form of one entity in a [`TextSink`].
#[derive(Debug)]
pub struct EntityView<S> {
    renderers: RendererTable,
    sink: S,
}

impl<S: TextSink> EntityView<S> {
    #[must_use]
    pub const fn new(renderers: RendererTable, sink: S) -> Self {
        Self { renderers, sink }
    }

    /// Displays `entity`, or clears the sink for `None`.
    ///
    /// A newly displayed entity always starts scrolled to the top.
    pub fn set(&mut self, entity: Option<&Entity>) {
        let Some(entity) = entity else {
            self.sink.set_text(String::new());
            return;
        };

        let _span = tracing::trace_span!("render_entity", name = %entity.name, kind = %entity.kind).entered();
        let text = self.renderers.render(entity);
        self.sink.set_text(text);
        self.sink.scroll_to_beginning();
    }

    /// Keys captured while the detail pane has focus.
    ///
    /// `d` pages forward and `u` pages back. Returns `false` for every other
    /// key so the caller can fall through to its own bindings.
    pub fn handle_key(&mut self, key: char) -> bool {
        match key {
            'd' => self.sink.scroll_page_forward(),
            'u' => self.sink.scroll_page_backward(),
            _ => return false,
        }
        true
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;

    #[derive(Debug, Default)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl TextSink for RecordingSink {
        fn set_text(&mut self, text: String) {
            self.calls.push(format!("set_text({text:?})"));
        }
        fn scroll_to_beginning(&mut self) {
            self.calls.push("scroll_to_beginning".to_string());
        }
        fn scroll_page_forward(&mut self) {
            self.calls.push("page_forward".to_string());
        }
        fn scroll_page_backward(&mut self) {
            self.calls.push("page_backward".to_string());
        }
    }

    fn view() -> EntityView<RecordingSink> {
        let table = RendererTable::new().with(EntityKind::Rule, |e: &Entity| format!("  {}\n", e.name));
        EntityView::new(table, RecordingSink::default())
    }

    #[test]
    fn set_renders_then_scrolls_to_top() {
        let mut view = view();
        view.set(Some(&Entity::new("Bar", EntityKind::Rule)));

        assert_eq!(view.sink().calls, vec!["set_text(\"Bar\")", "scroll_to_beginning"]);
    }

    #[test]
    fn unmapped_kind_still_scrolls_to_top() {
        let mut view = view();
        view.set(Some(&Entity::new("Foo", EntityKind::Item)));

        assert_eq!(view.sink().calls, vec!["set_text(\"Foo\")", "scroll_to_beginning"]);
    }

    #[test]
    fn none_clears_without_rendering() {
        let mut view = view();
        view.set(None);

        assert_eq!(view.sink().calls, vec!["set_text(\"\")"]);
    }

    #[test]
    fn page_keys_are_captured_and_others_fall_through() {
        let mut view = view();

        assert!(view.handle_key('d'));
        assert!(view.handle_key('u'));
        assert!(!view.handle_key('q'));
        assert_eq!(view.sink().calls, vec!["page_forward", "page_backward"]);
    }
}
