use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::value::{StyleMap, StyleValue};

/// Element whose inline style an animator reads and writes.
///
/// Implementations are handles: the animator keeps one but does not own the
/// underlying node, so both operations take `&self`.
pub trait StyleTarget {
    /// Current computed value of `property`, as CSS text.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Write one inline style property.
    fn set_style(&self, property: &str, value: &StyleValue);

    /// Write every property of `styles`.
    fn set_styles(&self, styles: &StyleMap) {
        for (name, value) in styles {
            self.set_style(name, value);
        }
    }
}

#[derive(Debug, Default)]
struct MemoryElementState {
    stylesheet: StyleMap,
    inline: StyleMap,
    writes: usize,
}

/// Headless element: a stylesheet layer under an inline layer.
///
/// Clones share the same node, which lets callers keep a handle for
/// inspection while an animator drives it.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<MemoryElementState>>,
}

impl MemoryElement {
    /// Element with no styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Element whose stylesheet provides `property: value`.
    pub fn with_stylesheet(property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let el = Self::new();
        el.set_stylesheet(property, value);
        el
    }

    /// Set a stylesheet (non-inline) value, visible through computed style.
    pub fn set_stylesheet(&self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.state
            .borrow_mut()
            .stylesheet
            .insert(property.into(), value.into());
    }

    /// Inline value of `property`, if one was written.
    pub fn style(&self, property: &str) -> Option<StyleValue> {
        self.state.borrow().inline.get(property).cloned()
    }

    /// Number of inline writes performed so far.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    /// Whether two handles refer to the same node.
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl StyleTarget for MemoryElement {
    fn computed_style(&self, property: &str) -> Option<String> {
        let state = self.state.borrow();
        state
            .inline
            .get(property)
            .or_else(|| state.stylesheet.get(property))
            .map(ToString::to_string)
    }

    fn set_style(&self, property: &str, value: &StyleValue) {
        let mut state = self.state.borrow_mut();
        state.inline.insert(property.to_owned(), value.clone());
        state.writes += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/element.rs"]
mod tests;
