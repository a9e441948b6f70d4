//! Test mount — a recording `Mount` implementation.

use cakequest_core::mount::{Element, Mount};

/// A mount point that records every `clear` and `append` call.
///
/// Projection tests assert against the recorded elements; teardown
/// tests assert against the clear count and that nothing was appended
/// afterward.
#[derive(Debug, Default)]
pub struct RecordingMount {
    elements: Vec<Element>,
    clear_count: usize,
}

impl RecordingMount {
    /// Create an empty recording mount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The elements currently mounted (appended since the last clear).
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// How many times the mount was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Identifiers of all mounted buttons, in append order.
    #[must_use]
    pub fn button_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Button { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether any mounted status line contains `needle`.
    #[must_use]
    pub fn has_status_containing(&self, needle: &str) -> bool {
        self.elements.iter().any(|element| {
            matches!(element, Element::Status(text) if text.contains(needle))
        })
    }
}

impl Mount for RecordingMount {
    fn clear(&mut self) {
        self.elements.clear();
        self.clear_count += 1;
    }

    fn append(&mut self, element: Element) {
        self.elements.push(element);
    }
}
