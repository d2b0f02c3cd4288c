//! Flat document-order view over a parsed page.
//!
//! Recipes are siblings of their meal heading rather than children of it,
//! so meal windows are found by walking forward through this sequence until
//! a boundary heading, not by querying containment.

use scraper::{ElementRef, Html};

pub(crate) struct DocumentOrder<'a> {
    elements: Vec<ElementRef<'a>>,
}

impl<'a> DocumentOrder<'a> {
    pub fn new(document: &'a Html) -> Self {
        let elements = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect();
        Self { elements }
    }

    /// Index of `element`, searching forward from `from`.
    ///
    /// Callers pass an index known to precede the element (its day block or
    /// trigger) so lookups stay local.
    pub fn position(&self, element: &ElementRef<'a>, from: usize) -> Option<usize> {
        self.elements
            .get(from..)?
            .iter()
            .position(|candidate| candidate == element)
            .map(|offset| from + offset)
    }

    /// Indexed elements strictly after `position`, in document order.
    pub fn after(&self, position: usize) -> impl Iterator<Item = (usize, ElementRef<'a>)> + '_ {
        self.elements
            .iter()
            .copied()
            .enumerate()
            .skip(position + 1)
    }

    /// Elements after `position` up to (excluding) the first `h3` or `h4`.
    pub fn window(&self, position: usize) -> impl Iterator<Item = (usize, ElementRef<'a>)> + '_ {
        self.after(position)
            .take_while(|(_, element)| !matches!(element.value().name(), "h3" | "h4"))
    }

    /// First element named `name` after `position`.
    pub fn next_named(&self, position: usize, name: &str) -> Option<ElementRef<'a>> {
        self.after(position)
            .map(|(_, element)| element)
            .find(|element| element.value().name() == name)
    }
}

/// Each descendant text node trimmed, empty pieces dropped, joined by `separator`.
pub(crate) fn stripped_text(element: &ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

pub(crate) fn has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}
