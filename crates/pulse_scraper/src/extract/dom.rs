//! Small tree-walking helpers over `scraper` element references.

use scraper::ElementRef;

/// A structural test applied to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Element has this tag name
    Tag(&'static str),
    /// The raw `class` attribute contains this substring
    ClassContains(&'static str),
}

impl Matcher {
    pub fn matches(&self, element: &ElementRef) -> bool {
        match self {
            Matcher::Tag(name) => element.value().name() == *name,
            Matcher::ClassContains(needle) => class_contains(element, needle),
        }
    }
}

pub fn class_contains(element: &ElementRef, needle: &str) -> bool {
    element
        .value()
        .attr("class")
        .map_or(false, |class| class.contains(needle))
}

/// First descendant of `node` (never `node` itself), in document order,
/// accepted by `accept`.
pub fn find_descendant<'a, F>(node: ElementRef<'a>, mut accept: F) -> Option<ElementRef<'a>>
where
    F: FnMut(&ElementRef<'a>) -> bool,
{
    node.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| accept(element))
}

/// First descendant of `node` satisfying any of `matchers`.
pub fn find_first<'a>(node: ElementRef<'a>, matchers: &[Matcher]) -> Option<ElementRef<'a>> {
    find_descendant(node, |element| matchers.iter().any(|m| m.matches(element)))
}

/// True if any ancestor of `element`, up to the document root, satisfies `matcher`.
pub fn has_ancestor(element: &ElementRef, matcher: Matcher) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| matcher.matches(&ancestor))
}

/// Concatenated text of `element` and its descendants, trimmed.
pub fn flat_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
