use scraper::{ElementRef, Html};

/// An element together with its concatenated descendant text.
#[derive(Debug, Clone)]
pub struct IndexedElement<'a> {
    pub element: ElementRef<'a>,
    pub text: String,
}

impl IndexedElement<'_> {
    /// Lowercase local tag name.
    pub fn tag(&self) -> &str {
        self.element.value().name()
    }
}

/// Every element of a parsed document in document order.
///
/// Positions in this list are the coordinates used to describe court
/// sections. Text is computed once per element here and reused by every
/// later pass.
#[derive(Debug, Clone)]
pub struct DocumentIndex<'a> {
    elements: Vec<IndexedElement<'a>>,
}

impl<'a> DocumentIndex<'a> {
    pub fn build(document: &'a Html) -> Self {
        let elements = document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|element| IndexedElement {
                element,
                text: element_text(element),
            })
            .collect();

        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[IndexedElement<'a>] {
        &self.elements
    }

    /// Elements in `[start, end)`, clamped to the index bounds.
    pub fn span(&self, start: usize, end: usize) -> &[IndexedElement<'a>] {
        let end = end.min(self.elements.len());
        let start = start.min(end);
        &self.elements[start..end]
    }

    /// Indexed elements with the given tag name, in document order.
    pub fn by_tag<'s>(&'s self, tag: &'s str) -> impl Iterator<Item = &'s IndexedElement<'a>> {
        self.elements.iter().filter(move |el| el.tag() == tag)
    }
}

/// Full visible text of an element: all descendant text nodes joined as-is.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
