//! Per-step extraction context handed to the construction engine.

use scraper::ElementRef;

/// Read-only bundle of what a scrape step extracted: the source text, the
/// source element, and (for factories that need broader access) the context
/// itself.
///
/// Created per scrape step by the surrounding pipeline and borrowed from the
/// caller-owned parsed document. This crate never mutates a context and never
/// retains one beyond a single construction call.
#[derive(Debug, Clone)]
pub struct ExtractionContext<'doc> {
    text: String,
    node: ElementRef<'doc>,
}

impl<'doc> ExtractionContext<'doc> {
    /// Context with explicitly supplied source text.
    ///
    /// The pipeline may have post-processed the raw element text (regex
    /// capture, trimming) before handing it in.
    pub fn new(text: impl Into<String>, node: ElementRef<'doc>) -> Self {
        Self {
            text: text.into(),
            node,
        }
    }

    /// Context whose source text is the element's own text content,
    /// whitespace-trimmed.
    pub fn from_element(node: ElementRef<'doc>) -> Self {
        let text = node.text().collect::<String>().trim().to_string();
        Self { text, node }
    }

    /// The extracted source text.
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// The current document element.
    pub fn source_node(&self) -> ElementRef<'doc> {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fragment, select_first};

    #[test]
    fn test_from_element_trims_text() {
        let doc = fragment("<span>  $42  </span>");
        let node = select_first(&doc, "span").unwrap();
        let cx = ExtractionContext::from_element(node);
        assert_eq!(cx.source_text(), "$42");
    }

    #[test]
    fn test_explicit_text_overrides_element_text() {
        let doc = fragment("<span>raw</span>");
        let node = select_first(&doc, "span").unwrap();
        let cx = ExtractionContext::new("processed", node);
        assert_eq!(cx.source_text(), "processed");
        assert_eq!(cx.source_node().value().name(), "span");
    }
}
