//! Read-only access to a judgment document's labeled sections.
//!
//! Judgment bodies arrive as XML whose root's first child holds the named
//! sections (标题, 本院认为, 本院查明, ...). Any expected section may be
//! absent; absence is never an error.

use roxmltree::{Document, Node};

/// Section label carrying the document title.
pub const TITLE_LABEL: &str = "标题";

/// A parsed judgment document.
pub struct Judgment<'input> {
    doc: Document<'input>,
}

impl<'input> Judgment<'input> {
    pub fn parse(xml: &'input str) -> Result<Self, roxmltree::Error> {
        Ok(Self {
            doc: Document::parse(xml)?,
        })
    }

    /// The element holding the labeled sections (first child of the root).
    fn body(&self) -> Option<Node<'_, 'input>> {
        self.doc.root_element().first_element_child()
    }

    /// Text of the first section with the given label, if present.
    pub fn section_text(&self, label: &str) -> Option<&str> {
        self.body()?
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == label)
            .and_then(|n| n.text())
    }

    pub fn title(&self) -> Option<&str> {
        self.section_text(TITLE_LABEL)
    }
}

/// Extract the document title, falling back to an empty string when the
/// document is unparseable or carries no 标题 section.
pub fn extract_title(xml: &str) -> String {
    match Judgment::parse(xml) {
        Ok(judgment) => judgment.title().unwrap_or_default().to_string(),
        Err(e) => {
            tracing::debug!("title extraction failed on malformed XML: {}", e);
            String::new()
        }
    }
}
