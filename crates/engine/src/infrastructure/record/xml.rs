//! `roxmltree` backed character records.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use super::error::RecordError;
use super::navigator::RecordNode;

/// Element of a parsed record document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XmlNode<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> XmlNode<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }
}

impl RecordNode for XmlNode<'_, '_> {
    fn tag_name(&self) -> &str {
        self.node.tag_name().name()
    }

    fn node_id(&self) -> usize {
        self.node.id().get_usize()
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children()
            .filter(|child| child.is_element())
            .map(XmlNode::new)
            .collect()
    }

    fn text(&self) -> String {
        self.node
            .descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .collect()
    }

    fn inner_markup(&self) -> String {
        match (self.node.first_child(), self.node.last_child()) {
            (Some(first), Some(last)) => {
                let source = self.node.document().input_text();
                source[first.range().start..last.range().end].to_string()
            }
            _ => String::new(),
        }
    }
}

/// First `<character>` element of a parsed document, in document order.
pub fn find_character<'a, 'input>(document: &'a Document<'input>) -> Option<XmlNode<'a, 'input>> {
    document
        .descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "character")
        .map(XmlNode::new)
}

/// The source text of one character record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlRecord {
    source: String,
}

impl XmlRecord {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a record from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| RecordError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "Loaded character record");
        Ok(Self::new(source))
    }

    /// Parse the record text.
    pub fn document(&self) -> Result<Document<'_>, RecordError> {
        Ok(Document::parse(&self.source)?)
    }

    /// Run `f` against the record's `<character>` element.
    pub fn with_character<T>(
        &self,
        f: impl FnOnce(&XmlNode<'_, '_>) -> T,
    ) -> Result<T, RecordError> {
        let document = self.document()?;
        let character =
            find_character(&document).ok_or(RecordError::MissingElement("character"))?;
        Ok(f(&character))
    }
}
