use serde::{Deserialize, Serialize};

use super::{Node, render_html};

/// An ordered forest of top-level nodes.
///
/// Serializes as a bare JSON array, the form the publishing API expects for
/// page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Renders the document as an HTML fragment.
    pub fn to_html(&self) -> String {
        render_html(&self.nodes)
    }

    /// Serializes the document as the JSON array sent as page content.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.nodes)
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::Tag;

    #[test]
    fn serializes_as_bare_array() {
        let doc = Document::new(vec![Node::with_text(Tag::P, "hi")]);
        assert_eq!(doc.to_json().unwrap(), r#"[{"tag":"p","children":["hi"]}]"#);
    }

    #[test]
    fn deserializes_api_content() {
        let doc: Document = serde_json::from_str(
            r#"[{"tag":"p","children":["a ",{"tag":"a","attrs":{"href":"/x"},"children":["b"]}]},{"tag":"br"}]"#,
        )
        .unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.nodes[0].children()[1].as_element().unwrap().href(), Some("/x"));
        assert_eq!(doc.nodes[1], Node::void(Tag::Br));
    }

    #[test]
    fn empty_document() {
        let doc = Document::default();
        assert!(doc.is_empty());
        assert_eq!(doc.to_json().unwrap(), "[]");
        assert_eq!(doc.to_html(), "");
    }
}
