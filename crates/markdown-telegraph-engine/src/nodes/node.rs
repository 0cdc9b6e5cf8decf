use serde::{Deserialize, Serialize};

use super::tag::Tag;

/// Element attributes. Only `href` (links) and `src` (images) are ever set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl Attrs {
    pub fn href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            src: None,
        }
    }

    pub fn src(src: impl Into<String>) -> Self {
        Self {
            href: None,
            src: Some(src.into()),
        }
    }
}

/// A child of a [`Node`]: either leaf text or a nested element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Element(Node),
}

impl Child {
    pub fn text(s: impl Into<String>) -> Self {
        Child::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(s) => Some(s),
            Child::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Node> {
        match self {
            Child::Text(_) => None,
            Child::Element(n) => Some(n),
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Element(node)
    }
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_string())
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}

/// A tagged element of a converted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Child>>,
}

impl Node {
    /// Creates an element with the given children.
    pub fn new(tag: Tag, children: Vec<Child>) -> Self {
        Self {
            tag,
            attrs: None,
            children: Some(children),
        }
    }

    /// Creates an element whose only child is `text`.
    pub fn with_text(tag: Tag, text: impl Into<String>) -> Self {
        Self::new(tag, vec![Child::Text(text.into())])
    }

    /// Creates a childless element such as `br`.
    pub fn void(tag: Tag) -> Self {
        Self {
            tag,
            attrs: None,
            children: None,
        }
    }

    /// Creates an `a` element pointing at `href`.
    pub fn link(href: impl Into<String>, children: Vec<Child>) -> Self {
        Self {
            tag: Tag::A,
            attrs: Some(Attrs::href(href)),
            children: Some(children),
        }
    }

    /// Creates an `img` element with the given source.
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            tag: Tag::Img,
            attrs: Some(Attrs::src(src)),
            children: None,
        }
    }

    pub fn children(&self) -> &[Child] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn href(&self) -> Option<&str> {
        self.attrs.as_ref().and_then(|a| a.href.as_deref())
    }
}

pub(crate) fn collect_text(children: &[Child], out: &mut String) {
    for child in children {
        match child {
            Child::Text(s) => out.push_str(s),
            Child::Element(n) => collect_text(n.children(), out),
        }
    }
}
