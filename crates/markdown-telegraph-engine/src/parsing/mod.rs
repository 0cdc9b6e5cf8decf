//! # Markdown to node conversion
//!
//! [`convert`] is the restricted, line-oriented converter: frontmatter is
//! stripped, lines are segmented into blocks, paragraphs are inline-parsed
//! and link targets resolved. It is total: every input yields a document.
//!
//! [`rich::convert_rich`] is the full-markdown alternative built on
//! pulldown-cmark.

pub mod blocks;
pub mod frontmatter;
pub mod inline;
pub mod links;
pub mod rich;

use crate::nodes::{Document, Node, Tag};

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier};
use frontmatter::strip_frontmatter;
use inline::parse_inline;
use links::LinkContext;

/// Converts markdown without rewriting any links.
pub fn convert(markdown: &str) -> Document {
    convert_with_links(markdown, &LinkContext::none())
}

/// Converts markdown, resolving internal document links through `links`.
pub fn convert_with_links(markdown: &str, links: &LinkContext<'_>) -> Document {
    let body = strip_frontmatter(markdown);
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lc in classifier.classify_all(body) {
        builder.push(&lc);
    }

    builder
        .finish()
        .into_iter()
        .filter_map(|b| block_to_node(b, links))
        .collect::<Vec<_>>()
        .into()
}

fn block_to_node(block: BlockNode, links: &LinkContext<'_>) -> Option<Node> {
    match block.kind {
        BlockKind::Heading { level } => {
            Some(Node::with_text(Tag::for_heading_level(level), block.text))
        }
        BlockKind::FencedCode => Some(Node::with_text(Tag::Pre, block.text)),
        BlockKind::BlockQuote => Some(Node::with_text(Tag::Blockquote, block.text)),
        BlockKind::Paragraph => {
            let children = parse_inline(&block.text, links);
            (!children.is_empty()).then(|| Node::new(Tag::P, children))
        }
    }
}

#[cfg(test)]
mod tests;
