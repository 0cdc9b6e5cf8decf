//! Whole-document conversion tests for the restricted converter.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    nodes::{Child, Node, Tag},
    parsing::{convert, convert_with_links, links::LinkContext},
};

fn el(node: Node) -> Child {
    Child::Element(node)
}

#[rstest]
#[case("")]
#[case("\n\n   \n")]
#[case("---\ntitle: x\n---")]
#[case("# Only a title")]
#[case("```\n```")]
fn produces_no_nodes(#[case] md: &str) {
    assert!(convert(md).is_empty());
}

#[test]
fn title_heading_is_suppressed_once() {
    let doc = convert("# Title\n\n# Second\n\nBody");
    assert_eq!(
        doc.nodes,
        vec![
            Node::with_text(Tag::H3, "Second"),
            Node::new(Tag::P, vec![Child::text("Body")]),
        ]
    );
}

#[test]
fn suppression_does_not_leak_between_calls() {
    assert!(convert("# Title").is_empty());
    assert!(convert("# Title").is_empty());
}

#[rstest]
#[case("## Two", Tag::H3)]
#[case("### Three", Tag::H4)]
#[case("###### Six", Tag::H4)]
fn heading_levels(#[case] md: &str, #[case] tag: Tag) {
    let doc = convert(md);
    assert_eq!(doc.nodes[0].tag, tag);
}

#[test]
fn heading_text_is_not_inline_parsed() {
    let doc = convert("## A **bold** heading");
    assert_eq!(doc.nodes, vec![Node::with_text(Tag::H3, "A **bold** heading")]);
}

#[test]
fn fenced_code_becomes_pre() {
    let doc = convert("```js\nconst x = 1;\nconsole.log(x);\n```\nAfter");
    assert_eq!(
        doc.nodes,
        vec![
            Node::with_text(Tag::Pre, "const x = 1;\nconsole.log(x);"),
            Node::new(Tag::P, vec![Child::text("After")]),
        ]
    );
}

#[test]
fn quote_lines_are_independent() {
    let doc = convert("> one\n> two\n> three");
    assert_eq!(
        doc.nodes,
        vec![
            Node::with_text(Tag::Blockquote, "one"),
            Node::with_text(Tag::Blockquote, "two"),
            Node::with_text(Tag::Blockquote, "three"),
        ]
    );
}

#[test]
fn quote_text_keeps_markup() {
    let doc = convert("> *not* parsed");
    assert_eq!(doc.nodes, vec![Node::with_text(Tag::Blockquote, "*not* parsed")]);
}

#[test]
fn frontmatter_is_stripped() {
    let doc = convert("---\ntitle: Test\n---\n# Title\nHello");
    assert_eq!(doc.nodes, vec![Node::new(Tag::P, vec![Child::text("Hello")])]);
}

#[test]
fn frontmatter_stripping_is_idempotent_for_documents() {
    let md = "---\ntitle: Test\n---\n\n## Intro\n\nSome **text**.\n";
    let once = crate::parsing::frontmatter::strip_frontmatter(md);
    assert_eq!(convert(md), convert(once));
}

#[test]
fn paragraph_with_inline_formatting() {
    let doc = convert("This is **bold** and *italic* text with `code`.");
    assert_eq!(
        doc.nodes,
        vec![Node::new(
            Tag::P,
            vec![
                Child::text("This is "),
                el(Node::with_text(Tag::Strong, "bold")),
                Child::text(" and "),
                el(Node::with_text(Tag::Em, "italic")),
                Child::text(" text with "),
                el(Node::with_text(Tag::Code, "code")),
                Child::text("."),
            ]
        )]
    );
}

#[test]
fn internal_link_resolves_through_lookup() {
    let lookup = |p: &str| match p {
        "docs/guide.md" => "https://telegra.ph/Guide-123".to_string(),
        other => other.to_string(),
    };
    let ctx = LinkContext::new("README.md", &lookup);
    let doc = convert_with_links("# Readme\nCheck [guide](./docs/guide.md) for more.", &ctx);
    assert_eq!(
        doc.nodes,
        vec![Node::new(
            Tag::P,
            vec![
                Child::text("Check "),
                el(Node::link(
                    "https://telegra.ph/Guide-123",
                    vec![Child::text("guide")]
                )),
                Child::text(" for more."),
            ]
        )]
    );
}

#[test]
fn links_are_untouched_without_context() {
    let doc = convert("[guide](./docs/guide.md)");
    assert_eq!(doc.nodes[0].children()[0].as_element().unwrap().href(), Some("./docs/guide.md"));
}

#[test]
fn code_nodes_hold_a_single_text_child() {
    let doc = convert("`a` then `**b**` and `[c](d.md)`");
    let codes: Vec<&Node> = doc.nodes[0]
        .children()
        .iter()
        .filter_map(Child::as_element)
        .filter(|n| n.tag == Tag::Code)
        .collect();
    assert_eq!(codes.len(), 3);
    for code in codes {
        assert_eq!(code.children().len(), 1);
        assert!(code.children()[0].as_text().is_some());
    }
}

#[test]
fn windows_line_endings() {
    let doc = convert("## Head\r\n\r\ntext\r\n");
    assert_eq!(
        doc.nodes,
        vec![
            Node::with_text(Tag::H3, "Head"),
            Node::new(Tag::P, vec![Child::text("text")]),
        ]
    );
}
