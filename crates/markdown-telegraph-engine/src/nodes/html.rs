//! HTML preview rendering of converted documents.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::node::{Child, Node};

/// Renders nodes as an HTML fragment.
pub fn render_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    let name = node.tag.as_str();
    out.push('<');
    out.push_str(name);
    if let Some(attrs) = &node.attrs {
        if let Some(href) = &attrs.href {
            write_attr("href", href, out);
        }
        if let Some(src) = &attrs.src {
            write_attr("src", src, out);
        }
    }
    if node.tag.is_void() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in node.children() {
        match child {
            Child::Text(s) => out.push_str(&encode_text(s)),
            Child::Element(n) => write_node(n, out),
        }
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}
