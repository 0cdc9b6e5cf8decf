//! Full-markdown conversion built on pulldown-cmark.
//!
//! Events are folded into a stack of open elements. Elements with a
//! counterpart in [`Tag`] become nodes; anything else (tables, footnotes,
//! raw HTML, rules) collapses to its trimmed text content. Text fragments are
//! trimmed and blank ones dropped, and top-level text is wrapped in `p`.

use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser, Tag as MdTag, TagEnd};
use regex::Regex;

use crate::nodes::{Attrs, Child, Document, Node, Tag, node::collect_text};

use super::frontmatter::strip_frontmatter;

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid html tag regex"));

/// An element under construction. `tag: None` marks a container with no
/// supported counterpart.
#[derive(Debug)]
struct Frame {
    tag: Option<Tag>,
    attrs: Option<Attrs>,
    children: Vec<Child>,
}

impl Frame {
    fn new(tag: Option<Tag>) -> Self {
        Self {
            tag,
            attrs: None,
            children: vec![],
        }
    }

    fn with_attrs(tag: Tag, attrs: Attrs) -> Self {
        Self {
            tag: Some(tag),
            attrs: Some(attrs),
            children: vec![],
        }
    }

    fn close(self) -> Option<Child> {
        let Some(tag) = self.tag else {
            let mut text = String::new();
            collect_text(&self.children, &mut text);
            let text = text.trim();
            return (!text.is_empty()).then(|| Child::text(text));
        };
        let children = if tag.is_void() || self.children.is_empty() {
            None
        } else {
            Some(self.children)
        };
        Some(Child::Element(Node {
            tag,
            attrs: self.attrs,
            children,
        }))
    }
}

struct RichBuilder {
    stack: Vec<Frame>,
    out: Vec<Node>,
}

impl RichBuilder {
    fn new() -> Self {
        Self {
            stack: vec![],
            out: vec![],
        }
    }

    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(MdTag::CodeBlock(_)) => {
                self.open(Frame::new(Some(Tag::Pre)));
                self.open(Frame::new(Some(Tag::Code)));
            }
            Event::End(TagEnd::CodeBlock) => {
                self.close();
                self.close();
            }
            Event::Start(tag) => self.open(frame_for(tag)),
            Event::End(_) => self.close(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                let mut frame = Frame::new(Some(Tag::Code));
                push_trimmed(&mut frame.children, &code);
                self.attach(frame.close());
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let text = HTML_TAG_RE.replace_all(&html, "");
                self.text(&text);
            }
            Event::SoftBreak | Event::HardBreak => {
                self.attach(Some(Child::Element(Node::void(Tag::Br))))
            }
            _ => {}
        }
    }

    fn open(&mut self, frame: Frame) {
        self.stack.push(frame);
    }

    fn close(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let child = frame.close();
            self.attach(child);
        }
    }

    fn text(&mut self, text: &str) {
        let mut fragment = vec![];
        push_trimmed(&mut fragment, text);
        for child in fragment {
            self.attach(Some(child));
        }
    }

    fn attach(&mut self, child: Option<Child>) {
        let Some(child) = child else { return };
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(child),
            None => self.out.push(match child {
                Child::Element(node) => node,
                text @ Child::Text(_) => Node::new(Tag::P, vec![text]),
            }),
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.stack.is_empty() {
            self.close();
        }
        self.out
    }
}

fn push_trimmed(children: &mut Vec<Child>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        children.push(Child::text(text));
    }
}

fn frame_for(tag: MdTag<'_>) -> Frame {
    match tag {
        MdTag::Paragraph => Frame::new(Some(Tag::P)),
        MdTag::Heading { level, .. } => Frame::new(Tag::from_html_name(&level.to_string())),
        MdTag::BlockQuote(_) => Frame::new(Some(Tag::Blockquote)),
        MdTag::List(Some(_)) => Frame::new(Some(Tag::Ol)),
        MdTag::List(None) => Frame::new(Some(Tag::Ul)),
        MdTag::Item => Frame::new(Some(Tag::Li)),
        MdTag::Emphasis => Frame::new(Some(Tag::Em)),
        MdTag::Strong => Frame::new(Some(Tag::Strong)),
        MdTag::Strikethrough => Frame::new(Some(Tag::S)),
        MdTag::Link { dest_url, .. } => Frame::with_attrs(Tag::A, Attrs::href(dest_url.to_string())),
        MdTag::Image { dest_url, .. } => {
            Frame::with_attrs(Tag::Img, Attrs::src(dest_url.to_string()))
        }
        _ => Frame::new(None),
    }
}

/// Converts markdown with the full pulldown-cmark grammar.
pub fn convert_rich(markdown: &str) -> Document {
    let body = strip_frontmatter(markdown);
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;

    let mut builder = RichBuilder::new();
    for event in Parser::new_ext(body, options) {
        builder.push_event(event);
    }
    Document::new(builder.finish())
}
