use crate::{
    nodes::{Child, Node},
    parsing::links::{LinkContext, resolve_link},
};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong},
    types::{Match, Pattern},
};

/// Parses a span of inline markdown into node children.
///
/// Every pattern's first occurrence is located; the one starting earliest
/// wins, ties going to the pattern earlier in [`Pattern::PRECEDENCE`]. Text
/// before the winner is kept when it is not blank, the winner becomes an
/// element (its inner text parsed again unless it is a code span), and
/// scanning continues after it.
///
/// Overlapping delimiters are settled purely by that rule: in `***x***` the
/// bold pattern claims `***x**` and the final `*` stays text.
pub fn parse_inline(s: &str, links: &LinkContext<'_>) -> Vec<Child> {
    let mut out = vec![];
    let mut rest = s;

    while let Some(m) = earliest_match(rest) {
        push_text(&mut out, &rest[..m.start]);
        out.push(Child::Element(build_node(&m, links)));
        rest = &rest[m.end..];
    }

    push_text(&mut out, rest);
    out
}

/// Keeps `text` verbatim unless it is whitespace only.
fn push_text(out: &mut Vec<Child>, text: &str) {
    if !text.trim().is_empty() {
        out.push(Child::text(text));
    }
}

/// The earliest match of any pattern in `s`.
pub fn earliest_match(s: &str) -> Option<Match<'_>> {
    Pattern::PRECEDENCE
        .iter()
        .filter_map(|&p| find_first(p, s))
        .min_by_key(|m| (m.start, m.pattern))
}

/// The first occurrence of `pattern` in `s`.
pub fn find_first(pattern: Pattern, s: &str) -> Option<Match<'_>> {
    match pattern {
        Pattern::CodeSpan => find_delimited(s, CodeSpan::TICK, pattern),
        Pattern::Strong => find_delimited(s, Strong::STARS, pattern),
        Pattern::EmphasisStar => find_delimited(s, Emphasis::STAR, pattern),
        Pattern::EmphasisUnderscore => find_delimited(s, Emphasis::UNDERSCORE, pattern),
        Pattern::Link => find_link(s),
    }
}

fn build_node(m: &Match<'_>, links: &LinkContext<'_>) -> Node {
    if m.pattern.is_raw() {
        return Node::with_text(m.pattern.tag(), m.inner);
    }

    let children = parse_nested(m.inner, links);
    match m.target {
        Some(target) => Node::link(resolve_link(target, links), children),
        None => Node::new(m.pattern.tag(), children),
    }
}

/// Parses captured text, falling back to the raw text when nothing is found.
fn parse_nested(inner: &str, links: &LinkContext<'_>) -> Vec<Child> {
    let children = parse_inline(inner, links);
    if children.is_empty() {
        vec![Child::text(inner)]
    } else {
        children
    }
}

/// Finds the first opening `marker` and the first closing `marker` after it.
fn find_delimited<'a>(s: &'a str, marker: &[u8], pattern: Pattern) -> Option<Match<'a>> {
    let mut cur = Cursor::new(s);
    if !cur.seek(marker) {
        return None;
    }
    let start = cur.pos();
    cur.bump_n(marker.len());
    let inner_start = cur.pos();

    if !cur.seek(marker) {
        // Not closed
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(marker.len());

    Some(Match {
        start,
        end: cur.pos(),
        inner: &s[inner_start..inner_end],
        pattern,
        target: None,
    })
}

/// Outcome of checking the `[` candidates that share one closing `]`.
enum LinkScan<'a> {
    Found(Match<'a>),
    /// None of the candidates matched; later brackets may.
    Retry,
    /// No later link can match.
    Exhausted,
}

/// Finds the first `[` that begins a complete `[text](target)`.
///
/// Every `[` before a given `]` closes its text there, so they all succeed or
/// fail together and the earliest one is the only one worth checking. The
/// scan then resumes after that `]`, keeping a single pass over `s`.
fn find_link(s: &str) -> Option<Match<'_>> {
    let mut from = 0;
    loop {
        let mut cur = Cursor::at(s, from);
        if !cur.seek_byte(Link::OPEN) {
            return None;
        }
        let start = cur.pos();
        if !cur.seek_byte(Link::TEXT_CLOSE) {
            return None;
        }
        let text_end = cur.pos();

        match link_after(s, start, text_end) {
            LinkScan::Found(m) => return Some(m),
            LinkScan::Retry => from = text_end + 1,
            LinkScan::Exhausted => return None,
        }
    }
}

/// Checks `[` at `start` whose text closes at the `]` at `text_end`.
fn link_after(s: &str, start: usize, text_end: usize) -> LinkScan<'_> {
    if text_end == start + 1 {
        return LinkScan::Retry;
    }
    let mut cur = Cursor::at(s, text_end + 1);
    if cur.bump() != Some(Link::TARGET_OPEN) {
        return LinkScan::Retry;
    }
    let target_start = cur.pos();
    if !cur.seek_byte(Link::TARGET_CLOSE) {
        return LinkScan::Exhausted;
    }
    let target_end = cur.pos();
    if target_end == target_start {
        return LinkScan::Retry;
    }
    cur.bump();

    LinkScan::Found(Match {
        start,
        end: cur.pos(),
        inner: &s[start + 1..text_end],
        pattern: Pattern::Link,
        target: Some(&s[target_start..target_end]),
    })
}
