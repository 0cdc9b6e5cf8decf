use crate::nodes::Tag;

/// The inline constructs the parser recognizes.
///
/// Declaration order is precedence order: when two patterns match at the same
/// offset the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pattern {
    /// `` `code` `` - a raw zone, never re-parsed.
    CodeSpan,
    /// `**bold**`
    Strong,
    /// `*italic*`
    EmphasisStar,
    /// `_italic_`
    EmphasisUnderscore,
    /// `[text](target)`
    Link,
}

impl Pattern {
    /// All patterns in precedence order.
    pub const PRECEDENCE: [Pattern; 5] = [
        Pattern::CodeSpan,
        Pattern::Strong,
        Pattern::EmphasisStar,
        Pattern::EmphasisUnderscore,
        Pattern::Link,
    ];

    /// The element tag a match of this pattern produces.
    pub fn tag(self) -> Tag {
        match self {
            Pattern::CodeSpan => Tag::Code,
            Pattern::Strong => Tag::Strong,
            Pattern::EmphasisStar | Pattern::EmphasisUnderscore => Tag::Em,
            Pattern::Link => Tag::A,
        }
    }

    /// Whether the captured text is parsed again for nested styling.
    pub fn is_raw(self) -> bool {
        matches!(self, Pattern::CodeSpan)
    }
}

/// A located occurrence of an inline pattern within a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset just past the closing delimiter.
    pub end: usize,
    /// Text between the delimiters (link text for links).
    pub inner: &'a str,
    pub pattern: Pattern,
    /// Unresolved link target, for [`Pattern::Link`] only.
    pub target: Option<&'a str>,
}
