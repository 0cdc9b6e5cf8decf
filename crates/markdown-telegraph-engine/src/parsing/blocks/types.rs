/// The kind of a leaf block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// An ATX heading other than the suppressed title.
    Heading {
        /// Number of leading `#` markers.
        level: usize,
    },
    /// A fenced code block (```).
    FencedCode,
    /// A single `>` line.
    BlockQuote,
    /// Any other non-blank line.
    Paragraph,
}

/// A segmented block with its kind and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Zero-based line number where the block starts.
    pub line: usize,
    /// Heading text, quote text, joined code lines, or the trimmed paragraph
    /// line awaiting inline parsing.
    pub text: String,
}
