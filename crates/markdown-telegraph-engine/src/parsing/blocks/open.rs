use super::kinds::{BlockQuote, CodeFence, Heading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Heading { level: usize, text: &'a str },
    FencedCode,
    BlockQuote { text: &'a str },
}

/// Detects a block opener on a trimmed, non-blank line.
pub fn try_open_leaf(line: &str) -> Option<BlockOpen<'_>> {
    if let Some((level, text)) = Heading::split(line) {
        return Some(BlockOpen::Heading { level, text });
    }
    if CodeFence::is_fence(line) {
        return Some(BlockOpen::FencedCode);
    }
    if let Some(text) = BlockQuote::strip_prefix(line) {
        return Some(BlockOpen::BlockQuote { text });
    }
    None
}
