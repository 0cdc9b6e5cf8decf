use super::{
    classify::LineClass,
    kinds::CodeFence,
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Fence { start: usize, lines: Vec<String> },
}

/// Line-driven state machine producing [`BlockNode`]s.
///
/// The first level-1 heading pushed into a builder is treated as the page
/// title and dropped; later level-1 headings are kept.
pub struct BlockBuilder {
    leaf: LeafState,
    title_seen: bool,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            title_seen: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            return;
        }

        match try_open_leaf(c.text) {
            Some(BlockOpen::Heading { level, text }) => self.heading(c.index, level, text),
            Some(BlockOpen::FencedCode) => {
                self.leaf = LeafState::Fence {
                    start: c.index,
                    lines: vec![],
                }
            }
            Some(BlockOpen::BlockQuote { text }) => {
                self.emit(BlockKind::BlockQuote, c.index, text.to_string())
            }
            None => self.emit(BlockKind::Paragraph, c.index, c.text.to_string()),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // Unterminated fence: emit what it absorbed
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn heading(&mut self, index: usize, level: usize, text: &str) {
        if level == 1 && !self.title_seen {
            self.title_seen = true;
            return;
        }
        self.emit(BlockKind::Heading { level }, index, text.to_string());
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        if CodeFence::is_fence(c.raw) {
            self.flush_fence();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.raw.to_string());
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { start, lines } = prev
            && !lines.is_empty()
        {
            self.emit(BlockKind::FencedCode, start, lines.join("\n"));
        }
    }

    fn emit(&mut self, kind: BlockKind, line: usize, text: String) {
        self.out.push(BlockNode { kind, line, text });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
