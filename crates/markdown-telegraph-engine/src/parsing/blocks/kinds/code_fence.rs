/// Fenced code block type with owned delimiter constant.
///
/// Only backtick fences are recognized. An info string after the opening
/// fence is ignored, and any line whose trimmed text starts with the fence
/// closes the block.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether a line opens or closes a fence.
    pub fn is_fence(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }
}
