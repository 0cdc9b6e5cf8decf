/// Blockquote block type with owned delimiter constant.
///
/// Each quoted line is its own block; quotes do not nest and their text is
/// not inline-parsed.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the prefix and at most one following space.
    ///
    /// Returns `None` if the line is not a blockquote.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
