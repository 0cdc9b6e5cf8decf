/// ATX heading block type with owned marker constant.
///
/// Only the leading run of markers matters: `#Title` and `# Title` are both
/// level-1 headings, and no closing sequence is recognized.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Splits a trimmed line into (level, text).
    ///
    /// Returns `None` when the line does not start with a marker. The text is
    /// what follows the marker run with leading whitespace removed.
    pub fn split(line: &str) -> Option<(usize, &str)> {
        if !line.starts_with(Self::MARKER) {
            return None;
        }
        let rest = line.trim_start_matches(Self::MARKER);
        let level = line.len() - rest.len();
        Some((level, rest.trim_start()))
    }
}
