/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// The line with its line ending removed. Fenced code keeps this form.
    pub raw: &'a str,
    /// The line with surrounding whitespace removed.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify<'a>(&self, index: usize, line: &'a str) -> LineClass<'a> {
        let raw = line.strip_suffix('\r').unwrap_or(line);
        let text = raw.trim();
        LineClass {
            index,
            raw,
            text,
            is_blank: text.is_empty(),
        }
    }

    /// Classifies every line of `text`, split on `\n`.
    pub fn classify_all<'a>(&'a self, text: &'a str) -> impl Iterator<Item = LineClass<'a>> + 'a {
        text.split('\n')
            .enumerate()
            .map(move |(i, line)| self.classify(i, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_is_dropped() {
        let c = MarkdownLineClassifier.classify(0, "  code\r");
        assert_eq!(c.raw, "  code");
        assert_eq!(c.text, "code");
        assert!(!c.is_blank);
    }

    #[test]
    fn whitespace_line_is_blank() {
        assert!(MarkdownLineClassifier.classify(3, " \t ").is_blank);
    }

    #[test]
    fn lines_are_numbered() {
        let lines: Vec<_> = MarkdownLineClassifier.classify_all("a\n\nb").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].index, 2);
        assert_eq!(lines[2].text, "b");
        assert!(lines[1].is_blank);
    }
}
