//! Leading metadata block handling.

use std::sync::LazyLock;

use regex::Regex;

/// Opening and closing marker of a frontmatter block.
pub const FENCE: &str = "---";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^title:\s*(.+)$").expect("valid title regex"));

/// Returns the text between the opening marker and the closing marker, if the
/// document starts with a complete frontmatter block.
fn split(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with(FENCE) {
        return None;
    }
    let close = text[FENCE.len()..].find(FENCE)? + FENCE.len();
    Some((&text[FENCE.len()..close], &text[close + FENCE.len()..]))
}

/// Removes a leading frontmatter block.
///
/// When the document starts with `---` and a second `---` follows, everything
/// up to and including the second marker is dropped and the rest is trimmed.
/// Without a closing marker the text comes back untouched.
pub fn strip_frontmatter(text: &str) -> &str {
    match split(text) {
        Some((_, rest)) => rest.trim(),
        None => text,
    }
}

/// The `title:` value of the frontmatter block, with one pair of surrounding
/// quotes removed.
pub fn frontmatter_title(text: &str) -> Option<String> {
    let (block, _) = split(text)?;
    let caps = TITLE_RE.captures(block)?;
    let raw = caps.get(1)?.as_str().trim();
    let unquoted = raw.strip_prefix(['"', '\'']).unwrap_or(raw);
    let unquoted = unquoted.strip_suffix(['"', '\'']).unwrap_or(unquoted);
    Some(unquoted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_complete_block() {
        let doc = "---\ntitle: Test\nauthor: John\n---\n\n# Content";
        assert_eq!(strip_frontmatter(doc), "# Content");
    }

    #[test]
    fn leaves_documents_without_frontmatter() {
        let doc = "# Just content here";
        assert_eq!(strip_frontmatter(doc), doc);
    }

    #[test]
    fn leaves_unclosed_block() {
        let doc = "---\ntitle: Test\n# Content without closing dashes";
        assert_eq!(strip_frontmatter(doc), doc);
    }

    #[test]
    fn marker_must_be_at_offset_zero() {
        let doc = "\n---\ntitle: x\n---\nbody";
        assert_eq!(strip_frontmatter(doc), doc);
    }

    #[test]
    fn stripping_twice_equals_stripping_once() {
        for doc in [
            "---\ntitle: A\n---\n\nBody text\n\n## Section",
            "# No frontmatter\n\nParagraph",
            "---\nunclosed",
            "",
        ] {
            let once = strip_frontmatter(doc);
            assert_eq!(strip_frontmatter(once), once, "input: {doc:?}");
        }
    }

    #[test]
    fn reads_title() {
        let doc = "---\ntitle: User Guide\n---\n\n# Other";
        assert_eq!(frontmatter_title(doc).as_deref(), Some("User Guide"));
    }

    #[test]
    fn reads_quoted_title() {
        let doc = "---\nlayout: page\ntitle: \"Quoted Title\"\n---\nbody";
        assert_eq!(frontmatter_title(doc).as_deref(), Some("Quoted Title"));
        let doc = "---\ntitle: 'Single'\n---\nbody";
        assert_eq!(frontmatter_title(doc).as_deref(), Some("Single"));
    }

    #[test]
    fn no_title_without_block() {
        assert_eq!(frontmatter_title("title: Loose\n"), None);
        assert_eq!(frontmatter_title("---\nauthor: x\n---\n"), None);
    }
}
