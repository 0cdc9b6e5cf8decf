use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::parsing::frontmatter::frontmatter_title;

/// Marker that opens a title heading line.
const TITLE_PREFIX: &str = "# ";

/// A discovered markdown document and its page title.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    absolute_path: PathBuf,
    content: String,
    title: String,
}

impl MarkdownFile {
    /// Create a new MarkdownFile, deriving its title from the content.
    pub fn new(relative_path: RelativePathBuf, absolute_path: PathBuf, content: String) -> Self {
        let title = extract_title(&content, &relative_path);
        Self {
            relative_path,
            absolute_path,
            content,
            title,
        }
    }

    /// Path relative to the workspace root, with forward slashes.
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The page title, falling back to the relative path when none was found.
    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            self.relative_path.as_str()
        } else {
            &self.title
        }
    }
}

/// Derives a page title for a document.
///
/// The first line starting with `# ` wins, then the frontmatter `title:`, then
/// the file name without `.md`, split on `-` with each word capitalized.
pub fn extract_title(content: &str, relative_path: &RelativePath) -> String {
    let heading = content
        .split('\n')
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TITLE_PREFIX));
    if let Some(heading) = heading {
        return heading.trim().to_string();
    }

    if let Some(title) = frontmatter_title(content) {
        return title;
    }

    title_from_file_name(relative_path)
}

fn title_from_file_name(path: &RelativePath) -> String {
    let name = path.file_name().unwrap_or_default();
    let stem = name.strip_suffix(".md").unwrap_or(name);
    stem.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello World\n\nBody", "notes.md", "Hello World")]
    #[case("intro\n   #   Spaced  \n", "notes.md", "Spaced")]
    #[case("## Sub\n# Real\n", "notes.md", "Real")]
    #[case("---\ntitle: \"Quoted Title\"\n---\nBody", "notes.md", "Quoted Title")]
    #[case("---\ntitle: 'Single'\n---\n", "notes.md", "Single")]
    #[case("---\nauthor: x\n---\nBody", "docs/getting-started.md", "Getting Started")]
    #[case("plain text", "docs/api-reference-guide.md", "Api Reference Guide")]
    #[case("#NoSpace", "readme.md", "Readme")]
    fn extracts_title(#[case] content: &str, #[case] path: &str, #[case] expected: &str) {
        assert_eq!(extract_title(content, RelativePath::new(path)), expected);
    }

    #[test]
    fn heading_beats_frontmatter() {
        let content = "---\ntitle: From Meta\n---\n# From Heading";
        assert_eq!(extract_title(content, RelativePath::new("a.md")), "From Heading");
    }

    #[test]
    fn double_dash_keeps_empty_word() {
        assert_eq!(extract_title("", RelativePath::new("a--b.md")), "A  B");
    }

    #[test]
    fn file_exposes_paths_and_title() {
        let file = MarkdownFile::new(
            RelativePathBuf::from("docs/guide.md"),
            PathBuf::from("/ws/docs/guide.md"),
            "# Guide".to_string(),
        );
        assert_eq!(file.relative_path().as_str(), "docs/guide.md");
        assert_eq!(file.absolute_path(), Path::new("/ws/docs/guide.md"));
        assert_eq!(file.title(), "Guide");
        assert_eq!(file.content(), "# Guide");
    }

    #[test]
    fn blank_title_falls_back_to_path() {
        let file = MarkdownFile::new(
            RelativePathBuf::from("docs/.md"),
            PathBuf::from("/ws/docs/.md"),
            "no heading".to_string(),
        );
        assert_eq!(file.title(), "docs/.md");
    }
}
