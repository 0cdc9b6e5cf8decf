pub mod mappings;

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, SecondsFormat, Utc};
use glob::{MatchOptions, Pattern};
use relative_path::RelativePathBuf;

use crate::models::MarkdownFile;

pub use mappings::{MappingIndex, load_mappings, save_mappings};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Dotfiles and dot-directories are only matched by patterns that name them,
/// and `*` never crosses a `/`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Finds the markdown documents under `root`.
///
/// Every include pattern is matched relative to `root`; a file whose relative
/// path matches any exclude pattern is skipped. Files matched by several
/// patterns are returned once, ordered by relative path.
pub fn find_markdown_files(
    root: &Path,
    include: &[String],
    exclude: &[String],
) -> Result<Vec<MarkdownFile>, IoError> {
    let exclude = exclude
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()?;
    let escaped_root = Pattern::escape(&root.to_string_lossy());

    let mut found = BTreeMap::new();
    for pattern in include {
        Pattern::new(pattern)?;
        let full = format!("{escaped_root}/{pattern}");
        for entry in glob::glob_with(&full, MATCH_OPTIONS)? {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Skipping unreadable path while matching {pattern}: {e}");
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            let Some(relative) = relative_to(root, &path) else {
                continue;
            };
            if exclude
                .iter()
                .any(|ex| ex.matches_with(relative.as_str(), MATCH_OPTIONS))
            {
                log::debug!("Excluded {relative}");
                continue;
            }
            found.entry(relative).or_insert(path);
        }
    }

    let files = found
        .into_iter()
        .map(|(relative, absolute)| {
            let content = fs::read_to_string(&absolute)?;
            Ok(MarkdownFile::new(relative, absolute, content))
        })
        .collect::<Result<Vec<_>, IoError>>()?;

    log::info!("Found {} markdown files", files.len());
    Ok(files)
}

fn relative_to(root: &Path, path: &Path) -> Option<RelativePathBuf> {
    let rel = path.strip_prefix(root).ok()?;
    RelativePathBuf::from_path(rel).ok()
}

/// The file's modification time as an RFC 3339 UTC timestamp with
/// millisecond precision, e.g. `2024-05-01T12:30:00.000Z`.
pub fn last_modified(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let modified = fs::metadata(path)?.modified()?;
    let modified: DateTime<Utc> = modified.into();
    Ok(modified.to_rfc3339_opts(SecondsFormat::Millis, true))
}
