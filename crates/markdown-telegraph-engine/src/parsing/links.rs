//! Link target classification and internal document resolution.

use std::{collections::HashMap, path::Path};

use relative_path::RelativePath;

/// Prefixes of links that leave the site.
const EXTERNAL_PREFIXES: [&str; 2] = ["http://", "https://"];
/// Prefixes of links that never point at a document.
const NON_DOCUMENT_PREFIXES: [&str; 3] = ["#", "mailto:", "tel:"];
/// Marker of a link to another markdown document.
const DOCUMENT_MARKER: &str = ".md";

/// Maps a normalized, workspace-relative document path to its published
/// address.
///
/// Returning the input path unchanged (or an empty string) signals that the
/// document is not known.
pub trait LinkLookup {
    fn lookup(&self, path: &str) -> String;
}

impl<F> LinkLookup for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, path: &str) -> String {
        self(path)
    }
}

impl LinkLookup for HashMap<String, String> {
    fn lookup(&self, path: &str) -> String {
        self.get(path).cloned().unwrap_or_else(|| path.to_string())
    }
}

/// Where a document lives and how to look up its siblings.
///
/// Internal links are only rewritten when both parts are present.
#[derive(Clone, Copy, Default)]
pub struct LinkContext<'a> {
    pub base_path: Option<&'a str>,
    pub lookup: Option<&'a dyn LinkLookup>,
}

impl<'a> LinkContext<'a> {
    /// A context that leaves every link untouched.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(base_path: &'a str, lookup: &'a dyn LinkLookup) -> Self {
        Self {
            base_path: Some(base_path),
            lookup: Some(lookup),
        }
    }
}

/// Returns the href to embed for a link target.
///
/// External, anchor, `mailto:` and `tel:` targets pass through. Targets that
/// name a markdown file are normalized against the base document and looked
/// up; an unknown document logs a warning and keeps the original href.
pub fn resolve_link(href: &str, ctx: &LinkContext<'_>) -> String {
    if EXTERNAL_PREFIXES.iter().any(|p| href.starts_with(p))
        || NON_DOCUMENT_PREFIXES.iter().any(|p| href.starts_with(p))
    {
        return href.to_string();
    }

    if let (true, Some(base_path), Some(lookup)) =
        (href.contains(DOCUMENT_MARKER), ctx.base_path, ctx.lookup)
    {
        let resolved = document_path(href, base_path);
        let published = lookup.lookup(&resolved);
        if !published.is_empty() && published != resolved {
            return published;
        }
        log::warn!("Could not resolve internal link: {href} from {base_path}");
    }

    href.to_string()
}

/// Normalizes a document link into a workspace-relative path with forward
/// slashes, dropping any query string and fragment.
pub fn document_path(href: &str, base_path: &str) -> String {
    let path_part = href.split('?').next().unwrap_or_default();
    let path_part = path_part.split('#').next().unwrap_or_default();

    let resolved = if path_part.starts_with("./") || path_part.starts_with("../") {
        resolve_dotted(path_part, base_path)
    } else if let Some(rooted) = path_part.strip_prefix('/') {
        rooted.to_string()
    } else {
        base_dir(base_path).join_normalized(path_part).into_string()
    };

    resolved.replace('\\', "/")
}

fn base_dir(base_path: &str) -> &RelativePath {
    RelativePath::new(base_path)
        .parent()
        .unwrap_or_else(|| RelativePath::new(""))
}

/// Resolves `./` and `../` targets against the base document's directory and
/// expresses the result relative to the working directory.
fn resolve_dotted(path: &str, base_path: &str) -> String {
    if !Path::new(base_path).is_absolute() {
        return base_dir(base_path).join_normalized(path).into_string();
    }

    let target = base_dir(base_path.trim_start_matches('/')).join_normalized(path);
    match std::env::current_dir() {
        Ok(cwd) => {
            let cwd = cwd.to_string_lossy().replace('\\', "/");
            RelativePath::new(cwd.trim_start_matches('/'))
                .relative(&target)
                .into_string()
        }
        Err(e) => {
            log::debug!("working directory unavailable ({e}), keeping {target}");
            target.into_string()
        }
    }
}
