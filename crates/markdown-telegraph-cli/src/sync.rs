//! Publishing a workspace: convert every document, create or edit its page,
//! then rewrite cross-document links once all pages have addresses.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use markdown_telegraph_config::Config;
use markdown_telegraph_engine::{
    LinkContext, MappingIndex, MarkdownFile, PageMapping, convert, convert_with_links,
    find_markdown_files, last_modified, load_mappings, save_mappings,
};

use crate::{
    github::{RepositoryError, RepositoryHost},
    telegraph::{Author, Publisher},
};

/// Outcome of a completed sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of documents that have a published page.
    pub pages_created: usize,
    /// Mapping file, as configured.
    pub mapping_file: PathBuf,
}

/// Publishes every matching document under `workspace_root`.
///
/// `connect_host` is only called in one-entry mode when exactly one page
/// exists.
pub fn sync<P, H, C>(
    config: &Config,
    workspace_root: &Path,
    publisher: &mut P,
    connect_host: C,
) -> Result<SyncReport>
where
    P: Publisher,
    H: RepositoryHost,
    C: FnOnce() -> Result<H, RepositoryError>,
{
    authenticate(config, publisher)?;

    let mapping_path = config.mapping_path(workspace_root);
    let existing = load_mappings(&mapping_path);

    let files = find_markdown_files(
        workspace_root,
        &config.include_patterns,
        &config.exclude_patterns,
    )
    .context("Failed to discover markdown files")?;

    if files.is_empty() {
        log::warn!("No markdown files found matching the patterns");
        return Ok(SyncReport {
            pages_created: 0,
            mapping_file: config.output_file.clone(),
        });
    }

    let author = Author {
        name: config.author_name.clone(),
        url: config.author_url.clone(),
    };
    let replace = config.replace_existing_pages && config.access_token.is_some();

    let mut mappings = vec![];
    for file in &files {
        let previous = existing
            .iter()
            .find(|m| m.file_path == file.relative_path().as_str());
        match publish_file(file, previous, &*publisher, &author, replace) {
            Ok(Some(mapping)) => mappings.push(mapping),
            Ok(None) => {}
            Err(e) => log::error!("Error processing {}: {e:#}", file.relative_path()),
        }
    }

    relink_pages(&files, &mappings, &*publisher, &author);

    save_mappings(&mapping_path, &mappings)
        .with_context(|| format!("Failed to save mappings to {}", mapping_path.display()))?;

    if config.one_entry_mode {
        match mappings.as_slice() {
            [only] => point_homepage_at(&only.telegraph_url, connect_host),
            _ => log::info!(
                "One entry mode enabled but {} pages were created. Repository homepage not updated.",
                mappings.len()
            ),
        }
    }

    Ok(SyncReport {
        pages_created: mappings.len(),
        mapping_file: config.output_file.clone(),
    })
}

fn authenticate<P: Publisher>(config: &Config, publisher: &mut P) -> Result<()> {
    match &config.access_token {
        Some(token) => {
            publisher.set_access_token(token);
            log::info!("Using provided Telegraph access token");
        }
        None => {
            publisher
                .create_account(
                    &config.account_name,
                    &config.author_name,
                    config.author_url.as_deref(),
                )
                .context("Failed to create Telegraph account")?;
        }
    }
    Ok(())
}

/// First pass for one document. `None` means nothing was published.
fn publish_file<P: Publisher>(
    file: &MarkdownFile,
    previous: Option<&PageMapping>,
    publisher: &P,
    author: &Author,
    replace: bool,
) -> Result<Option<PageMapping>> {
    let relative_path = file.relative_path();
    let modified = last_modified(file.absolute_path())?;

    if let Some(mapping) = previous
        && mapping.last_modified == modified
    {
        log::info!("Skipping unchanged file: {relative_path}");
        return Ok(Some(mapping.clone()));
    }

    let content = convert(file.content());
    if content.is_empty() {
        log::warn!("No content generated for {relative_path}, skipping");
        return Ok(None);
    }

    let title = file.title();
    let page = match previous {
        Some(mapping) => {
            log::info!("Updating existing page for {relative_path}");
            publisher.edit_page(&mapping.telegraph_path, title, &content, author)?
        }
        None if replace => match publisher.find_page_by_title(title) {
            Some(found) => {
                log::info!("Replacing page \"{}\" for {relative_path}", found.title);
                publisher.edit_page(&found.path, title, &content, author)?
            }
            None => publisher.create_page(title, &content, author)?,
        },
        None => publisher.create_page(title, &content, author)?,
    };

    Ok(Some(PageMapping {
        file_path: relative_path.to_string(),
        telegraph_path: page.path,
        telegraph_url: page.url,
        last_modified: modified,
    }))
}

/// Second pass: re-publishes each mapped document with its internal links
/// pointing at the published pages.
fn relink_pages<P: Publisher>(
    files: &[MarkdownFile],
    mappings: &[PageMapping],
    publisher: &P,
    author: &Author,
) {
    let index = MappingIndex::from_mappings(mappings);

    for file in files {
        let relative_path = file.relative_path().as_str();
        let Some(mapping) = mappings.iter().find(|m| m.file_path == relative_path) else {
            continue;
        };
        let links = LinkContext::new(relative_path, &index);
        let content = convert_with_links(file.content(), &links);
        if let Err(e) = publisher.edit_page(&mapping.telegraph_path, file.title(), &content, author)
        {
            log::warn!("Failed to update links for {relative_path}: {e}");
        }
    }
}

fn point_homepage_at<H, C>(url: &str, connect_host: C)
where
    H: RepositoryHost,
    C: FnOnce() -> Result<H, RepositoryError>,
{
    let host = match connect_host() {
        Ok(host) => host,
        Err(e) => {
            log::warn!("Cannot update repository homepage: {e}");
            return;
        }
    };
    if !host.check_permissions() {
        log::warn!("Insufficient permissions to update the repository homepage");
        return;
    }
    match host.update_homepage(url) {
        Ok(()) => log::info!("Repository homepage set to {url}"),
        Err(e) => log::warn!("Failed to update repository homepage: {e}"),
    }
}
