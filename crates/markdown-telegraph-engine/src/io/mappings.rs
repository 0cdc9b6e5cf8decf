//! Persistence of published-page mappings and lookup by source path.

use std::{collections::HashMap, fs, path::Path};

use crate::{models::PageMapping, parsing::links::LinkLookup};

use super::IoError;

/// Loads previously saved mappings.
///
/// A missing file yields an empty list; an unreadable or malformed file is
/// logged and also yields an empty list.
pub fn load_mappings(path: &Path) -> Vec<PageMapping> {
    if !path.exists() {
        return vec![];
    }
    match read_mappings(path) {
        Ok(mappings) => mappings,
        Err(e) => {
            log::warn!(
                "Failed to load existing mappings from {}: {e}",
                path.display()
            );
            vec![]
        }
    }
}

fn read_mappings(path: &Path) -> Result<Vec<PageMapping>, IoError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Writes mappings as pretty-printed JSON.
pub fn save_mappings(path: &Path, mappings: &[PageMapping]) -> Result<(), IoError> {
    let content = serde_json::to_string_pretty(mappings)?;
    fs::write(path, content)?;
    log::info!("Saved page mappings to {}", path.display());
    Ok(())
}

/// Source path to published URL table.
#[derive(Debug, Clone, Default)]
pub struct MappingIndex {
    urls: HashMap<String, String>,
}

impl MappingIndex {
    pub fn from_mappings(mappings: &[PageMapping]) -> Self {
        let urls = mappings
            .iter()
            .map(|m| (m.file_path.clone(), m.telegraph_url.clone()))
            .collect();
        Self { urls }
    }

    pub fn get(&self, file_path: &str) -> Option<&str> {
        self.urls.get(file_path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl LinkLookup for MappingIndex {
    /// Returns `path` itself when no page is known for it.
    fn lookup(&self, path: &str) -> String {
        self.get(path).unwrap_or(path).to_string()
    }
}
