use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file in the workspace root.
pub const CONFIG_FILE_NAME: &str = "telegraph.toml";

pub const ENV_ACCOUNT_NAME: &str = "TELEGRAPH_ACCOUNT_NAME";
pub const ENV_AUTHOR_NAME: &str = "TELEGRAPH_AUTHOR_NAME";
pub const ENV_AUTHOR_URL: &str = "TELEGRAPH_AUTHOR_URL";
pub const ENV_INCLUDE_PATTERNS: &str = "TELEGRAPH_INCLUDE_PATTERNS";
pub const ENV_EXCLUDE_PATTERNS: &str = "TELEGRAPH_EXCLUDE_PATTERNS";
pub const ENV_OUTPUT_FILE: &str = "TELEGRAPH_OUTPUT_FILE";
pub const ENV_TOKEN: &str = "TELEGRAPH_TOKEN";
pub const ENV_ONE_ENTRY_MODE: &str = "TELEGRAPH_ONE_ENTRY_MODE";
pub const ENV_REPLACE_EXISTING_PAGES: &str = "TELEGRAPH_REPLACE_EXISTING_PAGES";

const DEFAULT_NAME: &str = "GitHub Action";
const DEFAULT_OUTPUT_FILE: &str = "telegraph-pages.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Replacing existing pages requires an access token ({ENV_TOKEN})")]
    MissingAccessToken,
}

/// Publishing settings, read from `telegraph.toml` and overridden by
/// `TELEGRAPH_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub account_name: String,
    pub author_name: String,
    pub author_url: Option<String>,
    /// Globs, relative to the workspace root, selecting documents to publish.
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    /// Where page mappings are stored, relative to the workspace root.
    pub output_file: PathBuf,
    pub access_token: Option<String>,
    /// Point the repository homepage at the page when exactly one is published.
    pub one_entry_mode: bool,
    /// Edit pages that already exist under the same title instead of creating
    /// new ones.
    pub replace_existing_pages: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_name: DEFAULT_NAME.to_string(),
            author_name: DEFAULT_NAME.to_string(),
            author_url: None,
            include_patterns: vec!["**/*.md".to_string()],
            exclude_patterns: vec!["node_modules/**".to_string()],
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            access_token: None,
            one_entry_mode: false,
            replace_existing_pages: false,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the mapping file path
        config.output_file = Self::expand_path(&config.output_file).unwrap_or(config.output_file);

        Ok(Some(config))
    }

    /// Loads `telegraph.toml` from the workspace (or defaults), applies the
    /// process environment and validates the result.
    pub fn resolve(workspace_root: &Path) -> Result<Self, ConfigError> {
        let config_path = workspace_root.join(CONFIG_FILE_NAME);
        let mut config = match Self::load_from_path(&config_path)? {
            Some(config) => {
                log::info!("Loaded configuration from {}", config_path.display());
                config
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from environment-style variables.
    ///
    /// Unset and empty variables leave the field alone. Flags are enabled only
    /// by the literal `true`; pattern lists are comma separated.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = get(ENV_ACCOUNT_NAME) {
            self.account_name = v;
        }
        if let Some(v) = get(ENV_AUTHOR_NAME) {
            self.author_name = v;
        }
        if let Some(v) = get(ENV_AUTHOR_URL) {
            self.author_url = Some(v);
        }
        if let Some(v) = get(ENV_INCLUDE_PATTERNS) {
            self.include_patterns = split_patterns(&v);
        }
        if let Some(v) = get(ENV_EXCLUDE_PATTERNS) {
            self.exclude_patterns = split_patterns(&v);
        }
        if let Some(v) = get(ENV_OUTPUT_FILE) {
            let path = PathBuf::from(v);
            self.output_file = Self::expand_path(&path).unwrap_or(path);
        }
        if let Some(v) = get(ENV_TOKEN) {
            self.access_token = Some(v);
        }
        if let Some(v) = get(ENV_ONE_ENTRY_MODE) {
            self.one_entry_mode = v == "true";
        }
        if let Some(v) = get(ENV_REPLACE_EXISTING_PAGES) {
            self.replace_existing_pages = v == "true";
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for pattern in self.include_patterns.iter().chain(&self.exclude_patterns) {
            glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }
        if self.replace_existing_pages && self.access_token.is_none() {
            return Err(ConfigError::MissingAccessToken);
        }
        Ok(())
    }

    /// Absolute location of the mapping file for a workspace.
    pub fn mapping_path(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.output_file)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

fn split_patterns(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
