//! Repository metadata updates through the GitHub REST API.

use std::time::Duration;

use reqwest::{
    blocking::{Client, RequestBuilder},
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const API_BASE: &str = "https://api.github.com";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("GitHub token is required. Set the {ENV_TOKEN} environment variable.")]
    MissingToken,
    #[error("Repository is unknown. Set {ENV_REPOSITORY} to owner/repo.")]
    MissingRepository,
    #[error("Invalid repository slug {0:?}, expected owner/repo")]
    InvalidRepository(String),
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub repo: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
}

/// Operations on the repository hosting the published documents.
pub trait RepositoryHost {
    fn repository(&self) -> Result<Repository, RepositoryError>;

    fn update_description(&self, description: &str) -> Result<(), RepositoryError>;

    fn update_homepage(&self, homepage: &str) -> Result<(), RepositoryError>;

    /// Whether the repository can be read with the configured credentials.
    fn check_permissions(&self) -> bool;
}

#[derive(Deserialize)]
struct RepositoryResponse {
    description: Option<String>,
    homepage: Option<String>,
}

#[derive(Serialize, Default)]
struct RepositoryUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<&'a str>,
}

/// Blocking HTTP implementation of [`RepositoryHost`].
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Builds a client from `GITHUB_TOKEN` and `GITHUB_REPOSITORY`.
    pub fn from_env() -> Result<Self, RepositoryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RepositoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN)
            .filter(|t| !t.is_empty())
            .ok_or(RepositoryError::MissingToken)?;
        let slug = lookup(ENV_REPOSITORY)
            .filter(|s| !s.is_empty())
            .ok_or(RepositoryError::MissingRepository)?;
        let (owner, repo) = parse_slug(&slug)?;
        let http = Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: API_BASE.to_string(),
            token,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    fn repo_url(&self) -> String {
        format!("{}/repos/{}/{}", self.base_url, self.owner, self.repo)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "markdown-telegraph")
    }

    fn update(&self, update: &RepositoryUpdate<'_>) -> Result<(), RepositoryError> {
        self.authorized(self.http.patch(self.repo_url()))
            .json(update)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

fn parse_slug(slug: &str) -> Result<(&str, &str), RepositoryError> {
    match slug.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(RepositoryError::InvalidRepository(slug.to_string())),
    }
}

impl RepositoryHost for GitHubClient {
    fn repository(&self) -> Result<Repository, RepositoryError> {
        let response: RepositoryResponse = self
            .authorized(self.http.get(self.repo_url()))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(Repository {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            description: response.description,
            homepage: response.homepage,
        })
    }

    fn update_description(&self, description: &str) -> Result<(), RepositoryError> {
        log::info!("Updating repository description to: {description}");
        self.update(&RepositoryUpdate {
            description: Some(description),
            ..Default::default()
        })
    }

    fn update_homepage(&self, homepage: &str) -> Result<(), RepositoryError> {
        log::info!("Updating repository homepage to: {homepage}");
        self.update(&RepositoryUpdate {
            homepage: Some(homepage),
            ..Default::default()
        })
    }

    fn check_permissions(&self) -> bool {
        match self.repository() {
            Ok(_) => true,
            Err(e) => {
                log::warn!("GitHub API permission check failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn builds_from_environment() {
        let client =
            GitHubClient::from_lookup(lookup(&[(ENV_TOKEN, "t"), (ENV_REPOSITORY, "octo/docs")]))
                .unwrap();
        assert_eq!(client.repo_url(), "https://api.github.com/repos/octo/docs");
    }

    #[test]
    fn missing_token_is_an_error() {
        let result = GitHubClient::from_lookup(lookup(&[(ENV_REPOSITORY, "octo/docs")]));
        assert!(matches!(result, Err(RepositoryError::MissingToken)));
    }

    #[test]
    fn missing_repository_is_an_error() {
        let result = GitHubClient::from_lookup(lookup(&[(ENV_TOKEN, "t")]));
        assert!(matches!(result, Err(RepositoryError::MissingRepository)));
    }

    #[test]
    fn malformed_slugs_are_rejected() {
        for slug in ["octo", "octo/", "/docs", "a/b/c"] {
            assert!(matches!(
                parse_slug(slug),
                Err(RepositoryError::InvalidRepository(_))
            ));
        }
        assert_eq!(parse_slug("octo/docs").unwrap(), ("octo", "docs"));
    }

    #[test]
    fn update_body_only_names_changed_fields() {
        let body = serde_json::to_value(RepositoryUpdate {
            homepage: Some("https://telegra.ph/Readme"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"homepage": "https://telegra.ph/Readme"}));
    }
}
