//! Client for the Telegraph publishing API.
//!
//! Every endpoint answers with an `{ok, result, error}` envelope; `ok: false`
//! surfaces as [`PublishError::Api`].

use std::time::Duration;

use markdown_telegraph_engine::Document;
use reqwest::{StatusCode, blocking::Client};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

pub const API_BASE: &str = "https://api.telegra.ph";
const TIMEOUT: Duration = Duration::from_secs(30);
/// Pages fetched when searching by title.
const PAGE_LIST_LIMIT: u32 = 50;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Telegraph API error: {0}")]
    Api(String),
    #[error("No access token available. Create an account first.")]
    MissingToken,
    #[error("Telegraph page not found: {0}")]
    NotFound(String),
    #[error("Failed to encode page content: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    ok: bool,
    result: Option<T>,
    error: Option<String>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, PublishError> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(PublishError::Api(
                self.error.unwrap_or_else(|| "missing result".to_string()),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub short_name: String,
    pub author_name: String,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub auth_url: Option<String>,
    #[serde(default)]
    pub page_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub path: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub content: Option<Document>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub can_edit: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageList {
    pub total_count: u64,
    pub pages: Vec<Page>,
}

/// Byline attached to created and edited pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub url: Option<String>,
}

/// Operations the sync needs from a publishing service.
pub trait Publisher {
    /// Creates an account and keeps its access token for later calls.
    fn create_account(
        &mut self,
        short_name: &str,
        author_name: &str,
        author_url: Option<&str>,
    ) -> Result<Account, PublishError>;

    fn create_page(
        &self,
        title: &str,
        content: &Document,
        author: &Author,
    ) -> Result<Page, PublishError>;

    fn edit_page(
        &self,
        path: &str,
        title: &str,
        content: &Document,
        author: &Author,
    ) -> Result<Page, PublishError>;

    fn get_page(&self, path: &str) -> Result<Page, PublishError>;

    fn get_page_list(&self, offset: u32, limit: u32) -> Result<PageList, PublishError>;

    fn set_access_token(&mut self, token: &str);

    /// The first page of this account whose title matches, ignoring case.
    /// Lookup failures are logged and yield `None`.
    fn find_page_by_title(&self, title: &str) -> Option<Page> {
        let list = match self.get_page_list(0, PAGE_LIST_LIMIT) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Failed to search for existing page: {e}");
                return None;
            }
        };
        let lower = title.to_lowercase();
        list.pages
            .into_iter()
            .find(|p| p.title == title || p.title.to_lowercase() == lower)
    }
}

#[derive(Serialize)]
struct CreateAccountRequest<'a> {
    short_name: &'a str,
    author_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_url: Option<&'a str>,
}

#[derive(Serialize)]
struct PageRequest<'a> {
    access_token: &'a str,
    title: &'a str,
    author_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_url: Option<&'a str>,
    /// JSON-encoded node array.
    content: String,
    return_content: bool,
}

/// Blocking HTTP implementation of [`Publisher`].
pub struct TelegraphClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl TelegraphClient {
    pub fn new() -> Result<Self, PublishError> {
        Self::with_base_url(API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, PublishError> {
        let http = Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            access_token: None,
        })
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url.trim_end_matches('/'))
    }

    fn token(&self) -> Result<&str, PublishError> {
        self.access_token
            .as_deref()
            .ok_or(PublishError::MissingToken)
    }

    fn page_request<'a>(
        &'a self,
        title: &'a str,
        content: &Document,
        author: &'a Author,
    ) -> Result<PageRequest<'a>, PublishError> {
        Ok(PageRequest {
            access_token: self.token()?,
            title,
            author_name: &author.name,
            author_url: author.url.as_deref(),
            content: content.to_json()?,
            return_content: false,
        })
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, method: &str, body: &B) -> Result<T, PublishError> {
        let envelope: Envelope<T> = self
            .http
            .post(self.url(method))
            .json(body)
            .send()?
            .error_for_status()?
            .json()?;
        envelope.into_result()
    }
}

impl Publisher for TelegraphClient {
    fn create_account(
        &mut self,
        short_name: &str,
        author_name: &str,
        author_url: Option<&str>,
    ) -> Result<Account, PublishError> {
        let request = CreateAccountRequest {
            short_name,
            author_name,
            author_url,
        };
        let account: Account = self.post("createAccount", &request)?;
        self.access_token = account.access_token.clone();
        log::info!("Telegraph account created: {short_name}");
        Ok(account)
    }

    fn create_page(
        &self,
        title: &str,
        content: &Document,
        author: &Author,
    ) -> Result<Page, PublishError> {
        let request = self.page_request(title, content, author)?;
        let page: Page = self.post("createPage", &request)?;
        log::info!("Telegraph page created: {}", page.url);
        Ok(page)
    }

    fn edit_page(
        &self,
        path: &str,
        title: &str,
        content: &Document,
        author: &Author,
    ) -> Result<Page, PublishError> {
        let request = self.page_request(title, content, author)?;
        let page: Page = self.post(&format!("editPage/{path}"), &request)?;
        log::info!("Telegraph page updated: {}", page.url);
        Ok(page)
    }

    fn get_page(&self, path: &str) -> Result<Page, PublishError> {
        let response = self
            .http
            .get(self.url(&format!("getPage/{path}")))
            .query(&[("return_content", "true")])
            .send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(PublishError::NotFound(path.to_string()));
        }
        let envelope: Envelope<Page> = response.error_for_status()?.json()?;
        envelope.into_result()
    }

    fn get_page_list(&self, offset: u32, limit: u32) -> Result<PageList, PublishError> {
        let envelope: Envelope<PageList> = self
            .http
            .get(self.url("getPageList"))
            .query(&[
                ("access_token", self.token()?.to_string()),
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        envelope.into_result()
    }

    fn set_access_token(&mut self, token: &str) {
        self.access_token = Some(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_telegraph_engine::convert;
    use pretty_assertions::assert_eq;

    struct ListedPages(Result<Vec<&'static str>, ()>);

    impl Publisher for ListedPages {
        fn create_account(&mut self, _: &str, _: &str, _: Option<&str>) -> Result<Account, PublishError> {
            unimplemented!()
        }
        fn create_page(&self, _: &str, _: &Document, _: &Author) -> Result<Page, PublishError> {
            unimplemented!()
        }
        fn edit_page(&self, _: &str, _: &str, _: &Document, _: &Author) -> Result<Page, PublishError> {
            unimplemented!()
        }
        fn get_page(&self, path: &str) -> Result<Page, PublishError> {
            Err(PublishError::NotFound(path.to_string()))
        }
        fn get_page_list(&self, _: u32, _: u32) -> Result<PageList, PublishError> {
            let titles = self.0.clone().map_err(|_| PublishError::MissingToken)?;
            Ok(PageList {
                total_count: titles.len() as u64,
                pages: titles.into_iter().map(page).collect(),
            })
        }
        fn set_access_token(&mut self, _: &str) {}
    }

    fn page(title: &str) -> Page {
        let path = title.replace(' ', "-");
        Page {
            url: format!("https://telegra.ph/{path}"),
            path,
            title: title.to_string(),
            description: String::new(),
            author_name: None,
            author_url: None,
            image_url: None,
            content: None,
            views: 0,
            can_edit: None,
        }
    }

    #[test]
    fn envelope_success_yields_result() {
        let envelope: Envelope<Account> = serde_json::from_str(
            r#"{"ok":true,"result":{"short_name":"bot","author_name":"Bot","access_token":"abc","auth_url":"https://edit.telegra.ph/auth/x"}}"#,
        )
        .unwrap();
        let account = envelope.into_result().unwrap();
        assert_eq!(account.access_token.as_deref(), Some("abc"));
        assert_eq!(account.author_url, None);
    }

    #[test]
    fn envelope_failure_yields_api_error() {
        let envelope: Envelope<Page> =
            serde_json::from_str(r#"{"ok":false,"error":"PAGE_NOT_FOUND"}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Telegraph API error: PAGE_NOT_FOUND");
    }

    #[test]
    fn page_content_decodes_into_nodes() {
        let page: Page = serde_json::from_str(
            r#"{"path":"Doc-01-01","url":"https://telegra.ph/Doc-01-01","title":"Doc","description":"","views":3,"content":[{"tag":"p","children":["hi"]}]}"#,
        )
        .unwrap();
        assert_eq!(page.content, Some(convert("hi")));
        assert_eq!(page.views, 3);
    }

    #[test]
    fn page_request_encodes_content_as_string() {
        let mut client = TelegraphClient::new().unwrap();
        client.set_access_token("tok");
        let author = Author {
            name: "GitHub Action".to_string(),
            url: None,
        };
        let doc = convert("Hello");
        let request = client.page_request("Title", &doc, &author).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "access_token": "tok",
                "title": "Title",
                "author_name": "GitHub Action",
                "content": "[{\"tag\":\"p\",\"children\":[\"Hello\"]}]",
                "return_content": false
            })
        );
    }

    #[test]
    fn page_calls_require_token() {
        let client = TelegraphClient::new().unwrap();
        let author = Author::default();
        let doc = convert("x");
        assert!(matches!(
            client.create_page("t", &doc, &author),
            Err(PublishError::MissingToken)
        ));
        assert!(matches!(
            client.edit_page("p", "t", &doc, &author),
            Err(PublishError::MissingToken)
        ));
        assert!(matches!(
            client.get_page_list(0, 50),
            Err(PublishError::MissingToken)
        ));
    }

    #[test]
    fn find_by_title_takes_first_match_in_list_order() {
        let publisher = ListedPages(Ok(vec!["Intro", "guide", "Guide"]));
        assert_eq!(publisher.find_page_by_title("Guide").unwrap().title, "guide");
    }

    #[test]
    fn find_by_title_ignores_case() {
        let publisher = ListedPages(Ok(vec!["Other", "GETTING STARTED"]));
        assert_eq!(
            publisher.find_page_by_title("Getting Started").unwrap().path,
            "GETTING-STARTED"
        );
        assert_eq!(publisher.find_page_by_title("Missing"), None);
    }

    #[test]
    fn find_by_title_swallows_lookup_errors() {
        let publisher = ListedPages(Err(()));
        assert_eq!(publisher.find_page_by_title("Guide"), None);
    }
}
