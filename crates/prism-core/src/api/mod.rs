//! Design project API client
//!
//! Fetches a project (colors and text styles) from the Zeplin API. The base URL
//! can be overridden with `PRISM_API_URL`, which the tests use to point the
//! client at a local mock server.

use crate::project::Project;
use thiserror::Error;
use url::Url;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.zeplin.io/v2/";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "PRISM_API_URL";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "ZEPLIN_TOKEN";

/// Header carrying the API token
const TOKEN_HEADER: &str = "zeplin-token";

const USER_AGENT: &str = concat!("prism/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing API token. Pass --token or set the ZEPLIN_TOKEN environment variable")]
    MissingToken,

    #[error("The provided project ID can't be used to construct a API URL")]
    InvalidProjectId,

    #[error("Invalid API URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch {url}: HTTP {status}")]
    Status {
        status: reqwest::StatusCode,
        url: Url,
    },

    #[error("Failed to decode project: {0}")]
    Decoding(#[from] serde_json::Error),
}

/// Client for the design project API
pub struct PrismApi {
    base_url: Url,
    token: String,
    client: reqwest::Client,
}

impl PrismApi {
    /// Create a client for the default API URL
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(DEFAULT_API_URL)
            .map_err(|_| ApiError::InvalidBaseUrl(DEFAULT_API_URL.to_string()))?;
        Ok(Self::with_base_url(token, base_url))
    }

    /// Create a client for a custom API URL
    pub fn with_base_url(token: impl Into<String>, base_url: Url) -> Self {
        Self {
            base_url,
            token: token.into(),
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a client from the environment; `token` takes precedence over `ZEPLIN_TOKEN`
    pub fn from_env(token: Option<String>) -> Result<Self, ApiError> {
        let token = token
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApiError::MissingToken)?;

        match std::env::var(API_URL_ENV) {
            Ok(url_str) => {
                let base_url =
                    Url::parse(&url_str).map_err(|_| ApiError::InvalidBaseUrl(url_str.clone()))?;
                tracing::debug!(%base_url, "using API URL from {}", API_URL_ENV);
                Ok(Self::with_base_url(token, base_url))
            }
            Err(_) => Self::new(token),
        }
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a project resource. Project IDs are ASCII alphanumeric.
    pub fn project_url(&self, project_id: &str) -> Result<Url, ApiError> {
        if project_id.is_empty() || !project_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ApiError::InvalidProjectId);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidProjectId)?
            .pop_if_empty()
            .push("projects")
            .push(project_id);
        Ok(url)
    }

    /// Fetch and decode a project
    pub async fn get_project(&self, project_id: &str) -> Result<Project, ApiError> {
        let url = self.project_url(project_id)?;
        tracing::debug!(%url, "fetching project");

        let response = self
            .client
            .get(url.clone())
            .header(TOKEN_HEADER, self.token.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "project request failed");
            return Err(ApiError::Status { status, url });
        }

        let body = response.bytes().await?;
        let project = Project::decode(&body)?;
        tracing::info!(
            project = %project.name,
            colors = project.colors.len(),
            text_styles = project.text_styles.len(),
            "fetched project"
        );
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fake_project, FAULTY_PROJECT_JSON, PROJECT_JSON};
    use mockito::{Server, ServerGuard};

    fn client_for(server: &ServerGuard) -> PrismApi {
        let base_url = Url::parse(&format!("{}/v2/", server.url())).unwrap();
        PrismApi::with_base_url("fake-token", base_url)
    }

    #[test]
    fn test_project_url() {
        let api = PrismApi::new("fake").unwrap();
        let url = api.project_url("5xxad123dsadasxsaxsa").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.zeplin.io/v2/projects/5xxad123dsadasxsaxsa"
        );
    }

    #[test]
    fn test_project_url_without_trailing_slash() {
        let base_url = Url::parse("http://localhost:1234/v2").unwrap();
        let api = PrismApi::with_base_url("fake", base_url);
        assert_eq!(
            api.project_url("abc").unwrap().as_str(),
            "http://localhost:1234/v2/projects/abc"
        );
    }

    #[test]
    fn test_invalid_project_id() {
        let api = PrismApi::new("dsadas").unwrap();
        for id in ["|||", "", "../admin", "abc def"] {
            let err = api.project_url(id).unwrap_err();
            assert!(matches!(err, ApiError::InvalidProjectId), "{}", id);
            assert_eq!(
                err.to_string(),
                "The provided project ID can't be used to construct a API URL"
            );
        }
    }

    #[test]
    fn test_from_env_prefers_explicit_token() {
        let api = PrismApi::from_env(Some("explicit".to_string())).unwrap();
        assert_eq!(api.token, "explicit");
    }

    #[tokio::test]
    async fn test_get_project_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/projects/5xxad123dsadasxsaxsa")
            .match_header("zeplin-token", "fake-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PROJECT_JSON)
            .create_async()
            .await;

        let project = client_for(&server)
            .get_project("5xxad123dsadasxsaxsa")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(project, fake_project());
    }

    #[tokio::test]
    async fn test_get_project_server_failure() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/projects/abc")
            .with_status(500)
            .create_async()
            .await;

        let err = client_for(&server).get_project("abc").await.unwrap_err();
        match err {
            ApiError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_project_faulty_json() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/projects/abc")
            .with_status(200)
            .with_body(FAULTY_PROJECT_JSON)
            .create_async()
            .await;

        let err = client_for(&server).get_project("abc").await.unwrap_err();
        assert!(matches!(err, ApiError::Decoding(_)));
    }

    #[tokio::test]
    async fn test_get_project_invalid_id_skips_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let err = client_for(&server).get_project("|||").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidProjectId));
        mock.assert_async().await;
    }
}
