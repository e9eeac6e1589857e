//! `WatchModeClient` - WatchMode API client implementation.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalWatchModeApi;
use super::error::WatchModeError;
use super::params::{ListTitlesParams, SearchTitlesParams};
use super::types::{TitleDetailsResponse, TitleListResponse, WatchModeErrorResponse};

/// Default base URL for WatchMode API v1.
const DEFAULT_BASE_URL: &str = "https://api.watchmode.com/v1/";

/// Fixed connect and total request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// WatchMode API client.
///
/// Stateless from the caller's perspective; the configured API key is
/// attached as the `apiKey` query parameter on every request. The client
/// performs no retries and no rate limiting — a failed call is reported
/// once and retrying is a caller decision.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct WatchModeClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key credential.
    api_key: String,
}

/// Builder for `WatchModeClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct WatchModeClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl WatchModeClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Overrides the connect/total timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `WatchModeError::Config` when:
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<WatchModeClient, WatchModeError> {
        let api_key = self.api_key.ok_or_else(|| WatchModeError::Config {
            message: String::from("api_key is required"),
        })?;
        let user_agent = self.user_agent.ok_or_else(|| WatchModeError::Config {
            message: String::from("user_agent is required"),
        })?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL).map_err(|source| WatchModeError::Url {
                path: String::from(DEFAULT_BASE_URL),
                source,
            })?
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| WatchModeError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(WatchModeClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl WatchModeClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> WatchModeClientBuilder {
        WatchModeClientBuilder::new()
    }

    /// Sends a GET request with the `apiKey` query parameter attached and
    /// decodes the JSON response.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, WatchModeError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| WatchModeError::Url {
                path: String::from(path),
                source,
            })?;

        tracing::debug!(%path, "WatchMode API request");

        let response = self
            .http_client
            .get(url)
            .query(query)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| WatchModeError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            let message = serde_json::from_str::<WatchModeErrorResponse>(&body)
                .map_or(body, |e| e.status_message);
            return Err(WatchModeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| WatchModeError::Transport { source })?;
        serde_json::from_str(&body).map_err(|source| WatchModeError::Decode {
            endpoint: String::from(path),
            source,
        })
    }
}

impl LocalWatchModeApi for WatchModeClient {
    #[instrument(skip_all)]
    async fn list_titles(
        &self,
        params: &ListTitlesParams,
    ) -> Result<TitleListResponse, WatchModeError> {
        let query: Vec<(&str, String)> = vec![
            ("types", params.types.clone()),
            ("page", params.page.to_string()),
            ("limit", params.limit.to_string()),
        ];

        self.get_json("list-titles", &query).await
    }

    #[instrument(skip_all)]
    async fn title_details(&self, id: &str) -> Result<TitleDetailsResponse, WatchModeError> {
        let path = format!("title/{id}/details/");
        match self.get_json(&path, &[]).await {
            // The details endpoint is the only one addressed by id, so the
            // generic 404 is rewritten into the domain not-found signal here.
            Err(WatchModeError::Api { status: 404, .. }) => Err(WatchModeError::NotFound {
                id: String::from(id),
            }),
            other => other,
        }
    }

    #[instrument(skip_all)]
    async fn search_titles(
        &self,
        params: &SearchTitlesParams,
    ) -> Result<TitleListResponse, WatchModeError> {
        let mut query: Vec<(&str, String)> = vec![
            ("search_value", params.search_value.clone()),
            ("search_type", String::from(params.search_type.as_str())),
            ("page", params.page.to_string()),
            ("limit", params.limit.to_string()),
        ];
        if let Some(ref types) = params.types {
            query.push(("types", types.clone()));
        }

        self.get_json("autocomplete-search", &query).await
    }
}
