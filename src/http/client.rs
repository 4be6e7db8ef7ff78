//! Log Analytics upload client
//!
//! Builds the SharedKey-signed request for each payload and checks the
//! response status.

use crate::auth::SharedKeyCredentials;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE as CONTENT_TYPE_HEADER};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP method used for uploads
pub const METHOD: &str = "POST";

/// Content type of every payload
pub const CONTENT_TYPE: &str = "application/json";

/// Resource path that gets signed and posted to
pub const RESOURCE: &str = "/api/logs";

/// Data Collector API version
pub const API_VERSION: &str = "2016-04-01";

/// Format a time as an RFC 1123 date, e.g. `Mon, 01 Jan 2024 10:00:00 GMT`
pub fn rfc1123_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Configuration for the upload client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host to post to instead of the workspace's default host
    pub endpoint: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// API version query parameter
    pub api_version: String,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(30),
            api_version: API_VERSION.to_string(),
            user_agent: format!("logship/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Override the ingestion host
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the API version
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Client for one Log Analytics workspace
pub struct LogAnalyticsClient {
    client: Client,
    credentials: SharedKeyCredentials,
    url: Url,
}

impl LogAnalyticsClient {
    /// Create a client with default configuration
    pub fn new(credentials: SharedKeyCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: SharedKeyCredentials, config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let url = build_url(&credentials, &config)?;

        Ok(Self {
            client,
            credentials,
            url,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Full URL payloads are posted to
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Workspace credentials
    pub fn credentials(&self) -> &SharedKeyCredentials {
        &self.credentials
    }

    /// Post one JSON payload to a custom log table
    ///
    /// `log_type` is the table name (Log Analytics appends `_CL`).
    pub async fn post_data(&self, body: &str, log_type: &str) -> Result<()> {
        let date = rfc1123_date(Utc::now());
        let content_length = body.len();
        let signature =
            self.credentials
                .sign(&date, content_length, METHOD, CONTENT_TYPE, RESOURCE)?;

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE)
            .header(AUTHORIZATION, signature)
            .header("Log-Type", log_type)
            .header("x-ms-date", &date)
            .body(body.to_owned())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), text));
        }

        debug!(
            "Posted {} bytes to {} ({})",
            content_length,
            log_type,
            status.as_u16()
        );
        Ok(())
    }
}

impl std::fmt::Debug for LogAnalyticsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogAnalyticsClient")
            .field("url", &self.url.as_str())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Build `{base}/api/logs?api-version={version}`
fn build_url(credentials: &SharedKeyCredentials, config: &ClientConfig) -> Result<Url> {
    let base = match &config.endpoint {
        Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
        None => format!(
            "https://{}.ods.opinsights.azure.com",
            credentials.workspace_id()
        ),
    };
    let url = Url::parse(&format!(
        "{base}{RESOURCE}?api-version={}",
        config.api_version
    ))?;
    Ok(url)
}
