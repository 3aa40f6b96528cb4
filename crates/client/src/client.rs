use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::pipeline::Pipeline;
use endoflife_core::constants::{default_timeout, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use endoflife_core::{ErrorBuilder, Result};
use reqwest::header::HeaderValue;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the endoflife.date API.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct EolClient {
    pipeline: Pipeline,
}

/// A single construction directive.
///
/// Directives are applied in order; a later directive for the same field
/// replaces an earlier one.
#[derive(Debug, Clone)]
pub enum ClientOption {
    BaseUrl(String),
    /// Transport to use; it keeps its own timeout policy
    HttpClient(Client),
    UserAgent(String),
    /// Timeout for the built-in transport
    Timeout(Duration),
}

impl EolClient {
    /// Create a client with the default base URL, timeout and user agent
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> EolClientBuilder {
        EolClientBuilder::default()
    }

    /// Create a client from defaults overridden by `options`, in order
    pub fn with_options<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        Self::builder().options(options).build()
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Self::with_options(config.to_options())
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn base_url(&self) -> &Url {
        self.pipeline.base_url()
    }

    pub fn user_agent(&self) -> &str {
        self.pipeline.user_agent()
    }

    /// Run an arbitrary call through the shared pipeline
    pub async fn execute<T>(&self, ctx: &RequestContext, method: Method, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.pipeline.execute(ctx, method, path).await
    }

    pub(crate) async fn get<T>(&self, ctx: &RequestContext, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.pipeline.execute(ctx, Method::GET, path).await
    }

    #[cfg(test)]
    pub(crate) fn test_client(base_url: &str) -> Self {
        Self::builder()
            .base_url(base_url)
            .user_agent("endoflife-test/1.0")
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to create test client")
    }
}

/// Builder for [`EolClient`]; unset fields fall back to the defaults
#[derive(Debug, Clone, Default)]
pub struct EolClientBuilder {
    base_url: Option<String>,
    http_client: Option<Client>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl EolClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Apply one directive
    pub fn option(self, option: ClientOption) -> Self {
        match option {
            ClientOption::BaseUrl(url) => self.base_url(url),
            ClientOption::HttpClient(client) => self.http_client(client),
            ClientOption::UserAgent(agent) => self.user_agent(agent),
            ClientOption::Timeout(timeout) => self.timeout(timeout),
        }
    }

    /// Apply directives in order
    pub fn options<I>(self, options: I) -> Self
    where
        I: IntoIterator<Item = ClientOption>,
    {
        options.into_iter().fold(self, Self::option)
    }

    pub fn build(self) -> Result<EolClient> {
        let raw_base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = parse_base_url(raw_base)?;

        let raw_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        if raw_agent.trim().is_empty() {
            return Err(ErrorBuilder::config().invalid_field("user_agent", "cannot be empty"));
        }
        let user_agent = HeaderValue::from_str(raw_agent).map_err(|e| {
            ErrorBuilder::config().invalid_field("user_agent", e.to_string())
        })?;

        let http = match self.http_client {
            Some(client) => {
                if self.timeout.is_some() {
                    debug!("Timeout ignored: a caller-supplied HTTP client keeps its own");
                }
                client
            }
            None => {
                let timeout = self.timeout.unwrap_or_else(default_timeout);
                if timeout.is_zero() {
                    return Err(ErrorBuilder::config().invalid_field(
                        "timeout",
                        "must be greater than zero",
                    ));
                }
                Client::builder()
                    .timeout(timeout)
                    .build()
                    .map_err(|e| ErrorBuilder::config().transport(e))?
            }
        };

        debug!(base_url = %base_url, user_agent = raw_agent, "Created endoflife.date client");

        Ok(EolClient {
            pipeline: Pipeline::new(base_url, http, user_agent),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| ErrorBuilder::config().invalid_base_url(raw, e.to_string()))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ErrorBuilder::config().invalid_base_url(raw, "expected an http(s) URL"));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use endoflife_core::constants::DEFAULT_TIMEOUT_SECS;
    use endoflife_core::Error;

    #[test]
    fn test_new_client_defaults() {
        let client = EolClient::new().unwrap();

        assert_eq!(client.base_url().as_str(), "https://endoflife.date/api/v1");
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
        assert!(client.user_agent().starts_with("endoflife-rs/"));
        assert_eq!(DEFAULT_TIMEOUT_SECS, 30);
    }

    #[test]
    fn test_with_options() {
        let client = EolClient::with_options([
            ClientOption::BaseUrl("https://custom.example.com".to_string()),
            ClientOption::UserAgent("custom-agent/1.0".to_string()),
            ClientOption::HttpClient(Client::new()),
        ])
        .unwrap();

        assert_eq!(client.base_url().as_str(), "https://custom.example.com/");
        assert_eq!(client.user_agent(), "custom-agent/1.0");
    }

    #[test]
    fn test_options_last_wins() {
        let client = EolClient::with_options([
            ClientOption::UserAgent("first/1.0".to_string()),
            ClientOption::BaseUrl("https://one.example.com".to_string()),
            ClientOption::UserAgent("second/2.0".to_string()),
        ])
        .unwrap();

        assert_eq!(client.user_agent(), "second/2.0");
        assert_eq!(client.base_url().host_str(), Some("one.example.com"));
    }

    #[test]
    fn test_builder_and_options_mix() {
        let client = EolClient::builder()
            .user_agent("builder/1.0")
            .option(ClientOption::UserAgent("option/1.0".to_string()))
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.user_agent(), "option/1.0");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = EolClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = EolClient::builder()
            .base_url("mailto:someone@example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let err = EolClient::builder().user_agent("  ").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("user_agent"));
    }

    #[test]
    fn test_user_agent_with_control_characters_rejected() {
        let err = EolClient::builder()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = EolClient::builder()
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_timeout_ignored_with_custom_transport() {
        let client = EolClient::builder()
            .http_client(Client::new())
            .timeout(Duration::ZERO)
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_clone_shares_configuration() {
        let client = EolClient::test_client("http://127.0.0.1:8080");
        let clone = client.clone();

        assert_eq!(client.base_url(), clone.base_url());
        assert_eq!(clone.user_agent(), "endoflife-test/1.0");
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EolClient>();
    }
}
