//! The shared request/response path every endpoint goes through.

use crate::context::RequestContext;
use crate::error_handling::{classify_response, decode_json};
use endoflife_core::{ErrorBuilder, Result};
use reqwest::header::{HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, trace};
use url::Url;

/// Base address, HTTP transport and identification string for API calls.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Pipeline {
    base_url: Url,
    http: Client,
    user_agent: HeaderValue,
}

impl Pipeline {
    pub(crate) fn new(base_url: Url, http: Client, user_agent: HeaderValue) -> Self {
        Self {
            base_url,
            http,
            user_agent,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.to_str().unwrap_or_default()
    }

    pub fn http_client(&self) -> &Client {
        &self.http
    }

    /// Absolute URL for a path relative to the base address
    pub fn url_for(&self, path: &str) -> Url {
        join_path(&self.base_url, path)
    }

    /// Perform one call and decode a success body into `T`.
    ///
    /// The context covers sending, waiting for headers and reading the body.
    pub async fn execute<T>(&self, ctx: &RequestContext, method: Method, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path);
        ctx.run(self.round_trip(method, url)).await
    }

    async fn round_trip<T>(&self, method: Method, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();
        trace!(method = %method, url = %url, "Sending API request");

        let response = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.user_agent.clone())
            .send()
            .await
            .map_err(|e| ErrorBuilder::transport().request(e))?;

        let status = response.status();
        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API response received"
        );

        classify_response(status, response.headers())?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ErrorBuilder::decode().body(e))?;

        trace!(url = %url, bytes = body.len(), "Decoding API response body");

        decode_json(&body)
    }
}

/// Join `path` onto the base URL's path.
///
/// Exactly one `/` separates base and path, empty segments are dropped and
/// the base path prefix (e.g. `/api/v1`) is kept. An empty or `/` path
/// addresses the base itself with a trailing slash.
pub fn join_path(base: &Url, path: &str) -> Url {
    let mut joined = base.path().trim_end_matches('/').to_string();
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        joined.push('/');
        joined.push_str(segment);
    }
    if joined.is_empty() || path.ends_with('/') {
        joined.push('/');
    }

    let mut url = base.clone();
    url.set_path(&joined);
    url
}
