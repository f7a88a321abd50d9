//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::headers::{build_default_headers, random_user_agent};
use super::{RawRequest, RawResponse, Transport, TransportError};
use crate::error::{Error, Result};

/// HTTP transport over a pooled [`reqwest::Client`]
///
/// The timeout is enforced per request by the client. There is no retry:
/// each request is attempted exactly once.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given timeout and user agent
    ///
    /// A random browser user agent is drawn when `user_agent` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for an unusable user agent and `Error::Http`
    /// if the client cannot be built
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self> {
        Self::build(timeout, user_agent, true)
    }

    /// Like [`HttpTransport::new`] but without keeping idle connections
    ///
    /// Pooled connections are bound to the runtime that opened them, so a
    /// transport driven by short-lived runtimes must not reuse them.
    pub fn unpooled(timeout: Duration, user_agent: Option<&str>) -> Result<Self> {
        Self::build(timeout, user_agent, false)
    }

    fn build(timeout: Duration, user_agent: Option<&str>, pooled: bool) -> Result<Self> {
        let user_agent = match user_agent {
            Some(agent) => agent,
            None => random_user_agent(),
        };
        let headers = build_default_headers(user_agent)
            .map_err(|e| Error::config(format!("Invalid user agent: {e}")))?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .default_headers(headers);
        if !pooled {
            builder = builder.pool_max_idle_per_host(0);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, request: RawRequest) -> std::result::Result<RawResponse, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let mut builder = self.client.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.json_body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let url = response.url().to_string();
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.text().await?;

        tracing::debug!(status, url = %url, bytes = body.len(), "Received response");

        Ok(RawResponse {
            url,
            status,
            body,
            content_type,
        })
    }
}
