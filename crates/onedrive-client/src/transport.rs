//! Transport invoker: one authenticated GET per tool call.
//!
//! [`DriveTransport`] is the seam between the tool pipeline and the network.
//! [`GraphApiClient`] is the production implementation; tests substitute
//! canned responses.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Issues a GET against a Graph path and returns the raw response body.
#[async_trait]
pub trait DriveTransport: Send + Sync + Debug {
    /// `path_and_query` is relative to the API base URL, e.g.
    /// `/me/drive/root/children?$select=name`.
    async fn get_json(&self, path_and_query: &str) -> ClientResult<String>;
}

/// Microsoft Graph client over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct GraphApiClient {
    client: Client,
    base_url: String,
    authorization: HeaderValue,
}

impl GraphApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        let mut authorization = HeaderValue::from_str(&config.bearer()).map_err(|e| {
            ClientError::config_error(format!("access token is not a valid header value: {e}"))
        })?;
        authorization.set_sensitive(true);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization,
        })
    }
}

#[async_trait]
impl DriveTransport for GraphApiClient {
    async fn get_json(&self, path_and_query: &str) -> ClientResult<String> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(url = %url, "Graph GET");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("no response body").to_string()
            } else {
                body
            };
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        debug!(status = status.as_u16(), bytes = body.len(), "Graph response");
        Ok(body)
    }
}
