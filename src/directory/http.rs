//! HTTP directory client backed by `reqwest`

use super::DirectoryClient;
use crate::config::DirectoryConfig;
use crate::core::DirectoryError;
use crate::entities::Restaurant;
use async_trait::async_trait;
use std::time::Duration;

/// Fetches the restaurant collection with a plain `GET` on a fixed URL.
///
/// No query parameters and no auth header are sent. Any transport failure,
/// non-2xx status or body that is not a JSON array of restaurants is a
/// [`DirectoryError`].
#[derive(Clone, Debug)]
pub struct HttpDirectoryClient {
    client: reqwest::Client,
    url: String,
}

impl HttpDirectoryClient {
    /// Build a client for `url` with the given request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DirectoryError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        Self::new(&config.url, config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, e: reqwest::Error) -> DirectoryError {
        DirectoryError::Transport {
            url: self.url.clone(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, DirectoryError> {
        tracing::debug!(url = %self.url, "requesting restaurant directory");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(serde_json::from_slice(&body)?)
    }
}
