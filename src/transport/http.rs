use crate::config::Config;
use crate::{Error, ErrorContext, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// Thin GET + JSON layer over a shared `reqwest::Client`.
///
/// Every call carries the configured request deadline and races the caller's
/// cancellation token.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    request_timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(32)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .user_agent(concat!("hnapi/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TransportError::Http)?;
        Self::with_client(config, client)
    }

    /// Use a caller-supplied client. The request deadline is still applied per request.
    pub fn with_client(config: &Config, client: reqwest::Client) -> Result<Self> {
        Ok(Self {
            client,
            base_url: config.parsed_base_url()?,
            request_timeout: config.request_timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments against the API root. Segments are percent-encoded.
    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    "base_url cannot carry a path",
                    ErrorContext::new()
                        .with_field_path("base_url")
                        .with_details(self.base_url.to_string())
                        .with_source("transport"),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `segments` and decode the body into `T`.
    ///
    /// Fails with `Cancelled` as soon as `cancel` fires, even mid-request.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        cancel: &CancellationToken,
    ) -> Result<T> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let endpoint = segments.join("/");
        let url = self.endpoint_url(segments)?;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(endpoint = %endpoint, "request cancelled");
                Err(Error::Cancelled)
            }
            res = self.fetch(url, &endpoint) => res,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, endpoint: &str) -> Result<T> {
        debug!(endpoint = %endpoint, "GET");
        let response = self
            .client
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(TransportError::Http)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.text().await.map_err(TransportError::Http)?;
        let body = body.trim();
        // The API answers `null` for IDs and usernames that do not exist.
        if body.is_empty() || body == "null" {
            return Err(Error::EmptyBody {
                endpoint: endpoint.to_string(),
            });
        }

        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
