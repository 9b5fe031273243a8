use crate::client::core::HnClient;
use crate::config::Config;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Builder for creating clients with custom configuration.
///
/// Starts from [`Config::default`]; every setter overrides one field.
pub struct HnClientBuilder {
    config: Config,
    http_client: Option<reqwest::Client>,
}

impl HnClientBuilder {
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            http_client: None,
        }
    }

    /// Start from [`Config::from_env`].
    pub fn from_env() -> Self {
        Self::from_config(Config::from_env())
    }

    /// Override the API root (primarily for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Stored on the config only; requests are not retried yet.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Stored on the config only, alongside `max_retries`.
    pub fn backoff_interval(mut self, interval: Duration) -> Self {
        self.config.backoff_interval = interval;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Limit the number of requests a batch call keeps in flight.
    pub fn concurrency(mut self, n: usize) -> Self {
        self.config.concurrency = n;
        self
    }

    /// Share an existing `reqwest::Client` (proxy, TLS or pool settings).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<HnClient> {
        self.config.validate()?;

        let transport = match self.http_client {
            Some(client) => HttpTransport::with_client(&self.config, client)?,
            None => HttpTransport::new(&self.config)?,
        };
        debug!(
            base_url = %transport.base_url(),
            concurrency = self.config.concurrency,
            "hacker news client ready"
        );

        Ok(HnClient {
            config: Arc::new(self.config),
            transport: Arc::new(transport),
        })
    }
}

impl Default for HnClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
