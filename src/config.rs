//! Client configuration.
//!
//! [`Config`] carries every tunable of the client with documented defaults.
//! Values can be set with the `with_*` methods, taken from the environment via
//! [`Config::from_env`], and are checked by [`Config::validate`] when a client is
//! built.

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Public Firebase root of the Hacker News API.
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root that every endpoint path is joined onto.
    pub base_url: String,
    /// Deadline applied to each HTTP request.
    pub request_timeout: Duration,
    /// Maximum number of retries for a failed request.
    ///
    /// Not consumed by any request path yet; reserved for a retry layer.
    pub max_retries: u32,
    /// Wait between retries. Reserved alongside `max_retries`.
    pub backoff_interval: Duration,
    /// Period of the updates poller.
    pub poll_interval: Duration,
    /// Ceiling on in-flight requests within one batch call.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            max_retries: 3,
            backoff_interval: Duration::from_secs(2),
            poll_interval: Duration::from_secs(30),
            concurrency: 10,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by environment variables:
    /// - `HNAPI_BASE_URL`
    /// - `HNAPI_TIMEOUT_SECS`
    /// - `HNAPI_POLL_INTERVAL_SECS`
    /// - `HNAPI_CONCURRENCY`
    /// - `HNAPI_MAX_RETRIES`
    /// - `HNAPI_BACKOFF_SECS`
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = env::var("HNAPI_BASE_URL") {
            cfg.base_url = url;
        }
        if let Some(secs) = env_parse::<u64>("HNAPI_TIMEOUT_SECS") {
            cfg.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_parse::<u64>("HNAPI_POLL_INTERVAL_SECS") {
            cfg.poll_interval = Duration::from_secs(secs);
        }
        if let Some(n) = env_parse::<usize>("HNAPI_CONCURRENCY") {
            cfg.concurrency = n;
        }
        if let Some(n) = env_parse::<u32>("HNAPI_MAX_RETRIES") {
            cfg.max_retries = n;
        }
        if let Some(secs) = env_parse::<u64>("HNAPI_BACKOFF_SECS") {
            cfg.backoff_interval = Duration::from_secs(secs);
        }
        cfg
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_backoff_interval(mut self, interval: Duration) -> Self {
        self.backoff_interval = interval;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Reject values that would hang or misroute the client.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(Error::configuration_with_context(
                "concurrency must be at least 1",
                ErrorContext::new()
                    .with_field_path("concurrency")
                    .with_details("got 0")
                    .with_source("config"),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(zero_duration("poll_interval"));
        }
        if self.request_timeout.is_zero() {
            return Err(zero_duration("request_timeout"));
        }
        self.parsed_base_url()?;
        Ok(())
    }

    /// Parse `base_url`, normalizing it to end with `/` so endpoint paths append.
    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        let invalid = |details: String| {
            Error::configuration_with_context(
                "base_url must be an absolute http(s) URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(details)
                    .with_source("config"),
            )
        };

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| invalid(format!("{}: {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

fn zero_duration(field: &str) -> Error {
    Error::configuration_with_context(
        format!("{} must be greater than zero", field),
        ErrorContext::new()
            .with_field_path(field)
            .with_source("config"),
    )
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse::<T>().ok())
}
