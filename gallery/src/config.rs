//! Gallery configuration.
//!
//! The configuration is read once at startup and handed to [`Gateway::new`](crate::Gateway::new).
//! Missing values are not an error here; the gateway turns them into a
//! [`ClientError`](crate::ClientError) on first use.

use secrecy::SecretString;
use std::time::Duration;

/// Where the YouTube Data API v3 lives.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
const CHANNEL_ID_VAR: &str = "YOUTUBE_CHANNEL_ID";
const BASE_URL_VAR: &str = "YOUTUBE_API_BASE_URL";
const TIMEOUT_VAR: &str = "YOUTUBE_API_TIMEOUT_SECS";

/// Immutable settings for talking to the YouTube API on behalf of one channel.
#[derive(Debug)]
pub struct GalleryConfig {
    pub(crate) api_key: Option<SecretString>,
    pub(crate) channel_id: Option<String>,
    pub(crate) base_url: String,
    pub(crate) timeout: Option<Duration>,
}

impl GalleryConfig {
    /// Creates a configuration from explicit values.
    ///
    /// Blank values are treated as missing.
    pub fn new(api_key: Option<String>, channel_id: Option<String>) -> Self {
        Self {
            api_key: non_blank(api_key).map(SecretString::new),
            channel_id: non_blank(channel_id),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// A `.env` file in the working directory (or any parent) is loaded first if one exists.
    /// Variables already set in the environment take precedence over the file.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(lookup(API_KEY_VAR), lookup(CHANNEL_ID_VAR));

        if let Some(base_url) = non_blank(lookup(BASE_URL_VAR)) {
            config.base_url = base_url;
        }

        if let Some(raw) = non_blank(lookup(TIMEOUT_VAR)) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
                _ => tracing::warn!(
                    value = %raw,
                    "ignoring {TIMEOUT_VAR}, expected a positive number of seconds"
                ),
            }
        }

        config
    }

    /// Points the gateway at a different API host, e.g. a local mock.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
