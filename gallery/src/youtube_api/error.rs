//! Failure classification for YouTube API calls.
//!
//! Every failure that leaves the gateway is a [`ClientError`] whose [`ErrorReason`] comes
//! from a closed set, so callers can branch on it exhaustively.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable classification of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    /// No API key was configured.
    MissingApiKey,
    /// No channel id was configured.
    MissingChannelId,
    /// The gateway could not build its HTTP client.
    InitializationError,
    /// The project's daily quota is used up.
    QuotaExceeded,
    /// Too many requests in a short period.
    RateLimitExceeded,
    /// Any other 403, usually API key restrictions.
    Forbidden,
    /// The upstream rejected the request parameters.
    BadRequest,
    /// The upstream reported a missing resource.
    NotFound,
    /// The configured channel does not exist.
    ChannelNotFound,
    /// A video details lookup returned no items.
    VideoNotFound,
    /// No response was received at all.
    NetworkError,
    /// A response arrived but could not be turned into records.
    FetchError,
    /// An upstream error with a reason code not covered above.
    ///
    /// The original code is available from [`ClientError::upstream_reason`].
    Upstream,
    /// An upstream error without any reason code.
    UnknownError,
}

impl ErrorReason {
    /// The symbolic code for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReason::MissingApiKey => "missing_api_key",
            ErrorReason::MissingChannelId => "missing_channel_id",
            ErrorReason::InitializationError => "initialization_error",
            ErrorReason::QuotaExceeded => "quotaExceeded",
            ErrorReason::RateLimitExceeded => "rateLimitExceeded",
            ErrorReason::Forbidden => "forbidden",
            ErrorReason::BadRequest => "bad_request",
            ErrorReason::NotFound => "not_found",
            ErrorReason::ChannelNotFound => "channel_not_found",
            ErrorReason::VideoNotFound => "video_not_found",
            ErrorReason::NetworkError => "network_error",
            ErrorReason::FetchError => "fetch_error",
            ErrorReason::Upstream => "upstream_error",
            ErrorReason::UnknownError => "unknown_error",
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure from the gateway.
///
/// The [`Display`](fmt::Display) output is the human-readable message, suitable for showing
/// to end users as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    message: String,
    status: u16,
    reason: ErrorReason,
    upstream_reason: Option<String>,
}

impl ClientError {
    pub fn new(message: impl Into<String>, status: u16, reason: ErrorReason) -> Self {
        Self {
            message: message.into(),
            status,
            reason,
            upstream_reason: None,
        }
    }

    fn with_upstream_reason(mut self, upstream_reason: Option<String>) -> Self {
        self.upstream_reason = upstream_reason;
        self
    }

    pub(crate) fn missing_api_key() -> Self {
        Self::new(
            "YouTube API key is not configured. Please set YOUTUBE_API_KEY.",
            401,
            ErrorReason::MissingApiKey,
        )
    }

    pub(crate) fn missing_channel_id() -> Self {
        Self::new(
            "YouTube Channel ID is not configured. Please set YOUTUBE_CHANNEL_ID.",
            400,
            ErrorReason::MissingChannelId,
        )
    }

    pub(crate) fn initialization(detail: impl fmt::Display) -> Self {
        Self::new(
            format!("YouTube service is not properly initialized: {detail}"),
            500,
            ErrorReason::InitializationError,
        )
    }

    pub(crate) fn channel_not_found() -> Self {
        Self::new(
            "Channel not found. Please check your channel ID.",
            404,
            ErrorReason::ChannelNotFound,
        )
    }

    pub(crate) fn video_not_found() -> Self {
        Self::new("Video not found.", 404, ErrorReason::VideoNotFound)
    }

    pub(crate) fn network() -> Self {
        Self::new(
            "Network error. Please check your internet connection.",
            0,
            ErrorReason::NetworkError,
        )
    }

    pub(crate) fn fetch(message: &str) -> Self {
        Self::new(message, 500, ErrorReason::FetchError)
    }

    /// Classifies a non-success HTTP response from the YouTube API.
    ///
    /// The structured error envelope wins over the transport status when both are present.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiErrorResponse>(body) {
            Ok(envelope) => Self::from_api_error(envelope.error, status),
            Err(_) => Self::new(
                format!("Request failed with status code {}", status.as_u16()),
                status.as_u16(),
                ErrorReason::UnknownError,
            ),
        }
    }

    fn from_api_error(error: ApiError, status: StatusCode) -> Self {
        let code = error.code.unwrap_or(status.as_u16());
        let upstream_reason = error
            .errors
            .into_iter()
            .next()
            .and_then(|detail| detail.reason)
            .filter(|reason| !reason.is_empty());
        let upstream_message = error.message.unwrap_or_default();

        let classified = match code {
            403 => match upstream_reason.as_deref() {
                Some("quotaExceeded") => Self::new(
                    "YouTube API quota exceeded. Please try again later.",
                    403,
                    ErrorReason::QuotaExceeded,
                ),
                Some("rateLimitExceeded") => Self::new(
                    "YouTube API quota exceeded. Please try again later.",
                    403,
                    ErrorReason::RateLimitExceeded,
                ),
                _ => Self::new(
                    "Access forbidden. Please check your API key restrictions.",
                    403,
                    ErrorReason::Forbidden,
                ),
            },
            400 => Self::new(
                format!("Invalid request: {upstream_message}"),
                400,
                ErrorReason::BadRequest,
            ),
            404 => Self::new(
                "Resource not found. Please check the channel or playlist ID.",
                404,
                ErrorReason::NotFound,
            ),
            _ => {
                let message = if upstream_message.is_empty() {
                    "An error occurred while fetching data from YouTube.".to_string()
                } else {
                    upstream_message
                };
                let reason = if upstream_reason.is_some() {
                    ErrorReason::Upstream
                } else {
                    ErrorReason::UnknownError
                };
                Self::new(message, code, reason)
            }
        };
        classified.with_upstream_reason(upstream_reason)
    }

    /// Classifies a request that failed before any response arrived.
    pub fn from_transport(error: &reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::new(
                format!("Request failed with status code {}", status.as_u16()),
                status.as_u16(),
                ErrorReason::UnknownError,
            ),
            None => Self::network(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status, or 0 if no response was received.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The HTTP status as a [`StatusCode`], or `None` if no response was received.
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    pub fn reason(&self) -> ErrorReason {
        self.reason
    }

    /// The first reason code from the upstream error envelope, verbatim.
    pub fn upstream_reason(&self) -> Option<&str> {
        self.upstream_reason.as_deref()
    }
}

/// The error envelope returned by Google APIs.
///
/// See: <https://developers.google.com/youtube/v3/docs/errors>
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
