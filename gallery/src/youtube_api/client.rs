//! Core YouTube API client functionality.

use crate::youtube_api::{
    channels::ChannelListResponse, error::ClientError, playlist_items::PlaylistItemListResponse,
    playlists::PlaylistListResponse, videos::VideoListResponse,
};
use eyre::Context;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::instrument;

/// Client for the read-only parts of the YouTube Data API v3.
///
/// Every request is authenticated with an API key passed as the `key` query parameter.
/// No OAuth token is involved, so only public data is reachable.
///
/// Failures come back as [`eyre::Report`]s. A report that wraps a [`ClientError`] has
/// already been classified; anything else is a failure to make sense of a successful
/// response.
#[derive(Debug)]
pub struct YouTubeClient {
    /// Base URL of the API, without a trailing slash.
    base_url: String,
    api_key: SecretString,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a new client talking to the API at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key sent with every request
    /// * `base_url` - Where the API lives, e.g. `https://www.googleapis.com/youtube/v3`
    /// * `timeout` - Optional overall timeout for each request
    ///
    /// Fails with [`ErrorReason::InitializationError`](crate::ErrorReason::InitializationError)
    /// if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(
        api_key: SecretString,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::initialization(format!("invalid base URL: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::initialization(format!(
                "invalid base URL: {base_url}"
            )));
        }

        let mut builder = reqwest::ClientBuilder::new()
            // The API never redirects; a redirect means something is misconfigured.
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::initialization)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Makes a GET request against one API resource with common error handling.
    ///
    /// Adds the API key, sends the request, and converts any failure into a [`ClientError`]:
    /// a request that produced no response at all is a network error, and a non-success
    /// response is classified from its error envelope.
    ///
    /// # Returns
    ///
    /// The raw [`reqwest::Response`] for resource-specific JSON parsing.
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn get(
        &self,
        resource: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = match self
            .client
            .get(&url)
            .query(query_params)
            .query(&[("key", self.api_key.expose_secret().as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                // reqwest includes the URL (and so the key) in its Display output.
                let e = e.without_url();
                tracing::warn!(resource, error = %e, "request to YouTube API failed");
                return Err(ClientError::from_transport(&e).into());
            }
        };

        let status_code = response.status();
        if !status_code.is_success() {
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(
                        resource,
                        error = %e.without_url(),
                        "could not read YouTube API error body"
                    );
                    Default::default()
                }
            };
            let error = ClientError::from_response(status_code, &body);
            tracing::warn!(
                resource,
                status = status_code.as_u16(),
                reason = %error.reason(),
                upstream_reason = error.upstream_reason(),
                "YouTube API request failed"
            );
            return Err(error.into());
        }

        Ok(response)
    }

    /// Calls the `channels.list` API for a single channel.
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The channel to look up
    /// * `part` - Comma-separated resource parts, e.g. `snippet` or `contentDetails`
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    pub async fn list_channels(
        &self,
        channel_id: &str,
        part: &str,
    ) -> eyre::Result<ChannelListResponse> {
        let query_params = [("part", part), ("id", channel_id)];

        let response = self.get("channels", &query_params).await?;

        let channels: ChannelListResponse = response
            .json()
            .await
            .context("parse YouTube channels API response as JSON")?;

        tracing::debug!(
            total_results = channels.page_info.total_results,
            returned_items = channels.items.len(),
            "fetched channels"
        );

        Ok(channels)
    }

    /// Calls the `playlists.list` API for the playlists owned by a channel.
    ///
    /// Only the first page of results is fetched.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlists/list>
    #[instrument(skip(self))]
    pub async fn list_playlists(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> eyre::Result<PlaylistListResponse> {
        let max_results_string = max_results.to_string();
        let query_params = [
            ("part", "snippet,contentDetails"),
            ("channelId", channel_id),
            ("maxResults", max_results_string.as_str()),
        ];

        let response = self.get("playlists", &query_params).await?;

        let playlists: PlaylistListResponse = response
            .json()
            .await
            .context("parse YouTube playlists API response as JSON")?;

        tracing::debug!(
            total_results = playlists.page_info.total_results,
            returned_items = playlists.items.len(),
            "fetched playlists"
        );

        Ok(playlists)
    }

    /// Calls the `playlistItems.list` API for the entries of one playlist.
    ///
    /// Only the first page of results is fetched.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    pub async fn list_playlist_items(
        &self,
        playlist_id: &str,
        part: &str,
        max_results: u32,
    ) -> eyre::Result<PlaylistItemListResponse> {
        let max_results_string = max_results.to_string();
        let query_params = [
            ("part", part),
            ("playlistId", playlist_id),
            ("maxResults", max_results_string.as_str()),
        ];

        let response = self.get("playlistItems", &query_params).await?;

        let items: PlaylistItemListResponse = response
            .json()
            .await
            .context("parse YouTube playlistItems API response as JSON")?;

        tracing::debug!(
            total_results = items.page_info.total_results,
            returned_items = items.items.len(),
            "fetched playlist items"
        );

        Ok(items)
    }

    /// Calls the `videos.list` API for one or more videos, including their duration.
    ///
    /// # Arguments
    ///
    /// * `video_ids` - One id, or several joined with commas (at most 50)
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    pub async fn list_videos(&self, video_ids: &str) -> eyre::Result<VideoListResponse> {
        let query_params = [("part", "snippet,contentDetails"), ("id", video_ids)];

        let response = self.get("videos", &query_params).await?;

        let videos: VideoListResponse = response
            .json()
            .await
            .context("parse YouTube videos API response as JSON")?;

        tracing::debug!(
            total_results = videos.page_info.total_results,
            returned_items = videos.items.len(),
            "fetched videos"
        );

        Ok(videos)
    }
}
