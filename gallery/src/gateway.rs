//! The gateway the rest of the application talks to.
//!
//! A [`Gateway`] is always constructible. If the configuration is incomplete it is built in
//! an unconfigured state, and every operation then fails with the configuration error
//! without touching the network. That lets a front-end show a helpful message instead of
//! failing at startup.

use crate::config::GalleryConfig;
use crate::normalize::{self, Playlist, Video};
use crate::youtube_api::{ClientError, YouTubeClient};
use tokio::sync::OnceCell;
use tracing::instrument;

/// Shown in place of the channel title whenever it cannot be fetched.
pub const FALLBACK_CHANNEL_NAME: &str = "Kids Arts & Learn";

pub const DEFAULT_RECENT_VIDEOS: u32 = 12;
pub const DEFAULT_PLAYLISTS: u32 = 50;
pub const DEFAULT_PLAYLIST_VIDEOS: u32 = 50;

#[derive(Debug)]
enum GatewayState {
    Ready(YouTubeClient),
    Unconfigured(ClientError),
}

/// Read-only access to one channel's videos and playlists.
///
/// Share a single instance (e.g. behind an [`Arc`](std::sync::Arc)) so the channel name is
/// only fetched once.
#[derive(Debug)]
pub struct Gateway {
    state: GatewayState,
    channel_id: String,
    channel_name: OnceCell<String>,
}

impl Gateway {
    /// Creates a gateway from `config`.
    ///
    /// This never fails. A missing API key takes precedence over a missing channel id, and
    /// both over a base URL the HTTP client cannot use.
    pub fn new(config: GalleryConfig) -> Self {
        let GalleryConfig {
            api_key,
            channel_id,
            base_url,
            timeout,
        } = config;

        let state = match (api_key, &channel_id) {
            (None, _) => Err(ClientError::missing_api_key()),
            (Some(_), None) => Err(ClientError::missing_channel_id()),
            (Some(api_key), Some(_)) => YouTubeClient::new(api_key, &base_url, timeout),
        };
        let state = match state {
            Ok(client) => GatewayState::Ready(client),
            Err(error) => {
                tracing::warn!(
                    reason = %error.reason(),
                    "YouTube gateway is not configured: {error}"
                );
                GatewayState::Unconfigured(error)
            }
        };

        Self {
            state,
            channel_id: channel_id.unwrap_or_default(),
            channel_name: OnceCell::new(),
        }
    }

    /// Whether operations can reach the API at all.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, GatewayState::Ready(_))
    }

    /// The configured channel id, or an empty string if none was configured.
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    fn client(&self) -> Result<&YouTubeClient, ClientError> {
        match &self.state {
            GatewayState::Ready(client) => Ok(client),
            GatewayState::Unconfigured(error) => Err(error.clone()),
        }
    }

    /// Returns the channel's display title.
    ///
    /// The first successful lookup is cached for the lifetime of the gateway. Any failure,
    /// including a missing configuration, yields [`FALLBACK_CHANNEL_NAME`] instead.
    #[instrument(skip(self))]
    pub async fn get_channel_name(&self) -> String {
        match self
            .channel_name
            .get_or_try_init(|| self.fetch_channel_name())
            .await
        {
            Ok(name) => name.clone(),
            Err(error) => {
                tracing::warn!(
                    reason = %error.reason(),
                    "using fallback channel name: {error}"
                );
                FALLBACK_CHANNEL_NAME.to_string()
            }
        }
    }

    async fn fetch_channel_name(&self) -> Result<String, ClientError> {
        let client = self.client()?;
        let channels = client
            .list_channels(&self.channel_id, "snippet")
            .await
            .map_err(|e| classify(e, "Failed to fetch channel name."))?;

        let name = channels
            .items
            .first()
            .and_then(|channel| channel.title())
            .ok_or_else(ClientError::channel_not_found)?;
        tracing::debug!(name, "resolved channel name");
        Ok(name.to_string())
    }

    /// Returns up to `max_results` of the channel's most recent uploads, newest first.
    ///
    /// Looks up the channel's uploads playlist, then lists it. The order is exactly the one
    /// YouTube returns. The `duration` of each video is left empty.
    #[instrument(skip(self))]
    pub async fn get_recent_videos(&self, max_results: u32) -> Result<Vec<Video>, ClientError> {
        let client = self.client()?;
        self.recent_videos(client, max_results)
            .await
            .map_err(|e| classify(e, "Failed to fetch recent videos."))
    }

    async fn recent_videos(
        &self,
        client: &YouTubeClient,
        max_results: u32,
    ) -> eyre::Result<Vec<Video>> {
        let channels = client
            .list_channels(&self.channel_id, "contentDetails")
            .await?;
        let Some(channel) = channels.items.first() else {
            return Err(ClientError::channel_not_found().into());
        };
        let Some(uploads) = channel.uploads_playlist_id() else {
            eyre::bail!("channel {} has no uploads playlist", self.channel_id);
        };

        let items = client
            .list_playlist_items(uploads, "snippet,contentDetails", max_results)
            .await?;

        Ok(items
            .items
            .into_iter()
            .map(normalize::video_from_upload)
            .collect())
    }

    /// Returns up to `max_results` playlists owned by the channel.
    #[instrument(skip(self))]
    pub async fn get_playlists(&self, max_results: u32) -> Result<Vec<Playlist>, ClientError> {
        let client = self.client()?;
        let playlists = client
            .list_playlists(&self.channel_id, max_results)
            .await
            .map_err(|e| classify(e, "Failed to fetch playlists."))?;

        Ok(playlists
            .items
            .into_iter()
            .map(normalize::playlist_from_resource)
            .collect())
    }

    /// Returns the videos of a playlist, with full details including duration.
    ///
    /// Lists up to `max_results` entries of the playlist, then resolves the referenced
    /// videos in one batched lookup. If no entry references a video, the second lookup is
    /// skipped and the result is empty.
    #[instrument(skip(self))]
    pub async fn get_playlist_videos(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<Video>, ClientError> {
        let client = self.client()?;
        Self::playlist_videos(client, playlist_id, max_results)
            .await
            .map_err(|e| classify(e, "Failed to fetch playlist videos."))
    }

    async fn playlist_videos(
        client: &YouTubeClient,
        playlist_id: &str,
        max_results: u32,
    ) -> eyre::Result<Vec<Video>> {
        let items = client
            .list_playlist_items(playlist_id, "snippet", max_results)
            .await?;

        let video_ids: Vec<&str> = items
            .items
            .iter()
            .filter_map(|item| item.video_id())
            .collect();
        if video_ids.is_empty() {
            tracing::debug!(
                entries = items.items.len(),
                "playlist has no resolvable videos"
            );
            return Ok(Vec::new());
        }

        let videos = client.list_videos(&video_ids.join(",")).await?;

        Ok(videos
            .items
            .into_iter()
            .map(normalize::video_from_details)
            .collect())
    }

    /// Returns full details for one video.
    #[instrument(skip(self))]
    pub async fn get_video_details(&self, video_id: &str) -> Result<Video, ClientError> {
        let client = self.client()?;
        let videos = client
            .list_videos(video_id)
            .await
            .map_err(|e| classify(e, "Failed to fetch video details."))?;

        videos
            .items
            .into_iter()
            .next()
            .map(normalize::video_from_details)
            .ok_or_else(ClientError::video_not_found)
    }
}

/// Recovers an already classified [`ClientError`], or files anything else as a fetch error.
fn classify(report: eyre::Report, fetch_message: &str) -> ClientError {
    match report.downcast::<ClientError>() {
        Ok(error) => error,
        Err(report) => {
            tracing::warn!(error = ?report, "{fetch_message}");
            ClientError::fetch(fetch_message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::ErrorReason;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{any, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CHANNEL: &str = "UCkids";
    const UPLOADS: &str = "UUkids";

    fn config(server: &MockServer) -> GalleryConfig {
        GalleryConfig::new(Some("test-key".to_string()), Some(CHANNEL.to_string()))
            .with_base_url(server.uri())
    }

    fn gateway(server: &MockServer) -> Gateway {
        Gateway::new(config(server))
    }

    /// A mock server that fails the test if it receives any request.
    async fn untouchable_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        server
    }

    /// A base URL with nothing listening on it.
    fn unreachable_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    fn upload_item(video_id: &str, title: &str) -> serde_json::Value {
        json!({
            "kind": "youtube#playlistItem",
            "id": format!("entry-{video_id}"),
            "snippet": {
                "publishedAt": "2024-03-01T10:00:00Z",
                "channelId": CHANNEL,
                "title": title,
                "description": "",
                "thumbnails": {
                    "high": {"url": format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg")}
                },
                "resourceId": {"kind": "youtube#video", "videoId": video_id}
            },
            "contentDetails": {"videoId": video_id, "videoPublishedAt": "2024-03-01T10:00:00Z"}
        })
    }

    fn video_item(video_id: &str, duration: &str) -> serde_json::Value {
        json!({
            "kind": "youtube#video",
            "id": video_id,
            "snippet": {
                "publishedAt": "2024-02-10T08:00:00Z",
                "channelId": CHANNEL,
                "title": format!("Video {video_id}"),
                "description": "A video",
                "thumbnails": {
                    "default": {"url": format!("https://i.ytimg.com/vi/{video_id}/default.jpg")}
                }
            },
            "contentDetails": {"duration": duration, "dimension": "2d", "definition": "hd"}
        })
    }

    async fn mount_uploads_channel(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("part", "contentDetails"))
            .and(query_param("id", CHANNEL))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "youtube#channelListResponse",
                "pageInfo": {"totalResults": 1, "resultsPerPage": 5},
                "items": [{
                    "id": CHANNEL,
                    "contentDetails": {"relatedPlaylists": {"uploads": UPLOADS, "likes": ""}}
                }]
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn missing_api_key_fails_every_operation_without_io() {
        let server = untouchable_server().await;
        let gateway = Gateway::new(
            GalleryConfig::new(None, Some(CHANNEL.to_string())).with_base_url(server.uri()),
        );
        assert!(!gateway.is_ready());

        let errors = [
            gateway.get_recent_videos(12).await.unwrap_err(),
            gateway.get_playlists(50).await.unwrap_err(),
            gateway.get_playlist_videos("PL1", 50).await.unwrap_err(),
            gateway.get_video_details("abc").await.unwrap_err(),
        ];
        for error in errors {
            assert_eq!(error.reason(), ErrorReason::MissingApiKey);
            assert_eq!(error.status(), 401);
        }
    }

    #[tokio::test]
    async fn missing_channel_id_fails_every_operation_without_io() {
        let server = untouchable_server().await;
        let gateway = Gateway::new(
            GalleryConfig::new(Some("test-key".to_string()), None).with_base_url(server.uri()),
        );
        assert_eq!(gateway.channel_id(), "");

        let errors = [
            gateway.get_recent_videos(12).await.unwrap_err(),
            gateway.get_playlists(50).await.unwrap_err(),
            gateway.get_playlist_videos("PL1", 50).await.unwrap_err(),
            gateway.get_video_details("abc").await.unwrap_err(),
        ];
        for error in errors {
            assert_eq!(error.reason(), ErrorReason::MissingChannelId);
            assert_eq!(error.status(), 400);
        }
    }

    #[tokio::test]
    async fn missing_api_key_takes_precedence() {
        let gateway = Gateway::new(GalleryConfig::new(None, None));
        let error = gateway.get_playlists(50).await.unwrap_err();
        assert_eq!(error.reason(), ErrorReason::MissingApiKey);
    }

    #[tokio::test]
    async fn invalid_base_url_is_an_initialization_error() {
        let gateway = Gateway::new(
            GalleryConfig::new(Some("test-key".to_string()), Some(CHANNEL.to_string()))
                .with_base_url("not a url"),
        );
        assert!(!gateway.is_ready());
        let error = gateway.get_video_details("abc").await.unwrap_err();
        assert_eq!(error.reason(), ErrorReason::InitializationError);
        assert_eq!(error.status(), 500);
    }

    #[tokio::test]
    async fn channel_name_is_fetched_once_and_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("part", "snippet"))
            .and(query_param("id", CHANNEL))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"id": CHANNEL, "snippet": {"title": "Crafty Kids"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway(&server);
        assert_eq!(gateway.get_channel_name().await, "Crafty Kids");
        assert_eq!(gateway.get_channel_name().await, "Crafty Kids");
    }

    #[tokio::test]
    async fn channel_name_falls_back_on_network_failure() {
        let gateway = Gateway::new(
            GalleryConfig::new(Some("test-key".to_string()), Some(CHANNEL.to_string()))
                .with_base_url(unreachable_base_url()),
        );
        assert_eq!(gateway.get_channel_name().await, FALLBACK_CHANNEL_NAME);
    }

    #[tokio::test]
    async fn channel_name_falls_back_when_unconfigured() {
        let server = untouchable_server().await;
        let gateway = Gateway::new(GalleryConfig::new(None, None).with_base_url(server.uri()));
        assert_eq!(gateway.get_channel_name().await, "Kids Arts & Learn");
    }

    #[tokio::test]
    async fn channel_name_failures_are_not_cached() {
        let server = MockServer::start().await;
        Mock::given(path("/channels"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path("/channels"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"id": CHANNEL, "snippet": {"title": "Crafty Kids"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway(&server);
        assert_eq!(gateway.get_channel_name().await, FALLBACK_CHANNEL_NAME);
        assert_eq!(gateway.get_channel_name().await, "Crafty Kids");
    }

    #[tokio::test]
    async fn recent_videos_preserve_upstream_order() {
        let server = MockServer::start().await;
        mount_uploads_channel(&server).await;
        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("part", "snippet,contentDetails"))
            .and(query_param("playlistId", UPLOADS))
            .and(query_param("maxResults", "3"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pageInfo": {"totalResults": 40, "resultsPerPage": 3},
                "items": [
                    upload_item("V3", "Third"),
                    upload_item("V1", "First"),
                    upload_item("V2", "Second"),
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let videos = gateway(&server).get_recent_videos(3).await.unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["V3", "V1", "V2"]);
        assert_eq!(videos[0].title, "Third");
        assert_eq!(
            videos[0].thumbnail_url,
            "https://i.ytimg.com/vi/V3/hqdefault.jpg"
        );
        assert_eq!(videos[0].duration, "");
    }

    #[tokio::test]
    async fn recent_videos_synthesize_missing_thumbnails() {
        let server = MockServer::start().await;
        mount_uploads_channel(&server).await;
        Mock::given(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "id": "entry",
                    "snippet": {
                        "publishedAt": "2024-03-01T10:00:00Z",
                        "title": "Bare",
                        "thumbnails": {},
                        "resourceId": {"videoId": "bare1"}
                    }
                }]
            })))
            .mount(&server)
            .await;

        let videos = gateway(&server).get_recent_videos(12).await.unwrap();
        assert_eq!(
            videos[0].thumbnail_url,
            "https://img.youtube.com/vi/bare1/maxresdefault.jpg"
        );
    }

    #[tokio::test]
    async fn recent_videos_unknown_channel() {
        let server = MockServer::start().await;
        Mock::given(path("/channels"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "youtube#channelListResponse",
                "pageInfo": {"totalResults": 0, "resultsPerPage": 5}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let error = gateway(&server).get_recent_videos(12).await.unwrap_err();
        assert_eq!(error.reason(), ErrorReason::ChannelNotFound);
        assert_eq!(error.status(), 404);
    }

    #[tokio::test]
    async fn recent_videos_without_uploads_playlist_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(path("/channels"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": CHANNEL}]})),
            )
            .mount(&server)
            .await;

        let error = gateway(&server).get_recent_videos(12).await.unwrap_err();
        assert_eq!(error.reason(), ErrorReason::FetchError);
        assert_eq!(error.status(), 500);
        assert_eq!(error.message(), "Failed to fetch recent videos.");
    }

    #[tokio::test]
    async fn recent_videos_quota_exceeded() {
        let server = MockServer::start().await;
        Mock::given(path("/channels"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {
                    "code": 403,
                    "message": "You have exceeded your quota.",
                    "errors": [{
                        "domain": "youtube.quota",
                        "reason": "quotaExceeded",
                        "message": "You have exceeded your quota."
                    }]
                }
            })))
            .mount(&server)
            .await;

        let error = gateway(&server).get_recent_videos(12).await.unwrap_err();
        assert_eq!(error.reason(), ErrorReason::QuotaExceeded);
        assert_eq!(error.status(), 403);
    }

    #[tokio::test]
    async fn playlists_carry_authoritative_counts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .and(query_param("part", "snippet,contentDetails"))
            .and(query_param("channelId", CHANNEL))
            .and(query_param("maxResults", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "id": "PLa",
                        "snippet": {
                            "channelId": CHANNEL,
                            "title": "Painting",
                            "description": "",
                            "thumbnails": {"medium": {"url": "https://i.ytimg.com/a.jpg"}}
                        },
                        "contentDetails": {"itemCount": 120}
                    },
                    {
                        "id": "PLb",
                        "snippet": {
                            "channelId": CHANNEL,
                            "title": "Songs",
                            "description": "Sing along"
                        },
                        "contentDetails": {"itemCount": 0}
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let playlists = gateway(&server)
            .get_playlists(DEFAULT_PLAYLISTS)
            .await
            .unwrap();
        assert_eq!(
            playlists,
            vec![
                Playlist {
                    id: "PLa".to_string(),
                    title: "Painting".to_string(),
                    description: String::new(),
                    thumbnail_url: "https://i.ytimg.com/a.jpg".to_string(),
                    video_count: 120,
                    channel_id: CHANNEL.to_string(),
                },
                Playlist {
                    id: "PLb".to_string(),
                    title: "Songs".to_string(),
                    description: "Sing along".to_string(),
                    thumbnail_url: String::new(),
                    video_count: 0,
                    channel_id: CHANNEL.to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn playlist_videos_resolve_details_in_one_batch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("part", "snippet"))
            .and(query_param("playlistId", "PLa"))
            .and(query_param("maxResults", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    upload_item("a1", "One"),
                    {"id": "deleted", "snippet": {"title": "Deleted video"}},
                    upload_item("a2", "Two"),
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("part", "snippet,contentDetails"))
            .and(query_param("id", "a1,a2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [video_item("a1", "PT3M5S"), video_item("a2", "PT1H0M1S")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let videos = gateway(&server)
            .get_playlist_videos("PLa", DEFAULT_PLAYLIST_VIDEOS)
            .await
            .unwrap();
        let summary: Vec<(&str, &str)> = videos
            .iter()
            .map(|v| (v.id.as_str(), v.duration.as_str()))
            .collect();
        assert_eq!(summary, [("a1", "PT3M5S"), ("a2", "PT1H0M1S")]);
        assert_eq!(videos[1].duration_label().as_deref(), Some("1:00:01"));
    }

    #[tokio::test]
    async fn playlist_without_resolvable_videos_skips_details_lookup() {
        let server = MockServer::start().await;
        Mock::given(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"id": "e1", "snippet": {"title": "Private video"}},
                    {"id": "e2", "snippet": {
                        "title": "Deleted video",
                        "resourceId": {"kind": "youtube#video"}
                    }}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(path("/videos"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let videos = gateway(&server)
            .get_playlist_videos("PLx", 50)
            .await
            .unwrap();
        assert!(videos.is_empty());
    }

    #[tokio::test]
    async fn playlist_not_found() {
        let server = MockServer::start().await;
        Mock::given(path("/playlistItems"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": 404, "message": "The playlist could not be found.",
                          "errors": [{"reason": "playlistNotFound"}]}
            })))
            .mount(&server)
            .await;

        let error = gateway(&server)
            .get_playlist_videos("PLmissing", 50)
            .await
            .unwrap_err();
        assert_eq!(error.reason(), ErrorReason::NotFound);
        assert_eq!(error.status(), 404);
        assert_eq!(error.upstream_reason(), Some("playlistNotFound"));
    }

    #[tokio::test]
    async fn video_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("id", "a1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": [video_item("a1", "PT4M13S")]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let video = gateway(&server).get_video_details("a1").await.unwrap();
        assert_eq!(video.id, "a1");
        assert_eq!(video.title, "Video a1");
        assert_eq!(video.duration, "PT4M13S");
        assert_eq!(video.thumbnail_url, "https://i.ytimg.com/vi/a1/default.jpg");
        assert_eq!(video.published_at.to_string(), "2024-02-10T08:00:00Z");
    }

    #[tokio::test]
    async fn video_details_not_found() {
        let server = MockServer::start().await;
        Mock::given(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "youtube#videoListResponse",
                "items": [],
                "pageInfo": {"totalResults": 0, "resultsPerPage": 0}
            })))
            .mount(&server)
            .await;

        let error = gateway(&server)
            .get_video_details("gone")
            .await
            .unwrap_err();
        assert_eq!(error.reason(), ErrorReason::VideoNotFound);
        assert_eq!(error.status(), 404);
    }

    #[tokio::test]
    async fn undecodable_response_is_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\": 7}"))
            .mount(&server)
            .await;

        let error = gateway(&server).get_video_details("a1").await.unwrap_err();
        assert_eq!(error.reason(), ErrorReason::FetchError);
        assert_eq!(error.message(), "Failed to fetch video details.");
    }

    #[tokio::test]
    async fn timeout_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let gateway = Gateway::new(config(&server).with_timeout(Duration::from_millis(200)));
        let errors = [
            gateway.get_playlists(50).await.unwrap_err(),
            gateway.get_video_details("a1").await.unwrap_err(),
        ];
        for error in errors {
            assert_eq!(error.reason(), ErrorReason::NetworkError);
            assert_eq!(error.status(), 0);
        }
    }

    #[tokio::test]
    async fn network_failure() {
        let gateway = Gateway::new(
            GalleryConfig::new(Some("test-key".to_string()), Some(CHANNEL.to_string()))
                .with_base_url(unreachable_base_url()),
        );
        assert!(gateway.is_ready());

        let error = gateway.get_playlists(50).await.unwrap_err();
        assert_eq!(error.reason(), ErrorReason::NetworkError);
        assert_eq!(error.status(), 0);
    }
}
