//! YouTube PlaylistItems API types.
//!
//! Playlist items are lightweight membership entries. They carry a reference to the
//! underlying video and a copy of its title, description and thumbnails, but no duration.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response structure for the `playlistItems.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    /// The value will be `youtube#playlistItemListResponse`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// The ID of the membership entry itself, not of the video.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: PlaylistItemSnippet,
    #[serde(rename = "contentDetails", skip_serializing_if = "Option::is_none")]
    pub content_details: Option<PlaylistItemContentDetails>,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#snippet>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlaylistItemSnippet {
    /// The date and time that the item was added to the playlist.
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// The ID of the channel that owns the playlist.
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    /// Identifies the resource this playlist entry points at.
    #[serde(rename = "resourceId", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ResourceId {
    /// Typically `youtube#video`.
    #[serde(default)]
    pub kind: String,
    #[serde(rename = "videoId", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#contentDetails>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlaylistItemContentDetails {
    #[serde(rename = "videoId", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// The date and time that the video was published to YouTube.
    #[serde(rename = "videoPublishedAt", skip_serializing_if = "Option::is_none")]
    pub video_published_at: Option<Timestamp>,
}

impl PlaylistItem {
    /// The id of the referenced video, or `None` if the entry does not resolve to one.
    pub fn video_id(&self) -> Option<&str> {
        self.snippet
            .resource_id
            .as_ref()
            .and_then(|resource| resource.video_id.as_deref())
            .or_else(|| {
                self.content_details
                    .as_ref()
                    .and_then(|details| details.video_id.as_deref())
            })
            .filter(|id| !id.is_empty())
    }
}
