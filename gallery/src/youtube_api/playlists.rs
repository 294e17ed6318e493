//! YouTube Playlists API types.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response structure for the `playlists.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistListResponse {
    /// The value will be `youtube#playlistListResponse`.
    #[serde(default)]
    pub kind: String,
    /// A list of playlists that match the request criteria.
    #[serde(default)]
    pub items: Vec<Playlist>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A `playlist` resource represents a YouTube playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Playlist {
    /// The ID that YouTube uses to uniquely identify the playlist.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: PlaylistSnippet,
    #[serde(rename = "contentDetails", default)]
    pub content_details: PlaylistContentDetails,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlists#snippet>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlaylistSnippet {
    /// The date and time that the playlist was created.
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    /// The ID of the channel that published the playlist.
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(rename = "channelTitle", skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
}

/// See: <https://developers.google.com/youtube/v3/docs/playlists#contentDetails>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlaylistContentDetails {
    /// The number of videos in the playlist.
    #[serde(rename = "itemCount", default)]
    pub item_count: u32,
}
