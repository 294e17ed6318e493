//! YouTube Channels API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response structure for the `channels.list` API call.
///
/// Contains a list of [`Channel`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    #[serde(default)]
    pub kind: String,
    /// A list of channels that match the request criteria.
    ///
    /// YouTube omits this field entirely when no channel matches.
    #[serde(default)]
    pub items: Vec<Channel>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// Which of the optional parts are present depends on the `part` parameter of the request.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    #[serde(default)]
    pub id: String,
    /// Basic details about the channel. Requested with `part=snippet`.
    pub snippet: Option<ChannelSnippet>,
    /// Information about the channel's content. Requested with `part=contentDetails`.
    #[serde(rename = "contentDetails")]
    pub content_details: Option<ChannelContentDetails>,
}

/// The snippet object contains basic details about the channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelSnippet {
    /// The channel's title.
    #[serde(default)]
    pub title: String,
    /// The channel's description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The date and time that the channel was created.
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists", default)]
    pub related_playlists: RelatedPlaylists,
}

/// Playlists YouTube maintains automatically for every channel.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The ID of the playlist that contains the channel's uploaded videos, newest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads: Option<String>,
    /// The ID of the playlist that contains the channel's liked videos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<String>,
}

impl Channel {
    /// The uploads playlist id, if the response carried one.
    pub fn uploads_playlist_id(&self) -> Option<&str> {
        self.content_details
            .as_ref()
            .and_then(|details| details.related_playlists.uploads.as_deref())
            .filter(|id| !id.is_empty())
    }

    /// The channel title, if the response carried a non-empty one.
    pub fn title(&self) -> Option<&str> {
        self.snippet
            .as_ref()
            .map(|snippet| snippet.title.as_str())
            .filter(|title| !title.is_empty())
    }
}
