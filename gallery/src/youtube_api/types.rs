//! Shared types for the YouTube API resource shapes.

use serde::{Deserialize, Serialize};

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}

/// A single thumbnail image variant.
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    /// The image's URL.
    #[serde(default)]
    pub url: String,
    /// The image's width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// The image's height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// The thumbnail variants YouTube attaches to videos, playlists and playlist items.
///
/// Any variant may be missing. Older uploads typically lack `maxres` and `standard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// Returns the URL of the highest resolution variant that is present.
    ///
    /// Variants are tried in the order `maxres`, `standard`, `high`, `medium`, `default`.
    /// A variant with an empty URL counts as absent.
    pub fn best_url(&self) -> Option<&str> {
        [
            &self.maxres,
            &self.standard,
            &self.high,
            &self.medium,
            &self.default,
        ]
        .into_iter()
        .flatten()
        .map(|thumbnail| thumbnail.url.as_str())
        .find(|url| !url.is_empty())
    }
}

/// The `id` field of a video-like resource.
///
/// `videos.list` returns a bare string, while search results and some other
/// endpoints return an object that carries the id in its `videoId` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoIdentifier {
    Bare(String),
    Nested {
        #[serde(rename = "videoId", default, skip_serializing_if = "Option::is_none")]
        video_id: Option<String>,
    },
}

impl VideoIdentifier {
    /// The bare video id, or an empty string if the nested form carries none.
    pub fn as_str(&self) -> &str {
        match self {
            VideoIdentifier::Bare(id) => id,
            VideoIdentifier::Nested { video_id } => video_id.as_deref().unwrap_or_default(),
        }
    }
}

impl Default for VideoIdentifier {
    fn default() -> Self {
        VideoIdentifier::Bare(String::new())
    }
}
