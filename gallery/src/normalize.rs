//! Flat records and the mapping from YouTube API shapes into them.
//!
//! Normalization is total: missing optional fields become empty strings or zero, items
//! are never dropped or reordered, and nothing here can fail.

use crate::youtube_api::{playlist_items, playlists, videos};
use jiff::{Span, SpanTotal, Timestamp, Unit};
use serde::{Deserialize, Serialize};

/// One playable video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Empty if no thumbnail could be resolved.
    pub thumbnail_url: String,
    /// When the video was published. The Unix epoch if YouTube did not say.
    pub published_at: Timestamp,
    /// ISO 8601 duration such as `PT4M13S`.
    ///
    /// Only populated by lookups that go through `videos.list`; listings built from
    /// playlist entries alone leave it empty.
    pub duration: String,
    pub channel_id: String,
}

/// One named collection of videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    /// YouTube's count at fetch time, independent of how many items any one call returns.
    pub video_count: u32,
    pub channel_id: String,
}

/// How to render a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Jan 5, 2024`
    Short,
    /// `January 5, 2024`
    Long,
}

/// The thumbnail YouTube serves for every video, whether or not the API listed it.
pub fn fallback_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}

/// URL for the embedded player.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=0&rel=0&modestbranding=1")
}

/// Normalizes a full `videos.list` item.
///
/// The thumbnail is left empty when the item carries none.
pub fn video_from_details(item: videos::Video) -> Video {
    let snippet = item.snippet;
    Video {
        id: item.id.as_str().to_string(),
        thumbnail_url: snippet
            .thumbnails
            .best_url()
            .unwrap_or_default()
            .to_string(),
        title: snippet.title,
        description: snippet.description,
        published_at: snippet.published_at.unwrap_or(Timestamp::UNIX_EPOCH),
        duration: item
            .content_details
            .map(|details| details.duration)
            .unwrap_or_default(),
        channel_id: snippet.channel_id,
    }
}

/// Normalizes an entry of a channel's uploads playlist.
///
/// Unlike [`video_from_details`], a missing thumbnail is replaced by
/// [`fallback_thumbnail_url`] when the video id is known.
pub fn video_from_upload(item: playlist_items::PlaylistItem) -> Video {
    let id = item.video_id().unwrap_or_default().to_string();
    let snippet = item.snippet;
    let thumbnail_url = match snippet.thumbnails.best_url() {
        Some(url) => url.to_string(),
        None if !id.is_empty() => fallback_thumbnail_url(&id),
        None => String::new(),
    };
    Video {
        id,
        thumbnail_url,
        title: snippet.title,
        description: snippet.description,
        published_at: snippet.published_at.unwrap_or(Timestamp::UNIX_EPOCH),
        duration: String::new(),
        channel_id: snippet.channel_id,
    }
}

pub fn playlist_from_resource(item: playlists::Playlist) -> Playlist {
    let snippet = item.snippet;
    Playlist {
        id: item.id,
        thumbnail_url: snippet
            .thumbnails
            .best_url()
            .unwrap_or_default()
            .to_string(),
        title: snippet.title,
        description: snippet.description,
        video_count: item.content_details.item_count,
        channel_id: snippet.channel_id,
    }
}

impl Video {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn embed_url(&self) -> String {
        embed_url(&self.id)
    }

    /// The publish date in UTC.
    pub fn published_on(&self, style: DateStyle) -> String {
        let format = match style {
            DateStyle::Short => "%b %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
        };
        self.published_at.strftime(format).to_string()
    }

    /// The duration as `m:ss` or `h:mm:ss`.
    ///
    /// Days are folded into hours, so `P1DT2H3M4S` is `26:03:04`. Live and upcoming videos
    /// report `P0D`, which is `0:00`.
    ///
    /// `None` if the duration is empty (as in playlist listings) or does not parse.
    pub fn duration_label(&self) -> Option<String> {
        let span: Span = self.duration.parse().ok()?;
        if span.is_negative() {
            return None;
        }
        let secs = span
            .total(SpanTotal::from(Unit::Second).days_are_24_hours())
            .ok()? as i64;
        let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);
        Some(if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        })
    }
}

impl Playlist {
    pub fn video_count_label(&self) -> String {
        match self.video_count {
            1 => "1 video".to_string(),
            n => format!("{n} videos"),
        }
    }
}
