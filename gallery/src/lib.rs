//! Read-only access to one YouTube channel's uploads and playlists.
//!
//! The [`Gateway`] wraps the YouTube Data API v3, turns its nested, optional-heavy
//! responses into flat [`Video`] and [`Playlist`] records, and classifies every failure
//! into a [`ClientError`].
//!
//! ```rust,no_run
//! use channel_gallery::{DEFAULT_RECENT_VIDEOS, GalleryConfig, Gateway};
//!
//! # async fn example() -> Result<(), channel_gallery::ClientError> {
//! let gateway = Gateway::new(GalleryConfig::from_env());
//! println!("{}", gateway.get_channel_name().await);
//! for video in gateway.get_recent_videos(DEFAULT_RECENT_VIDEOS).await? {
//!     println!("{} {}", video.id, video.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod gateway;
pub mod normalize;
pub mod youtube_api;

pub use config::GalleryConfig;
pub use gateway::{
    DEFAULT_PLAYLIST_VIDEOS, DEFAULT_PLAYLISTS, DEFAULT_RECENT_VIDEOS, FALLBACK_CHANNEL_NAME,
    Gateway,
};
pub use normalize::{DateStyle, Playlist, Video, embed_url};
pub use youtube_api::{ClientError, ErrorReason};
