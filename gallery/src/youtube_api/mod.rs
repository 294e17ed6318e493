//! Read-only client for the YouTube Data API v3.
//!
//! This module talks to the four list endpoints the gallery needs and keeps the upstream
//! JSON shapes close to how YouTube documents them:
//!
//! - [`channels`] - channel title and the id of the channel's uploads playlist
//! - [`playlists`] - the playlists a channel owns, with their item counts
//! - [`playlist_items`] - membership entries of one playlist
//! - [`videos`] - full video details, including duration
//!
//! Anything that goes wrong is classified into a [`ClientError`] by [`error`].

pub mod channels;
pub mod client;
pub mod error;
pub mod playlist_items;
pub mod playlists;
pub mod types;
pub mod videos;

pub use client::YouTubeClient;
pub use error::{ClientError, ErrorReason};
pub use types::{PageInfo, Thumbnail, Thumbnails, VideoIdentifier};
