//! Minimal track metadata record shared between the renderer crates.
//!
//! [`TrackInfo`] carries the handful of text fields a UPnP control point
//! cares about for "now playing" display. Every field is optional and
//! independent; the surrounding playback layer fills them in as tags become
//! known and clears the record between tracks.
//!
//! # Examples
//!
//! ```rust
//! use renmetadata::TrackInfo;
//!
//! let mut track = TrackInfo::new();
//! track.title = Some("My Song".to_string());
//! track.artist = Some("Artist Name".to_string());
//!
//! assert!(!track.is_empty());
//! track.clear();
//! assert!(track.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// In-memory record of the currently playing track.
///
/// A plain value object: the owner mutates fields directly. Absent means
/// "unknown", which downstream consumers treat differently from an empty
/// string (an unknown field is left alone when patching a control-point
/// document). The record is never shared across concurrent writers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub composer: Option<String>,
}

impl TrackInfo {
    /// Creates a record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every owned field, returning the record to its all-absent state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.genre.is_none()
            && self.composer.is_none()
    }
}
