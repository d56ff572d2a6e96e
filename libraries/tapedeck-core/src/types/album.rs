//! Album types

use super::{null_as_default, Song};
use serde::{Deserialize, Serialize};

/// An album
///
/// Song order is track order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Album {
    #[serde(default, alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, alias = "Artist", deserialize_with = "null_as_default")]
    pub artist: String,

    #[serde(default, alias = "Genre", deserialize_with = "null_as_default")]
    pub genre: String,

    #[serde(default, alias = "Songs", deserialize_with = "null_as_default")]
    pub songs: Vec<Song>,
}

impl Album {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            genre: genre.into(),
            songs: Vec::new(),
        }
    }

    /// Append a song (builder style)
    #[must_use]
    pub fn with_song(mut self, song: Song) -> Self {
        self.songs.push(song);
        self
    }

    /// Get a song by 0-based track index
    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Number of tracks
    pub fn track_count(&self) -> usize {
        self.songs.len()
    }
}
