//! Substring search over the catalog

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use tapedeck_core::{Album, Song};

/// A single search result
///
/// Indices are 0-based positions in the catalog and the album's track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit<'a> {
    /// Album name or artist matched
    Album { album_index: usize, album: &'a Album },

    /// Song name matched
    Song {
        album_index: usize,
        song_index: usize,
        album: &'a Album,
        song: &'a Song,
    },
}

impl<'a> SearchHit<'a> {
    /// The album this hit belongs to
    pub fn album(&self) -> &'a Album {
        match *self {
            Self::Album { album, .. } | Self::Song { album, .. } => album,
        }
    }

    pub fn is_album(&self) -> bool {
        matches!(self, Self::Album { .. })
    }
}

impl Catalog {
    /// Case-insensitive substring search
    ///
    /// Album hits (album name or artist contains the query) come first in
    /// catalog order, followed by song hits in catalog and track order.
    ///
    /// # Errors
    /// `CatalogError::EmptyQuery` if the query is empty or only whitespace
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit<'_>>> {
        if query.trim().is_empty() {
            return Err(CatalogError::EmptyQuery);
        }

        let needle = query.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        let album_hits = self
            .albums()
            .iter()
            .enumerate()
            .filter(|(_, album)| contains(&album.name) || contains(&album.artist))
            .map(|(album_index, album)| SearchHit::Album { album_index, album });

        let song_hits = self
            .albums()
            .iter()
            .enumerate()
            .flat_map(|(album_index, album)| {
                album
                    .songs
                    .iter()
                    .enumerate()
                    .map(move |(song_index, song)| (album_index, song_index, album, song))
            })
            .filter(|(_, _, _, song)| contains(&song.name))
            .map(|(album_index, song_index, album, song)| SearchHit::Song {
                album_index,
                song_index,
                album,
                song,
            });

        let hits: Vec<_> = album_hits.chain(song_hits).collect();
        tracing::debug!("Search for {:?} matched {} entries", query, hits.len());
        Ok(hits)
    }
}
