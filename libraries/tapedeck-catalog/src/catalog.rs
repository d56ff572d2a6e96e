//! Album catalog

use crate::error::{CatalogError, Result};
use std::path::Path;
use tapedeck_core::{Album, AlbumSource, TapedeckError};

/// Ordered, read-only collection of albums
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    /// Catalog with no albums
    ///
    /// Used as the fallback when the library file cannot be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_albums(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// Load a catalog from a JSON library file
    ///
    /// The file must contain an array of album records.
    ///
    /// # Errors
    /// `CatalogError::Read` if the file cannot be read,
    /// `CatalogError::Parse` if its contents are not an album list
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} albums ({} songs) from {}",
            catalog.len(),
            catalog.song_count(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let albums: Vec<Album> = serde_json::from_str(json)?;
        Ok(Self::from_albums(albums))
    }

    /// Get an album by 0-based index
    ///
    /// # Errors
    /// `CatalogError::OutOfRange` if `index` is not below `len()`
    pub fn get_by_index(&self, index: usize) -> Result<&Album> {
        self.albums.get(index).ok_or(CatalogError::OutOfRange {
            index,
            len: self.albums.len(),
        })
    }

    /// All albums in load order
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Total number of songs across all albums
    pub fn song_count(&self) -> usize {
        self.albums.iter().map(Album::track_count).sum()
    }
}

impl AlbumSource for Catalog {
    fn album(&self, index: usize) -> tapedeck_core::Result<&Album> {
        self.get_by_index(index).map_err(TapedeckError::from)
    }

    fn album_count(&self) -> usize {
        self.len()
    }
}
