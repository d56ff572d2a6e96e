/// Core traits for Tapedeck
use crate::error::Result;
use crate::types::Album;
use std::time::Instant;

/// Read-only album lookup
///
/// Implemented by the catalog. The playback session only ever holds album
/// indices and resolves them through this trait, so the catalog stays the
/// single owner of album data.
pub trait AlbumSource {
    /// Get an album by 0-based index
    ///
    /// # Errors
    /// Returns `TapedeckError::OutOfRange` if `index` is not a valid position
    fn album(&self, index: usize) -> Result<&Album>;

    /// Number of albums available
    fn album_count(&self) -> usize;
}

impl AlbumSource for Vec<Album> {
    fn album(&self, index: usize) -> Result<&Album> {
        self.get(index).ok_or_else(|| {
            crate::TapedeckError::out_of_range(crate::Entity::Album, index, self.len())
        })
    }

    fn album_count(&self) -> usize {
        self.len()
    }
}

/// Source of the current time
///
/// Injected into the playback session so elapsed-time bookkeeping can be
/// driven deterministically in tests.
pub trait Clock {
    /// Current instant
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
