//! Song types

use super::{null_as_default, SongLength};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A song within an album
///
/// Songs have no identity of their own; they are addressed by position in
/// their album's track list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    #[serde(default, alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    /// Length as written in the library file (`MM:SS`, minutes may exceed 59)
    #[serde(default, alias = "Duration", deserialize_with = "null_as_default")]
    pub duration: String,
}

impl Song {
    pub fn new(name: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
        }
    }

    /// Parse the stated duration
    ///
    /// # Errors
    /// Returns `TapedeckError::InvalidDuration` if the string is not `MM:SS`
    pub fn length(&self) -> Result<SongLength> {
        self.duration.parse()
    }
}
