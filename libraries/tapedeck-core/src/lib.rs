//! Tapedeck Core
//!
//! Core types, traits, and error handling shared by every Tapedeck crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `Song`, `SongLength`
//! - **Core Traits**: `AlbumSource` (album lookup), `Clock` (time source)
//! - **Error Handling**: Unified `TapedeckError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tapedeck_core::types::{Album, Song, SongLength};
//!
//! let album = Album::new("Blue Train", "John Coltrane", "Jazz")
//!     .with_song(Song::new("Moment's Notice", "9:10"));
//!
//! let length: SongLength = album.songs[0].length().unwrap();
//! assert_eq!(length.as_secs(), 550);
//! ```

#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use clock::{ManualClock, SystemClock};
pub use error::{Entity, Result, TapedeckError};
pub use traits::{AlbumSource, Clock};
pub use types::{Album, Song, SongLength};
