//! Tapedeck - Playback Session
//!
//! Simulated playback for Tapedeck. No audio is decoded or played; a session
//! only tracks which song is selected and how much time has elapsed on it.
//!
//! This crate provides:
//! - Song selection by album and track index
//! - Play/pause with elapsed-time bookkeeping across pauses
//! - Stop
//! - Next/previous navigation within the current album
//! - Elapsed-time reporting clamped to the song's stated length
//!
//! # Architecture
//!
//! `tapedeck-playback` depends only on `tapedeck-core`:
//! - Albums are looked up through the `AlbumSource` trait
//! - Time is read through the `Clock` trait
//!
//! The session holds a cursor into the library, never a copy of album data.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tapedeck_core::{Album, ManualClock, Song};
//! use tapedeck_playback::{ControlOutcome, PlaybackSession, PlaybackState};
//!
//! let library = Arc::new(vec![
//!     Album::new("A", "X", "Pop")
//!         .with_song(Song::new("One", "03:45"))
//!         .with_song(Song::new("Two", "04:10")),
//! ]);
//! let clock = ManualClock::new();
//! let mut session = PlaybackSession::with_clock(library, clock.clone());
//!
//! session.select_song(0, 0).unwrap();
//! clock.advance(Duration::from_secs(2));
//!
//! let now = session.now_playing().unwrap().unwrap();
//! assert_eq!(now.to_string(), "Playing: One, Time Elapsed: 00:00:02");
//!
//! session.pause();
//! assert_eq!(session.state(), PlaybackState::Paused);
//!
//! assert_eq!(session.next().unwrap().to_string(), "Now playing: Two (04:10)");
//! assert_eq!(session.next().unwrap(), ControlOutcome::NoNextSong);
//! ```

mod error;
mod session;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use session::PlaybackSession;
pub use types::{format_clock, ControlOutcome, NowPlaying, PlaybackState, SongCursor};
