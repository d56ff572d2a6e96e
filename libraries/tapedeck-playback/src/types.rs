//! Core types for playback management

use std::fmt;
use std::time::Duration;
use tapedeck_core::{Album, Song};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No song selected
    Stopped,

    /// Clock running
    Playing,

    /// Clock frozen mid-song
    Paused,
}

impl PlaybackState {
    /// Whether a song is selected
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Stopped)
    }
}

/// Position of a song in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SongCursor {
    /// 0-based album index in the catalog
    pub album: usize,

    /// 0-based track index in the album
    pub song: usize,
}

impl SongCursor {
    pub fn new(album: usize, song: usize) -> Self {
        Self { album, song }
    }
}

/// Result of a playback control action
///
/// Precondition misses (pausing while paused, skipping past the last track)
/// are reported here rather than as errors; they leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlOutcome {
    /// A song was selected and the clock started from zero
    NowPlaying { song: String, duration: String },

    /// Paused session resumed
    Resumed { song: String },

    /// Play requested while already playing
    AlreadyPlaying { song: String },

    Paused,

    AlreadyPaused,

    Stopped,

    /// Next requested on the last track or with nothing playing
    NoNextSong,

    /// Previous requested on the first track or with nothing playing
    NoPreviousSong,

    /// Play or pause requested with nothing selected
    NothingPlaying,
}

impl ControlOutcome {
    pub(crate) fn now_playing(song: &Song) -> Self {
        Self::NowPlaying {
            song: song.name.clone(),
            duration: song.duration.clone(),
        }
    }

    /// Whether the action changed session state
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            Self::NowPlaying { .. } | Self::Resumed { .. } | Self::Paused | Self::Stopped
        )
    }
}

impl fmt::Display for ControlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NowPlaying { song, duration } => write!(f, "Now playing: {} ({})", song, duration),
            Self::Resumed { song } => write!(f, "Resumed playing: {}", song),
            Self::AlreadyPlaying { song } => write!(f, "Already playing: {}", song),
            Self::Paused => f.write_str("Paused playback."),
            Self::AlreadyPaused => f.write_str("Already paused."),
            Self::Stopped => f.write_str("Stopped playback."),
            Self::NoNextSong => f.write_str("No next song available."),
            Self::NoPreviousSong => f.write_str("No previous song available."),
            Self::NothingPlaying => f.write_str("No song is currently playing."),
        }
    }
}

/// Snapshot of the current song and its elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlaying<'a> {
    pub cursor: SongCursor,
    pub album: &'a Album,
    pub song: &'a Song,
    pub state: PlaybackState,

    /// Time on the session clock, unbounded
    pub elapsed: Duration,

    /// `elapsed` clamped to the song's stated length
    pub display_elapsed: Duration,
}

impl fmt::Display for NowPlaying<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Playing: {}, Time Elapsed: {}",
            self.song.name,
            format_clock(self.display_elapsed)
        )
    }
}

/// Format a duration as `HH:MM:SS`
///
/// Sub-second precision is truncated. Hours are not wrapped at 24.
pub fn format_clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_clock_pads_and_normalizes() {
        assert_eq!(format_clock(Duration::ZERO), "00:00:00");
        assert_eq!(format_clock(Duration::from_millis(2_999)), "00:00:02");
        assert_eq!(format_clock(Duration::from_secs(225)), "00:03:45");
        assert_eq!(format_clock(Duration::from_secs(75 * 60 + 30)), "01:15:30");
        assert_eq!(format_clock(Duration::from_secs(100 * 3600)), "100:00:00");
    }

    #[test]
    fn outcome_messages() {
        let outcome = ControlOutcome::now_playing(&Song::new("One", "03:45"));
        assert_eq!(outcome.to_string(), "Now playing: One (03:45)");
        assert!(outcome.changed_state());

        assert_eq!(ControlOutcome::AlreadyPaused.to_string(), "Already paused.");
        assert!(!ControlOutcome::AlreadyPaused.changed_state());
        assert!(!ControlOutcome::NoNextSong.changed_state());
    }

    #[test]
    fn stopped_is_not_active() {
        assert!(!PlaybackState::Stopped.is_active());
        assert!(PlaybackState::Playing.is_active());
        assert!(PlaybackState::Paused.is_active());
    }
}
