//! Playback session - simulated playback state machine
//!
//! Tracks which song is selected and how much time has elapsed on it,
//! across pause/resume and next/previous navigation. No audio is produced;
//! "playing" only means the session clock is running.

use crate::{
    error::Result,
    types::{ControlOutcome, NowPlaying, PlaybackState, SongCursor},
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tapedeck_core::{Album, AlbumSource, Clock, Entity, Song, SystemClock, TapedeckError};

/// Internal session state
///
/// Each variant carries exactly the data that is meaningful in that state,
/// so a running clock without a song, or a stopped session with leftover
/// time, cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Stopped,

    Playing {
        cursor: SongCursor,
        /// Start of the current playing period
        started_at: Instant,
        /// Sum of completed playing periods for this song
        accumulated: Duration,
    },

    Paused {
        cursor: SongCursor,
        accumulated: Duration,
    },
}

impl SessionState {
    fn cursor(&self) -> Option<SongCursor> {
        match *self {
            Self::Stopped => None,
            Self::Playing { cursor, .. } | Self::Paused { cursor, .. } => Some(cursor),
        }
    }

    fn playback_state(&self) -> PlaybackState {
        match self {
            Self::Stopped => PlaybackState::Stopped,
            Self::Playing { .. } => PlaybackState::Playing,
            Self::Paused { .. } => PlaybackState::Paused,
        }
    }
}

/// Single simulated playback session
///
/// The session never owns album data. It keeps a cursor (album index, song
/// index) into the shared library and resolves it on demand.
///
/// All time reads go through the injected [`Clock`].
pub struct PlaybackSession<S: ?Sized, C = SystemClock> {
    library: Arc<S>,
    clock: C,
    state: SessionState,
}

impl<S: AlbumSource + ?Sized> PlaybackSession<S, SystemClock> {
    /// Create a stopped session using the system clock
    pub fn new(library: Arc<S>) -> Self {
        Self::with_clock(library, SystemClock)
    }
}

impl<S: AlbumSource + ?Sized, C: Clock> PlaybackSession<S, C> {
    /// Create a stopped session with a custom clock
    pub fn with_clock(library: Arc<S>, clock: C) -> Self {
        Self {
            library,
            clock,
            state: SessionState::Stopped,
        }
    }

    // ===== Playback Control =====

    /// Select a song and start playing it from zero
    ///
    /// Works from any state. On an invalid index the session is left as it was.
    ///
    /// # Errors
    /// `TapedeckError::OutOfRange` (wrapped in `PlaybackError::Library`) for
    /// an invalid album or song index
    pub fn select_song(&mut self, album_index: usize, song_index: usize) -> Result<ControlOutcome> {
        let cursor = SongCursor::new(album_index, song_index);
        let (_, song) = self.resolve(cursor)?;
        let outcome = ControlOutcome::now_playing(song);

        self.start(cursor);
        Ok(outcome)
    }

    /// Resume a paused session
    pub fn play(&mut self) -> Result<ControlOutcome> {
        match self.state {
            SessionState::Paused {
                cursor,
                accumulated,
            } => {
                let song = self.resolve(cursor)?.1.name.clone();
                self.state = SessionState::Playing {
                    cursor,
                    started_at: self.clock.now(),
                    accumulated,
                };
                tracing::debug!("Resumed {:?} at {:?}", cursor, accumulated);
                Ok(ControlOutcome::Resumed { song })
            }
            SessionState::Playing { cursor, .. } => Ok(ControlOutcome::AlreadyPlaying {
                song: self.resolve(cursor)?.1.name.clone(),
            }),
            SessionState::Stopped => Ok(ControlOutcome::NothingPlaying),
        }
    }

    /// Pause a playing session, banking the time played so far
    pub fn pause(&mut self) -> ControlOutcome {
        match self.state {
            SessionState::Playing {
                cursor,
                started_at,
                accumulated,
            } => {
                let accumulated =
                    accumulated + self.clock.now().saturating_duration_since(started_at);
                self.state = SessionState::Paused {
                    cursor,
                    accumulated,
                };
                tracing::debug!("Paused {:?} at {:?}", cursor, accumulated);
                ControlOutcome::Paused
            }
            SessionState::Paused { .. } => ControlOutcome::AlreadyPaused,
            SessionState::Stopped => ControlOutcome::NothingPlaying,
        }
    }

    /// Stop playback and clear the current song
    pub fn stop(&mut self) -> ControlOutcome {
        if let Some(cursor) = self.state.cursor() {
            tracing::debug!("Stopped {:?}", cursor);
        }
        self.state = SessionState::Stopped;
        ControlOutcome::Stopped
    }

    /// Skip to the next track in the current album
    ///
    /// Does nothing on the last track or when stopped.
    pub fn next(&mut self) -> Result<ControlOutcome> {
        let Some(cursor) = self.state.cursor() else {
            return Ok(ControlOutcome::NoNextSong);
        };

        let track_count = self.library.album(cursor.album)?.track_count();
        if cursor.song + 1 >= track_count {
            return Ok(ControlOutcome::NoNextSong);
        }

        self.select_song(cursor.album, cursor.song + 1)
    }

    /// Go back to the previous track in the current album
    ///
    /// Does nothing on the first track or when stopped.
    pub fn previous(&mut self) -> Result<ControlOutcome> {
        match self.state.cursor() {
            Some(cursor) if cursor.song > 0 => self.select_song(cursor.album, cursor.song - 1),
            _ => Ok(ControlOutcome::NoPreviousSong),
        }
    }

    fn start(&mut self, cursor: SongCursor) {
        self.state = SessionState::Playing {
            cursor,
            started_at: self.clock.now(),
            accumulated: Duration::ZERO,
        };
        tracing::debug!("Started {:?}", cursor);
    }

    // ===== State Queries =====

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        self.state.playback_state()
    }

    /// Position of the current song, if any
    pub fn cursor(&self) -> Option<SongCursor> {
        self.state.cursor()
    }

    /// Album of the current song
    pub fn current_album(&self) -> Option<&Album> {
        self.cursor()
            .and_then(|cursor| self.library.album(cursor.album).ok())
    }

    /// Currently selected song
    pub fn current_song(&self) -> Option<&Song> {
        self.cursor()
            .and_then(|cursor| self.resolve(cursor).ok())
            .map(|(_, song)| song)
    }

    /// Time on the session clock for the current song
    ///
    /// Not clamped to the song length. `None` when stopped.
    pub fn elapsed(&self) -> Option<Duration> {
        match self.state {
            SessionState::Stopped => None,
            SessionState::Paused { accumulated, .. } => Some(accumulated),
            SessionState::Playing {
                started_at,
                accumulated,
                ..
            } => Some(accumulated + self.clock.now().saturating_duration_since(started_at)),
        }
    }

    /// Report the current song and its displayable elapsed time
    ///
    /// Returns `Ok(None)` when nothing is playing. The displayed time never
    /// exceeds the song's stated length, although the session clock keeps
    /// running past it. Songs whose length cannot be parsed are reported
    /// unclamped.
    pub fn now_playing(&self) -> Result<Option<NowPlaying<'_>>> {
        let (Some(cursor), Some(elapsed)) = (self.cursor(), self.elapsed()) else {
            return Ok(None);
        };
        let (album, song) = self.resolve(cursor)?;

        let display_elapsed = match song.length() {
            Ok(length) => elapsed.min(length.as_duration()),
            Err(e) => {
                tracing::warn!("Not clamping elapsed time for '{}': {}", song.name, e);
                elapsed
            }
        };

        Ok(Some(NowPlaying {
            cursor,
            album,
            song,
            state: self.state(),
            elapsed,
            display_elapsed,
        }))
    }

    /// Check if there is a next track in the current album
    pub fn has_next(&self) -> bool {
        self.cursor().is_some_and(|cursor| {
            self.library
                .album(cursor.album)
                .is_ok_and(|album| cursor.song + 1 < album.track_count())
        })
    }

    /// Check if there is a previous track in the current album
    pub fn has_previous(&self) -> bool {
        self.cursor().is_some_and(|cursor| cursor.song > 0)
    }

    /// Library the session reads from
    pub fn library(&self) -> &S {
        &self.library
    }

    fn resolve(&self, cursor: SongCursor) -> Result<(&Album, &Song)> {
        let album = self.library.album(cursor.album)?;
        let song = album.song(cursor.song).ok_or_else(|| {
            TapedeckError::out_of_range(Entity::Song, cursor.song, album.track_count())
        })?;
        Ok((album, song))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;
    use tapedeck_core::ManualClock;

    fn create_library() -> Arc<Vec<Album>> {
        Arc::new(vec![
            Album::new("A", "X", "Pop")
                .with_song(Song::new("One", "03:45"))
                .with_song(Song::new("Two", "04:10"))
                .with_song(Song::new("Three", "02:00")),
            Album::new("B", "Y", "Rock").with_song(Song::new("Solo", "01:00")),
        ])
    }

    fn create_session() -> (PlaybackSession<Vec<Album>, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let session = PlaybackSession::with_clock(create_library(), clock.clone());
        (session, clock)
    }

    #[test]
    fn new_session_is_stopped() {
        let (session, _) = create_session();
        assert_eq!(session.state(), PlaybackState::Stopped);
        assert!(session.cursor().is_none());
        assert!(session.elapsed().is_none());
        assert!(session.now_playing().unwrap().is_none());
    }

    #[test]
    fn select_song_starts_playing() {
        let (mut session, _) = create_session();

        let outcome = session.select_song(0, 1).unwrap();

        assert_eq!(
            outcome,
            ControlOutcome::NowPlaying {
                song: "Two".to_string(),
                duration: "04:10".to_string()
            }
        );
        assert_eq!(session.state(), PlaybackState::Playing);
        assert_eq!(session.cursor(), Some(SongCursor::new(0, 1)));
        assert_eq!(session.elapsed(), Some(Duration::ZERO));
        assert_eq!(session.current_album().unwrap().name, "A");
    }

    #[test]
    fn invalid_selection_leaves_session_untouched() {
        let (mut session, clock) = create_session();
        session.select_song(0, 0).unwrap();
        clock.advance(Duration::from_secs(5));
        session.pause();

        let err = session.select_song(0, 3).unwrap_err();
        assert!(matches!(
            err,
            PlaybackError::Library(TapedeckError::OutOfRange {
                entity: Entity::Song,
                index: 3,
                len: 3
            })
        ));
        assert_eq!(err.to_string(), "Invalid song index: 3 (expected 0..3)");

        let err = session.select_song(9, 0).unwrap_err();
        assert!(err.is_out_of_range());

        assert_eq!(session.state(), PlaybackState::Paused);
        assert_eq!(session.cursor(), Some(SongCursor::new(0, 0)));
        assert_eq!(session.elapsed(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn pause_banks_elapsed_time() {
        let (mut session, clock) = create_session();
        session.select_song(0, 0).unwrap();

        clock.advance(Duration::from_secs(3));
        assert_eq!(session.pause(), ControlOutcome::Paused);

        clock.advance(Duration::from_secs(60));
        assert_eq!(session.elapsed(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn resume_continues_from_banked_time() {
        let (mut session, clock) = create_session();
        session.select_song(0, 0).unwrap();
        clock.advance(Duration::from_secs(3));
        session.pause();
        clock.advance(Duration::from_secs(100));

        let outcome = session.play().unwrap();
        assert_eq!(
            outcome,
            ControlOutcome::Resumed {
                song: "One".to_string()
            }
        );

        clock.advance(Duration::from_secs(4));
        assert_eq!(session.elapsed(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn play_while_playing_is_noop() {
        let (mut session, clock) = create_session();
        session.select_song(0, 0).unwrap();
        clock.advance(Duration::from_secs(2));

        let outcome = session.play().unwrap();

        assert_eq!(
            outcome,
            ControlOutcome::AlreadyPlaying {
                song: "One".to_string()
            }
        );
        assert_eq!(session.elapsed(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn play_and_pause_when_stopped_report_nothing_playing() {
        let (mut session, _) = create_session();
        assert_eq!(session.play().unwrap(), ControlOutcome::NothingPlaying);
        assert_eq!(session.pause(), ControlOutcome::NothingPlaying);
        assert_eq!(session.state(), PlaybackState::Stopped);
    }

    #[test]
    fn stop_clears_song_and_time() {
        let (mut session, clock) = create_session();
        session.select_song(0, 2).unwrap();
        clock.advance(Duration::from_secs(30));

        assert_eq!(session.stop(), ControlOutcome::Stopped);

        assert_eq!(session.state(), PlaybackState::Stopped);
        assert!(session.current_song().is_none());
        assert!(session.elapsed().is_none());
        assert!(!session.has_next());
        assert!(!session.has_previous());
    }

    #[test]
    fn next_and_previous_walk_the_album() {
        let (mut session, clock) = create_session();
        session.select_song(0, 0).unwrap();
        assert!(!session.has_previous());
        assert!(session.has_next());

        clock.advance(Duration::from_secs(10));
        session.next().unwrap();
        assert_eq!(session.current_song().unwrap().name, "Two");
        assert_eq!(session.elapsed(), Some(Duration::ZERO));

        session.next().unwrap();
        assert_eq!(session.current_song().unwrap().name, "Three");
        assert!(!session.has_next());

        session.previous().unwrap();
        assert_eq!(session.current_song().unwrap().name, "Two");
    }

    #[test]
    fn next_from_paused_starts_playing() {
        let (mut session, clock) = create_session();
        session.select_song(0, 0).unwrap();
        clock.advance(Duration::from_secs(10));
        session.pause();

        session.next().unwrap();

        assert_eq!(session.state(), PlaybackState::Playing);
        assert_eq!(session.elapsed(), Some(Duration::ZERO));
    }

    #[test]
    fn boundaries_report_unavailable() {
        let (mut session, clock) = create_session();
        session.select_song(1, 0).unwrap();
        clock.advance(Duration::from_secs(20));

        assert_eq!(session.next().unwrap(), ControlOutcome::NoNextSong);
        assert_eq!(session.previous().unwrap(), ControlOutcome::NoPreviousSong);

        assert_eq!(session.cursor(), Some(SongCursor::new(1, 0)));
        assert_eq!(session.elapsed(), Some(Duration::from_secs(20)));
    }

    #[test]
    fn navigation_without_session_is_unavailable() {
        let (mut session, _) = create_session();
        assert_eq!(session.next().unwrap(), ControlOutcome::NoNextSong);
        assert_eq!(session.previous().unwrap(), ControlOutcome::NoPreviousSong);
        assert_eq!(session.state(), PlaybackState::Stopped);
    }

    #[test]
    fn now_playing_clamps_to_song_length() {
        let (mut session, clock) = create_session();
        session.select_song(1, 0).unwrap();
        clock.advance(Duration::from_secs(95));

        let now = session.now_playing().unwrap().unwrap();

        assert_eq!(now.elapsed, Duration::from_secs(95));
        assert_eq!(now.display_elapsed, Duration::from_secs(60));
        assert_eq!(now.to_string(), "Playing: Solo, Time Elapsed: 00:01:00");
    }

    #[test]
    fn unparsable_length_is_not_clamped() {
        let library = Arc::new(vec![
            Album::new("Odd", "Z", "Noise").with_song(Song::new("Endless", "forever"))
        ]);
        let clock = ManualClock::new();
        let mut session = PlaybackSession::with_clock(library, clock.clone());
        session.select_song(0, 0).unwrap();
        clock.advance(Duration::from_secs(4000));

        let now = session.now_playing().unwrap().unwrap();

        assert_eq!(now.display_elapsed, Duration::from_secs(4000));
        assert_eq!(now.to_string(), "Playing: Endless, Time Elapsed: 01:06:40");
    }

    #[test]
    fn works_with_system_clock() {
        let mut session = PlaybackSession::new(create_library());
        session.select_song(0, 0).unwrap();
        assert_eq!(session.state(), PlaybackState::Playing);
        assert!(session.elapsed().unwrap() < Duration::from_secs(60));
    }
}
