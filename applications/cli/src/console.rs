//! Interactive menu loop
//!
//! Reads commands from any `BufRead` and writes to any `Write`, so the whole
//! console can be driven from in-memory buffers.

use crate::error::Result;
use crate::input::{parse_selection, Selection};
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use tapedeck_catalog::{Catalog, SearchHit};
use tapedeck_core::{Album, Clock, SystemClock};
use tapedeck_playback::{ControlOutcome, PlaybackSession};

/// Load the library, falling back to an empty catalog on failure
///
/// The outcome is reported on `output` either way; a broken library file is
/// never fatal.
pub fn load_catalog<W: Write>(path: &Path, output: &mut W) -> Result<Catalog> {
    match Catalog::load(path) {
        Ok(catalog) => {
            writeln!(output, "Music library loaded successfully.")?;
            Ok(catalog)
        }
        Err(e) => {
            tracing::warn!("Continuing with an empty library: {}", e);
            writeln!(output, "Error loading music library: {}", e)?;
            Ok(Catalog::empty())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    DisplayAlbums,
    PlaySong,
    PlaybackControls,
    CurrentlyPlaying,
    Search,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::DisplayAlbums),
            "2" => Some(Self::PlaySong),
            "3" => Some(Self::PlaybackControls),
            "4" => Some(Self::CurrentlyPlaying),
            "5" => Some(Self::Search),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu-driven console over a catalog and a playback session
pub struct Console<W, C = SystemClock> {
    output: W,
    catalog: Arc<Catalog>,
    session: PlaybackSession<Catalog, C>,
}

impl<W: Write> Console<W, SystemClock> {
    pub fn new(catalog: Arc<Catalog>, output: W) -> Self {
        Self::with_clock(catalog, SystemClock, output)
    }
}

impl<W: Write, C: Clock> Console<W, C> {
    pub fn with_clock(catalog: Arc<Catalog>, clock: C, output: W) -> Self {
        let session = PlaybackSession::with_clock(Arc::clone(&catalog), clock);
        Self {
            output,
            catalog,
            session,
        }
    }

    pub fn session(&self) -> &PlaybackSession<Catalog, C> {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the main menu until the user exits or input ends
    ///
    /// Returns `true` if the user chose Exit, `false` on end of input.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> Result<bool> {
        loop {
            self.print_main_menu()?;
            let Some(choice) = self.prompt(input, "Select an option: ")? else {
                return Ok(false);
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::DisplayAlbums) => self.display_albums(input)?,
                Some(MenuChoice::PlaySong) => self.select_and_play(input)?,
                Some(MenuChoice::PlaybackControls) => self.playback_controls(input)?,
                Some(MenuChoice::CurrentlyPlaying) => self.currently_playing()?,
                Some(MenuChoice::Search) => self.search(input)?,
                Some(MenuChoice::Exit) => {
                    tracing::debug!("Exit requested");
                    return Ok(true);
                }
                None => writeln!(self.output, "Invalid option. Try again.")?,
            }
        }
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nMP3 Player CLI")?;
        writeln!(self.output, "1. Display Albums")?;
        writeln!(self.output, "2. Play a Song")?;
        writeln!(self.output, "3. Playback Controls")?;
        writeln!(self.output, "4. Currently Playing Song")?;
        writeln!(self.output, "5. Search")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    // ===== Menu Actions =====

    /// List albums, then optionally the songs of one of them
    pub fn display_albums<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        self.list_albums()?;

        let Some(line) =
            self.prompt(input, "Enter album number to view songs (or 0 to return): ")?
        else {
            return Ok(());
        };

        match parse_selection(&line) {
            Ok(Selection::Cancel) => {}
            Ok(Selection::Index(index)) => {
                let catalog = Arc::clone(&self.catalog);
                match catalog.get_by_index(index) {
                    Ok(album) => self.list_songs(album)?,
                    Err(e) => {
                        tracing::debug!("{}", e);
                        writeln!(self.output, "Invalid album selection.")?;
                    }
                }
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    /// Pick an album and a song and start playing it
    pub fn select_and_play<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        writeln!(self.output, "\nSelect an album:")?;
        self.list_albums()?;

        let Some(line) = self.prompt(input, "Enter album number to play a song: ")? else {
            return Ok(());
        };
        let album_index = match parse_selection(&line) {
            Ok(Selection::Index(index)) => index,
            Ok(Selection::Cancel) => return Ok(()),
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        let catalog = Arc::clone(&self.catalog);
        let album = match catalog.get_by_index(album_index) {
            Ok(album) => album,
            Err(e) => {
                tracing::debug!("{}", e);
                writeln!(self.output, "Invalid album selection.")?;
                return Ok(());
            }
        };
        self.list_songs(album)?;

        let Some(line) = self.prompt(input, "Enter song number to play: ")? else {
            return Ok(());
        };
        let song_index = match parse_selection(&line) {
            Ok(Selection::Index(index)) => index,
            Ok(Selection::Cancel) => return Ok(()),
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        match self.session.select_song(album_index, song_index) {
            Ok(outcome) => writeln!(self.output, "{}", outcome)?,
            Err(e) if e.is_out_of_range() => {
                tracing::debug!("{}", e);
                writeln!(self.output, "Invalid song selection.")?;
            }
            Err(e) => {
                tracing::error!("Song selection failed: {}", e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    /// Play/pause/stop/next/previous submenu
    pub fn playback_controls<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        if !self.session.state().is_active() {
            writeln!(self.output, "{}", ControlOutcome::NothingPlaying)?;
            return Ok(());
        }

        writeln!(self.output, "\nPlayback Controls:")?;
        writeln!(self.output, "1. Play")?;
        writeln!(self.output, "2. Pause")?;
        writeln!(self.output, "3. Stop")?;
        writeln!(self.output, "4. Next")?;
        writeln!(self.output, "5. Previous")?;

        let Some(choice) = self.prompt(input, "Select an option: ")? else {
            return Ok(());
        };

        let outcome = match choice.trim() {
            "1" => self.session.play().map(Some),
            "2" => Ok(Some(self.session.pause())),
            "3" => Ok(Some(self.session.stop())),
            "4" => self.session.next().map(Some),
            "5" => self.session.previous().map(Some),
            _ => Ok(None),
        };

        match outcome {
            Ok(Some(outcome)) => {
                if outcome.changed_state() {
                    tracing::info!("Playback is now {:?}", self.session.state());
                }
                writeln!(self.output, "{}", outcome)?;
            }
            Ok(None) => writeln!(self.output, "Invalid option.")?,
            Err(e) => {
                tracing::error!("Playback control failed: {}", e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    /// Show the current song and its elapsed time
    pub fn currently_playing(&mut self) -> Result<()> {
        match self.session.now_playing() {
            Ok(Some(now)) => writeln!(self.output, "{}", now)?,
            Ok(None) => writeln!(self.output, "{}", ControlOutcome::NothingPlaying)?,
            Err(e) => {
                tracing::error!("Could not resolve current song: {}", e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    /// Substring search over albums, artists, and songs
    pub fn search<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        writeln!(self.output, "Enter search query (artist, album, or song): ")?;
        let Some(query) = self.read_line(input)? else {
            return Ok(());
        };

        let catalog = Arc::clone(&self.catalog);
        let hits = match catalog.search(&query) {
            Ok(hits) => hits,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        writeln!(self.output, "Search Results:")?;
        if hits.is_empty() {
            writeln!(self.output, "No matches found.")?;
        }
        for hit in hits {
            match hit {
                SearchHit::Album { album, .. } => {
                    writeln!(self.output, "Album: {} by {}", album.name, album.artist)?;
                }
                SearchHit::Song { album, song, .. } => writeln!(
                    self.output,
                    "Song: {} in Album: {} by {}",
                    song.name, album.name, album.artist
                )?,
            }
        }
        Ok(())
    }

    // ===== Helpers =====

    fn list_albums(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.output, "The music library is empty.")?;
        }
        for (i, album) in self.catalog.albums().iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} by {} ({})",
                i + 1,
                album.name,
                album.artist,
                album.genre
            )?;
        }
        Ok(())
    }

    fn list_songs(&mut self, album: &Album) -> Result<()> {
        writeln!(self.output, "\nSongs in {}:", album.name)?;
        for (i, song) in album.songs.iter().enumerate() {
            writeln!(self.output, "{}. {} ({})", i + 1, song.name, song.duration)?;
        }
        Ok(())
    }

    fn prompt<R: BufRead>(&mut self, input: &mut R, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line(input)
    }

    /// Read one line without its terminator; `None` at end of input
    ///
    /// Invalid UTF-8 is replaced, not rejected.
    fn read_line<R: BufRead>(&mut self, input: &mut R) -> Result<Option<String>> {
        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
