//! Song length parsing

use crate::error::TapedeckError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Parsed song length
///
/// Library files store lengths as `MM:SS`. The minute field is not capped at
/// 59: `75:30` is a valid length of one hour, fifteen minutes and thirty
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SongLength {
    secs: u64,
}

impl SongLength {
    pub fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    pub fn as_secs(&self) -> u64 {
        self.secs
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.secs)
    }

    pub fn minutes(&self) -> u64 {
        self.secs / 60
    }

    pub fn seconds(&self) -> u64 {
        self.secs % 60
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for SongLength {
    type Err = TapedeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TapedeckError::InvalidDuration(s.to_string());

        let (minutes, seconds) = s.trim().split_once(':').ok_or_else(invalid)?;
        if !is_digits(minutes) || !is_digits(seconds) || seconds.len() > 2 {
            return Err(invalid());
        }

        let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
        if seconds >= 60 {
            return Err(invalid());
        }

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_secs)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for SongLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

impl From<SongLength> for Duration {
    fn from(length: SongLength) -> Self {
        length.as_duration()
    }
}
