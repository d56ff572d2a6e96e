mod album;
mod length;
mod song;

pub use album::Album;
pub use length::SongLength;
pub use song::Song;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value
///
/// Library files are hand-written; a `null` field is treated like a missing one.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
