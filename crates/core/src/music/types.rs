use serde::{Deserialize, Serialize};

/// A song in the music catalogue, keyed by `(artist, song)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Music {
    pub artist: String,
    pub song: String,
}

impl Music {
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            song: song.into(),
        }
    }

    /// Returns a human readable representation of the composite key.
    pub fn key(&self) -> String {
        format!("{}#{}", self.artist, self.song)
    }
}
