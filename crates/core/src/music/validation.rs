use crate::storage::RepositoryError;

/// Validates a music lookup key.
///
/// Both the artist and the song are required for a point lookup.
pub fn validate_music_key(artist: &str, song: Option<&str>) -> Result<(), RepositoryError> {
    if artist.trim().is_empty() {
        return Err(RepositoryError::InvalidData(
            "artist must not be empty".to_string(),
        ));
    }
    match song {
        Some(song) if !song.trim().is_empty() => Ok(()),
        _ => Err(RepositoryError::InvalidData("song is required".to_string())),
    }
}
