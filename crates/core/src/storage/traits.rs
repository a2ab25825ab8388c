use async_trait::async_trait;

use crate::music::Music;
use crate::note::Note;

use super::Result;

/// Store capability for notes.
///
/// Every call is a single round trip to the underlying key-value store.
/// Implementations never retry on their own.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Inserts a note unless one already exists at `(user_id, timestamp)`.
    ///
    /// Returns the note unchanged on success and
    /// [`RepositoryError::ConditionalCheckFailed`](super::RepositoryError::ConditionalCheckFailed)
    /// when the key is taken.
    async fn create_note(&self, note: &Note) -> Result<Note>;

    /// Overwrites `content`, `category` and `title` of the note at the given key.
    ///
    /// Existence is not checked. Returns the submitted note.
    async fn update_note(&self, note: &Note) -> Result<Note>;

    /// Returns every note in the user's partition in store order.
    ///
    /// The sort key is persisted as a decimal string, so `"1000"` sorts
    /// before `"200"`.
    async fn get_notes_by_user(&self, user_id: &str) -> Result<Vec<Note>>;

    /// Deletes the note at the given key and returns its previous value.
    async fn delete_note(&self, user_id: &str, timestamp: i64) -> Result<Note>;
}

/// Store capability for the music catalogue.
#[async_trait]
pub trait MusicRepository: Send + Sync {
    /// Writes a song, replacing any existing item with the same key.
    async fn put_music(&self, music: &Music) -> Result<()>;

    /// Gets a song by its composite key.
    async fn get_music(&self, artist: &str, song: &str) -> Result<Option<Music>>;

    /// Returns every song in the catalogue.
    async fn list_music(&self) -> Result<Vec<Music>>;
}
