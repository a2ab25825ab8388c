//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dynamolab_core::music::Music;
use dynamolab_core::note::Note;
use dynamolab_core::storage::{MusicRepository, NoteRepository, RepositoryError, Result};

/// `(user_id, sort key)`, with the timestamp in its persisted decimal form.
type NoteKey = (String, String);
type MusicKey = (String, String);

fn note_key(user_id: &str, timestamp: i64) -> NoteKey {
    (user_id.to_string(), timestamp.to_string())
}

/// In-memory storage backend.
///
/// Uses BTreeMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    notes: Arc<RwLock<BTreeMap<NoteKey, Note>>>,
    music: Arc<RwLock<BTreeMap<MusicKey, Music>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            notes: Arc::new(RwLock::new(BTreeMap::new())),
            music: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

#[async_trait]
impl NoteRepository for InMemoryRepository {
    async fn create_note(&self, note: &Note) -> Result<Note> {
        let mut notes = self.notes.write().await;
        let key = note_key(&note.user_id, note.timestamp);
        if notes.contains_key(&key) {
            return Err(RepositoryError::ConditionalCheckFailed {
                entity_type: "Note",
                id: note.key(),
            });
        }
        notes.insert(key, note.clone());
        Ok(note.clone())
    }

    async fn update_note(&self, note: &Note) -> Result<Note> {
        let mut notes = self.notes.write().await;
        notes
            .entry(note_key(&note.user_id, note.timestamp))
            .or_insert_with(|| Note::new(note.user_id.clone(), note.timestamp))
            .apply_update(note);
        Ok(note.clone())
    }

    async fn get_notes_by_user(&self, user_id: &str) -> Result<Vec<Note>> {
        let notes = self.notes.read().await;
        // Sort keys compare as strings, like the real table's S attribute.
        Ok(notes
            .range((user_id.to_string(), String::new())..)
            .take_while(|((owner, _), _)| owner == user_id)
            .map(|(_, n)| n.clone())
            .collect())
    }

    async fn delete_note(&self, user_id: &str, timestamp: i64) -> Result<Note> {
        let mut notes = self.notes.write().await;
        notes
            .remove(&note_key(user_id, timestamp))
            .ok_or_else(|| RepositoryError::DeleteRejected {
                id: format!("{user_id}#{timestamp}"),
            })
    }
}

#[async_trait]
impl MusicRepository for InMemoryRepository {
    async fn put_music(&self, music: &Music) -> Result<()> {
        let mut catalogue = self.music.write().await;
        catalogue.insert((music.artist.clone(), music.song.clone()), music.clone());
        Ok(())
    }

    async fn get_music(&self, artist: &str, song: &str) -> Result<Option<Music>> {
        let catalogue = self.music.read().await;
        Ok(catalogue
            .get(&(artist.to_string(), song.to_string()))
            .cloned())
    }

    async fn list_music(&self) -> Result<Vec<Music>> {
        let catalogue = self.music.read().await;
        Ok(catalogue.values().cloned().collect())
    }
}
