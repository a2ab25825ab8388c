//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `dynamolab_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ConsumedCapacity, ReturnConsumedCapacity, ReturnValue};
use aws_sdk_dynamodb::Client;

use dynamolab_core::music::Music;
use dynamolab_core::note::Note;
use dynamolab_core::storage::{MusicRepository, NoteRepository, RepositoryError, Result};

use super::conversions::{item_to_music, item_to_note, music_to_item, note_to_item, note_update};
use super::error::{
    map_create_note_error, map_delete_item_error, map_get_item_error, map_put_item_error,
    map_query_error, map_scan_error, map_update_item_error,
};
use super::keys;

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and safe to share between concurrent
/// requests; no other state is kept.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    notes_table: String,
    music_table: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table names.
    pub fn new(
        client: Client,
        notes_table: impl Into<String>,
        music_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            notes_table: notes_table.into(),
            music_table: music_table.into(),
        }
    }

    /// Get the notes table name.
    pub fn notes_table(&self) -> &str {
        &self.notes_table
    }

    /// Get the music table name.
    pub fn music_table(&self) -> &str {
        &self.music_table
    }
}

/// Emit the capacity a single call consumed.
fn log_consumed_capacity(operation: &'static str, capacity: Option<&ConsumedCapacity>) {
    let Some(capacity) = capacity else {
        return;
    };

    tracing::info!(
        operation,
        table = capacity.table_name().unwrap_or_default(),
        capacity_units = capacity.capacity_units().unwrap_or_default(),
        read_capacity_units = capacity.read_capacity_units().unwrap_or_default(),
        write_capacity_units = capacity.write_capacity_units().unwrap_or_default(),
        "consumed capacity"
    );
}

// ============================================================================
// NoteRepository implementation
// ============================================================================

#[async_trait]
impl NoteRepository for DynamoDbRepository {
    async fn create_note(&self, note: &Note) -> Result<Note> {
        // Timestamps are unique per creation attempt, so an existing item at
        // this key always fails the inequality.
        let result = self
            .client
            .put_item()
            .table_name(&self.notes_table)
            .set_item(Some(note_to_item(note)))
            .condition_expression("#timestamp <> :timestamp")
            .expression_attribute_names("#timestamp", keys::NOTE_SK)
            .expression_attribute_values(":timestamp", keys::timestamp_value(note.timestamp))
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
            .send()
            .await
            .map_err(|e| map_create_note_error(e, note.key()))?;

        log_consumed_capacity("PutItem", result.consumed_capacity());

        Ok(note.clone())
    }

    async fn update_note(&self, note: &Note) -> Result<Note> {
        let update = note_update(note);

        let result = self
            .client
            .update_item()
            .table_name(&self.notes_table)
            .set_key(Some(keys::note_key(&note.user_id, note.timestamp)))
            .set_update_expression(update.expression)
            .set_expression_attribute_names((!update.names.is_empty()).then_some(update.names))
            .set_expression_attribute_values((!update.values.is_empty()).then_some(update.values))
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, note.key()))?;

        log_consumed_capacity("UpdateItem", result.consumed_capacity());

        Ok(note.clone())
    }

    async fn get_notes_by_user(&self, user_id: &str) -> Result<Vec<Note>> {
        let mut notes = Vec::new();
        let mut capacity_units = 0.0;
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.notes_table)
                .consistent_read(true)
                .key_condition_expression("#user_id = :user_id")
                .expression_attribute_names("#user_id", keys::NOTE_PK)
                .expression_attribute_values(":user_id", AttributeValue::S(user_id.to_string()))
                .set_exclusive_start_key(start_key.take())
                .return_consumed_capacity(ReturnConsumedCapacity::Total)
                .send()
                .await
                .map_err(map_query_error)?;

            capacity_units += result
                .consumed_capacity()
                .and_then(|c| c.capacity_units())
                .unwrap_or_default();

            for item in result.items() {
                notes.push(item_to_note(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::info!(
            operation = "Query",
            table = %self.notes_table,
            capacity_units,
            count = notes.len(),
            "consumed capacity"
        );

        Ok(notes)
    }

    async fn delete_note(&self, user_id: &str, timestamp: i64) -> Result<Note> {
        let result = self
            .client
            .delete_item()
            .table_name(&self.notes_table)
            .set_key(Some(keys::note_key(user_id, timestamp)))
            .return_values(ReturnValue::AllOld)
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%user_id, timestamp, error = %e, "DeleteItem failed");
                map_delete_item_error(e, user_id)
            })?;

        log_consumed_capacity("DeleteItem", result.consumed_capacity());

        match result.attributes {
            Some(attributes) if !attributes.is_empty() => item_to_note(&attributes),
            _ => {
                tracing::warn!(%user_id, timestamp, "DeleteItem returned no previous value");
                Err(RepositoryError::DeleteRejected {
                    id: format!("{user_id}#{timestamp}"),
                })
            }
        }
    }
}

// ============================================================================
// MusicRepository implementation
// ============================================================================

#[async_trait]
impl MusicRepository for DynamoDbRepository {
    async fn put_music(&self, music: &Music) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.music_table)
            .set_item(Some(music_to_item(music)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get_music(&self, artist: &str, song: &str) -> Result<Option<Music>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.music_table)
            .set_key(Some(keys::music_key(artist, song)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_music(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_music(&self) -> Result<Vec<Music>> {
        let mut music = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.music_table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items() {
                music.push(item_to_music(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(music)
    }
}
