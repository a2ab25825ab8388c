//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.
//!
//! Persisted note layout: `user_id` (S), `timestamp` (S, decimal), `cat`,
//! `title`, `content`, `note_id`, `user_name`. Optional attributes are only
//! written when present.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use dynamolab_core::music::Music;
use dynamolab_core::note::Note;
use dynamolab_core::storage::RepositoryError;

use super::keys;

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_CATEGORY: &str = "cat";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_CONTENT: &str = "content";
pub const ATTR_NOTE_ID: &str = "note_id";
pub const ATTR_USER_NAME: &str = "user_name";

/// Number of filler attributes written on every seeded song.
pub const MUSIC_FILLER_FIELDS: u32 = 9;

// ============================================================================
// Note conversions
// ============================================================================

/// Convert a Note to DynamoDB item.
pub fn note_to_item(note: &Note) -> HashMap<String, AttributeValue> {
    let mut item = keys::note_key(&note.user_id, note.timestamp);

    let optional = [
        (ATTR_CATEGORY, &note.category),
        (ATTR_TITLE, &note.title),
        (ATTR_NOTE_ID, &note.note_id),
        (ATTR_USER_NAME, &note.user_name),
        (ATTR_CONTENT, &note.content),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            item.insert(name.to_string(), AttributeValue::S(value.clone()));
        }
    }

    item
}

/// Convert a DynamoDB item to Note.
pub fn item_to_note(item: &HashMap<String, AttributeValue>) -> Result<Note, RepositoryError> {
    Ok(Note {
        user_id: get_string(item, keys::NOTE_PK)?,
        timestamp: get_timestamp(item, keys::NOTE_SK)?,
        category: get_optional_string(item, ATTR_CATEGORY),
        title: get_optional_string(item, ATTR_TITLE),
        content: get_optional_string(item, ATTR_CONTENT),
        note_id: get_optional_string(item, ATTR_NOTE_ID),
        user_name: get_optional_string(item, ATTR_USER_NAME),
    })
}

/// The pieces of an `UpdateItem` request that replace a note's mutable fields.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NoteUpdate {
    /// `None` when the note carries no mutable field at all.
    pub expression: Option<String>,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build the `SET` expression for `content`, `category` and `title`.
///
/// Only fields present on `note` are set, so absent fields keep their stored
/// values. Key attributes, `note_id` and `user_name` are never part of the
/// expression.
pub fn note_update(note: &Note) -> NoteUpdate {
    let fields = [
        ("content", ATTR_CONTENT, &note.content),
        ("cat", ATTR_CATEGORY, &note.category),
        ("title", ATTR_TITLE, &note.title),
    ];

    let mut update = NoteUpdate::default();
    let mut assignments = Vec::new();
    for (placeholder, attribute, value) in fields {
        let Some(value) = value else {
            continue;
        };
        let name = format!("#{placeholder}");
        let value_name = format!(":{placeholder}");
        assignments.push(format!("{name} = {value_name}"));
        update.names.insert(name, attribute.to_string());
        update
            .values
            .insert(value_name, AttributeValue::S(value.clone()));
    }

    if !assignments.is_empty() {
        update.expression = Some(format!("SET {}", assignments.join(", ")));
    }
    update
}

// ============================================================================
// Music conversions
// ============================================================================

/// Convert a Music to DynamoDB item, including the `Field1`..`Field9` filler.
pub fn music_to_item(music: &Music) -> HashMap<String, AttributeValue> {
    let mut item = keys::music_key(&music.artist, &music.song);
    for i in 1..=MUSIC_FILLER_FIELDS {
        item.insert(
            format!("Field{i}"),
            AttributeValue::S(format!("Content {i}")),
        );
    }
    item
}

/// Convert a DynamoDB item to Music.
pub fn item_to_music(item: &HashMap<String, AttributeValue>) -> Result<Music, RepositoryError> {
    Ok(Music {
        artist: get_string(item, keys::MUSIC_PK)?,
        song: get_string(item, keys::MUSIC_SK)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get the sort key timestamp.
///
/// Stored as a string, but items written by other tools as a number are
/// accepted too.
fn get_timestamp(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let raw = match item.get(key) {
        Some(AttributeValue::S(s)) | Some(AttributeValue::N(s)) => s,
        _ => {
            return Err(RepositoryError::Serialization(format!(
                "Missing or invalid field: {}",
                key
            )))
        }
    };
    raw.parse()
        .map_err(|e| RepositoryError::Serialization(format!("Invalid timestamp {}: {}", raw, e)))
}
