//! DynamoDB key generation functions.
//!
//! Pure functions for building primary keys. Notes live in their own table
//! keyed by `user_id` / `timestamp`; the music catalogue is keyed by
//! `Artist` / `Song`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

// ============================================================================
// Attribute names
// ============================================================================

pub const NOTE_PK: &str = "user_id";
pub const NOTE_SK: &str = "timestamp";
pub const MUSIC_PK: &str = "Artist";
pub const MUSIC_SK: &str = "Song";

// ============================================================================
// Note keys
// ============================================================================

/// Encode a note timestamp the way it is persisted.
///
/// The sort key is a string attribute holding the decimal representation.
pub fn timestamp_value(timestamp: i64) -> AttributeValue {
    AttributeValue::S(timestamp.to_string())
}

/// Generate the primary key for a note.
pub fn note_key(user_id: &str, timestamp: i64) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (NOTE_PK.to_string(), AttributeValue::S(user_id.to_string())),
        (NOTE_SK.to_string(), timestamp_value(timestamp)),
    ])
}

// ============================================================================
// Music keys
// ============================================================================

/// Generate the primary key for a song.
pub fn music_key(artist: &str, song: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (MUSIC_PK.to_string(), AttributeValue::S(artist.to_string())),
        (MUSIC_SK.to_string(), AttributeValue::S(song.to_string())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_decimal_string() {
        assert_eq!(
            timestamp_value(1_700_000_000_000),
            AttributeValue::S("1700000000000".to_string())
        );
        assert_eq!(timestamp_value(-3), AttributeValue::S("-3".to_string()));
    }

    #[test]
    fn test_note_key() {
        let key = note_key("u1", 100);

        assert_eq!(key.len(), 2);
        assert_eq!(key.get("user_id").unwrap().as_s().unwrap(), "u1");
        assert_eq!(key.get("timestamp").unwrap().as_s().unwrap(), "100");
    }

    #[test]
    fn test_music_key() {
        let key = music_key("Hoodoo Gurus", "Out That Door0");

        assert_eq!(key.get("Artist").unwrap().as_s().unwrap(), "Hoodoo Gurus");
        assert_eq!(key.get("Song").unwrap().as_s().unwrap(), "Out That Door0");
    }
}
