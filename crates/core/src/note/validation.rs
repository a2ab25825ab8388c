//! Request validation for notes (pure functions).

use crate::storage::RepositoryError;

use super::Note;

/// Validates a partition key value.
///
/// The user id must contain at least one non-whitespace character.
///
/// # Examples
///
/// ```
/// use dynamolab_core::note::validate_user_id;
///
/// assert!(validate_user_id("u1").is_ok());
/// assert!(validate_user_id("   ").is_err());
/// ```
pub fn validate_user_id(user_id: &str) -> Result<(), RepositoryError> {
    if user_id.trim().is_empty() {
        return Err(RepositoryError::InvalidData(
            "userId must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates the composite key of a note before it reaches the store.
pub fn validate_note_key(note: &Note) -> Result<(), RepositoryError> {
    validate_user_id(&note.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_id_is_rejected() {
        let err = validate_user_id("").unwrap_err();
        assert_eq!(err.to_string(), "Invalid data: userId must not be empty");
    }

    #[test]
    fn test_whitespace_user_id_is_rejected() {
        assert!(validate_user_id(" \t").is_err());
    }

    #[test]
    fn test_note_key_accepts_negative_and_zero_timestamps() {
        assert!(validate_note_key(&Note::new("u1", 0)).is_ok());
        assert!(validate_note_key(&Note::new("u1", -5)).is_ok());
    }

    #[test]
    fn test_note_key_rejects_blank_user() {
        let result = validate_note_key(&Note::new("", 100));
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }
}
