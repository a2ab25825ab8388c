use serde::Deserialize;

/// Request payload for deleting a note.
///
/// The owning user comes from the path. A `userId` in the body is optional
/// and, when present, must match the path.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNote {
    #[serde(default)]
    pub user_id: Option<String>,
    pub timestamp: i64,
}

impl DeleteNote {
    /// Returns true when the body names a different user than the path.
    pub fn conflicts_with(&self, path_user_id: &str) -> bool {
        self.user_id
            .as_deref()
            .is_some_and(|user_id| user_id != path_user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_user_id() {
        let payload: DeleteNote = serde_json::from_str(r#"{"timestamp":100}"#).unwrap();

        assert_eq!(payload.user_id, None);
        assert_eq!(payload.timestamp, 100);
        assert!(!payload.conflicts_with("u1"));
    }

    #[test]
    fn test_conflicting_user_id() {
        let payload: DeleteNote =
            serde_json::from_str(r#"{"userId":"u2","timestamp":100}"#).unwrap();

        assert!(payload.conflicts_with("u1"));
        assert!(!payload.conflicts_with("u2"));
    }
}
