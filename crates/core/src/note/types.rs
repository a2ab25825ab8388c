use serde::{Deserialize, Serialize};

/// A note owned by a user.
///
/// Notes are identified by the composite key `(user_id, timestamp)`. Within a
/// single user the timestamp must be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Partition key.
    pub user_id: String,
    /// Sort key, persisted as a decimal string.
    pub timestamp: i64,
    pub category: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub note_id: Option<String>,
    pub user_name: Option<String>,
}

impl Note {
    /// Creates a note with only its key set.
    pub fn new(user_id: impl Into<String>, timestamp: i64) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp,
            category: None,
            title: None,
            content: None,
            note_id: None,
            user_name: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_note_id(mut self, note_id: impl Into<String>) -> Self {
        self.note_id = Some(note_id.into());
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Returns a human readable representation of the composite key.
    pub fn key(&self) -> String {
        format!("{}#{}", self.user_id, self.timestamp)
    }

    /// Applies the mutable fields of `changes` on top of this note.
    ///
    /// Only `content`, `category` and `title` are replaced, and only when
    /// `changes` carries a value for them. Key fields, `note_id` and
    /// `user_name` are never touched.
    pub fn apply_update(&mut self, changes: &Note) {
        if let Some(content) = &changes.content {
            self.content = Some(content.clone());
        }
        if let Some(category) = &changes.category {
            self.category = Some(category.clone());
        }
        if let Some(title) = &changes.title {
            self.title = Some(title.clone());
        }
    }
}
