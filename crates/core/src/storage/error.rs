use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Expected outcomes (a duplicate key on create, a delete that found nothing)
/// are variants of this enum rather than panics, so callers can tell them
/// apart from store faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The conditional write guard rejected a create.
    #[error("cannot change item while trying to add an entry")]
    ConditionalCheckFailed {
        entity_type: &'static str,
        id: String,
    },
    /// The store reported a fault while updating an item.
    #[error("it was not possible to update the requested entry")]
    UpdateFailed { id: String, reason: String },
    /// The delete went through but the store returned no previous value.
    #[error("the item specified item cannot be deleted")]
    DeleteRejected { id: String },
    /// The store reported a fault while deleting an item.
    #[error("items for {user_id} cannot be deleted")]
    DeleteFailed { user_id: String, reason: String },
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// A read failed. Carries the store's own message.
    #[error("{0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
