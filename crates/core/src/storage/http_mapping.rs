//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! Guard violations and missing items are client-visible conditions, so they
//! get their own codes instead of being reported as server faults.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `ConditionalCheckFailed` -> 409 (Conflict)
/// - `DeleteRejected` -> 404 (Not Found)
/// - `NotFound` -> 404 (Not Found)
/// - `InvalidData` -> 400 (Bad Request)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `UpdateFailed`, `DeleteFailed`, `QueryFailed`, `Serialization` -> 500
///
/// # Examples
///
/// ```
/// use dynamolab_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::ConditionalCheckFailed {
///     entity_type: "Note",
///     id: "u1#100".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 409);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConditionalCheckFailed { .. } => 409,
        RepositoryError::DeleteRejected { .. } => 404,
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::UpdateFailed { .. } => 500,
        RepositoryError::DeleteFailed { .. } => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
    }
}
