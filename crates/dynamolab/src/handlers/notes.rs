//! Note CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use dynamolab_core::note::{validate_note_key, validate_user_id, Note};

use crate::{
    handlers::{error::invalid_request, AppError},
    models::DeleteNote,
    state::AppState,
};

/// Unwraps a JSON body, turning extractor rejections into a 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| invalid_request(rejection.body_text()))
}

/// Create a note (POST /notes).
///
/// Fails with 409 when a note with the same `(userId, timestamp)` exists.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<Note>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let note = json_body(payload)?;
    validate_note_key(&note)?;

    let created = state.note_repo.create_note(&note).await?;

    tracing::info!(user_id = %created.user_id, timestamp = created.timestamp, "Created note");

    Ok(Json(created))
}

/// Update a note (PUT /notes).
///
/// Only `content`, `category` and `title` are written. The store does not
/// check that the note exists.
pub async fn update_note(
    State(state): State<AppState>,
    payload: Result<Json<Note>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let note = json_body(payload)?;
    validate_note_key(&note)?;

    let updated = state.note_repo.update_note(&note).await?;

    tracing::info!(user_id = %updated.user_id, timestamp = updated.timestamp, "Updated note");

    Ok(Json(updated))
}

/// List every note of a user (GET /notes/{user_id}).
pub async fn list_notes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Note>>, AppError> {
    validate_user_id(&user_id)?;

    let notes = state.note_repo.get_notes_by_user(&user_id).await?;

    tracing::debug!(%user_id, count = notes.len(), "Listed notes");

    Ok(Json(notes))
}

/// Delete a note (DELETE /notes/{user_id}).
///
/// Returns the note as it was before deletion.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<DeleteNote>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let payload = json_body(payload)?;
    validate_user_id(&user_id)?;

    if payload.conflicts_with(&user_id) {
        return Err(invalid_request("userId in body does not match the path"));
    }

    let deleted = state
        .note_repo
        .delete_note(&user_id, payload.timestamp)
        .await?;

    tracing::info!(%user_id, timestamp = deleted.timestamp, "Deleted note");

    Ok(Json(deleted))
}
