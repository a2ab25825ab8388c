//! Music catalogue handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use dynamolab_core::music::{demo_catalogue, validate_music_key, Music};
use dynamolab_core::storage::RepositoryError;

use crate::{
    handlers::{error::invalid_request, AppError},
    models::{MusicQuery, SeedResponse},
    state::AppState,
};

/// Seed the demo catalogue (POST /music).
pub async fn seed_music(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let catalogue = demo_catalogue();

    for music in &catalogue {
        state.music_repo.put_music(music).await?;
    }

    tracing::info!(inserted = catalogue.len(), "Seeded music catalogue");

    Ok(Json(SeedResponse {
        inserted: catalogue.len(),
    }))
}

/// List the whole catalogue (GET /music/all).
pub async fn list_music(State(state): State<AppState>) -> Result<Json<Vec<Music>>, AppError> {
    let music = state.music_repo.list_music().await?;
    Ok(Json(music))
}

/// Look up one song (GET /music?artist=..&song=..).
pub async fn get_music(
    State(state): State<AppState>,
    query: Result<Query<MusicQuery>, QueryRejection>,
) -> Result<Json<Music>, AppError> {
    let Query(query) = query.map_err(|rejection| invalid_request(rejection.body_text()))?;
    validate_music_key(&query.artist, query.song.as_deref())?;

    let song = query.song.unwrap_or_default();

    match state.music_repo.get_music(&query.artist, &song).await? {
        Some(music) => Ok(Json(music)),
        None => Err(RepositoryError::NotFound {
            entity_type: "Music",
            id: format!("{}#{}", query.artist, song),
        }
        .into()),
    }
}
