//! Player endpoint handlers.

use crate::error::ApiError;
use crate::extractors::Json;
use crate::models::{EntityInput, Player};
use crate::state::AppState;
use crate::validation::validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    tracing::info!("GET /api/player");
    let players = state.players.list_all().await?;
    tracing::info!(count = players.len(), "200 OK for /api/player");
    Ok(Json(players))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    tracing::info!(id, "GET /api/player/{id}");
    let player = state.players.get(id).await?;
    tracing::info!(id, "200 OK for /api/player/{id}");
    Ok(Json(player))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EntityInput>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    tracing::info!(body = ?input, "POST /api/player");
    let errors = validate(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let player = state.players.create(&input).await?;
    tracing::info!(id = player.id, "201 CREATED for /api/player");
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<EntityInput>,
) -> Result<Json<Player>, ApiError> {
    tracing::info!(id, body = ?input, "PUT /api/player/{id}");
    let errors = validate(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let player = state.players.update(id, &input).await?;
    tracing::info!(id, "200 OK for /api/player/{id}");
    Ok(Json(player))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(id, "DELETE /api/player/{id}");
    state.players.delete(id).await?;
    tracing::info!(id, "204 NO CONTENT for /api/player/{id}");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn random(State(state): State<AppState>) -> Result<Json<Player>, ApiError> {
    tracing::info!("GET /api/player/random");
    let player = state.players.random().await?;
    tracing::info!(id = player.id, "200 OK for /api/player/random");
    Ok(Json(player))
}
