//! User endpoint handlers.

use crate::error::ApiError;
use crate::extractors::Json;
use crate::models::{EntityInput, User};
use crate::state::AppState;
use crate::validation::validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    tracing::info!("GET /api/users");
    let users = state.users.list_all().await?;
    tracing::info!(count = users.len(), "200 OK for /api/users");
    Ok(Json(users))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    tracing::info!(id, "GET /api/users/{id}");
    let user = state.users.get(id).await?;
    tracing::info!(id, "200 OK for /api/users/{id}");
    Ok(Json(user))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EntityInput>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    tracing::info!(body = ?input, "POST /api/users");
    let errors = validate(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let user = state.users.create(&input).await?;
    tracing::info!(id = user.id, "201 CREATED for /api/users");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<EntityInput>,
) -> Result<Json<User>, ApiError> {
    tracing::info!(id, body = ?input, "PUT /api/users/{id}");
    let errors = validate(&input);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let user = state.users.update(id, &input).await?;
    tracing::info!(id, "200 OK for /api/users/{id}");
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(id, "DELETE /api/users/{id}");
    state.users.delete(id).await?;
    tracing::info!(id, "204 NO CONTENT for /api/users/{id}");
    Ok(StatusCode::NO_CONTENT)
}
