//! Typed errors and the uniform HTTP error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The two record kinds the service manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Player => write!(f, "Player"),
            EntityKind::User => write!(f, "User"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: i64 },
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),
    #[error("Database constraint violation")]
    Constraint,
    #[error("No players available")]
    NoPlayersAvailable,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Database(sqlx::Error),
}

/// Unique and not-null violations become [`ApiError::Constraint`]; everything
/// else surfaces as a generic database error.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;
        if let Some(db) = err.as_database_error() {
            if matches!(
                db.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) {
                return ApiError::Constraint;
            }
        }
        ApiError::Database(err)
    }
}

/// The envelope every error response carries.
#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub details: Value,
}

impl ApiError {
    /// Status, message and details for this error, before the timestamp is
    /// stamped on. Split out so the mapping is testable without a response.
    pub fn parts(&self) -> (StatusCode, String, Value) {
        match self {
            ApiError::NotFound { kind, .. } => {
                let details = match kind {
                    EntityKind::Player => "The requested player does not exist",
                    EntityKind::User => "The requested user does not exist",
                };
                (StatusCode::NOT_FOUND, self.to_string(), json!(details))
            }
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                self.to_string(),
                json!(fields),
            ),
            ApiError::Constraint => (
                StatusCode::CONFLICT,
                self.to_string(),
                json!("Database constraint violation"),
            ),
            ApiError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                self.to_string(),
                json!("Malformed JSON request body"),
            ),
            ApiError::NoPlayersAvailable | ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
                json!("Unexpected error occurred"),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let (status, message, details) = self.parts();
        let body = ErrorEnvelope {
            status: status.as_u16(),
            message,
            timestamp: chrono::Local::now().naive_local(),
            details,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_player_maps_to_404() {
        let err = ApiError::NotFound {
            kind: EntityKind::Player,
            id: 999,
        };
        let (status, message, details) = err.parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "Player with id 999 not found");
        assert_eq!(details, json!("The requested player does not exist"));
    }

    #[test]
    fn not_found_user_maps_to_404() {
        let err = ApiError::NotFound {
            kind: EntityKind::User,
            id: 7,
        };
        let (status, message, details) = err.parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "User with id 7 not found");
        assert_eq!(details, json!("The requested user does not exist"));
    }

    #[test]
    fn validation_maps_to_400_with_field_map() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "Name cannot be blank".to_string());
        let (status, message, details) = ApiError::Validation(fields).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Validation failed");
        assert_eq!(details, json!({ "name": "Name cannot be blank" }));
    }

    #[test]
    fn constraint_maps_to_409() {
        let (status, message, details) = ApiError::Constraint.parts();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(message, "Database constraint violation");
        assert_eq!(details, json!("Database constraint violation"));
    }

    #[test]
    fn bad_request_maps_to_400_with_decode_details() {
        let err = ApiError::BadRequest("Failed to parse the request body as JSON".to_string());
        let (status, message, details) = err.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Failed to parse the request body as JSON");
        assert_eq!(details, json!("Malformed JSON request body"));
    }

    #[test]
    fn no_players_maps_to_generic_500() {
        let (status, message, details) = ApiError::NoPlayersAvailable.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "No players available");
        assert_eq!(details, json!("Unexpected error occurred"));
    }
}
