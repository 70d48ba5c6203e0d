//! User operations on top of the persistence gateway.

use crate::error::{ApiError, EntityKind};
use crate::models::{EntityInput, User};
use crate::repository::UserGateway;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    gateway: Arc<dyn UserGateway>,
}

impl UserService {
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list_all(&self) -> Result<Vec<User>, ApiError> {
        self.gateway.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        tracing::info!(id, "fetching user");
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound {
                kind: EntityKind::User,
                id,
            })
    }

    pub async fn create(&self, input: &EntityInput) -> Result<User, ApiError> {
        tracing::info!(?input, "creating user");
        self.gateway.save(None, input).await
    }

    pub async fn update(&self, id: i64, input: &EntityInput) -> Result<User, ApiError> {
        tracing::info!(id, ?input, "updating user");
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound {
                kind: EntityKind::User,
                id,
            })?;
        self.gateway.save(Some(id), input).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deleting user");
        self.gateway.delete_by_id(id).await
    }
}
