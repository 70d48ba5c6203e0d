//! Player operations on top of the persistence gateway.

use crate::error::{ApiError, EntityKind};
use crate::models::{EntityInput, Player};
use crate::repository::PlayerGateway;
use rand::Rng;
use std::sync::Arc;

#[derive(Clone)]
pub struct PlayerService {
    gateway: Arc<dyn PlayerGateway>,
}

impl PlayerService {
    pub fn new(gateway: Arc<dyn PlayerGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list_all(&self) -> Result<Vec<Player>, ApiError> {
        self.gateway.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Player, ApiError> {
        tracing::info!(id, "fetching player");
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound {
                kind: EntityKind::Player,
                id,
            })
    }

    /// Validation is the adapter's job; constraint failures from storage
    /// propagate as-is.
    pub async fn create(&self, input: &EntityInput) -> Result<Player, ApiError> {
        tracing::info!(?input, "creating player");
        self.gateway.save(None, input).await
    }

    /// Replaces name/surname/email of an existing player; the id never
    /// changes. Fails with NotFound when the id is absent.
    pub async fn update(&self, id: i64, input: &EntityInput) -> Result<Player, ApiError> {
        tracing::info!(id, ?input, "updating player");
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound {
                kind: EntityKind::Player,
                id,
            })?;
        self.gateway.save(Some(id), input).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        tracing::info!(id, "deleting player");
        self.gateway.delete_by_id(id).await
    }

    /// Uniformly random existing player without materializing the table:
    /// draw an offset in `[0, count)` and fetch a one-row page.
    ///
    /// Count and page are not atomic. A concurrent delete can leave the
    /// drawn offset past the end; on an empty page we retry once with a
    /// fresh count, then give up.
    pub async fn random(&self) -> Result<Player, ApiError> {
        for _ in 0..2 {
            let n = self.gateway.count().await?;
            if n == 0 {
                return Err(ApiError::NoPlayersAvailable);
            }
            let k = rand::thread_rng().gen_range(0..n);
            if let Some(player) = self.gateway.find_page(k, 1).await?.into_iter().next() {
                return Ok(player);
            }
        }
        Err(ApiError::NoPlayersAvailable)
    }
}
