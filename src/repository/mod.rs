//! Per-kind persistence gateways over PostgreSQL.
//!
//! Each kind gets a trait so services can be exercised against an in-memory
//! implementation in tests. The SQL lives in the `Pg*` implementations.

mod player;
mod user;

pub use player::PgPlayerGateway;
pub use user::PgUserGateway;

use crate::error::ApiError;
use crate::models::{EntityInput, Player, User};

/// CRUD facade over the `player` table.
#[async_trait::async_trait]
pub trait PlayerGateway: Send + Sync {
    /// All rows, ordered by id ascending.
    async fn find_all(&self) -> Result<Vec<Player>, ApiError>;

    /// Returns `None` for a missing row rather than failing.
    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, ApiError>;

    /// Insert when `id` is absent (the database assigns one), upsert keyed
    /// on `id` otherwise. Returns the persisted row.
    async fn save(&self, id: Option<i64>, input: &EntityInput) -> Result<Player, ApiError>;

    /// Idempotent: deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;

    async fn count(&self) -> Result<i64, ApiError>;

    /// Up to `limit` rows ordered by id ascending, zero-based `offset`.
    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Player>, ApiError>;
}

/// CRUD facade over the `user` table.
#[async_trait::async_trait]
pub trait UserGateway: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError>;
    async fn save(&self, id: Option<i64>, input: &EntityInput) -> Result<User, ApiError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;
    async fn count(&self) -> Result<i64, ApiError>;
    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<User>, ApiError>;
}
