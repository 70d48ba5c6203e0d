//! PostgreSQL gateway for the `player` table.

use crate::error::ApiError;
use crate::models::{EntityInput, Player};
use crate::repository::PlayerGateway;
use sqlx::PgPool;

pub struct PgPlayerGateway {
    pool: PgPool,
}

impl PgPlayerGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PlayerGateway for PgPlayerGateway {
    async fn find_all(&self) -> Result<Vec<Player>, ApiError> {
        let rows = sqlx::query_as::<_, Player>(
            r#"SELECT id, name, surname, email FROM player ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Player>, ApiError> {
        let row = sqlx::query_as::<_, Player>(
            r#"SELECT id, name, surname, email FROM player WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, id: Option<i64>, input: &EntityInput) -> Result<Player, ApiError> {
        // NULL fields hit the NOT NULL columns and surface as a constraint
        // violation, same path as a duplicate email.
        let row = match id {
            None => {
                sqlx::query_as::<_, Player>(
                    r#"INSERT INTO player (name, surname, email)
                       VALUES ($1, $2, $3)
                       RETURNING id, name, surname, email"#,
                )
                .bind(input.name.as_deref())
                .bind(input.surname.as_deref())
                .bind(input.email.as_deref())
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Player>(
                    r#"INSERT INTO player (id, name, surname, email)
                       VALUES ($1, $2, $3, $4)
                       ON CONFLICT (id) DO UPDATE
                       SET name = EXCLUDED.name,
                           surname = EXCLUDED.surname,
                           email = EXCLUDED.email
                       RETURNING id, name, surname, email"#,
                )
                .bind(id)
                .bind(input.name.as_deref())
                .bind(input.surname.as_deref())
                .bind(input.email.as_deref())
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query(r#"DELETE FROM player WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, ApiError> {
        let n: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM player"#)
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<Player>, ApiError> {
        let rows = sqlx::query_as::<_, Player>(
            r#"SELECT id, name, surname, email FROM player ORDER BY id LIMIT $1 OFFSET $2"#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
