//! PostgreSQL gateway for the `user` table. `user` is a reserved word in
//! PostgreSQL, so every statement quotes the table name.

use crate::error::ApiError;
use crate::models::{EntityInput, User};
use crate::repository::UserGateway;
use sqlx::PgPool;

pub struct PgUserGateway {
    pool: PgPool,
}

impl PgUserGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserGateway for PgUserGateway {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        let rows = sqlx::query_as::<_, User>(
            r#"SELECT id, name, surname, email FROM "user" ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        let row = sqlx::query_as::<_, User>(
            r#"SELECT id, name, surname, email FROM "user" WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, id: Option<i64>, input: &EntityInput) -> Result<User, ApiError> {
        let row = match id {
            None => {
                sqlx::query_as::<_, User>(
                    r#"INSERT INTO "user" (name, surname, email)
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
                sqlx::query_as::<_, User>(
                    r#"INSERT INTO "user" (id, name, surname, email)
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
        sqlx::query(r#"DELETE FROM "user" WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, ApiError> {
        let n: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "user""#)
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<Vec<User>, ApiError> {
        let rows = sqlx::query_as::<_, User>(
            r#"SELECT id, name, surname, email FROM "user" ORDER BY id LIMIT $1 OFFSET $2"#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
