//! Entity types and the shared request payload.

use serde::{Deserialize, Serialize};

/// A registered player. `id` is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// A registered user. Same shape as [`Player`], disjoint storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Request body for create and update, shared by both kinds.
///
/// Fields are optional at the codec level so that missing values reach the
/// validator (reported as blank) instead of being rejected during decode.
/// Any `id` in the body is ignored; unknown fields are ignored by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl EntityInput {
    pub fn new(name: &str, surname: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            surname: Some(surname.to_string()),
            email: Some(email.to_string()),
        }
    }
}
