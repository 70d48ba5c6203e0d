//! Roster API: REST CRUD over players and users, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::{ApiError, EntityKind};
pub use models::{EntityInput, Player, User};
pub use repository::{PgPlayerGateway, PgUserGateway, PlayerGateway, UserGateway};
pub use routes::api_routes;
pub use service::{PlayerService, UserService};
pub use state::AppState;
pub use store::ensure_tables;
