//! Shared application state, built once at startup and cloned per route.

use crate::service::{PlayerService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub players: PlayerService,
    pub users: UserService,
}
