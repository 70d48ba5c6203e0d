//! Business operations per entity kind.

mod player;
mod user;

pub use player::PlayerService;
pub use user::UserService;
