mod dto;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
mod repo;
mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo::{PgUserRepository, UserRepository};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::user_routes())
}
