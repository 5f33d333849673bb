//! HTTP routes

mod ping;
mod users;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub use ping::ping;
pub use users::{add_user, list_users, UsersBody};

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/users", get(list_users).post(add_user))
        .with_state(state)
}
