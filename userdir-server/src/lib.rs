//! User Directory Server - HTTP front-end
//!
//! - **routes**: axum handlers for `/ping` and `/users`
//! - **error**: mapping of core errors to HTTP responses

pub mod error;
pub mod routes;

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use userdir_core::services::UserService;
use userdir_core::UserDirContext;

pub use routes::router;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }
}

impl From<&UserDirContext> for AppState {
    fn from(ctx: &UserDirContext) -> Self {
        Self::new(Arc::clone(&ctx.user_service))
    }
}

/// Serve the router on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
