//! HTTP route handlers.

pub mod members;
pub mod whoami;

use std::sync::Arc;

use axum::Router;

use crate::server::AppState;

/// REST routes for the roster query surface.
pub fn rest_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(members::routes())
        .merge(whoami::routes())
}
