//! HTTP REST API routes

mod adventure_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use adventure_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/adventures", post(adventure_routes::start_adventure))
        .route("/api/adventures/{id}", get(adventure_routes::get_adventure))
        .route(
            "/api/adventures/{id}/choices",
            post(adventure_routes::submit_choice),
        )
        .route(
            "/api/adventures/player/{player_id}",
            get(adventure_routes::get_player_adventures),
        )
}
