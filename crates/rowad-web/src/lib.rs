//! rowad-web library root.
//!
//! The controller, routes and configuration live here so that integration
//! tests can drive them without binding a socket.

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};

use state::AppState;

/// Build the application router.
///
/// Uploads are not size-capped; the provider decides what it accepts.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::page::index))
        .route("/generate", post(routes::generate::generate))
        .route("/reset", post(routes::reset::reset))
        .route("/export", get(routes::export::export))
        .route("/health", get(routes::health::health_check))
        .layer(DefaultBodyLimit::disable())
        .layer(axum_mw::from_fn(middleware::request_log))
        .with_state(state)
}
