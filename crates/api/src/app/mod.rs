//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `routes.rs`: HTTP routes + handlers
//! - `responses.rs`: deterministic outcome → status/body mapping

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use cpfauth_auth::AuthenticationService;
use cpfauth_directory::UserDirectory;

pub mod responses;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The directory handle is constructed once by the caller and shared across
/// all requests; handlers hold no other state.
pub fn build_app(directory: Arc<dyn UserDirectory>) -> Router {
    let service = AuthenticationService::new(directory);

    Router::new()
        .route("/health", get(routes::health))
        .route("/auth", get(routes::authenticate))
        .layer(Extension(service))
        .layer(ServiceBuilder::new())
}
