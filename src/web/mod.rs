//! HTTP surface of the waitlist.
//!
//! Public routes serve the landing page (readiness, strings, counter, join);
//! routes under `/api/admin` require the admin bearer credential.

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/waitlist", get(handlers::list_entries))
        .route("/waitlist.csv", get(handlers::export_csv))
        .route("/waitlist/:id", delete(handlers::remove_entry))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/status", get(handlers::status))
        .route("/api/strings", get(handlers::strings))
        .route("/api/waitlist", post(handlers::join))
        .route("/api/waitlist/count", get(handlers::count))
        .nest("/api/admin", admin)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
