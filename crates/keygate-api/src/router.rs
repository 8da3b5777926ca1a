//! Route definitions for the Keygate HTTP API.
//!
//! The paths are the public interface and carry no prefix. Anything
//! unmatched falls through to Axum's default 404.

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/create", post(handlers::license::create))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::admin::require_admin,
        ));

    Router::new()
        .merge(admin_routes)
        .route("/test", post(handlers::license::create_test))
        .route("/validate", post(handlers::license::validate))
        .route("/purchase", post(handlers::purchase::purchase))
        .route("/extend", post(handlers::purchase::extend))
        .route("/check", get(handlers::license::check))
        .route("/health", get(handlers::health::health_check))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any unmatched method or path answers 404, wrong-method requests
/// included.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
