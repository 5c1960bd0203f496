//! Axum router configuration with middleware.
//!
//! Routes: the relay endpoint, two debug endpoints and `/health`. The
//! front end in `public_dir` is served as the fallback when that directory
//! exists; otherwise only the API is served.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public_dir = state.config.public_dir.clone();

    let mut router = Router::new()
        .route("/api/gemini", post(handlers::prompt::generate))
        .route("/_models", get(handlers::debug::list_models))
        .route("/_debug-list", get(handlers::debug::list_public_files))
        .route("/health", get(health_check));

    // The fallback must exist before the layers are applied for them to wrap it.
    if std::path::Path::new(&public_dir).is_dir() {
        router = router.fallback_service(ServeDir::new(&public_dir));
        tracing::info!(path = %public_dir, "Static file serving enabled");
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
