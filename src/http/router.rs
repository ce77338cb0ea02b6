//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, compression,
//! tracing) and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/meta", get(handlers::get_meta))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/kpis", get(handlers::get_kpis))
        .route("/yearly-trends", get(handlers::get_yearly_trends))
        .route("/country-totals", get(handlers::get_country_totals))
        .route("/recent", get(handlers::get_recent))
        .route("/map-points", get(handlers::get_map_points))
        .route("/reload", post(handlers::reload_snapshot));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
