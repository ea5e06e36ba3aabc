//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

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
    // The dashboard front end is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/controls", get(handlers::get_controls))
        .route("/dataset/profile", get(handlers::get_dataset_profile))
        // Views
        .route("/views/origin-summary", get(handlers::get_origin_summary))
        .route("/views/destination-map", get(handlers::get_destination_map))
        .route("/views/delay-histogram", get(handlers::get_delay_histogram))
        .route("/views/distance-heatmap", get(handlers::get_distance_heatmap))
        .route("/views/summary", get(handlers::get_summary))
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{session_id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route(
            "/sessions/{session_id}/changes",
            post(handlers::apply_session_change),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
