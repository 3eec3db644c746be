// Library crate for the portfolio projects gateway
// Exports modules for use by the browse binary and tests

pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::handlers::{health, list_projects, not_found};
use crate::middlewares::cors;
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // Listing routes, cacheable by browsers and CDNs
    let api_routes = Router::new()
        .route("/api/projects", get(list_projects))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=300"),
        ));

    Router::new()
        .route("/health", get(health))
        .merge(api_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(cors)),
        )
        .with_state(state)
}
