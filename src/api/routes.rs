use axum::http::{header, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::api::handlers::{self as api_handlers, AppState};
use crate::config::Settings;

/// Create the router with all endpoints
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    let api_routes = Router::new()
        .route("/search", post(api_handlers::search_recipes))
        .route("/recipes/:name", get(api_handlers::get_recipe))
        .route(
            "/recipes/:name/recommendations",
            get(api_handlers::get_recommendations),
        )
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .with_state(state);

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            // Request body size limit
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(
            // Tracing
            TraceLayer::new_for_http(),
        )
}
