pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::keywords::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Keyword analysis API
        .route("/api/v1/keywords/extract", post(handlers::handle_extract))
        .route("/api/v1/keywords/match", post(handlers::handle_match))
        // Editor bootstrap
        .route(
            "/api/v1/resumes/sample",
            get(handlers::handle_sample_resume),
        )
}
