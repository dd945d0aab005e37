//! HTTP API Layer
//!
//! This crate provides the REST API for the fraud auditor dashboard using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: claim listing, review workflow, stats, CSV upload
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent JSON error responses
//!
//! The store pool is constructed at startup and injected through
//! [`AppState`]; ingestion runs as a detached background task so the upload
//! request returns immediately.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let app = create_router(pool, ApiConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod dto;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_db::DatabasePool;

use crate::config::ApiConfig;
use crate::handlers::{claims, health, ingest, stats};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DatabasePool,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// CORS is wide open: the API serves a single-operator dashboard and carries
/// no credentials.
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
pub fn create_router(pool: DatabasePool, config: ApiConfig) -> Router {
    let state = AppState { pool, config };

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/ingest", post(ingest::upload_claims))
        .route("/stats", get(stats::get_stats))
        .route("/distribution", get(stats::get_distribution))
        .route("/claims", get(claims::list_claims))
        .route("/claims/:claim_id", put(claims::update_status))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
