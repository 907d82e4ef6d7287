// ABOUTME: HTTP route assembly for the planning API
// ABOUTME: Combines route groups and applies CORS, tracing, and timeout layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! HTTP surface of the planning service

/// Liveness and health probe routes
pub mod health;
/// Trip planning routes (init / recommend / route / refine)
pub mod planning;

use crate::resources::ServerResources;
use axum::Router;
use http::{header, HeaderValue, Method};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Assemble the full application router with middleware layers
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let request_timeout = Duration::from_secs(resources.config.http.request_timeout_secs);
    let cors = cors_layer(&resources.config.http.cors_origin);

    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(planning::PlanningRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
}

/// CORS restricted to the configured frontend origin
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    match origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            warn!("Invalid CORS origin '{origin}': {e}; denying cross-origin requests");
            layer
        }
    }
}
