// ABOUTME: Liveness and health probe route handlers
// ABOUTME: Unauthenticated endpoints used by deployment checks and the frontend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the liveness and health routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::root))
            .route("/api/health", get(Self::health))
    }

    /// Root liveness message
    async fn root() -> Json<Value> {
        Json(json!({ "message": "WanderMind API is running" }))
    }

    /// Health probe
    async fn health() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "wandermind",
            "version": env!("CARGO_PKG_VERSION"),
        }))
    }
}
