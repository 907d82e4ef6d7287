// ABOUTME: Trip planning route handlers for session init, recommendations, and routing
// ABOUTME: Thin axum handlers delegating to the planner service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! Planning routes
//!
//! The four planning endpoints mirror the interaction flow: create a
//! session, request recommendations, request a route over a selected
//! subset, then iteratively refine. Handlers validate nothing beyond
//! deserialization — structural preconditions and all pipeline policy
//! live in [`PlannerService`](crate::planner::PlannerService).

use crate::errors::AppError;
use crate::models::{Attraction, Session, TravelRoute};
use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to initialize a planning session
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitRequest {
    /// Destination city
    pub city: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive)
    pub end_date: NaiveDate,
    /// Free-text interest tags
    pub interests: Vec<String>,
}

/// Request for attraction recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// Session to recommend for
    pub session_id: String,
}

/// Response carrying recommended attractions
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// Enriched attractions in model-proposed order
    pub attractions: Vec<Attraction>,
}

/// Request to generate a route over selected attractions
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Session the route belongs to
    pub session_id: String,
    /// Selected attractions (at least two)
    pub attractions: Vec<Attraction>,
}

/// Request to refine an existing route
#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    /// Session the route belongs to
    pub session_id: String,
    /// Free-text refinement instruction
    pub message: String,
    /// The route being refined
    pub current_route: TravelRoute,
}

// ============================================================================
// Planning Routes
// ============================================================================

/// Planning routes handler
pub struct PlanningRoutes;

impl PlanningRoutes {
    /// Create all planning routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/init", post(Self::init))
            .route("/api/recommend", post(Self::recommend))
            .route("/api/route", post(Self::route))
            .route("/api/refine", post(Self::refine))
            .with_state(resources)
    }

    /// Initialize a new travel planning session
    async fn init(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<InitRequest>,
    ) -> Result<Response, AppError> {
        let session: Session = resources
            .planner
            .init_session(
                request.city,
                request.start_date,
                request.end_date,
                request.interests,
            )
            .await?;

        Ok((StatusCode::OK, Json(session)).into_response())
    }

    /// Get AI-powered attraction recommendations
    async fn recommend(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RecommendRequest>,
    ) -> Result<Response, AppError> {
        let attractions = resources.planner.recommend(&request.session_id).await?;

        Ok((StatusCode::OK, Json(RecommendResponse { attractions })).into_response())
    }

    /// Generate an optimized travel route
    async fn route(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RouteRequest>,
    ) -> Result<Response, AppError> {
        let route = resources
            .planner
            .build_route(&request.session_id, &request.attractions)
            .await?;

        Ok((StatusCode::OK, Json(route)).into_response())
    }

    /// Refine the route based on user feedback
    async fn refine(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RefineRequest>,
    ) -> Result<Response, AppError> {
        let route = resources
            .planner
            .refine_route(&request.session_id, &request.message, &request.current_route)
            .await?;

        Ok((StatusCode::OK, Json(route)).into_response())
    }
}
