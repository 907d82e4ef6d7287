// ABOUTME: Planner service orchestrating the itinerary generation pipeline
// ABOUTME: Session init, recommendation, route generation, and refinement operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! # Itinerary Planning Pipeline
//!
//! [`PlannerService`] is the orchestration layer over the pipeline
//! stages: prompt construction → one generative-model round trip →
//! response normalization → enrichment or route validation. Each
//! planning operation is an independent request-response unit; the
//! service reads session parameters and returns newly constructed
//! values, never mutating shared state beyond session creation.

/// Attraction enrichment with the anti-overlap jitter policy
pub mod enricher;
/// Model response cleaning and parsing
pub mod normalizer;
/// Prompt construction for the three planning operations
pub mod prompts;
/// Route matching and validation
pub mod route_builder;

pub use enricher::{AttractionEnricher, ProposedAttraction};
pub use route_builder::{RouteDraft, DEFAULT_REFINE_SUMMARY, DEFAULT_ROUTE_SUMMARY};

use crate::errors::{AppError, AppResult};
use crate::geocoding::GeocodingService;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{Attraction, Session, TravelRoute};
use crate::store::SessionStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Orchestrates session-scoped itinerary planning
pub struct PlannerService {
    llm: Arc<dyn LlmProvider>,
    geocoder: Arc<GeocodingService>,
    sessions: Arc<dyn SessionStore>,
    enricher: AttractionEnricher,
    max_output_tokens: u32,
}

impl PlannerService {
    /// Create a planner over the given collaborators
    #[must_use]
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        geocoder: Arc<GeocodingService>,
        sessions: Arc<dyn SessionStore>,
        max_output_tokens: u32,
    ) -> Self {
        let enricher = AttractionEnricher::new(Arc::clone(&geocoder));
        Self {
            llm,
            geocoder,
            sessions,
            enricher,
            max_output_tokens,
        }
    }

    /// Replace the enricher's jitter source with a deterministic seed
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.enricher = AttractionEnricher::with_rng_seed(Arc::clone(&self.geocoder), seed);
        self
    }

    /// Initialize a new travel planning session
    ///
    /// Resolves the city coordinate once and caches it in the session.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `end_date` precedes `start_date`,
    /// or a storage error if the session cannot be persisted
    #[instrument(skip(self, interests))]
    pub async fn init_session(
        &self,
        city: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        interests: Vec<String>,
    ) -> AppResult<Session> {
        if end_date < start_date {
            return Err(AppError::invalid_input(
                "endDate must not be before startDate",
            ));
        }

        let city_coordinates = self.geocoder.resolve_city(&city).await;

        let session = Session {
            session_id: Uuid::new_v4().to_string(),
            city,
            start_date,
            end_date,
            interests,
            city_coordinates,
        };

        self.sessions.create(session.clone()).await?;
        info!("Created session {} for {}", session.session_id, session.city);

        Ok(session)
    }

    /// Generate AI-powered attraction recommendations for a session
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown session, an external-service
    /// error if the model call fails, or a malformed-response error if
    /// its output cannot be parsed
    #[instrument(skip(self))]
    pub async fn recommend(&self, session_id: &str) -> AppResult<Vec<Attraction>> {
        let session = self.session(session_id).await?;

        let (system, user) =
            prompts::recommendation_prompts(&session.city, session.day_count(), &session.interests);
        let raw = self.chat(system, user).await?;

        let proposals: Vec<ProposedAttraction> = normalizer::parse_model_json(&raw)?;
        let attractions = self
            .enricher
            .enrich(proposals, &session.city, session.city_coordinates)
            .await;

        info!(
            "Generated {} attractions for session {}",
            attractions.len(),
            session_id
        );

        Ok(attractions)
    }

    /// Generate a day-by-day route over the selected attractions
    ///
    /// Every stop in the result references an attraction from
    /// `attractions`; stops the model invents are dropped.
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown session, a validation error when
    /// fewer than two attractions are supplied, an external-service error
    /// if the model call fails, or a malformed-response error if its
    /// output cannot be parsed
    #[instrument(skip(self, attractions))]
    pub async fn build_route(
        &self,
        session_id: &str,
        attractions: &[Attraction],
    ) -> AppResult<TravelRoute> {
        let session = self.session(session_id).await?;

        if attractions.len() < 2 {
            return Err(AppError::invalid_input("At least 2 attractions required"));
        }

        let (system, user) =
            prompts::route_prompts(&session.city, session.day_count(), attractions);
        let raw = self.chat(system, user).await?;

        let draft: RouteDraft = normalizer::parse_model_json(&raw)?;
        let route = route_builder::build_route(draft, attractions, DEFAULT_ROUTE_SUMMARY);

        info!(
            "Generated route with {} stops for session {}",
            route.stops.len(),
            session_id
        );

        Ok(route)
    }

    /// Refine an existing route from free-text user feedback
    ///
    /// The refined route is matched against the current route's own
    /// attraction set; refinement never introduces new attractions.
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown session, an external-service
    /// error if the model call fails, or a malformed-response error if
    /// its output cannot be parsed
    #[instrument(skip(self, message, current_route))]
    pub async fn refine_route(
        &self,
        session_id: &str,
        message: &str,
        current_route: &TravelRoute,
    ) -> AppResult<TravelRoute> {
        // Refinement only needs the session to exist; the prompt is built
        // from the current route and the user's message alone.
        self.session(session_id).await?;

        let (system, user) = prompts::refine_prompts(current_route, message);
        let raw = self.chat(system, user).await?;

        let draft: RouteDraft = normalizer::parse_model_json(&raw)?;
        let catalog: Vec<Attraction> = current_route
            .stops
            .iter()
            .map(|stop| stop.attraction.clone())
            .collect();
        let route = route_builder::build_route(draft, &catalog, DEFAULT_REFINE_SUMMARY);

        info!("Refined route for session {}", session_id);

        Ok(route)
    }

    /// Fetch a session or surface the miss as not-found
    async fn session(&self, session_id: &str) -> AppResult<Session> {
        self.sessions
            .get(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session").with_resource_id(session_id))
    }

    /// One model round trip with the configured output-token bound
    async fn chat(&self, system: String, user: String) -> AppResult<String> {
        let request = ChatRequest::new(vec![ChatMessage::system(system), ChatMessage::user(user)])
            .with_max_tokens(self.max_output_tokens);

        let response = self.llm.complete(&request).await?;
        Ok(response.content)
    }
}
