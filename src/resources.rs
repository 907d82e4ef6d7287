// ABOUTME: Shared server resources wiring configuration to the planning collaborators
// ABOUTME: Constructed once at startup and shared across route handlers as Arc state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! Server resource container.
//!
//! Every route constructor takes `Arc<ServerResources>`; the container
//! owns the planner (which in turn owns its collaborators) and the
//! effective configuration.

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::geocoding::GeocodingService;
use crate::llm::ChatProvider;
use crate::planner::PlannerService;
use crate::store::InMemorySessionStore;
use std::sync::Arc;
use std::time::Duration;

/// Shared state for the HTTP surface
pub struct ServerResources {
    /// Effective server configuration
    pub config: ServerConfig,
    /// The planning pipeline
    pub planner: PlannerService,
}

impl ServerResources {
    /// Wrap an already-built planner (used by tests to inject doubles)
    #[must_use]
    pub const fn new(config: ServerConfig, planner: PlannerService) -> Self {
        Self { config, planner }
    }

    /// Build production resources from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the selected LLM provider's
    /// API key is missing
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let provider = Arc::new(ChatProvider::create(config.llm.provider)?);
        let geocoder = Arc::new(GeocodingService::with_config(
            config.geocoding.base_url.clone(),
            config.geocoding.enabled,
            Duration::from_secs(config.geocoding.timeout_secs),
        ));
        let sessions = Arc::new(InMemorySessionStore::new());

        let planner = PlannerService::new(
            provider,
            geocoder,
            sessions,
            config.llm.max_output_tokens,
        );

        Ok(Self::new(config, planner))
    }
}
