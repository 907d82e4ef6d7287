// ABOUTME: Shared test fixtures for the integration suites
// ABOUTME: Scripted LLM provider double and offline planner/resource builders

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wandermind::config::ServerConfig;
use wandermind::errors::AppError;
use wandermind::geocoding::GeocodingService;
use wandermind::llm::{ChatRequest, ChatResponse, LlmProvider};
use wandermind::planner::PlannerService;
use wandermind::resources::ServerResources;
use wandermind::store::InMemorySessionStore;

/// LLM provider double that replays a fixed script of responses
///
/// Each `complete` call pops the next scripted response; running out of
/// script is a test bug surfaced as an external-service error.
pub struct ScriptedLlmProvider {
    responses: Mutex<VecDeque<String>>,
}

impl ScriptedLlmProvider {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| (*r).to_owned()).collect()),
        }
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlmProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted (test double)"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["scripted-model"]
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let next = self.responses.lock().unwrap().pop_front();
        next.map_or_else(
            || {
                Err(AppError::external_service(
                    "Scripted",
                    "no scripted responses left",
                ))
            },
            |content| {
                Ok(ChatResponse {
                    content,
                    model: "scripted-model".to_owned(),
                    usage: None,
                    finish_reason: Some("stop".to_owned()),
                })
            },
        )
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Geocoder with live lookups disabled: resolution uses only the static
/// fallback table, so coordinates are fully deterministic
pub fn offline_geocoder() -> Arc<GeocodingService> {
    Arc::new(GeocodingService::with_config(
        String::new(),
        false,
        Duration::from_secs(1),
    ))
}

/// Planner wired to the scripted provider, an offline geocoder, an empty
/// in-memory session store, and a seeded jitter source
pub fn scripted_planner(responses: &[&str]) -> PlannerService {
    PlannerService::new(
        Arc::new(ScriptedLlmProvider::new(responses)),
        offline_geocoder(),
        Arc::new(InMemorySessionStore::new()),
        4096,
    )
    .with_rng_seed(42)
}

/// Full server resources over a scripted planner, for route-level tests
pub fn scripted_resources(responses: &[&str]) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        scripted_planner(responses),
    ))
}

/// A valid 8-attraction recommendation response, as the model would emit
/// it (fenced, since providers routinely wrap JSON in code fences)
pub fn sample_recommendation_response() -> String {
    let attractions: Vec<String> = (1..=8)
        .map(|i| {
            format!(
                r#"{{"name": "Attraction {i}", "description": "Stop number {i}.", "duration_hr": {i}.5, "category": "Museum"}}"#
            )
        })
        .collect();
    format!("```json\n[{}]\n```", attractions.join(","))
}
