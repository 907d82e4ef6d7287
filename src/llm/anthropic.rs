// ABOUTME: Anthropic LLM provider implementation over the Messages API
// ABOUTME: Default provider for itinerary generation, using Claude models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! # Anthropic Provider
//!
//! Implementation of the `LlmProvider` trait for Anthropic's Messages API.
//!
//! ## Configuration
//!
//! Set the `ANTHROPIC_API_KEY` environment variable with your API key from
//! the Anthropic Console: <https://console.anthropic.com/>
//!
//! ## Example
//!
//! ```rust,no_run
//! use wandermind::llm::{AnthropicProvider, LlmProvider, ChatRequest, ChatMessage};
//! use wandermind::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = AnthropicProvider::from_env()?;
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::user("Suggest attractions in Kyoto."),
//!     ]);
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, MessageRole, TokenUsage};
use crate::errors::AppError;
use crate::utils::http_client::create_client_with_timeout;

/// Environment variable for the Anthropic API key
const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Default model to use
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";

/// Available Anthropic models
const AVAILABLE_MODELS: &[&str] = &[
    "claude-3-5-sonnet-20240620",
    "claude-3-5-haiku-20241022",
    "claude-3-opus-20240229",
];

/// Base URL for the Anthropic API
const API_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Messages API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Token bound sent when the request carries none; the Messages API
/// requires an explicit value
const DEFAULT_MAX_TOKENS: u32 = 4096;

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Messages API request structure
#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Conversation message for the Messages API (user/assistant only;
/// system instructions travel in the top-level `system` field)
#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

/// Messages API response structure
#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
    model: String,
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Option<AnthropicUsage>,
}

/// Content block in the response
#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

/// Usage statistics in the response
#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Messages API error response
#[derive(Debug, Deserialize)]
struct AnthropicErrorResponse {
    error: AnthropicErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct AnthropicErrorDetail {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Anthropic LLM provider over the Messages API
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider with the given API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: create_client_with_timeout(60, 10),
            api_key,
        }
    }

    /// Create an Anthropic provider from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if `ANTHROPIC_API_KEY` is not set
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var(ANTHROPIC_API_KEY_ENV).map_err(|_| {
            AppError::config(format!(
                "Missing {ANTHROPIC_API_KEY_ENV} environment variable"
            ))
        })?;

        Ok(Self::new(api_key))
    }

    /// Build the API URL for a given endpoint
    fn api_url(endpoint: &str) -> String {
        format!("{API_BASE_URL}/{endpoint}")
    }

    /// Split internal messages into the Messages API shape: system
    /// instructions are concatenated into the top-level `system` field,
    /// everything else becomes a conversation message
    fn convert_messages(messages: &[ChatMessage]) -> (Option<String>, Vec<AnthropicMessage>) {
        let mut system_parts = Vec::new();
        let mut converted = Vec::with_capacity(messages.len());

        for msg in messages {
            match msg.role {
                MessageRole::System => system_parts.push(msg.content.clone()),
                MessageRole::User | MessageRole::Assistant => converted.push(AnthropicMessage {
                    role: msg.role.as_str().to_owned(),
                    content: msg.content.clone(),
                }),
            }
        }

        let system = if system_parts.is_empty() {
            None
        } else {
            Some(system_parts.join("\n\n"))
        };

        (system, converted)
    }

    /// Log the provider error detail and produce the uniform service error
    /// surfaced to callers
    fn service_error(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<AnthropicErrorResponse>(body) {
            error!(
                "Anthropic API error ({}): {} - {}",
                status,
                error_response
                    .error
                    .error_type
                    .as_deref()
                    .unwrap_or("unknown"),
                error_response.error.message
            );
        } else {
            error!(
                "Anthropic API error ({}): {}",
                status,
                body.chars().take(200).collect::<String>()
            );
        }

        AppError::external_service("Anthropic", "chat completion request failed")
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn display_name(&self) -> &'static str {
        "Anthropic (Claude)"
    }

    fn default_model(&self) -> &'static str {
        DEFAULT_MODEL
    }

    fn available_models(&self) -> &'static [&'static str] {
        AVAILABLE_MODELS
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(DEFAULT_MODEL);

        debug!("Sending chat completion request to Anthropic");

        let (system, messages) = Self::convert_messages(&request.messages);

        let anthropic_request = AnthropicRequest {
            model: model.to_owned(),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages,
            system,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(Self::api_url("messages"))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Anthropic API: {}", e);
                AppError::external_service("Anthropic", "chat completion request failed")
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Anthropic API response: {}", e);
            AppError::external_service("Anthropic", "chat completion request failed")
        })?;

        if !status.is_success() {
            return Err(Self::service_error(status, &body));
        }

        let anthropic_response: AnthropicResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Anthropic API response: {}", e);
            AppError::external_service("Anthropic", "chat completion request failed")
        })?;

        let content = anthropic_response
            .content
            .iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text.clone())
            .ok_or_else(|| {
                error!("Anthropic API returned no text content block");
                AppError::external_service("Anthropic", "chat completion request failed")
            })?;

        debug!(
            "Received response from Anthropic: {} chars, stop_reason: {:?}",
            content.len(),
            anthropic_response.stop_reason
        );

        Ok(ChatResponse {
            content,
            model: anthropic_response.model,
            usage: anthropic_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.input_tokens,
                completion_tokens: u.output_tokens,
                total_tokens: u.input_tokens + u.output_tokens,
            }),
            finish_reason: anthropic_response.stop_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        debug!("Performing Anthropic API health check");

        // The models endpoint is a lightweight authenticated call
        let response = self
            .client
            .get(Self::api_url("models"))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .send()
            .await
            .map_err(|e| {
                error!("Anthropic health check failed: {}", e);
                AppError::external_service("Anthropic", "health check failed")
            })?;

        let healthy = response.status().is_success();

        if healthy {
            debug!("Anthropic API health check passed");
        } else {
            warn!(
                "Anthropic API health check failed with status: {}",
                response.status()
            );
        }

        Ok(healthy)
    }
}
