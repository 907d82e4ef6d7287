// ABOUTME: Unified LLM provider selector for runtime provider switching
// ABOUTME: Abstracts over Anthropic and Groq providers based on environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! # LLM Provider Selector
//!
//! This module provides a unified interface for LLM providers that can be
//! configured at runtime via environment variables.
//!
//! ## Configuration
//!
//! Set the `WANDERMIND_LLM_PROVIDER` environment variable:
//! - `anthropic` (default): Anthropic Messages API (Claude)
//! - `groq`: Groq for cost-effective open-source models

use async_trait::async_trait;
use tracing::{debug, info};

use super::{AnthropicProvider, ChatRequest, ChatResponse, GroqProvider, LlmProvider};
use crate::config::LlmProviderType;
use crate::errors::AppError;

/// Unified chat provider that wraps Anthropic or Groq
///
/// This enum provides a consistent interface regardless of which
/// underlying provider is configured.
pub enum ChatProvider {
    /// Anthropic Messages API provider
    Anthropic(AnthropicProvider),
    /// Groq provider for fast, cost-effective inference
    Groq(GroqProvider),
}

impl ChatProvider {
    /// Create a provider from environment configuration
    ///
    /// Reads [`LlmProviderType::ENV_VAR`] to determine which provider to
    /// use, then the provider's own key variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected provider's API key environment
    /// variable is missing
    pub fn from_env() -> Result<Self, AppError> {
        Self::create(LlmProviderType::from_env())
    }

    /// Create a provider for a specific type
    ///
    /// # Errors
    ///
    /// Returns an error if the provider's API key environment variable is
    /// missing
    pub fn create(provider_type: LlmProviderType) -> Result<Self, AppError> {
        info!(
            "Initializing LLM provider: {} (set {} to change)",
            provider_type,
            LlmProviderType::ENV_VAR
        );

        let provider = match provider_type {
            LlmProviderType::Anthropic => Self::Anthropic(AnthropicProvider::from_env()?),
            LlmProviderType::Groq => Self::Groq(GroqProvider::from_env()?),
        };

        debug!(
            "Provider {} initialized with model: {}",
            provider.display_name(),
            provider.default_model()
        );

        Ok(provider)
    }

    /// Borrow the wrapped provider as a trait object
    fn inner(&self) -> &dyn LlmProvider {
        match self {
            Self::Anthropic(p) => p,
            Self::Groq(p) => p,
        }
    }
}

#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn display_name(&self) -> &'static str {
        self.inner().display_name()
    }

    fn default_model(&self) -> &str {
        self.inner().default_model()
    }

    fn available_models(&self) -> &'static [&'static str] {
        self.inner().available_models()
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.inner().complete(request).await
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        self.inner().health_check().await
    }
}
