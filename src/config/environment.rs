// ABOUTME: Environment variable parsing for server, geocoding, and LLM configuration
// ABOUTME: All settings carry working defaults so the server boots with only an API key set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;

/// Top-level server configuration assembled from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listener settings
    pub http: HttpConfig,
    /// Geocoder adapter settings
    pub geocoding: GeocodingConfig,
    /// Generative-model provider settings
    pub llm: LlmConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Allowed CORS origin for the frontend
    pub cors_origin: String,
    /// Whole-request timeout applied by the server, in seconds
    pub request_timeout_secs: u64,
}

/// Geocoder adapter configuration
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Base URL of the Nominatim-compatible geocoding endpoint
    pub base_url: String,
    /// When false, live lookups are skipped and only the static
    /// fallback table is consulted
    pub enabled: bool,
    /// Per-lookup timeout, in seconds
    pub timeout_secs: u64,
}

/// Generative-model provider configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider implementation to use
    pub provider: LlmProviderType,
    /// Output token bound passed on every model call
    pub max_output_tokens: u32,
}

/// Supported LLM provider implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderType {
    /// Anthropic Messages API (default)
    Anthropic,
    /// Groq OpenAI-compatible API
    Groq,
}

impl LlmProviderType {
    /// Environment variable that selects the provider
    pub const ENV_VAR: &'static str = "WANDERMIND_LLM_PROVIDER";

    /// Read the provider selection from the environment
    ///
    /// Unrecognized values fall back to the default (Anthropic).
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(Self::ENV_VAR).as_deref() {
            Ok("groq") => Self::Groq,
            _ => Self::Anthropic,
        }
    }
}

impl fmt::Display for LlmProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anthropic => write!(f, "anthropic"),
            Self::Groq => write!(f, "groq"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                host: "0.0.0.0".into(),
                port: 8000,
                cors_origin: "http://localhost:3000".into(),
                request_timeout_secs: 120,
            },
            geocoding: GeocodingConfig {
                base_url: "https://nominatim.openstreetmap.org".into(),
                enabled: true,
                timeout_secs: 10,
            },
            llm: LlmConfig {
                provider: LlmProviderType::Anthropic,
                max_output_tokens: 4096,
            },
        }
    }
}

impl ServerConfig {
    /// Assemble configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a numeric variable is set but
    /// unparseable
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            http: HttpConfig {
                host: env::var("HOST").unwrap_or(defaults.http.host),
                port: parse_env("PORT", defaults.http.port)?,
                cors_origin: env::var("CORS_ORIGIN").unwrap_or(defaults.http.cors_origin),
                request_timeout_secs: parse_env(
                    "REQUEST_TIMEOUT_SECS",
                    defaults.http.request_timeout_secs,
                )?,
            },
            geocoding: GeocodingConfig {
                base_url: env::var("GEOCODING_BASE_URL").unwrap_or(defaults.geocoding.base_url),
                enabled: env::var("GEOCODING_ENABLED")
                    .map(|v| v != "false" && v != "0")
                    .unwrap_or(defaults.geocoding.enabled),
                timeout_secs: parse_env("GEOCODING_TIMEOUT_SECS", defaults.geocoding.timeout_secs)?,
            },
            llm: LlmConfig {
                provider: LlmProviderType::from_env(),
                max_output_tokens: parse_env(
                    "LLM_MAX_OUTPUT_TOKENS",
                    defaults.llm.max_output_tokens,
                )?,
            },
        })
    }
}

/// Parse an optional numeric environment variable, erroring on junk values
/// rather than silently falling back
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("invalid value for {name}: {raw}"))),
        Err(_) => Ok(default),
    }
}
