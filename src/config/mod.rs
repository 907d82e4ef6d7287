// ABOUTME: Configuration module for environment-driven server settings
// ABOUTME: Groups HTTP, geocoding, and LLM provider configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! Environment-only server configuration

mod environment;

pub use environment::{
    GeocodingConfig, HttpConfig, LlmConfig, LlmProviderType, ServerConfig,
};
