// ABOUTME: WanderMind library crate root exposing the itinerary planning pipeline
// ABOUTME: AI-powered multi-day travel planning with normalization and route validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! # WanderMind API
//!
//! AI-powered multi-day travel itinerary planning service.
//!
//! Given a city, date range, and interest tags, WanderMind asks a
//! generative model to propose attractions, sequences them into a
//! day-by-day route, and lets the user iteratively refine that route
//! via free-text feedback. The heart of the crate is the planning
//! pipeline in [`planner`]: it turns an unstructured, best-effort text
//! response from the model into a validated, internally-consistent
//! route structure, enriched with coordinates and matched back against
//! a known-attraction catalog.
//!
//! ## Architecture
//!
//! - [`llm`] — pluggable generative-model providers (Anthropic, Groq)
//! - [`geocoding`] — place-name resolution with a never-failing fallback
//! - [`planner`] — prompts, response normalization, enrichment, and
//!   route validation
//! - [`store`] — session storage abstraction
//! - [`routes`] — axum HTTP surface
//! - [`errors`] — unified error taxonomy with HTTP mapping

/// Environment-driven configuration
pub mod config;
/// Unified error handling
pub mod errors;
/// Geocoder adapter with fallback contract
pub mod geocoding;
/// LLM provider abstraction
pub mod llm;
/// Structured logging setup
pub mod logging;
/// Core domain models
pub mod models;
/// Itinerary planning pipeline
pub mod planner;
/// Shared server resources
pub mod resources;
/// HTTP route handlers
pub mod routes;
/// Session storage
pub mod store;
/// Shared utilities
pub mod utils;
