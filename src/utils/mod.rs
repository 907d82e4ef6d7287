// ABOUTME: Shared utility modules for HTTP client management
// ABOUTME: Centralizes cross-cutting helpers used by outbound service adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! Shared utilities

/// HTTP client utilities with connection pooling and timeout configuration
pub mod http_client;
