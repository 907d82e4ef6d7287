// ABOUTME: Session store abstraction for per-session trip planning parameters
// ABOUTME: Pluggable backend support following the provider-trait pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! Session storage abstraction.
//!
//! Planning sessions are ephemeral records keyed by an opaque session
//! identifier. The store contract is deliberately small: atomic per-key
//! create and an explicit not-found signal on lookup. Expiry and eviction
//! are backend policy concerns, not modeled here.

/// In-memory session store implementation
pub mod memory;

pub use memory::InMemorySessionStore;

use crate::errors::AppResult;
use crate::models::Session;
use async_trait::async_trait;

/// Session store trait for pluggable backend implementations
///
/// Implementations must provide atomic per-key upsert semantics; the
/// planning pipeline itself never mutates a stored session after
/// creation.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a newly created session under its own identifier
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend write fails
    async fn create(&self, session: Session) -> AppResult<()>;

    /// Fetch a session by identifier
    ///
    /// Returns `Ok(None)` when the identifier is unknown; callers decide
    /// whether that is an error (downstream planning operations surface
    /// it as "Session not found").
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend read fails
    async fn get(&self, session_id: &str) -> AppResult<Option<Session>>;
}
