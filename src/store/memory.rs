// ABOUTME: In-memory session store backed by a concurrent hash map
// ABOUTME: Default backend; per-key operations are atomic without explicit locking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

use super::SessionStore;
use crate::errors::AppResult;
use crate::models::Session;
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory session store
///
/// Sessions live for the process lifetime; there is no eviction. A
/// production deployment concerned with growth would swap in a TTL-aware
/// backend behind the same trait.
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Number of sessions currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: Session) -> AppResult<()> {
        self.sessions.insert(session.session_id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> AppResult<Option<Session>> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|entry| entry.value().clone()))
    }
}
