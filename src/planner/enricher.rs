// ABOUTME: Attraction enricher assigning stable identifiers and coordinates to model proposals
// ABOUTME: Applies an anti-overlap jitter when the geocoder falls back to the city center
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! # Attraction Enricher
//!
//! Turns normalized model proposals into fully-populated [`Attraction`]
//! records: a fresh identifier, resolved coordinates, and the redundant
//! coordinate-pair view.
//!
//! When the geocoder cannot resolve a specific landmark it falls back to
//! the city center, which would stack every such marker on one point.
//! The enricher perturbs those coordinates with a small uniform jitter —
//! except for the first item of a batch, which is allowed to sit exactly
//! at the center. The jitter source is an injectable seeded RNG so the
//! policy is testable.

use crate::geocoding::GeocodingService;
use crate::models::{Attraction, Coordinates};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

/// Maximum jitter magnitude per axis, in decimal degrees
const MAX_MARKER_JITTER_DEGREES: f64 = 0.02;

/// An attraction as proposed by the model, before enrichment
///
/// Every field is required: a proposal missing any of them fails JSON
/// parsing, which fails the whole recommendation batch — the model
/// response is treated as one atomic unit of work, never partially
/// salvaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposedAttraction {
    /// Attraction name
    pub name: String,
    /// Short description
    pub description: String,
    /// Expected visit duration in hours
    pub duration_hr: f64,
    /// Category label
    pub category: String,
}

/// Enricher attaching identifiers and coordinates to proposed attractions
pub struct AttractionEnricher {
    geocoder: Arc<GeocodingService>,
    rng: Mutex<ChaCha8Rng>,
}

impl AttractionEnricher {
    /// Create an enricher with an OS-entropy-seeded jitter source
    #[must_use]
    pub fn new(geocoder: Arc<GeocodingService>) -> Self {
        Self {
            geocoder,
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Create an enricher with a deterministic jitter source for tests
    #[must_use]
    pub fn with_rng_seed(geocoder: Arc<GeocodingService>, seed: u64) -> Self {
        Self {
            geocoder,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Enrich a batch of proposals, in model-output order
    ///
    /// One geocoding call per proposal, sequential; the geocoder's
    /// fallback contract guarantees every call yields a usable pair.
    pub async fn enrich(
        &self,
        proposals: Vec<ProposedAttraction>,
        city: &str,
        city_coordinates: Coordinates,
    ) -> Vec<Attraction> {
        let mut attractions = Vec::with_capacity(proposals.len());

        for (index, proposal) in proposals.into_iter().enumerate() {
            let mut coordinates = self.geocoder.resolve_attraction(&proposal.name, city).await;

            // Exact equality with the cached city center marks a fallback
            // resolution; the first item is exempt from the jitter.
            #[allow(clippy::float_cmp)]
            if coordinates == city_coordinates && index > 0 {
                coordinates = self.jitter(coordinates);
            }

            attractions.push(Attraction {
                id: Uuid::new_v4(),
                name: proposal.name,
                description: proposal.description,
                duration_hr: proposal.duration_hr,
                category: proposal.category,
                latitude: coordinates.0,
                longitude: coordinates.1,
                coordinates,
            });
        }

        attractions
    }

    /// Perturb a coordinate pair with independent uniform jitter per axis
    fn jitter(&self, (latitude, longitude): Coordinates) -> Coordinates {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (
            latitude + rng.gen_range(-MAX_MARKER_JITTER_DEGREES..=MAX_MARKER_JITTER_DEGREES),
            longitude + rng.gen_range(-MAX_MARKER_JITTER_DEGREES..=MAX_MARKER_JITTER_DEGREES),
        )
    }
}
