// ABOUTME: Route builder matching model-proposed stops against a known-attraction catalog
// ABOUTME: Drops unmatched stops, recomputes trip duration, and assembles the final route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! # Route Builder / Validator
//!
//! The model sequences stops by attraction *name*; this module resolves
//! those references against the caller-supplied catalog — the candidate
//! list for initial generation, or the current route's own attractions
//! during refinement — and assembles the validated [`TravelRoute`].
//!
//! Policy decisions, applied deliberately rather than incidentally:
//! - **`DropUnmatchedStops`**: a stop naming an attraction missing from
//!   the catalog is silently dropped (the model hallucinates or renames);
//!   every surviving stop is traceable to a real, known attraction.
//! - Total duration is always recomputed from the surviving stops, never
//!   taken from upstream input.
//! - A route where every stop was dropped is a valid empty route, not an
//!   error.
//! - Order and day values are trusted as-is; nothing is renumbered,
//!   re-sorted, or re-grouped.

use crate::models::{Attraction, RouteStop, TravelRoute};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Default summary when the model omits one during initial generation
pub const DEFAULT_ROUTE_SUMMARY: &str = "Your personalized itinerary is ready!";

/// Default summary when the model omits one during refinement
pub const DEFAULT_REFINE_SUMMARY: &str = "Your itinerary has been updated!";

/// A route as proposed by the model, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDraft {
    /// Proposed stops in production order
    pub stops: Vec<DraftStop>,
    /// Optional model-written summary
    #[serde(default)]
    pub summary: Option<String>,
}

/// One stop of a [`RouteDraft`]
///
/// The wire format mixes naming styles (`attraction_name` but
/// `startTime`), matching the shape the prompts request.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftStop {
    /// Name of the referenced attraction; the matching key
    pub attraction_name: String,
    /// Position in the overall trip
    pub order: u32,
    /// Day index, starting at 1
    pub day: u32,
    /// Visit start, "HH:MM"
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// Visit end, "HH:MM"
    #[serde(rename = "endTime")]
    pub end_time: String,
    /// Minutes to the next stop; absent on the last stop of a day
    #[serde(rename = "travelTimeToNext", default)]
    pub travel_time_to_next: Option<u32>,
}

/// Assemble a validated route from a model draft and a known-attraction catalog
#[must_use]
pub fn build_route(
    draft: RouteDraft,
    catalog: &[Attraction],
    default_summary: &str,
) -> TravelRoute {
    let by_name: HashMap<&str, &Attraction> =
        catalog.iter().map(|a| (a.name.as_str(), a)).collect();

    let mut stops = Vec::with_capacity(draft.stops.len());

    for draft_stop in draft.stops {
        let Some(attraction) = by_name.get(draft_stop.attraction_name.as_str()) else {
            // DropUnmatchedStops: tolerate hallucinated or renamed stops
            debug!(
                "Dropping route stop referencing unknown attraction: {}",
                draft_stop.attraction_name
            );
            continue;
        };

        stops.push(RouteStop {
            attraction: (*attraction).clone(),
            order: draft_stop.order,
            day: draft_stop.day,
            start_time: draft_stop.start_time,
            end_time: draft_stop.end_time,
            travel_time_to_next: draft_stop.travel_time_to_next,
        });
    }

    let total_duration = stops.iter().map(|s| s.attraction.duration_hr).sum();

    TravelRoute {
        stops,
        total_duration,
        summary: draft
            .summary
            .unwrap_or_else(|| default_summary.to_owned()),
    }
}
