// ABOUTME: Core domain models for trip planning sessions, attractions, and travel routes
// ABOUTME: Serde-backed types matching the camelCase wire format of the planning API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! Domain models shared across the planning pipeline and the HTTP surface.
//!
//! All types serialize to the camelCase wire format consumed by the
//! frontend (`sessionId`, `startDate`, `travelTimeToNext`, ...).
//! Coordinate pairs are `(latitude, longitude)` tuples, serialized as
//! two-element JSON arrays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A `(latitude, longitude)` pair in decimal degrees
pub type Coordinates = (f64, f64);

/// Server-held record of one user's trip-planning parameters
///
/// Created once per planning interaction and keyed by the opaque
/// `session_id`. The city coordinate is resolved at creation and cached
/// here for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque session identifier, generated at creation, immutable
    pub session_id: String,
    /// Destination city
    pub city: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive, never before `start_date`)
    pub end_date: NaiveDate,
    /// Ordered free-text interest tags
    pub interests: Vec<String>,
    /// City-center coordinate, resolved once at creation
    pub city_coordinates: Coordinates,
}

impl Session {
    /// Number of trip days, inclusive of both endpoints
    ///
    /// Always strictly positive for a valid session (`end_date >= start_date`).
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A single point of interest with descriptive and geographic metadata
///
/// Once enriched, `id` and the coordinate fields are immutable for the
/// lifetime of the instance. `coordinates` mirrors `latitude`/`longitude`
/// for consumers that want the pair view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    /// Stable identifier, assigned during enrichment
    pub id: Uuid,
    /// Attraction name, used as the matching key during route building
    pub name: String,
    /// Short engaging description
    pub description: String,
    /// Expected visit duration in hours
    pub duration_hr: f64,
    /// Category label; the canonical vocabulary is advisory, unknown
    /// categories are accepted
    pub category: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Redundant `(latitude, longitude)` pair
    pub coordinates: Coordinates,
}

/// One visit within a travel route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    /// The attraction being visited
    pub attraction: Attraction,
    /// Position in the overall trip, unique and strictly increasing
    /// across the whole route (not reset per day)
    pub order: u32,
    /// Day index, starting at 1
    pub day: u32,
    /// Wall-clock visit start, "HH:MM"
    pub start_time: String,
    /// Wall-clock visit end, "HH:MM"
    pub end_time: String,
    /// Minutes of travel to the next stop; `None` marks the last stop of
    /// its day and is preserved as such, never coerced to zero
    pub travel_time_to_next: Option<u32>,
}

/// An ordered, day-grouped sequence of attraction visits with timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRoute {
    /// Stops in production order
    pub stops: Vec<RouteStop>,
    /// Sum of `duration_hr` over the retained stops, always recomputed
    /// after matching, never trusted from upstream input
    pub total_duration: f64,
    /// Free-text itinerary summary
    pub summary: String,
}
