// ABOUTME: Geocoding adapter resolving place names to coordinates via Nominatim
// ABOUTME: Falls back to a static major-city table and a terminal default; never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! Geocoder adapter with a layered fallback contract.
//!
//! Resolution order for any query:
//! 1. live forward geocoding against a Nominatim-compatible endpoint,
//!    under a bounded per-lookup timeout;
//! 2. on any error or empty result, a static table of well-known city
//!    coordinates, matched by case-insensitive substring containment of
//!    the table key within the queried city name;
//! 3. a fixed default coordinate (Paris).
//!
//! The adapter never fails: every lookup returns a usable coordinate
//! pair, and geocoding errors are absorbed here rather than surfaced.

use crate::errors::{AppError, AppResult};
use crate::models::Coordinates;
use crate::utils::http_client::shared_client;
use dashmap::DashMap;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, SystemTime};
use tracing::{debug, instrument, warn};

/// Terminal fallback coordinate (Paris), returned when neither the live
/// lookup nor the city table produced a match
pub const DEFAULT_COORDINATES: Coordinates = (48.8566, 2.3522);

/// Static fallback table of major-city coordinates.
///
/// Matched by case-insensitive substring containment of the key within
/// the queried city name; slice order is the priority order, first match
/// wins, so ambiguous inputs resolve deterministically.
const FALLBACK_CITY_COORDS: &[(&str, Coordinates)] = &[
    ("paris", (48.8566, 2.3522)),
    ("tokyo", (35.6762, 139.6503)),
    ("new york", (40.7128, -74.0060)),
    ("london", (51.5074, -0.1278)),
    ("san francisco", (37.7749, -122.4194)),
    ("los angeles", (34.0522, -118.2437)),
    ("rome", (41.9028, 12.4964)),
    ("barcelona", (41.3851, 2.1734)),
    ("singapore", (1.3521, 103.8198)),
    ("sydney", (-33.8688, 151.2093)),
    ("dubai", (25.2048, 55.2708)),
    ("bangkok", (13.7563, 100.5018)),
    ("hong kong", (22.3193, 114.1694)),
    ("berlin", (52.5200, 13.4050)),
    ("amsterdam", (52.3676, 4.9041)),
    ("madrid", (40.4168, -3.7038)),
];

/// First entry of a Nominatim `/search` response
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[allow(dead_code)]
    display_name: String,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    coordinates: Coordinates,
    fetched_at: SystemTime,
}

/// Service for resolving place names to coordinates
pub struct GeocodingService {
    client: Client,
    cache: DashMap<String, CacheEntry>,
    cache_duration: Duration,
    base_url: String,
    enabled: bool,
}

impl GeocodingService {
    /// Create a new geocoding service with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(
            "https://nominatim.openstreetmap.org".into(),
            true,
            Duration::from_secs(10),
        )
    }

    /// Creates a geocoding service with custom configuration
    ///
    /// With `enabled` false the live lookup is skipped entirely and every
    /// resolution goes straight to the fallback table.
    #[must_use]
    pub fn with_config(base_url: String, enabled: bool, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("wandermind/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    "Failed to create HTTP client for geocoding service: {}, using default",
                    e
                );
                shared_client().clone() // Safe: Arc clone for HTTP client sharing
            });

        Self {
            client,
            cache: DashMap::new(),
            cache_duration: Duration::from_secs(24 * 60 * 60), // 24 hours
            base_url,
            enabled,
        }
    }

    /// Resolve a city name to its coordinate pair
    pub async fn resolve_city(&self, city: &str) -> Coordinates {
        self.resolve(city, city).await
    }

    /// Resolve a specific attraction within a city
    ///
    /// Queries `"<name>, <city>"`; the fallback layers still match on the
    /// city name alone.
    pub async fn resolve_attraction(&self, name: &str, city: &str) -> Coordinates {
        self.resolve(&format!("{name}, {city}"), city).await
    }

    /// Core resolution with the layered fallback contract
    #[instrument(skip(self), fields(service = "geocoding"))]
    async fn resolve(&self, query: &str, city: &str) -> Coordinates {
        if self.enabled {
            if let Some(cached) = self.check_cache(query) {
                return cached;
            }

            match self.fetch_from_api(query).await {
                Ok(Some(coordinates)) => {
                    self.cache.insert(
                        query.to_owned(),
                        CacheEntry {
                            coordinates,
                            fetched_at: SystemTime::now(),
                        },
                    );
                    debug!("Resolved '{}' to {:?}", query, coordinates);
                    return coordinates;
                }
                Ok(None) => debug!("No geocoding result for '{}'", query),
                Err(e) => warn!("Geocoding error for '{}': {}", query, e),
            }
        }

        Self::fallback_for_city(city)
    }

    /// Check cache for a still-fresh entry
    fn check_cache(&self, query: &str) -> Option<Coordinates> {
        if let Some(entry) = self.cache.get(query) {
            if entry.fetched_at.elapsed().unwrap_or(Duration::ZERO) < self.cache_duration {
                debug!("Using cached coordinates for '{}'", query);
                return Some(entry.coordinates);
            }
        }
        // Expired entries are dropped lazily on the next successful fetch
        None
    }

    /// Look up the static city table, then the terminal default
    fn fallback_for_city(city: &str) -> Coordinates {
        let city_lower = city.to_lowercase();
        for (key, coordinates) in FALLBACK_CITY_COORDS {
            if city_lower.contains(key) {
                return *coordinates;
            }
        }
        DEFAULT_COORDINATES
    }

    /// Fetch coordinates from the forward geocoding API
    async fn fetch_from_api(&self, query: &str) -> AppResult<Option<Coordinates>> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("Nominatim", format!("search request failed: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "Nominatim",
                format!("search API returned status {}", response.status()),
            ));
        }

        let places: Vec<NominatimPlace> = response.json().await.map_err(|e| {
            AppError::external_service("Nominatim", format!("unparseable search response: {e}"))
        })?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let latitude: f64 = place.lat.parse().map_err(|e| {
            AppError::external_service("Nominatim", format!("bad latitude '{}': {e}", place.lat))
        })?;
        let longitude: f64 = place.lon.parse().map_err(|e| {
            AppError::external_service("Nominatim", format!("bad longitude '{}': {e}", place.lon))
        })?;

        Ok(Some((latitude, longitude)))
    }
}

impl Default for GeocodingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Geocoder with live lookups disabled, so resolution exercises only
    /// the fallback layers
    fn offline_service() -> GeocodingService {
        GeocodingService::with_config(String::new(), false, Duration::from_secs(1))
    }

    #[tokio::test]
    async fn test_fallback_table_substring_match() {
        let service = offline_service();

        assert_eq!(service.resolve_city("Tokyo").await, (35.6762, 139.6503));
        // Case-insensitive containment
        assert_eq!(
            service.resolve_city("TOKYO, Japan").await,
            (35.6762, 139.6503)
        );
        assert_eq!(
            service.resolve_city("Greater London Area").await,
            (51.5074, -0.1278)
        );
    }

    #[tokio::test]
    async fn test_fallback_default_for_unknown_city() {
        let service = offline_service();

        assert_eq!(service.resolve_city("Atlantis").await, DEFAULT_COORDINATES);
        assert_eq!(service.resolve_city("").await, DEFAULT_COORDINATES);
    }

    #[tokio::test]
    async fn test_fallback_priority_is_table_order() {
        let service = offline_service();

        // Contains both "new york" and "york"-adjacent keys; the first
        // table entry that matches wins
        assert_eq!(
            service.resolve_city("New York City").await,
            (40.7128, -74.0060)
        );
        // "hong kong" only matches its own entry
        assert_eq!(service.resolve_city("Hong Kong").await, (22.3193, 114.1694));
    }

    #[tokio::test]
    async fn test_attraction_query_falls_back_on_city() {
        let service = offline_service();

        // The fallback matches the city, not the combined query
        assert_eq!(
            service.resolve_attraction("Shibuya Crossing", "Tokyo").await,
            (35.6762, 139.6503)
        );
        assert_eq!(
            service.resolve_attraction("Some Museum", "Nowhereville").await,
            DEFAULT_COORDINATES
        );
    }
}
