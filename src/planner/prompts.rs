// ABOUTME: Prompt builders for attraction recommendation, routing, and refinement
// ABOUTME: Pure construction of (system, user) prompt pairs from trip parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WanderMind

//! # Planning Prompts
//!
//! Pure builders for the three prompt pairs the planner sends to the
//! generative model. Every prompt instructs the model to emit *only* a
//! JSON value of the requested shape; the operational policy embedded in
//! the route prompt (opening hours, travel-time ranges, daily activity
//! budget, start time) is guidance to the model, not an enforced
//! invariant — the pipeline does not validate that the model obeyed it.

use crate::models::{Attraction, TravelRoute};

/// Canonical attraction category vocabulary
///
/// Advisory only: the vocabulary is embedded in the recommendation
/// prompt, but responses carrying other labels are accepted as-is.
pub const CATEGORIES: &[&str] = &[
    "Museum",
    "Historical Site",
    "Nature & Parks",
    "Food & Dining",
    "Shopping",
    "Entertainment",
    "Architecture",
    "Cultural Experience",
    "Adventure",
    "Beach",
];

/// System prompt shared by every planning operation
const JSON_ONLY_SYSTEM_PROMPT: &str =
    "You are a travel expert who returns responses in valid JSON format only.";

/// Build the (system, user) prompt pair for attraction recommendations
#[must_use]
pub fn recommendation_prompts(city: &str, days: i64, interests: &[String]) -> (String, String) {
    let user = format!(
        r#"You are an expert travel planner. Generate attraction recommendations for a trip.

Location: {city}
Duration: {days} days
Interests: {interests}

Generate 8-10 diverse attractions that match the user's interests. Return ONLY a valid JSON array with this exact structure:
[
  {{
    "name": "Attraction Name",
    "description": "Brief engaging description (1-2 sentences)",
    "duration_hr": 2.5,
    "category": "Museum"
  }}
]

Categories should be one of: {categories}

Ensure the JSON is properly formatted and parseable. Do not include any text before or after the JSON array."#,
        interests = interests.join(", "),
        categories = CATEGORIES.join(", "),
    );

    (JSON_ONLY_SYSTEM_PROMPT.to_owned(), user)
}

/// Build the (system, user) prompt pair for initial route generation
#[must_use]
pub fn route_prompts(city: &str, days: i64, attractions: &[Attraction]) -> (String, String) {
    let attractions_text = attractions
        .iter()
        .map(|a| format!("- {} ({}, {}h)", a.name, a.category, a.duration_hr))
        .collect::<Vec<_>>()
        .join("\n");

    let user = format!(
        r#"You are an expert travel planner. Create an optimized itinerary.

Location: {city}
Duration: {days} days
Selected Attractions:
{attractions_text}

Create a logical route that:
1. Groups nearby attractions
2. Considers opening hours (assume museums 10am-6pm, outdoor sites 8am-8pm)
3. Includes realistic travel times (15-30 min between stops)
4. Balances each day (6-8 hours of activities)
5. Starts at 9:00 AM each day

Return ONLY a valid JSON object with this structure:
{{
  "stops": [
    {{
      "attraction_name": "Name",
      "order": 1,
      "day": 1,
      "startTime": "09:00",
      "endTime": "11:00",
      "travelTimeToNext": 20
    }}
  ],
  "summary": "A natural language summary of the itinerary (2-3 sentences)"
}}

Ensure order starts at 1 and increments. The last stop of each day should have travelTimeToNext: null.
Return ONLY valid JSON, no other text."#,
    );

    (JSON_ONLY_SYSTEM_PROMPT.to_owned(), user)
}

/// Build the (system, user) prompt pair for route refinement
#[must_use]
pub fn refine_prompts(current_route: &TravelRoute, message: &str) -> (String, String) {
    let current_route_text = current_route
        .stops
        .iter()
        .map(|stop| {
            format!(
                "Day {}, Stop {}: {} ({}-{})",
                stop.day, stop.order, stop.attraction.name, stop.start_time, stop.end_time
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let user = format!(
        r#"You are a travel planner helping refine an itinerary.

Current Route:
{current_route_text}

User Request: {message}

Modify the route according to the user's request. Return ONLY a valid JSON object with this structure:
{{
  "stops": [
    {{
      "attraction_name": "Name",
      "order": 1,
      "day": 1,
      "startTime": "09:00",
      "endTime": "11:00",
      "travelTimeToNext": 20
    }}
  ],
  "summary": "A natural language summary explaining the changes made (2-3 sentences)"
}}

Return ONLY valid JSON, no other text."#,
    );

    (JSON_ONLY_SYSTEM_PROMPT.to_owned(), user)
}
