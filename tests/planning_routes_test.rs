// ABOUTME: Integration tests for the planning route handlers
// ABOUTME: Exercises the init/recommend/route/refine flow over in-process HTTP

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{sample_recommendation_response, scripted_resources};
use helpers::axum_test::AxumTestRequest;
use wandermind::models::{Attraction, TravelRoute};
use wandermind::routes;

use axum::http::StatusCode;
use serde_json::json;

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a session for Paris and return its id
async fn init_session(app: axum::Router) -> String {
    let response = AxumTestRequest::post("/api/init")
        .json(&json!({
            "city": "Paris",
            "startDate": "2024-06-01",
            "endDate": "2024-06-03",
            "interests": ["Museum"]
        }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let session: serde_json::Value = response.json();
    session["sessionId"].as_str().unwrap().to_owned()
}

/// A route response naming the given attractions in order
fn scripted_route_response(names: &[&str]) -> String {
    let stops: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let travel = if i + 1 == names.len() {
                "null".to_owned()
            } else {
                "20".to_owned()
            };
            format!(
                r#"{{"attraction_name": "{name}", "order": {order}, "day": 1, "startTime": "09:00", "endTime": "11:00", "travelTimeToNext": {travel}}}"#,
                order = i + 1,
            )
        })
        .collect();
    format!(
        r#"{{"stops": [{}], "summary": "A compact day."}}"#,
        stops.join(",")
    )
}

// ============================================================================
// Liveness
// ============================================================================

#[tokio::test]
async fn test_root_liveness_message() {
    let app = routes::router(scripted_resources(&[]));

    let response = AxumTestRequest::get("/").send(app).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "WanderMind API is running");
}

#[tokio::test]
async fn test_health_probe() {
    let app = routes::router(scripted_resources(&[]));

    let response = AxumTestRequest::get("/api/health").send(app).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

// ============================================================================
// Session Initialization
// ============================================================================

#[tokio::test]
async fn test_init_creates_session_with_city_coordinates() {
    let app = routes::router(scripted_resources(&[]));

    let response = AxumTestRequest::post("/api/init")
        .json(&json!({
            "city": "Tokyo",
            "startDate": "2024-06-01",
            "endDate": "2024-06-03",
            "interests": ["Food & Dining", "Shopping"]
        }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let session: serde_json::Value = response.json();

    assert!(!session["sessionId"].as_str().unwrap().is_empty());
    assert_eq!(session["city"], "Tokyo");
    assert_eq!(session["interests"], json!(["Food & Dining", "Shopping"]));
    // Offline geocoder resolves through the fallback table
    assert_eq!(session["cityCoordinates"], json!([35.6762, 139.6503]));
}

#[tokio::test]
async fn test_init_rejects_inverted_date_range() {
    let app = routes::router(scripted_resources(&[]));

    let response = AxumTestRequest::post("/api/init")
        .json(&json!({
            "city": "Paris",
            "startDate": "2024-06-05",
            "endDate": "2024-06-01",
            "interests": []
        }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

// ============================================================================
// Recommendations
// ============================================================================

#[tokio::test]
async fn test_recommend_returns_enriched_attractions() {
    let recommendation = sample_recommendation_response();
    let resources = scripted_resources(&[&recommendation]);
    let app = routes::router(resources);

    let session_id = init_session(app.clone()).await;

    let response = AxumTestRequest::post("/api/recommend")
        .json(&json!({ "session_id": session_id }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let attractions = body["attractions"].as_array().unwrap();

    assert!((8..=10).contains(&attractions.len()));
    for attraction in attractions {
        assert!(!attraction["id"].as_str().unwrap().is_empty());
        assert!(attraction["latitude"].is_number());
        assert!(attraction["longitude"].is_number());
        assert_eq!(attraction["coordinates"].as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_recommend_unknown_session_is_404() {
    let app = routes::router(scripted_resources(&[]));

    let response = AxumTestRequest::post("/api/recommend")
        .json(&json!({ "session_id": "nonexistent" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_recommend_unparseable_model_output_is_bad_gateway() {
    let resources = scripted_resources(&["I'd be happy to recommend attractions!"]);
    let app = routes::router(resources);

    let session_id = init_session(app.clone()).await;

    let response = AxumTestRequest::post("/api/recommend")
        .json(&json!({ "session_id": session_id }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "MALFORMED_AI_RESPONSE");
}

// ============================================================================
// Route Generation
// ============================================================================

#[tokio::test]
async fn test_end_to_end_route_over_recommended_attractions() {
    let recommendation = sample_recommendation_response();
    let route = scripted_route_response(&["Attraction 1", "Attraction 2", "Attraction 3"]);
    let resources = scripted_resources(&[&recommendation, &route]);
    let app = routes::router(resources);

    let session_id = init_session(app.clone()).await;

    let recommend_response = AxumTestRequest::post("/api/recommend")
        .json(&json!({ "session_id": session_id }))
        .send(app.clone())
        .await;
    let recommended: serde_json::Value = recommend_response.json();
    let selected: Vec<Attraction> = recommended["attractions"]
        .as_array()
        .unwrap()
        .iter()
        .take(3)
        .map(|a| serde_json::from_value(a.clone()).unwrap())
        .collect();
    let selected_names: Vec<&str> = selected.iter().map(|a| a.name.as_str()).collect();

    let route_response = AxumTestRequest::post("/api/route")
        .json(&json!({ "session_id": session_id, "attractions": selected }))
        .send(app)
        .await;

    assert_eq!(route_response.status_code(), StatusCode::OK);
    let travel_route: TravelRoute = route_response.json();

    assert_eq!(travel_route.stops.len(), 3);
    // Every stop references one of the selected attractions
    for stop in &travel_route.stops {
        assert!(selected_names.contains(&stop.attraction.name.as_str()));
    }
    // Order values are unique and increasing
    let orders: Vec<u32> = travel_route.stops.iter().map(|s| s.order).collect();
    assert!(orders.windows(2).all(|w| w[0] < w[1]));
    // Total recomputed from the retained stops (1.5 + 2.5 + 3.5)
    assert!((travel_route.total_duration - 7.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_route_requires_two_attractions() {
    let recommendation = sample_recommendation_response();
    let resources = scripted_resources(&[&recommendation]);
    let app = routes::router(resources);

    let session_id = init_session(app.clone()).await;

    let recommend_response = AxumTestRequest::post("/api/recommend")
        .json(&json!({ "session_id": session_id }))
        .send(app.clone())
        .await;
    let recommended: serde_json::Value = recommend_response.json();
    let one: Vec<serde_json::Value> = recommended["attractions"]
        .as_array()
        .unwrap()
        .iter()
        .take(1)
        .cloned()
        .collect();

    let response = AxumTestRequest::post("/api/route")
        .json(&json!({ "session_id": session_id, "attractions": one }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_route_unknown_session_is_404() {
    let app = routes::router(scripted_resources(&[]));

    let response = AxumTestRequest::post("/api/route")
        .json(&json!({ "session_id": "missing", "attractions": [] }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Refinement
// ============================================================================

#[tokio::test]
async fn test_refine_rebuilds_route_from_current_attractions() {
    let recommendation = sample_recommendation_response();
    let initial_route = scripted_route_response(&["Attraction 1", "Attraction 2"]);
    // The refinement drops one stop and hallucinates another; only the
    // known attraction survives
    let refined_route = scripted_route_response(&["Attraction 2", "Imaginary Garden"]);
    let resources = scripted_resources(&[&recommendation, &initial_route, &refined_route]);
    let app = routes::router(resources);

    let session_id = init_session(app.clone()).await;

    let recommended: serde_json::Value = AxumTestRequest::post("/api/recommend")
        .json(&json!({ "session_id": session_id }))
        .send(app.clone())
        .await
        .json();
    let selected: Vec<serde_json::Value> = recommended["attractions"]
        .as_array()
        .unwrap()
        .iter()
        .take(2)
        .cloned()
        .collect();

    let current_route: TravelRoute = AxumTestRequest::post("/api/route")
        .json(&json!({ "session_id": session_id, "attractions": selected }))
        .send(app.clone())
        .await
        .json();
    assert_eq!(current_route.stops.len(), 2);

    let refine_response = AxumTestRequest::post("/api/refine")
        .json(&json!({
            "session_id": session_id,
            "message": "Make day one lighter",
            "current_route": current_route
        }))
        .send(app)
        .await;

    assert_eq!(refine_response.status_code(), StatusCode::OK);
    let refined: TravelRoute = refine_response.json();

    assert_eq!(refined.stops.len(), 1);
    assert_eq!(refined.stops[0].attraction.name, "Attraction 2");
    assert!((refined.total_duration - 2.5).abs() < 1e-9);
}
