use arpath::config::Config;
use arpath::models::MapRouteRequest;
use arpath::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn setup_test_app() -> axum::Router {
    let state = Arc::new(AppState {
        config: Config::default(),
    });
    arpath::routes::create_router(state)
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/debug/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["default_scale"], 100_000.0);
    assert_eq!(json["scale_presets"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_map_route_endpoint_maps_known_displacement() {
    let app = setup_test_app();

    let body = json!({
        "route": [[
            {"lat": 12.9440, "lng": 77.6490},
            {"lat": 12.9445, "lng": 77.6492}
        ]]
    });

    let response = app.oneshot(post_json("/routes/map", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["scale"], 100_000.0);

    // Reference point maps to the origin.
    let first = &json["segments"][0][0];
    assert_eq!(first["x"], 0.0);
    assert_eq!(first["y"], 0.0);
    assert_eq!(first["z"], 0.0);

    // 0.0002 deg east, 0.0005 deg north at scale 100000.
    let second = &json["segments"][0][1];
    assert!((second["x"].as_f64().unwrap() - 20.0).abs() < 1e-6);
    assert_eq!(second["y"], 0.0);
    assert!((second["z"].as_f64().unwrap() + 50.0).abs() < 1e-6);

    // One placement per waypoint, labelled in order, forward-facing leg.
    let placements = json["placements"][0].as_array().unwrap();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0]["label"], 1);
    assert_eq!(placements[1]["label"], 2);
    assert_eq!(placements[0]["direction"], "forward");
    assert_eq!(placements[0]["shape"], "capsule");
}

#[tokio::test]
async fn test_map_route_endpoint_maps_poi_with_same_frame() {
    let app = setup_test_app();

    let body = json!({
        "route": [[
            {"lat": 12.9440, "lng": 77.6490}
        ]],
        "poi": {"lat": 12.9445, "lng": 77.6492},
        "scale": 10_000.0
    });

    let response = app.oneshot(post_json("/routes/map", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["scale"], 10_000.0);
    let poi = &json["poi"];
    assert!((poi["x"].as_f64().unwrap() - 2.0).abs() < 1e-6);
    assert!((poi["z"].as_f64().unwrap() + 5.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_map_route_endpoint_rejects_non_preset_scale() {
    let app = setup_test_app();

    let body = json!({
        "route": [[{"lat": 12.9440, "lng": 77.6490}]],
        "scale": 12345.0
    });

    let response = app.oneshot(post_json("/routes/map", &body)).await.unwrap();
    assert_eq!(
        response.status(),
        StatusCode::BAD_REQUEST,
        "Should reject a scale outside the preset list"
    );
}

#[tokio::test]
async fn test_map_route_endpoint_rejects_out_of_range_coordinates() {
    let app = setup_test_app();

    let body = json!({
        "route": [[{"lat": 95.0, "lng": 0.0}]]
    });

    let response = app.oneshot(post_json("/routes/map", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_map_route_endpoint_requires_reference_for_poi_only_request() {
    let app = setup_test_app();

    let body = json!({
        "route": [],
        "poi": {"lat": 12.9445, "lng": 77.6492}
    });

    let response = app.oneshot(post_json("/routes/map", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_map_route_endpoint_accepts_empty_route() {
    let app = setup_test_app();

    let body = json!({ "route": [] });

    let response = app.oneshot(post_json("/routes/map", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["segments"].as_array().unwrap().len(), 0);
    assert_eq!(json["placements"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_demo_route_feeds_the_mapping_endpoint() {
    let app = setup_test_app();

    let request = Request::builder()
        .uri("/routes/demo")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let demo = response_json(response).await;
    let parsed: MapRouteRequest = serde_json::from_value(demo.clone()).unwrap();
    assert_eq!(parsed.route.segments.len(), 2);

    let response = app.oneshot(post_json("/routes/map", &demo)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let first = &json["segments"][0][0];
    assert_eq!(first["x"], 0.0);
    assert_eq!(first["z"], 0.0);
    assert_eq!(json["segments"].as_array().unwrap().len(), 2);
    assert_eq!(json["segments"][0].as_array().unwrap().len(), 7);
    assert_eq!(json["segments"][1].as_array().unwrap().len(), 8);
    assert!(json["poi"].is_object());
}
