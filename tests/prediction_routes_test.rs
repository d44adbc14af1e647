// ABOUTME: Integration tests for the prediction and health HTTP routes
// ABOUTME: Drives the full router with an in-memory provider and checks status codes and bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use common::{assert_close, record, router_with, FakeProvider};
use loadcast_core::config::MuscleGroup;
use loadcast_core::errors::ProviderError;
use loadcast_core::models::ExerciseRecord;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn arm_history() -> Vec<ExerciseRecord> {
    vec![
        record("2024-01-01", "bicepCurl", 13.0),
        record("2024-01-02", "bicepCurl", 26.0),
        record("2024-01-03", "shoulderPress", 39.0),
    ]
}

async fn post(app: Router, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_predict_returns_history_then_forecast() {
    let provider = Arc::new(FakeProvider::with_records(arm_history()));
    let app = router_with(provider.clone());

    let response = post(app, "/predict", &json!({"userid": "42"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let dates = body["fechas"].as_array().unwrap();
    let values = body["pesos"].as_array().unwrap();
    assert_eq!(dates.len(), 8);
    assert_eq!(values.len(), 8);
    assert_eq!(dates[0], "2024-01-01");
    assert_eq!(dates[3], "2024-01-04");
    assert_eq!(dates[7], "2024-01-08");
    assert_close(values[0].as_f64().unwrap(), 1.0, 1e-12);
    assert_close(values[1].as_f64().unwrap(), 2.0, 1e-12);
    assert_close(values[2].as_f64().unwrap(), 3.0, 1e-12);

    assert_eq!(provider.calls(), vec![("42".to_owned(), MuscleGroup::Arm)]);
}

#[tokio::test]
async fn test_integer_userid_is_accepted() {
    let provider = Arc::new(FakeProvider::with_records(arm_history()));

    let response = post(router_with(provider.clone()), "/predict", &json!({"userid": 7})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.calls(), vec![("7".to_owned(), MuscleGroup::Arm)]);
}

#[tokio::test]
async fn test_legacy_paths_select_their_category() {
    for (uri, group) in [
        ("/predict_core", MuscleGroup::Core),
        ("/predict_chest", MuscleGroup::Chest),
        ("/predict/chest", MuscleGroup::Chest),
        ("/predict/CORE", MuscleGroup::Core),
        ("/predict/arm", MuscleGroup::Arm),
    ] {
        let provider = Arc::new(FakeProvider::with_records(arm_history()));

        let response = post(router_with(provider.clone()), uri, &json!({"userid": "u1"})).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(provider.calls(), vec![("u1".to_owned(), group)], "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_muscle_group_is_not_found() {
    let provider = Arc::new(FakeProvider::with_records(arm_history()));

    let response = post(router_with(provider.clone()), "/predict/legs", &json!({"userid": "1"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert!(body["error"]["request_id"].is_string());
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_single_day_history_is_insufficient_data() {
    let provider = Arc::new(FakeProvider::with_records(vec![
        record("2024-01-01", "bicepCurl", 10.0),
        record("2024-01-01", "hammerCurl", 12.0),
    ]));

    let response = post(router_with(provider), "/predict", &json!({"userid": "1"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "INSUFFICIENT_DATA");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Not enough data points to make a prediction"));
}

#[tokio::test]
async fn test_empty_history_is_insufficient_data() {
    let provider = Arc::new(FakeProvider::with_records(Vec::new()));

    let response = post(router_with(provider), "/predict_chest", &json!({"userid": "1"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"]["code"], "INSUFFICIENT_DATA");
}

#[tokio::test]
async fn test_bad_record_date_is_invalid_input() {
    let provider = Arc::new(FakeProvider::with_records(vec![
        record("2024-01-01", "bicepCurl", 10.0),
        record("01/02/2024", "bicepCurl", 12.0),
    ]));

    let response = post(router_with(provider), "/predict", &json!({"userid": "1"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_provider_failure_is_bad_gateway() {
    let provider = Arc::new(FakeProvider::failing(ProviderError::ApiError {
        provider: "exercise-history".to_owned(),
        status_code: 503,
        message: "maintenance".to_owned(),
    }));

    let response = post(router_with(provider), "/predict", &json!({"userid": "1"})).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Failed to fetch data from exercises API"));
}

#[tokio::test]
async fn test_malformed_bodies_are_invalid_input() {
    for body in [json!({}), json!({"userid": ""}), json!({"userid": [1]}), json!({"userid": 1.5})] {
        let provider = Arc::new(FakeProvider::with_records(arm_history()));

        let response = post(router_with(provider.clone()), "/predict", &body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json_body(response).await["error"]["code"], "INVALID_INPUT");
        assert!(provider.calls().is_empty());
    }
}

#[tokio::test]
async fn test_request_id_is_echoed_on_errors() {
    let provider = Arc::new(FakeProvider::with_records(Vec::new()));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-request-id", "trace-abc-123")
        .body(Body::from(json!({"userid": "1"}).to_string()))
        .unwrap();

    let response = router_with(provider).oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-abc-123");
    let body = json_body(response).await;
    assert_eq!(body["error"]["request_id"], "trace-abc-123");
}

#[tokio::test]
async fn test_health_and_ready() {
    for (uri, status) in [("/health", "healthy"), ("/ready", "ready")] {
        let app = router_with(Arc::new(FakeProvider::default()));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(json_body(response).await["status"], status);
    }
}
