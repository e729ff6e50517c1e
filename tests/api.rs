//! Endpoint integration tests against mocked upstream providers.
//!
//! The computation endpoints are exercised end-to-end through the router;
//! the weather and completion proxies run against an httpmock server so
//! timeout, malformed-body, and credential failures can be simulated.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use wellness_api::api::{create_router, AppState};
use wellness_api::config::Config;

/// Upstream timeout used by every test client, kept short so timeout
/// tests finish quickly.
const TEST_TIMEOUT_MS: u64 = 500;

fn test_config(base_url: &str) -> Config {
    Config {
        openweather_key: "ow-test-key".to_string(),
        openai_api_key: "sk-test-key".to_string(),
        openweather_url: base_url.to_string(),
        openai_url: base_url.to_string(),
        openai_model: "gpt-3.5-turbo".to_string(),
        http_timeout_ms: TEST_TIMEOUT_MS,
        port: 8000,
        rust_log: "info".to_string(),
        verbose: false,
        metrics_enabled: false,
        metrics_port: 9090,
    }
}

async fn send_with_config(config: &Config, uri: &str) -> (StatusCode, Value) {
    let app = create_router(AppState::new(config));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Send a request through a router whose upstream clients point nowhere.
/// Only valid for endpoints that never call upstream.
async fn send(uri: &str) -> (StatusCode, Value) {
    send_with_config(&test_config("http://127.0.0.1:1"), uri).await
}

/// Send a request through a router wired to the given mock server.
async fn send_mocked(server: &MockServer, uri: &str) -> (StatusCode, Value) {
    send_with_config(&test_config(&server.base_url()), uri).await
}

// === Computation endpoints ===

#[tokio::test]
async fn bmi_converts_centimeter_heights() {
    let (status, body) = send("/bmi?weight=70&height=175").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"bmi": 22.86}));
}

#[tokio::test]
async fn bmi_accepts_height_in_meters() {
    let (status, body) = send("/bmi?weight=70&height=1.75").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"bmi": 22.86}));
}

#[tokio::test]
async fn bmi_rejects_non_positive_weight_with_detail() {
    let (status, body) = send("/bmi?weight=0&height=175").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "weight must be greater than zero"}));
}

#[tokio::test]
async fn bmi_names_missing_parameters() {
    let (status, body) = send("/bmi?height=175").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["param"], "weight");
}

#[tokio::test]
async fn calories_computes_from_met_table() {
    let (status, body) = send("/calories?weight=70&duration=45&activity_level=moderate").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"calories_burned": 262.5}));
}

#[tokio::test]
async fn calories_rejects_unknown_level_with_detail() {
    let (status, body) = send("/calories?weight=70&duration=45&activity_level=extreme").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"detail": "invalid activity level 'extreme': choose light, moderate, or vigorous"})
    );
}

#[tokio::test]
async fn hydration_thresholds_match_the_advice_table() {
    let (_, low) = send("/hydration?water_ml=1999").await;
    assert_eq!(low["status"], "Drink more water!");
    assert_eq!(low["advice"], "Aim for at least 2 liters per day.");

    let (_, healthy) = send("/hydration?water_ml=2000").await;
    assert_eq!(healthy["status"], "You're well hydrated!");

    let (_, high) = send("/hydration?water_ml=3001").await;
    assert_eq!(high["status"], "Too much water!");
    assert_eq!(high["advice"], "Avoid overhydration.");
}

#[tokio::test]
async fn sleep_score_thresholds_match_the_score_table() {
    let (_, short) = send("/sleep-score?hours=5").await;
    assert_eq!(short, json!({"score": 50, "status": "Too little sleep"}));

    let (_, healthy) = send("/sleep-score?hours=7").await;
    assert_eq!(healthy, json!({"score": 90, "status": "Healthy sleep"}));

    let (_, long) = send("/sleep-score?hours=9").await;
    assert_eq!(long, json!({"score": 70, "status": "Too much sleep"}));
}

// === Weather proxy ===

#[tokio::test]
async fn weather_reshapes_upstream_conditions() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/2.5/weather")
                .query_param("q", "London")
                .query_param("appid", "ow-test-key")
                .query_param("units", "metric");
            then.status(200).json_body(json!({
                "main": {"temp": 12.3},
                "weather": [{"description": "light rain"}],
            }));
        })
        .await;

    let (status, body) = send_mocked(&server, "/weather?city=London").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"city": "London", "temperature": 12.3, "description": "light rain"})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn weather_upstream_failure_is_a_bad_gateway() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/2.5/weather");
            then.status(500).body("upstream exploded");
        })
        .await;

    let (status, body) = send_mocked(&server, "/weather?city=London").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("HTTP 500"), "detail was: {detail}");
}

#[tokio::test]
async fn weather_timeout_is_a_gateway_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/2.5/weather");
            then.status(200)
                .json_body(json!({"main": {"temp": 1.0}, "weather": [{"description": "fog"}]}))
                .delay(Duration::from_millis(TEST_TIMEOUT_MS * 4));
        })
        .await;

    let (status, body) = send_mocked(&server, "/weather?city=London").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, json!({"detail": "OpenWeather API request timed out"}));
}

#[tokio::test]
async fn weather_malformed_body_is_a_contract_violation() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/2.5/weather");
            then.status(200).json_body(json!({"message": "ok"}));
        })
        .await;

    let (status, body) = send_mocked(&server, "/weather?city=London").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"detail": "unexpected response format from the OpenWeather API"})
    );
}

#[tokio::test]
async fn weather_without_credential_is_a_server_error() {
    let mut config = test_config("http://127.0.0.1:1");
    config.openweather_key = String::new();

    let (status, body) = send_with_config(&config, "/weather?city=London").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "missing OpenWeather API key"}));
}

#[tokio::test]
async fn weather_requires_the_city_parameter() {
    let (status, body) = send("/weather").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["param"], "city");
}

// === Completion proxy ===

#[tokio::test]
async fn ask_openai_forwards_the_assistant_message() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer sk-test-key")
                .json_body_partial(r#"{"model": "gpt-3.5-turbo"}"#);
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": "Hello there"}}],
            }));
        })
        .await;

    let (status, body) = send_mocked(&server, "/ask-openai?request=say%20hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Hello there"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn ask_openai_auth_failure_maps_to_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(401).body("invalid key");
        })
        .await;

    let (status, body) = send_mocked(&server, "/ask-openai?request=hi").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"detail": "invalid OpenAI API key"}));
}

#[tokio::test]
async fn ask_openai_upstream_failure_is_a_bad_gateway() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(503).body("overloaded");
        })
        .await;

    let (status, body) = send_mocked(&server, "/ask-openai?request=hi").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("HTTP 503"), "detail was: {detail}");
}

#[tokio::test]
async fn ask_openai_empty_choices_is_a_contract_violation() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let (status, body) = send_mocked(&server, "/ask-openai?request=hi").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"detail": "unexpected response format from the OpenAI API"})
    );
}

#[tokio::test]
async fn ask_openai_timeout_is_a_gateway_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(json!({"choices": []}))
                .delay(Duration::from_millis(TEST_TIMEOUT_MS * 4));
        })
        .await;

    let (status, _) = send_mocked(&server, "/ask-openai?request=hi").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}
