use recipe_nutrition::api_connection::OllamaClient;
use recipe_nutrition::config::OllamaSettings;
use recipe_nutrition::error::LlmError;
use recipe_nutrition::estimator::{estimate_with_fallback, EstimateSource};
use recipe_nutrition::NutritionEngine;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LINES: [&str; 3] = ["2 cups flour", "1 lb ground beef", "1 tbsp olive oil"];

fn client_for(base_url: &str) -> OllamaClient {
    let settings = OllamaSettings {
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(5),
    };
    OllamaClient::new(&settings).expect("client should build")
}

fn generate_reply(response: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "test-model",
        "response": response,
        "done": true
    }))
}

#[tokio::test]
async fn test_estimate_parses_json_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "stream": false,
            "format": "json"
        })))
        .respond_with(generate_reply(
            r#"{"calories": 480, "protein": 30, "carbs": 40, "fat": 20}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let summary = client_for(&server.uri()).estimate(&LINES, 4.0).await.unwrap();
    assert_eq!(summary.calories, 480.0);
    assert_eq!(summary.protein, 30.0);
    assert_eq!(summary.carbs, 40.0);
    assert_eq!(summary.fat, 20.0);
}

#[tokio::test]
async fn test_estimate_reports_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).estimate(&LINES, 1.0).await;
    match result {
        Err(LlmError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "model not loaded");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_estimate_rejects_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(generate_reply(r#"{"calories": "lots", "protein": 1}"#))
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).estimate(&LINES, 1.0).await;
    assert!(matches!(result, Err(LlmError::Malformed(_))), "{result:?}");
}

#[tokio::test]
async fn test_fallback_uses_llm_when_it_answers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(generate_reply(
            "```json\n{\"calories\": 9999, \"protein\": 200, \"carbs\": 40, \"fat\": 20}\n```",
        ))
        .mount(&server)
        .await;

    let engine = NutritionEngine::builtin();
    let client = client_for(&server.uri());
    let estimate = estimate_with_fallback(&engine, Some(&client), &LINES, 4.0).await;

    assert_eq!(estimate.source, EstimateSource::Llm);
    assert!(estimate.detail.is_none());
    // Protein is held to the serving cap and calories rebuilt from macros.
    assert_eq!(estimate.nutrition.protein, 80.0);
    assert_eq!(estimate.nutrition.calories, 320.0 + 160.0 + 180.0);
}

#[tokio::test]
async fn test_fallback_engages_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let engine = NutritionEngine::builtin();
    let client = client_for(&server.uri());
    let estimate = estimate_with_fallback(&engine, Some(&client), &LINES, 4.0).await;

    assert_eq!(estimate.source, EstimateSource::Engine);
    let detail = estimate.detail.expect("engine result carries detail");
    assert_eq!(detail, engine.aggregate(&LINES, 4.0));
    assert_eq!(estimate.nutrition, detail.summary());
}

#[tokio::test]
async fn test_fallback_engages_on_negative_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(generate_reply(
            r#"{"calories": 300, "protein": -1, "carbs": 10, "fat": 5}"#,
        ))
        .mount(&server)
        .await;

    let engine = NutritionEngine::builtin();
    let client = client_for(&server.uri());
    let estimate = estimate_with_fallback(&engine, Some(&client), &LINES, 2.0).await;
    assert_eq!(estimate.source, EstimateSource::Engine);
}

#[tokio::test]
async fn test_fallback_engages_when_server_unreachable() {
    // Nothing listens on the discard port.
    let engine = NutritionEngine::builtin();
    let client = client_for("http://127.0.0.1:9");
    let estimate = estimate_with_fallback(&engine, Some(&client), &LINES, 1.0).await;
    assert_eq!(estimate.source, EstimateSource::Engine);
    assert!(estimate.nutrition.calories > 0.0);
}
