use serde_json::json;
use studypal_core::{GeminiConfig, GeminiGenerator, PlanGenerator};
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn generator_for(server: &MockServer) -> GeminiGenerator {
    GeminiGenerator::new(GeminiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..GeminiConfig::default()
    })
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Plan my week" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "**Day 1: Mon (3 days until exam)**" }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = generator_for(&server)
        .generate("Plan my week")
        .await
        .expect("Generation should succeed");
    assert_eq!(text, "**Day 1: Mon (3 days until exam)**");
}

#[tokio::test]
async fn test_api_error_message_is_wrapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate("prompt").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error generating revision plan: API key not valid"
    );
}

#[tokio::test]
async fn test_non_json_error_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate("prompt").await.unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Error generating revision plan: API returned status 503"));
}

#[tokio::test]
async fn test_empty_candidates_reported_as_null_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate("prompt").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error generating revision plan: Failed to generate revision plan: API returned null response"
    );
}

#[tokio::test]
async fn test_custom_model_changes_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = GeminiGenerator::new(
        GeminiConfig {
            api_key: Some("k".to_string()),
            base_url: server.uri(),
            ..GeminiConfig::default()
        }
        .with_model("gemini-1.5-pro"),
    );
    assert_eq!(generator.generate("p").await.unwrap(), "ok");
}
