//! HTTP-level tests for `GeminiAnalyzer` against a mock Gemini endpoint.

use parcego_analysis::{
    analyze_package_description, AnalysisConfig, AnalysisError, GeminiAnalyzer, PackageAnalyzer,
    FALLBACK_HANDLING_ADVICE,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn analyzer_for(server: &MockServer) -> GeminiAnalyzer {
    let config = AnalysisConfig::new("test-key").with_base_url(server.uri());
    GeminiAnalyzer::new(config).unwrap()
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_successful_analysis() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(
            r#"{"weightEstimate":"1.5kg","dimensionEstimate":"30x20x15cm","category":"Kitchenware","handlingAdvice":"Fragile"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let analysis = analyzer_for(&server)
        .analyze("two ceramic mugs, gift wrapped")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(analysis.weight_estimate.as_deref(), Some("1.5kg"));
    assert_eq!(analysis.dimension_estimate.as_deref(), Some("30x20x15cm"));
    assert_eq!(analysis.category.as_deref(), Some("Kitchenware"));
    assert_eq!(analysis.handling_advice.as_deref(), Some("Fragile"));
}

#[tokio::test]
async fn test_partial_answer_keeps_missing_fields_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(r#"{"category":"Books"}"#)))
        .mount(&server)
        .await;

    let analysis = analyzer_for(&server).analyze("paperbacks").await.unwrap().unwrap();
    assert_eq!(analysis.category.as_deref(), Some("Books"));
    assert!(analysis.weight_estimate.is_none());
}

#[tokio::test]
async fn test_empty_answer_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let result = analyzer_for(&server).analyze("something").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = analyzer_for(&server).analyze("a chair").await.unwrap_err();
    match err {
        AnalysisError::Http { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_model_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("this is not json")))
        .mount(&server)
        .await;

    let err = analyzer_for(&server).analyze("a chair").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(_)));
}

#[tokio::test]
async fn test_failure_surfaces_as_fallback_advice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let analysis = analyze_package_description(&analyzer_for(&server), "a lamp")
        .await
        .unwrap();

    assert_eq!(analysis.handling_advice.as_deref(), Some(FALLBACK_HANDLING_ADVICE));
    assert!(analysis.category.is_none());
}

#[tokio::test]
async fn test_blank_description_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let result = analyze_package_description(&analyzer_for(&server), "   ").await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_network_error_does_not_leak_key() {
    // Nothing listens on this port once the listener is dropped
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let config = AnalysisConfig::new("very-secret-key").with_base_url(uri);
    let analyzer = GeminiAnalyzer::new(config).unwrap();

    let err = analyzer.analyze("a chair").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Network(_)));
    assert!(!err.to_string().contains("very-secret-key"));
}
