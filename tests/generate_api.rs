use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cardgen_gateway::app;
use cardgen_gateway::error::Error;
use cardgen_gateway::provider::ChatProvider;
use cardgen_gateway::state::AppState;

/// Stands in for the model: always answers with the same text.
struct StubProvider {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl StubProvider {
    fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: Ok(text.to_string()), calls: AtomicUsize::new(0) })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self { reply: Err(message.to_string()), calls: AtomicUsize::new(0) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for StubProvider {
    async fn chat(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(Error::Provider)
    }
}

async fn spawn_app(provider: Arc<dyn ChatProvider>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(Arc::new(AppState::new(provider)));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn post_generate(base: &str, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/generate", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn flashcards_are_returned_under_result() {
    let provider = StubProvider::ok(
        "  [{\"question\":\"What is photosynthesis?\",\"answer\":\"Turning light into chemical energy.\"}]\n",
    );
    let base = spawn_app(provider.clone()).await;

    let (status, body) = post_generate(
        &base,
        json!({"topic": "Photosynthesis", "card_type": "flashcard", "count": 3, "language": "en"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"result": [{
            "question": "What is photosynthesis?",
            "answer": "Turning light into chemical energy."
        }]})
    );
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn quiz_in_turkish_uses_defaults_for_count() {
    let provider = StubProvider::ok(
        r#"[{"question":"q","options":["a","b","c","d"],"correct_answer":"a"}]"#,
    );
    let base = spawn_app(provider).await;

    let (status, body) =
        post_generate(&base, json!({"topic": "Hücre", "card_type": "quiz", "language": "tr"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"][0]["options"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn unknown_card_type_is_400_and_skips_provider() {
    let provider = StubProvider::ok("[]");
    let base = spawn_app(provider.clone()).await;

    let (status, body) =
        post_generate(&base, json!({"topic": "x", "card_type": "essay", "count": 5})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Invalid card_type. Use 'flashcard' or 'quiz'."}));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn out_of_range_fields_are_rejected_before_the_handler_runs() {
    let provider = StubProvider::ok("[]");
    let base = spawn_app(provider.clone()).await;

    let bad_bodies = [
        json!({"topic": "x", "card_type": "flashcard", "count": 0}),
        json!({"topic": "x", "card_type": "flashcard", "count": 11}),
        json!({"topic": "x", "card_type": "flashcard", "language": "fr"}),
        json!({"topic": "", "card_type": "flashcard"}),
        json!({"card_type": "flashcard"}),
        // schema errors win over an unknown card type
        json!({"topic": "x", "card_type": "essay", "count": 42}),
    ];

    for body in bad_bodies {
        let (status, response) = post_generate(&base, body.clone()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
        assert!(response["detail"].is_string());
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let base = spawn_app(StubProvider::ok("[]")).await;

    let response = reqwest::Client::new()
        .post(format!("{}/generate", base))
        .header("content-type", "application/json")
        .body("{\"topic\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn non_json_reply_is_500_with_fixed_detail() {
    let base = spawn_app(StubProvider::ok("Sorry, I can't help with that.")).await;

    let (status, body) =
        post_generate(&base, json!({"topic": "x", "card_type": "flashcard"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "AI did not return valid JSON"}));
}

#[tokio::test]
async fn wrong_shape_json_is_passed_through() {
    let base = spawn_app(StubProvider::ok(r#"{"foo": "bar"}"#)).await;

    let (status, body) =
        post_generate(&base, json!({"topic": "x", "card_type": "flashcard"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": {"foo": "bar"}}));
}

#[tokio::test]
async fn provider_failure_is_500_with_its_message() {
    let base = spawn_app(StubProvider::failing("Error code: 401 - invalid api key")).await;

    let (status, body) = post_generate(&base, json!({"topic": "x", "card_type": "quiz"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Error code: 401 - invalid api key"}));
}

#[tokio::test]
async fn health_and_metrics_are_served() {
    let base = spawn_app(StubProvider::ok("[]")).await;
    let client = reqwest::Client::new();

    // one request so the counters have been touched
    post_generate(&base, json!({"topic": "x", "card_type": "flashcard"})).await;

    let health: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert!(health["timestamp"].is_string());

    let metrics = client
        .get(format!("{}/metrics", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(metrics.contains("cardgen_requests_total"));
}
