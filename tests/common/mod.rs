//! In-process stand-in for the prediction service
//!
//! Behaviour is keyed on the submitted text:
//! - contains `boom`: 500 with a `detail` string
//! - contains `silent`: 500 with no `detail`
//! - contains `garbage`: 200 with a body that is not JSON
//! - contains `invalid`: 422 with a validation `detail` array
//! - contains `thik`: a sentence result with a fractional score
//! - anything else: a normal result

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Clone, Default)]
pub struct MockService {
    /// Every body received, with the path it was posted to
    pub requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockService {
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

fn failure_for(text: &str) -> Option<Response> {
    if text.contains("boom") {
        Some(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Model not trained. Call /train first." })),
            )
                .into_response(),
        )
    } else if text.contains("silent") {
        Some((StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "x" }))).into_response())
    } else if text.contains("garbage") {
        Some((StatusCode::OK, "<html>not json</html>").into_response())
    } else if text.contains("invalid") {
        Some(
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "detail": [
                        { "loc": ["body", "text"], "msg": "field required", "type": "value_error.missing" },
                        { "loc": ["body"], "msg": "value is not a valid dict", "type": "type_error.dict" }
                    ]
                })),
            )
                .into_response(),
        )
    } else {
        None
    }
}

async fn analyze_sentence(State(mock): State<MockService>, Json(body): Json<Value>) -> Response {
    mock.requests
        .lock()
        .unwrap()
        .push(("/analyze_sentence".into(), body.clone()));

    let text = body["text"].as_str().unwrap_or_default().to_string();
    if let Some(failure) = failure_for(&text) {
        return failure;
    }

    let (label, score) = if text.contains("vait") {
        ("Negative", json!(-2))
    } else if text.contains("thik") {
        ("Neutral", json!(0.5))
    } else {
        ("Positive", json!(2))
    };
    Json(json!({
        "text": text,
        "label": label,
        "score": score,
        "cleaned_text": text.trim().to_lowercase(),
    }))
    .into_response()
}

async fn analyze_paragraph(State(mock): State<MockService>, Json(body): Json<Value>) -> Response {
    mock.requests
        .lock()
        .unwrap()
        .push(("/analyze_paragraph".into(), body.clone()));

    let paragraph = body["paragraph"].as_str().unwrap_or_default().to_string();
    if let Some(failure) = failure_for(&paragraph) {
        return failure;
    }

    let details: Vec<String> = paragraph
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.contains("vait") {
                "Negative [-1]".to_string()
            } else {
                "Positive [2]".to_string()
            }
        })
        .collect();
    let total: i64 = details
        .iter()
        .map(|d| if d.starts_with("Negative") { -1 } else { 2 })
        .sum();
    let average = total as f64 / details.len().max(1) as f64;
    let label = if average >= 1.0 {
        "Positive"
    } else if average <= -1.0 {
        "Negative"
    } else {
        "Neutral"
    };

    Json(json!({
        "paragraph": paragraph,
        "average_score": average,
        "average_label": label,
        "sentence_details": details,
    }))
    .into_response()
}

async fn health() -> Json<Value> {
    Json(json!({
        "message": "Marathi Sentiment Analysis API",
        "status": "running",
        "model_status": "trained",
    }))
}

/// Start the mock on an ephemeral port
pub async fn spawn_mock() -> (String, MockService) {
    let mock = MockService::default();
    let app = Router::new()
        .route("/", get(health))
        .route("/analyze_sentence", post(analyze_sentence))
        .route("/analyze_paragraph", post(analyze_paragraph))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), mock)
}

/// Start a service whose model failed to load: every route answers 503
pub async fn spawn_unavailable() -> String {
    let app = Router::new().fallback(|| async {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "detail": "Sentiment analyzer not available" })),
        )
    });

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
