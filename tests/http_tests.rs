//! HTTP contract tests against the router with a scripted model.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;

use cognita::adapter::inbound::http::{build_router, serve, AppState};
use cognita::application::ChatService;
use cognita::testkit::config;
use cognita::testkit::model::ScriptedModel;

fn app_with(model: Arc<ScriptedModel>) -> axum::Router {
    let state = AppState::new(ChatService::new(model), config::server().body_limit_bytes);
    build_router(Arc::new(state))
}

fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn chat_returns_model_reply() {
    let model = Arc::new(ScriptedModel::replying("Rust is a systems language."));
    let app = app_with(model.clone());

    let response = app
        .oneshot(chat_request(r#"{"message": "What is Rust?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({"response": "Rust is a systems language."}));

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].content, "What is Rust?");
}

#[tokio::test]
async fn missing_message_is_bad_request() {
    let model = Arc::new(ScriptedModel::replying("unused"));
    let app = app_with(model.clone());

    let response = app.oneshot(chat_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({"error": "No message provided"})
    );
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn empty_and_null_messages_are_bad_requests() {
    for body in [r#"{"message": ""}"#, r#"{"message": null}"#] {
        let app = app_with(Arc::new(ScriptedModel::replying("unused")));

        let response = app.oneshot(chat_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(json_body(response).await["error"], "No message provided");
    }
}

#[tokio::test]
async fn falsy_messages_are_bad_requests() {
    for body in [
        r#"{"message": false}"#,
        r#"{"message": 0}"#,
        r#"{"message": 0.0}"#,
        r#"{"message": []}"#,
        r#"{"message": {}}"#,
    ] {
        let model = Arc::new(ScriptedModel::replying("unused"));
        let app = app_with(model.clone());

        let response = app.oneshot(chat_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "No message provided"}),
            "body {body}"
        );
        assert!(model.calls().is_empty(), "body {body}");
    }
}

#[tokio::test]
async fn whitespace_message_reaches_model() {
    let model = Arc::new(ScriptedModel::replying("..."));
    let app = app_with(model.clone());

    let response = app
        .oneshot(chat_request(r#"{"message": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(model.calls().len(), 1);
}

#[tokio::test]
async fn generation_failure_is_fixed_500() {
    let app = app_with(Arc::new(ScriptedModel::failing("tensor shape mismatch")));

    let response = app
        .oneshot(chat_request(r#"{"message": "Hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({"error": "Model generation failed"}));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = app_with(Arc::new(ScriptedModel::replying("unused")));

    let response = app.oneshot(chat_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Invalid request body");
}

#[tokio::test]
async fn truthy_non_string_messages_are_rejected() {
    for body in [
        r#"{"message": 42}"#,
        r#"{"message": true}"#,
        r#"{"message": ["Hi"]}"#,
        r#"{"message": {"text": "Hi"}}"#,
    ] {
        let model = Arc::new(ScriptedModel::replying("unused"));
        let app = app_with(model.clone());

        let response = app.oneshot(chat_request(body)).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body {body}"
        );
        assert_eq!(json_body(response).await["error"], "Invalid request body");
        assert!(model.calls().is_empty(), "body {body}");
    }
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    let app = app_with(Arc::new(ScriptedModel::replying("unused")));

    let response = app.oneshot(chat_request(r#""Hi""#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["error"], "Invalid request body");
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let app = app_with(Arc::new(ScriptedModel::replying("unused")));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .body(Body::from(r#"{"message": "Hi"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = app_with(Arc::new(ScriptedModel::replying("unused")));
    let message = "a".repeat(config::server().body_limit_bytes + 1);
    let body = serde_json::json!({ "message": message }).to_string();

    let response = app.oneshot(chat_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn get_on_chat_is_not_allowed() {
    let app = app_with(Arc::new(ScriptedModel::replying("unused")));
    let request = Request::get("/api/chat").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_reports_model() {
    let app = app_with(Arc::new(ScriptedModel::replying("unused")));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "scripted");
    assert!(body["started_at"].is_string());
}

#[tokio::test]
async fn request_id_is_generated_and_echoed() {
    let app = app_with(Arc::new(ScriptedModel::replying("ok")));

    let response = app
        .oneshot(chat_request(r#"{"message": "Hi"}"#))
        .await
        .unwrap();

    let id = response
        .headers()
        .get("x-request-id")
        .expect("request id header")
        .to_str()
        .unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn client_request_id_is_preserved() {
    let app = app_with(Arc::new(ScriptedModel::replying("ok")));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-request-id", "client-123")
        .body(Body::from(r#"{"message": "Hi"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "client-123");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app_with(Arc::new(ScriptedModel::replying("ok")));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::from(r#"{"message": "Hi"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn serve_answers_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind(config::server().socket_addr().unwrap())
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(
        ChatService::new(Arc::new(ScriptedModel::replying("pong"))),
        config::server().body_limit_bytes,
    );
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, Arc::new(state), async move {
        let _ = stop_rx.await;
    }));

    let body = r#"{"message":"ping"}"#;
    let request = format!(
        "POST /api/chat HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "got {response}");
    assert!(response.contains(r#"{"response":"pong"}"#));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
