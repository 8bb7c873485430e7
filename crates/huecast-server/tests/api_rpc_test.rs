//! Integration tests for `POST /rpc/set_color` and the RPC client.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceExt;

use huecast_extract::{ExtractorConfig, SignalExtractor};
use huecast_rpc::{RpcClient, RpcError};
use huecast_server::{app, AppState};

fn test_state() -> AppState {
    let extractor = SignalExtractor::new(ExtractorConfig {
        vocabulary: vec!["red".into(), "green".into(), "blue".into()],
        ..ExtractorConfig::default()
    })
    .expect("extractor should build");
    AppState::new(extractor)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("should read body");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn valid_color_is_acknowledged_and_broadcast() {
    let state = test_state();
    let mut rx = state.session.subscribe();
    let app = app(state);

    let response = app
        .oneshot(post_json("/rpc/set_color", &json!({"color": "Blue"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({"ok": true}));

    let signal = rx.recv().await.expect("signal should be broadcast");
    assert_eq!(signal.label, "blue");
    assert!(signal.confirmed_final);
    assert!(signal.utterance_key.utterance_id.starts_with("rpc-"));
}

#[tokio::test]
async fn empty_color_is_a_bad_request() {
    let app = app(test_state());

    let response = app
        .oneshot(post_json("/rpc/set_color", &json!({"color": "  "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn unknown_color_is_unprocessable() {
    let app = app(test_state());

    let response = app
        .oneshot(post_json("/rpc/set_color", &json!({"color": "chartreuse"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("chartreuse"));
}

#[tokio::test]
async fn rpc_client_round_trip() {
    let state = test_state();
    let mut rx = state.session.subscribe();
    let app = app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    let client = RpcClient::new(format!("http://{}", addr));
    let ack = client.set_color("green").await.expect("call should succeed");
    assert!(ack.ok);

    let signal = rx.recv().await.expect("signal should be broadcast");
    assert_eq!(signal.label, "green");

    // The server's validation failures surface as status errors.
    let err = client.set_color("chartreuse").await.unwrap_err();
    assert!(matches!(err, RpcError::Status(422)));
}
