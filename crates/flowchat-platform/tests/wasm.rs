//! WASM-target tests for flowchat-platform.
//!
//! Run in a browser via `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use flowchat_core::ports::{HttpPort, HttpRequest};
use flowchat_platform::http::FetchHttp;
use flowchat_types::ChatError;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn unreachable_endpoint_is_a_transport_error() {
    let http = FetchHttp::new();
    let result = http
        .post(HttpRequest {
            url: "http://127.0.0.1:9/api/v1/run/missing".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: "{}".to_string(),
            timeout_ms: 5_000,
        })
        .await;

    let err = result.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {:?}", err);
}

#[wasm_bindgen_test]
async fn zero_timeout_fires_first() {
    let http = FetchHttp::new();
    let result = http
        .post(HttpRequest {
            url: "http://10.255.255.1/api/v1/run/slow".to_string(),
            headers: Vec::new(),
            body: "{}".to_string(),
            timeout_ms: 0,
        })
        .await;

    assert_eq!(result.unwrap_err(), ChatError::Timeout(0));
}
