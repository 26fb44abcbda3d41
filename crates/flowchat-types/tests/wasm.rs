//! WASM-target tests for flowchat-types.
//!
//! Run under wasm32-unknown-unknown via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use flowchat_types::config::*;
use flowchat_types::message::*;
use flowchat_types::payload::*;
use flowchat_types::session::*;

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
}

#[wasm_bindgen_test]
fn run_request_shape() {
    let req = RunRequest::chat(DEFAULT_COMPONENT_KEY, "hi", "s1", "User", Vec::new());
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["input_type"], "chat");
    assert_eq!(json["tweaks"][DEFAULT_COMPONENT_KEY]["session_id"], "s1");
}

#[wasm_bindgen_test]
fn session_timestamps_and_ids_work_in_browser() {
    let session = Session::new(Session::generate_id());
    assert_eq!(session.session_id.len(), 36);
    assert!(!session.started_at.is_empty());
}
