//! Port traits: the hexagonal architecture boundary.
//!
//! Defined here in `flowchat-core` (pure Rust); the browser
//! implementation lives in `flowchat-platform`.

use async_trait::async_trait;
use flowchat_types::Result;

// ─── HTTP Port ───────────────────────────────────────────────

/// A single outbound POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub timeout_ms: u64,
}

/// Whatever the server sent back, whether or not it was a success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpPort {
    /// Send the request. Transport failures and timeouts are errors;
    /// any HTTP status, 2xx or not, comes back as `Ok`.
    async fn post(&self, req: HttpRequest) -> Result<HttpResponse>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
