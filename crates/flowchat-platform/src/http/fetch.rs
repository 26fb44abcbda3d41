//! HTTP adapter on top of the browser `fetch()` API.
//!
//! Uses gloo-net for the request and races it against a gloo-timers
//! timeout; fetch itself has no deadline. A request that times out is
//! abandoned, not aborted.

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use flowchat_core::ports::{HttpPort, HttpRequest, HttpResponse};
use flowchat_types::{ChatError, Result};

pub struct FetchHttp;

impl FetchHttp {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FetchHttp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchHttp {
    async fn post(&self, req: HttpRequest) -> Result<HttpResponse> {
        let timeout_ms = req.timeout_ms;
        let request = Box::pin(send(&req));
        let timer = Box::pin(TimeoutFuture::new(timer_millis(timeout_ms)));

        match select(request, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                log::warn!("POST {} timed out after {}ms", req.url, timeout_ms);
                Err(ChatError::Timeout(timeout_ms))
            }
        }
    }

    fn backend_name(&self) -> &str {
        "fetch"
    }
}

async fn send(req: &HttpRequest) -> Result<HttpResponse> {
    let mut builder = Request::post(&req.url);
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }

    let response = builder
        .body(req.body.clone())
        .map_err(|e| ChatError::Other(format!("failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| ChatError::Other(format!("failed to read response body: {}", e)))?;

    log::debug!("POST {} -> {} {}", req.url, status, status_text);

    Ok(HttpResponse {
        status,
        status_text,
        body,
    })
}

/// gloo timers take u32 milliseconds
pub(crate) fn timer_millis(timeout_ms: u64) -> u32 {
    u32::try_from(timeout_ms).unwrap_or(u32::MAX)
}
