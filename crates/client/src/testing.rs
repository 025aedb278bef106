//! In-process transport double for tests.
//!
//! Enabled for this crate's tests and, through the `test-util` feature, for
//! downstream crates.

use crate::transport::{ApiRequest, Transport, TransportError};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Reply {
    Ok(Value),
    Status { status: u16, body: Option<Value> },
}

/// Counts calls and answers each one with a canned reply.
#[derive(Debug)]
pub struct MockTransport {
    reply: Mutex<Reply>,
    delay: Mutex<Option<Duration>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    fn with_reply(reply: Reply) -> Self {
        Self { reply: Mutex::new(reply), delay: Mutex::new(None), calls: AtomicUsize::new(0), requests: Mutex::new(Vec::new()) }
    }

    /// Answer every call with `payload`.
    pub fn responding(payload: Value) -> Self {
        Self::with_reply(Reply::Ok(payload))
    }

    /// Fail every call with the given HTTP status and optional JSON body.
    pub fn failing(status: u16, body: Option<Value>) -> Self {
        Self::with_reply(Reply::Status { status, body })
    }

    pub fn set_response(&self, payload: Value) {
        *self.reply.lock() = Reply::Ok(payload);
    }

    pub fn set_failure(&self, status: u16, body: Option<Value>) {
        *self.reply.lock() = Reply::Status { status, body };
    }

    /// Sleep for `delay` (tokio time) before answering.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock() = delay;
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());

        // Snapshot the reply before sleeping so a later `set_response` only
        // affects later calls.
        let reply = self.reply.lock().clone();
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Reply::Ok(payload) => Ok(payload),
            Reply::Status { status, body } => Err(TransportError::Status { status, body }),
        }
    }
}
