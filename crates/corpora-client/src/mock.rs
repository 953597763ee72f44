//! Scripted transport for deterministic testing.
//!
//! Queues canned responses and records every call so tests can assert on
//! the exact method, path, and body the facade produced — including that
//! no call was made at all when local validation fails.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};

use corpora_core::{DatasetTransport, Error, Result};

/// A recorded transport call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<JsonValue>,
}

/// Scripted mock transport with a call log.
///
/// Responses are served in FIFO order; once the queue is empty, calls get
/// an empty JSON object.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<JsonValue>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_response(self, response: JsonValue) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue an error, as the transport would produce for a non-2xx status.
    pub fn with_error(self, error: Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Snapshot of all calls made so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn serve(&self, method: &'static str, path: &str, body: Option<JsonValue>) -> Result<JsonValue> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }
}

#[async_trait]
impl DatasetTransport for MockTransport {
    async fn get(&self, path: &str) -> Result<JsonValue> {
        self.serve("GET", path, None)
    }

    async fn post(&self, path: &str, body: Option<JsonValue>) -> Result<JsonValue> {
        self.serve("POST", path, body)
    }

    async fn patch(&self, path: &str, body: JsonValue) -> Result<JsonValue> {
        self.serve("PATCH", path, Some(body))
    }

    async fn delete(&self, path: &str, body: Option<JsonValue>) -> Result<JsonValue> {
        self.serve("DELETE", path, body)
    }
}
