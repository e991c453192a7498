//! Test doubles shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::ApiError;
use crate::function::{FunctionCall, FunctionKind};
use crate::transport::Transport;

/// Transport that records every call and answers with a canned reply.
#[derive(Clone, Debug)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<(FunctionKind, FunctionCall)>>>,
    reply: Result<Value, ApiError>,
}

impl RecordingTransport {
    pub fn replying(reply: Result<Value, ApiError>) -> Self {
        Self {
            calls: Arc::default(),
            reply,
        }
    }

    pub fn calls(&self) -> Vec<(FunctionKind, FunctionCall)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::replying(Ok(Value::Null))
    }
}

impl Transport for RecordingTransport {
    async fn call(&self, kind: FunctionKind, call: FunctionCall) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push((kind, call));
        self.reply.clone()
    }
}
