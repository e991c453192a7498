//! # Transport — how a function call reaches the backend
//!
//! [`Transport`] is the seam between the typed facade and the wire. The client
//! hands it a [`FunctionKind`] and an encoded [`FunctionCall`] and gets back the
//! raw JSON value the function returned.
//!
//! [`HttpTransport`] speaks the backend's HTTP function API:
//!
//! ```text
//! POST <url>/api/query      {"path": "users:viewer", "args": {}, "format": "json"}
//! POST <url>/api/mutation   {"path": "users:selectAvatar", "args": {...}, "format": "json"}
//!
//! 200 {"status": "success", "value": ...}
//! 4xx/5xx {"status": "error", "errorMessage": "...", "errorData": ...}
//! ```
//!
//! No retry, timeout or deduplication happens here; whatever fails is returned.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::function::{FunctionCall, FunctionKind};

/// Async trait for delivering a function call to the backend.
pub trait Transport {
    fn call(
        &self,
        kind: FunctionKind,
        call: FunctionCall,
    ) -> impl std::future::Future<Output = Result<Value, ApiError>>;
}

#[derive(Serialize)]
struct RequestBody<'a> {
    path: &'a str,
    args: &'a Value,
    format: &'static str,
}

#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ResponseBody {
    Success {
        #[serde(default)]
        value: Value,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
        #[serde(rename = "errorData", default)]
        error_data: Option<Value>,
    },
}

fn request_body(call: &FunctionCall) -> RequestBody<'_> {
    RequestBody {
        path: &call.path,
        args: &call.args,
        format: "json",
    }
}

/// Map a JSON response body to the function's value or its backend error.
pub fn decode_response(body: Value) -> Result<Value, ApiError> {
    match serde_json::from_value::<ResponseBody>(body) {
        Ok(ResponseBody::Success { value }) => Ok(value),
        Ok(ResponseBody::Error {
            error_message,
            error_data,
        }) => Err(ApiError::Backend {
            message: error_message,
            data: error_data,
        }),
        Err(e) => Err(ApiError::decode(format!("unexpected response body: {e}"))),
    }
}

/// HTTP transport built on `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    config: BackendConfig,
}

impl HttpTransport {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl Transport for HttpTransport {
    async fn call(&self, kind: FunctionKind, call: FunctionCall) -> Result<Value, ApiError> {
        let endpoint = self.config.endpoint(kind);
        debug!(%endpoint, path = %call.path, "sending backend request");

        let response = self
            .http
            .post(&endpoint)
            .json(&request_body(&call))
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        read_response(status, &text)
    }
}

/// Map an HTTP status and body text to the function's value.
///
/// An error envelope is a backend error whatever the status. Any other body on a
/// non-2xx status is a transport failure; on a 2xx status it is a decode failure.
fn read_response(status: reqwest::StatusCode, text: &str) -> Result<Value, ApiError> {
    let decoded = match serde_json::from_str::<Value>(text) {
        Ok(body) => decode_response(body),
        Err(e) => Err(ApiError::decode(format!("response is not JSON: {e}"))),
    };

    match decoded {
        Err(ApiError::Decode(_)) if !status.is_success() => {
            Err(ApiError::transport(format!("HTTP {status}: {text}")))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body() {
        let call = FunctionCall {
            path: "rooms:join".to_string(),
            args: json!({"room": "ABCD"}),
        };
        assert_eq!(
            serde_json::to_value(request_body(&call)).unwrap(),
            json!({"path": "rooms:join", "args": {"room": "ABCD"}, "format": "json"})
        );
    }

    #[test]
    fn test_decode_success() {
        let value = decode_response(json!({"status": "success", "value": [1, 2]})).unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_decode_success_without_value() {
        let value = decode_response(json!({"status": "success"})).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_decode_backend_error() {
        let err = decode_response(json!({
            "status": "error",
            "errorMessage": "Room is full",
            "errorData": {"code": "FULL"}
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Backend {
                message: "Room is full".to_string(),
                data: Some(json!({"code": "FULL"})),
            }
        );
    }

    #[test]
    fn test_read_response_success() {
        let value = read_response(
            reqwest::StatusCode::OK,
            r#"{"status": "success", "value": "Ada"}"#,
        )
        .unwrap();
        assert_eq!(value, json!("Ada"));
    }

    #[test]
    fn test_read_response_error_envelope_on_failure_status() {
        let err = read_response(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"status": "error", "errorMessage": "Not signed in"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Backend {
                message: "Not signed in".to_string(),
                data: None,
            }
        );
    }

    #[test]
    fn test_read_response_foreign_json_on_failure_status() {
        let err = read_response(
            reqwest::StatusCode::BAD_GATEWAY,
            r#"{"message":"bad gateway"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Transport(r#"HTTP 502 Bad Gateway: {"message":"bad gateway"}"#.to_string())
        );
    }

    #[test]
    fn test_read_response_text_on_failure_status() {
        let err = read_response(reqwest::StatusCode::SERVICE_UNAVAILABLE, "upstream down")
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Transport("HTTP 503 Service Unavailable: upstream down".to_string())
        );
    }

    #[test]
    fn test_read_response_bad_envelope_on_success_status() {
        let err = read_response(reqwest::StatusCode::OK, r#"{"message":"ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = read_response(reqwest::StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_response(json!({"hello": "world"})).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
