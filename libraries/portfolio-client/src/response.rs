//! Shared response handling for every Portfolio API call.
//!
//! The remote API does not guarantee JSON framing: transport-layer
//! error pages arrive as plain text, and some endpoints answer with
//! an empty body. Every operation therefore reads the body as text,
//! parses it leniently, and extracts error messages by the same rule.

use crate::error::{ClientError, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Response body after lenient parsing.
pub(crate) enum Body {
    /// No content
    Empty,
    /// Body parsed as JSON
    Json(Value),
    /// Body was not JSON; raw text retained
    Text(String),
}

/// Parse a body as JSON, keeping the raw text when parsing fails.
pub(crate) fn parse_body(raw: &str) -> Body {
    if raw.is_empty() {
        return Body::Empty;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Body::Json(value),
        Err(_) => Body::Text(raw.to_string()),
    }
}

/// Extract the user-facing message from an error response body.
///
/// Rule: the parsed object's `message` field if present; the string
/// itself when the body is a string; otherwise the per-operation
/// fallback.
pub(crate) fn error_message(body: &Body, fallback: &str) -> String {
    match body {
        Body::Json(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string(),
        Body::Json(Value::String(s)) => s.clone(),
        Body::Text(raw) => raw.clone(),
        Body::Json(_) | Body::Empty => fallback.to_string(),
    }
}

/// Decode a response into `T` under the shared discipline.
///
/// Non-success statuses become [`ClientError::Api`] with the message
/// extracted by [`error_message`]. An empty success body decodes as
/// JSON `null`, so `Option<T>` targets absorb no-content responses.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
    let status = response.status();
    let raw = response.text().await.map_err(ClientError::Request)?;
    let body = parse_body(&raw);

    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(&body, fallback),
        });
    }

    let value = match body {
        Body::Json(value) => value,
        Body::Empty => Value::Null,
        Body::Text(_) => {
            return Err(ClientError::Parse(format!(
                "expected JSON, got: {}",
                raw
            )));
        }
    };

    serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Map a send-level failure, distinguishing unreachable servers.
pub(crate) fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}
