//! Response interpretation for the API client.
//!
//! A 2xx response yields its JSON body, or `None` when the server sends no
//! content. Any other status becomes an [`HttpResponseError`] whose message
//! is the diagnostic found in the body.

use reqwest::StatusCode;
use serde_json::Value;

use crate::clients::errors::{ApiError, HttpResponseError};

/// Turns a response into its parsed JSON body.
///
/// - non-2xx: [`ApiError::Response`] with the extracted diagnostic
/// - 204: `None`, whatever the body holds
/// - empty body: `None`
/// - otherwise the body parsed as JSON; a parse failure is [`ApiError::Json`]
pub(crate) async fn read_json_body(response: reqwest::Response) -> Result<Option<Value>, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.ok();
        return Err(error_for_status(status, body.as_deref()).into());
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let text = response.text().await?;
    parse_body(&text)
}

pub(crate) fn parse_body(text: &str) -> Result<Option<Value>, ApiError> {
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(text)?))
}

/// Builds the error for a non-2xx response whose body (if it could be read)
/// is `body`.
pub(crate) fn error_for_status(status: StatusCode, body: Option<&str>) -> HttpResponseError {
    let diagnostic = body.map(describe_error_body).unwrap_or_default();
    let message = if diagnostic.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        diagnostic
    };

    HttpResponseError {
        status: status.as_u16(),
        message,
    }
}

/// Extracts a human-readable diagnostic from an error body.
///
/// A JSON string is used verbatim, as is the `detail` string the backend
/// puts in most error objects. Any other JSON value is re-serialized
/// compactly; a body that is not JSON is returned as-is.
fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            _ => Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) => body.to_string(),
    }
}
