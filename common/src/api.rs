//! Error envelope shared by the backend handlers and the sharing client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every failed backend response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            documentation: None,
        }
    }
}

/// The four template operations, used to pick a fallback error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOperation {
    Create,
    Get,
    Update,
    Delete,
}

impl TemplateOperation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            TemplateOperation::Create => "Failed to create template",
            TemplateOperation::Get => "Failed to fetch template",
            TemplateOperation::Update => "Failed to update template",
            TemplateOperation::Delete => "Failed to delete template",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Translates a non-2xx response into an error carrying the server's
    /// `error` field, or the operation's generic message when the body has
    /// none.
    pub fn from_response(operation: TemplateOperation, status: u16, body: &str) -> Self {
        Self::from_body(status, body, operation.fallback_message())
    }

    /// Same as [`ApiError::from_response`] with an explicit fallback message.
    pub fn from_body(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|body| body.error)
            .filter(|error| !error.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Server { status, message }
    }
}

/// Link that replays a shared template in the preview page.
pub fn preview_link(origin: &str, id: &str) -> String {
    format!("{}/?id={}", origin.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_server_message_when_present() {
        let err = ApiError::from_response(
            TemplateOperation::Get,
            404,
            r#"{"error":"Template not found"}"#,
        );
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: "Template not found".to_string()
            }
        );
        assert_eq!(err.to_string(), "Template not found");
    }

    #[test]
    fn falls_back_on_unreadable_bodies() {
        let err = ApiError::from_response(TemplateOperation::Update, 502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "Failed to update template");

        let err = ApiError::from_response(TemplateOperation::Create, 500, r#"{"error":""}"#);
        assert_eq!(err.to_string(), "Failed to create template");
    }

    #[test]
    fn render_errors_keep_the_server_message() {
        let body = r#"{"error":"Video processing API not configured","message":"Set SHOTSTACK_API_KEY"}"#;
        let err = ApiError::from_body(500, body, "Failed to render video");
        assert_eq!(err.to_string(), "Video processing API not configured");

        let err = ApiError::from_body(500, "", "Failed to render video");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "Failed to render video".to_string()
            }
        );
    }

    #[test]
    fn builds_preview_links() {
        assert_eq!(
            preview_link("http://127.0.0.1:8080/", "abc"),
            "http://127.0.0.1:8080/?id=abc"
        );
    }
}
