use common::api::ErrorBody;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Video processing API not configured")]
    NotConfigured,
    #[error("Object storage not configured")]
    StorageNotConfigured,
    #[error("{provider} API error: {message}")]
    Provider { provider: &'static str, message: String },
    #[error("Rendering failed: {0}")]
    ProviderFailed(String),
    #[error("Rendering timed out after {attempts} status checks")]
    Timeout { attempts: u32 },
    #[error("Failed to download rendered video: {0}")]
    Download(String),
    #[error("Failed to upload video: {0}")]
    Upload(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl RenderError {
    /// JSON body sent back to the caller. Every render failure is a `500`.
    pub fn body(&self) -> ErrorBody {
        match self {
            RenderError::NotConfigured => ErrorBody {
                error: self.to_string(),
                message: Some("Please configure SHOTSTACK_API_KEY or CREATOMATE_API_KEY secret".to_string()),
                documentation: Some(json!({
                    "shotstack": "https://shotstack.io/docs",
                    "creatomate": "https://creatomate.com/docs",
                })),
            },
            RenderError::StorageNotConfigured => ErrorBody {
                error: self.to_string(),
                message: Some("Please configure STORAGE_URL and STORAGE_SERVICE_KEY".to_string()),
                documentation: None,
            },
            other => ErrorBody::new(other.to_string()),
        }
    }
}
