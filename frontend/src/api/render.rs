//! Client for `POST /api/render`.
//!
//! The backend holds the request open while the provider renders, so a
//! single call can take minutes.

use common::api::ApiError;
use common::model::render::{RenderRequest, RenderResponse};
use gloo_net::http::Request;

const FALLBACK_MESSAGE: &str = "Failed to render video";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderApi {
    url: String,
}

impl RenderApi {
    pub fn for_origin(origin: &str) -> Self {
        Self {
            url: format!("{}/api/render", origin.trim_end_matches('/')),
        }
    }

    pub async fn render(&self, request: &RenderRequest) -> Result<RenderResponse, ApiError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_body(response.status(), &body, FALLBACK_MESSAGE));
        }
        response
            .json::<RenderResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
