//! Template Sharing Client.
//!
//! Thin wrapper over the `/api/templates` endpoints. Each call is a single
//! round trip without retries; non-2xx answers become [`ApiError::Server`]
//! with the server's message or a per-operation fallback.

use common::api::{ApiError, TemplateOperation};
use common::model::shared::{DeleteResponse, SharedTemplate};
use common::model::template::TemplateDocument;
use common::requests::TemplatePayload;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub struct TemplatesApi {
    base_url: String,
}

impl TemplatesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the backend serving the page at `origin`.
    pub fn for_origin(origin: &str) -> Self {
        Self::new(format!("{}/api/templates", origin.trim_end_matches('/')))
    }

    fn url_for(&self, id: &str) -> String {
        format!("{}?id={}", self.base_url, String::from(js_sys::encode_uri_component(id)))
    }

    pub async fn create(&self, document: &TemplateDocument) -> Result<SharedTemplate, ApiError> {
        let op = TemplateOperation::Create;
        let request = Request::post(&self.base_url)
            .json(&payload(document))
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(op, request.send().await).await
    }

    pub async fn get(&self, id: &str) -> Result<SharedTemplate, ApiError> {
        read(TemplateOperation::Get, Request::get(&self.url_for(id)).send().await).await
    }

    pub async fn update(&self, id: &str, document: &TemplateDocument) -> Result<SharedTemplate, ApiError> {
        let request = Request::put(&self.url_for(id))
            .json(&payload(document))
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(TemplateOperation::Update, request.send().await).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response: DeleteResponse =
            read(TemplateOperation::Delete, Request::delete(&self.url_for(id)).send().await).await?;
        if response.success {
            Ok(())
        } else {
            Err(ApiError::Decode(TemplateOperation::Delete.fallback_message().to_string()))
        }
    }
}

fn payload(document: &TemplateDocument) -> TemplatePayload {
    TemplatePayload {
        template_data: document.clone(),
    }
}

async fn read<T: DeserializeOwned>(
    operation: TemplateOperation,
    response: Result<Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let response = response.map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(operation, response.status(), &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
