//! Creatomate renders API.
//!
//! Creatomate renders one of its own stored templates; overlays are passed as
//! modifications keyed by the overlay id, so the Creatomate template must
//! name its elements after the studio placeholders.

use super::read_json;
use crate::services::render::error::RenderError;
use common::jobs::RenderJobState;
use common::model::render::RenderRequest;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};

pub const NAME: &str = "Creatomate";

#[derive(Debug, Clone)]
pub struct CreatomateProvider {
    api_key: String,
    api_url: String,
    template_id: String,
}

#[derive(Debug, Deserialize)]
struct Render {
    id: String,
    status: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

impl CreatomateProvider {
    pub fn new(api_key: &str, api_url: &str, template_id: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            template_id: template_id.to_string(),
        }
    }

    pub async fn submit(&self, http: &Client, request: &RenderRequest) -> Result<String, RenderError> {
        let response = http
            .post(format!("{}/renders", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&self.build_body(request))
            .send()
            .await?;
        // One render is created per request; the API still answers with a list.
        let renders: Vec<Render> = read_json(NAME, response).await?;
        renders
            .into_iter()
            .next()
            .map(|render| render.id)
            .ok_or_else(|| RenderError::Provider {
                provider: NAME,
                message: "no render was created".to_string(),
            })
    }

    pub async fn poll(&self, http: &Client, render_id: &str) -> Result<RenderJobState, RenderError> {
        let response = http
            .get(format!("{}/renders/{}", self.api_url, render_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let render: Render = read_json(NAME, response).await?;
        Ok(job_state(render))
    }

    pub fn build_body(&self, request: &RenderRequest) -> Value {
        let modifications: Map<String, Value> = request
            .placeholders
            .iter()
            .map(|overlay| (overlay.id.clone(), Value::String(overlay.value.clone())))
            .collect();
        json!({
            "template_id": self.template_id,
            "modifications": modifications,
            "output_format": request.format().extension(),
        })
    }
}

fn job_state(render: Render) -> RenderJobState {
    match render.status.as_str() {
        "succeeded" => match render.url {
            Some(url) => RenderJobState::Done(url),
            None => RenderJobState::Failed("render finished without an output url".to_string()),
        },
        "failed" => RenderJobState::Failed(
            render
                .error_message
                .unwrap_or_else(|| "Creatomate render failed".to_string()),
        ),
        other => RenderJobState::Pending(other.to_string()),
    }
}
