//! Compositing providers.
//!
//! Both providers follow the same contract: `submit` hands a render request
//! over and returns the provider's render id, `poll` maps the provider's
//! status for that id onto a [`RenderJobState`].

pub mod creatomate;
pub mod shotstack;

use super::error::RenderError;
use crate::config::ProviderConfig;
use common::jobs::RenderJobState;
use common::model::render::RenderRequest;
use creatomate::CreatomateProvider;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shotstack::ShotstackProvider;

#[derive(Debug, Clone)]
pub enum RenderProvider {
    Shotstack(ShotstackProvider),
    Creatomate(CreatomateProvider),
}

impl RenderProvider {
    pub fn from_config(config: &ProviderConfig) -> Self {
        match config {
            ProviderConfig::Shotstack { api_key, api_url } => {
                RenderProvider::Shotstack(ShotstackProvider::new(api_key, api_url))
            }
            ProviderConfig::Creatomate {
                api_key,
                api_url,
                template_id,
            } => RenderProvider::Creatomate(CreatomateProvider::new(api_key, api_url, template_id)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderProvider::Shotstack(_) => shotstack::NAME,
            RenderProvider::Creatomate(_) => creatomate::NAME,
        }
    }

    pub async fn submit(&self, http: &Client, request: &RenderRequest) -> Result<String, RenderError> {
        match self {
            RenderProvider::Shotstack(p) => p.submit(http, request).await,
            RenderProvider::Creatomate(p) => p.submit(http, request).await,
        }
    }

    pub async fn poll(&self, http: &Client, render_id: &str) -> Result<RenderJobState, RenderError> {
        match self {
            RenderProvider::Shotstack(p) => p.poll(http, render_id).await,
            RenderProvider::Creatomate(p) => p.poll(http, render_id).await,
        }
    }
}

/// Checks the status and decodes the body, turning non-2xx answers into a
/// provider error that carries the response text.
async fn read_json<T: DeserializeOwned>(provider: &'static str, response: Response) -> Result<T, RenderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RenderError::Provider {
            provider,
            message: format!("{} {}", status, body),
        });
    }
    response.json::<T>().await.map_err(|e| RenderError::Provider {
        provider,
        message: format!("unexpected response: {}", e),
    })
}
