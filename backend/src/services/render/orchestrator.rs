//! # Render Orchestrator
//!
//! Drives one render from request to published video.
//!
//! ## Workflow
//!
//! 1.  **Configuration check**: fails with `NotConfigured` (no provider) or
//!     `StorageNotConfigured` before any network traffic.
//! 2.  **Submit**: hands the request to the configured provider and keeps the
//!     provider's render id.
//! 3.  **Poll**: asks for the render status every `poll_interval`, at most
//!     `max_poll_attempts` times, until it is done or failed.
//! 4.  **Republish**: downloads the rendered asset and uploads it to object
//!     storage as `{render_id}.{ext}`, answering with its public URL.
//!
//! Every call to [`RenderOrchestrator::render`] owns its own state, so
//! concurrent requests never observe each other.

use super::error::RenderError;
use super::providers::RenderProvider;
use super::storage::ObjectStorage;
use crate::config::RenderConfig;
use common::jobs::RenderJobState;
use common::model::render::{RenderRequest, RenderResponse};
use log::{debug, info, warn};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

pub struct RenderOrchestrator {
    provider: Option<RenderProvider>,
    storage: Option<ObjectStorage>,
    http: Client,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl RenderOrchestrator {
    pub fn new(config: &RenderConfig) -> Self {
        let provider = config.provider.as_ref().map(RenderProvider::from_config);
        match &provider {
            Some(p) => info!("[Render] Using {} for video rendering", p.name()),
            None => warn!("[Render] No video processing API configured; /api/render will fail"),
        }
        Self {
            provider,
            storage: config.storage.clone().map(ObjectStorage::new),
            http: Client::new(),
            poll_interval: config.poll_interval,
            max_poll_attempts: config.max_poll_attempts,
        }
    }

    pub async fn render(&self, request: &RenderRequest) -> Result<RenderResponse, RenderError> {
        let provider = self.provider.as_ref().ok_or(RenderError::NotConfigured)?;
        let storage = self.storage.as_ref().ok_or(RenderError::StorageNotConfigured)?;

        info!(
            "[Render] Starting {} render of {} with {} overlays",
            provider.name(),
            request.template_url,
            request.placeholders.len()
        );
        let render_id = provider.submit(&self.http, request).await?;
        info!("[Render] {} accepted render {}", provider.name(), render_id);

        let http = &self.http;
        let id = render_id.as_str();
        let asset_url = poll_until_done(self.poll_interval, self.max_poll_attempts, move || {
            provider.poll(http, id)
        })
        .await?;

        let bytes = self.download(&asset_url).await?;
        let format = request.format();
        let file_name = format!("{}.{}", render_id, format.extension());
        let video_url = storage
            .upload(&self.http, &file_name, format.content_type(), bytes)
            .await?;

        info!("[Render] Render {} published at {}", render_id, video_url);
        Ok(RenderResponse {
            success: true,
            video_url,
            render_id: Some(render_id),
            file_name,
        })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, RenderError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RenderError::Download(e.to_string()))?;
        if !response.status().is_success() {
            return Err(RenderError::Download(response.status().to_string()));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RenderError::Download(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Polls until the job reaches a terminal state and returns the asset URL.
///
/// Waits `interval` before each attempt. After `max_attempts` non-terminal
/// answers the job counts as timed out.
pub async fn poll_until_done<F, Fut>(interval: Duration, max_attempts: u32, mut poll: F) -> Result<String, RenderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<RenderJobState, RenderError>>,
{
    for attempt in 1..=max_attempts {
        tokio::time::sleep(interval).await;
        match poll().await? {
            RenderJobState::Done(url) => return Ok(url),
            RenderJobState::Failed(message) => return Err(RenderError::ProviderFailed(message)),
            state => debug!("[Render] Status check {}/{}: {:?}", attempt, max_attempts, state),
        }
    }
    Err(RenderError::Timeout {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use std::cell::Cell;

    fn scripted(states: Vec<RenderJobState>) -> impl FnMut() -> std::future::Ready<Result<RenderJobState, RenderError>> {
        let mut states = states.into_iter();
        move || {
            std::future::ready(Ok(states
                .next()
                .unwrap_or_else(|| RenderJobState::Pending("rendering".to_string()))))
        }
    }

    #[actix_web::test]
    async fn poll_returns_url_once_done() {
        let url = poll_until_done(
            Duration::ZERO,
            5,
            scripted(vec![
                RenderJobState::Pending("queued".to_string()),
                RenderJobState::Pending("rendering".to_string()),
                RenderJobState::Done("https://cdn/out.mp4".to_string()),
            ]),
        )
        .await
        .unwrap();
        assert_eq!(url, "https://cdn/out.mp4");
    }

    #[actix_web::test]
    async fn poll_surfaces_provider_failure() {
        let err = poll_until_done(
            Duration::ZERO,
            5,
            scripted(vec![RenderJobState::Failed("codec error".to_string())]),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Rendering failed: codec error");
    }

    #[actix_web::test]
    async fn poll_gives_up_after_attempt_budget() {
        let calls = Cell::new(0);
        let err = poll_until_done(Duration::ZERO, 3, || {
            calls.set(calls.get() + 1);
            std::future::ready(Ok(RenderJobState::Pending("rendering".to_string())))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, RenderError::Timeout { attempts: 3 }));
        assert_eq!(calls.get(), 3);
    }

    #[actix_web::test]
    async fn missing_configuration_fails_before_any_request() {
        let request = RenderRequest {
            template_url: "https://cdn/promo.mp4".to_string(),
            placeholders: Vec::new(),
            output_format: None,
            quality: None,
        };
        let mut config = RenderConfig {
            provider: None,
            poll_interval: Duration::ZERO,
            max_poll_attempts: 1,
            storage: None,
        };

        let err = RenderOrchestrator::new(&config).render(&request).await.unwrap_err();
        assert!(matches!(err, RenderError::NotConfigured));

        config.provider = Some(ProviderConfig::Shotstack {
            api_key: "key".to_string(),
            api_url: "http://127.0.0.1:9".to_string(),
        });
        let err = RenderOrchestrator::new(&config).render(&request).await.unwrap_err();
        assert!(matches!(err, RenderError::StorageNotConfigured));
    }
}
