//! Shotstack edit API.
//!
//! The template video sits on the bottom track and every overlay becomes a
//! clip on a track above it: text as an HTML asset, images as image assets.

use super::read_json;
use crate::services::render::error::RenderError;
use common::jobs::RenderJobState;
use common::model::render::{OverlayKind, RenderOverlay, RenderQuality, RenderRequest};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

pub const NAME: &str = "Shotstack";

const DEFAULT_FONT_SIZE: f64 = 24.0;
const DEFAULT_COLOR: &str = "#ffffff";

#[derive(Debug, Clone)]
pub struct ShotstackProvider {
    api_key: String,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: T,
}

#[derive(Debug, Deserialize)]
struct Queued {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Status {
    status: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ShotstackProvider {
    pub fn new(api_key: &str, api_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn submit(&self, http: &Client, request: &RenderRequest) -> Result<String, RenderError> {
        let edit = build_edit(request);
        debug!("[Shotstack] Submitting edit with {} overlays", request.placeholders.len());
        let response = http
            .post(format!("{}/render", self.api_url))
            .header("x-api-key", &self.api_key)
            .json(&edit)
            .send()
            .await?;
        let queued: Envelope<Queued> = read_json(NAME, response).await?;
        Ok(queued.response.id)
    }

    pub async fn poll(&self, http: &Client, render_id: &str) -> Result<RenderJobState, RenderError> {
        let response = http
            .get(format!("{}/render/{}", self.api_url, render_id))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;
        let status: Envelope<Status> = read_json(NAME, response).await?;
        Ok(job_state(status.response))
    }
}

fn job_state(status: Status) -> RenderJobState {
    match status.status.as_str() {
        "done" => match status.url {
            Some(url) => RenderJobState::Done(url),
            None => RenderJobState::Failed("render finished without an output url".to_string()),
        },
        "failed" => RenderJobState::Failed(status.error.unwrap_or_else(|| "Shotstack render failed".to_string())),
        other => RenderJobState::Pending(other.to_string()),
    }
}

/// Builds the Shotstack edit document for a render request.
pub fn build_edit(request: &RenderRequest) -> Value {
    let overlay_clips: Vec<Value> = request.placeholders.iter().map(overlay_clip).collect();
    let total_length = request
        .placeholders
        .iter()
        .map(|o| o.start_time + o.duration)
        .fold(0.0_f64, f64::max);

    let mut template_clip = json!({
        "asset": { "type": "video", "src": request.template_url },
        "start": 0,
    });
    template_clip["length"] = if total_length > 0.0 {
        json!(total_length)
    } else {
        json!("auto")
    };

    let resolution = match request.quality {
        Some(RenderQuality::High) => "hd",
        _ => "sd",
    };

    json!({
        "timeline": {
            "tracks": [
                { "clips": overlay_clips },
                { "clips": [template_clip] },
            ],
        },
        "output": {
            "format": request.format().extension(),
            "resolution": resolution,
        },
    })
}

fn overlay_clip(overlay: &RenderOverlay) -> Value {
    let asset = match overlay.kind {
        OverlayKind::Text => {
            let style = overlay.style.clone().unwrap_or_default();
            json!({
                "type": "html",
                "html": format!("<p>{}</p>", escape_html(&overlay.value)),
                "css": format!(
                    "p {{ font-size: {}px; color: {}; }}",
                    style.font_size.unwrap_or(DEFAULT_FONT_SIZE),
                    style.color.as_deref().unwrap_or(DEFAULT_COLOR)
                ),
            })
        }
        OverlayKind::Image => json!({ "type": "image", "src": overlay.value }),
    };

    let position = match &overlay.position {
        Some(p) => format!("{}% {}%", p.x, p.y),
        None => "center".to_string(),
    };

    json!({
        "asset": asset,
        "start": overlay.start_time,
        "length": overlay.duration,
        "position": position,
    })
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::render::{OutputFormat, OverlayPosition, OverlayStyle};

    fn request() -> RenderRequest {
        RenderRequest {
            template_url: "https://cdn.example.com/promo.mp4".to_string(),
            placeholders: vec![
                RenderOverlay {
                    id: "i1-title".to_string(),
                    kind: OverlayKind::Text,
                    value: "Fish & Chips".to_string(),
                    start_time: 0.0,
                    duration: 2.0,
                    position: Some(OverlayPosition { x: 25.0, y: 75.0 }),
                    style: Some(OverlayStyle {
                        font_size: Some(32.0),
                        color: None,
                        font_family: None,
                    }),
                },
                RenderOverlay {
                    id: "i2-photo".to_string(),
                    kind: OverlayKind::Image,
                    value: "https://cdn.example.com/fish.png".to_string(),
                    start_time: 2.0,
                    duration: 1.5,
                    position: None,
                    style: None,
                },
            ],
            output_format: Some(OutputFormat::Webm),
            quality: Some(RenderQuality::High),
        }
    }

    #[test]
    fn edit_places_overlays_above_the_template() {
        let edit = build_edit(&request());
        let tracks = edit["timeline"]["tracks"].as_array().unwrap();
        assert_eq!(tracks.len(), 2);

        let overlays = tracks[0]["clips"].as_array().unwrap();
        assert_eq!(overlays.len(), 2);
        assert_eq!(overlays[0]["asset"]["type"], "html");
        assert_eq!(overlays[0]["asset"]["html"], "<p>Fish &amp; Chips</p>");
        assert_eq!(overlays[0]["asset"]["css"], "p { font-size: 32px; color: #ffffff; }");
        assert_eq!(overlays[0]["position"], "25% 75%");
        assert_eq!(overlays[1]["asset"]["type"], "image");
        assert_eq!(overlays[1]["position"], "center");
        assert_eq!(overlays[1]["start"], 2.0);

        let template = &tracks[1]["clips"][0];
        assert_eq!(template["asset"]["src"], "https://cdn.example.com/promo.mp4");
        assert_eq!(template["length"], 3.5);

        assert_eq!(edit["output"]["format"], "webm");
        assert_eq!(edit["output"]["resolution"], "hd");
    }

    #[test]
    fn empty_request_keeps_template_length() {
        let mut request = request();
        request.placeholders.clear();
        request.quality = None;
        let edit = build_edit(&request);
        assert_eq!(edit["timeline"]["tracks"][1]["clips"][0]["length"], "auto");
        assert_eq!(edit["output"]["resolution"], "sd");
    }

    #[test]
    fn status_maps_to_job_state() {
        let state = |status: &str, url: Option<&str>| {
            job_state(Status {
                status: status.to_string(),
                url: url.map(str::to_string),
                error: None,
            })
        };
        assert_eq!(state("rendering", None), RenderJobState::Pending("rendering".to_string()));
        assert_eq!(
            state("done", Some("https://cdn/out.mp4")),
            RenderJobState::Done("https://cdn/out.mp4".to_string())
        );
        assert!(matches!(state("done", None), RenderJobState::Failed(_)));
        assert!(matches!(state("failed", None), RenderJobState::Failed(_)));
    }
}
