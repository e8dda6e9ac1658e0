//! Wire types of the render API (`POST /api/render`).
//!
//! Times are expressed in seconds because that is what the compositing
//! providers consume; the studio converts from milliseconds when it builds a
//! request (see `timeline`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// Publicly reachable URL of the template video.
    pub template_url: String,
    pub placeholders: Vec<RenderOverlay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<RenderQuality>,
}

impl RenderRequest {
    pub fn format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// One timed overlay composited over the template video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOverlay {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OverlayKind,
    pub value: String,
    pub start_time: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<OverlayPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<OverlayStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Text,
    Image,
}

/// Percent coordinates, same convention as placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Mp4,
    Webm,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mp4 => "mp4",
            OutputFormat::Webm => "webm",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Mp4 => "video/mp4",
            OutputFormat::Webm => "video/webm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    Low,
    Medium,
    High,
}

/// Body of a successful render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub success: bool,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_id: Option<String>,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_request() {
        let request: RenderRequest = serde_json::from_str(
            r#"{
                "templateUrl": "https://bucket.s3.amazonaws.com/promo.mp4",
                "placeholders": [
                    {"id": "title", "type": "text", "value": "Sale", "startTime": 0, "duration": 2.5}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(request.format(), OutputFormat::Mp4);
        assert_eq!(request.quality, None);
        assert_eq!(request.placeholders[0].kind, OverlayKind::Text);
        assert_eq!(request.placeholders[0].duration, 2.5);
    }

    #[test]
    fn response_uses_camel_case() {
        let json = serde_json::to_value(RenderResponse {
            success: true,
            video_url: "https://storage.example.com/a.mp4".to_string(),
            render_id: None,
            file_name: "a.mp4".to_string(),
        })
        .unwrap();
        assert_eq!(json["videoUrl"], "https://storage.example.com/a.mp4");
        assert_eq!(json["fileName"], "a.mp4");
        assert!(json.get("renderId").is_none());
    }
}
