use serde::{Deserialize, Serialize};

/// Font size, in CSS pixels, given to placeholders created on the canvas.
pub const DEFAULT_FONT_SIZE: f64 = 24.0;
/// Text color given to placeholders created on the canvas.
pub const DEFAULT_COLOR: &str = "#000000";
/// Box size, in CSS pixels, given to image and video placeholders.
pub const DEFAULT_MEDIA_SIZE: f64 = 150.0;

/// A named, positioned and styled slot on a template.
///
/// `x` and `y` are percentages of the canvas width and height, so a
/// placeholder keeps its anchor point whatever resolution the background is
/// rendered at. The anchor is the center of the placeholder box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub placeholder_type: PlaceholderType,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<ObjectFit>,
}

impl Placeholder {
    /// Gives image and video placeholders a default box when they have none.
    pub fn apply_media_defaults(&mut self) {
        if !self.placeholder_type.is_media() {
            return;
        }
        self.width.get_or_insert(DEFAULT_MEDIA_SIZE);
        self.height.get_or_insert(DEFAULT_MEDIA_SIZE);
        self.object_fit.get_or_insert(ObjectFit::Cover);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderType {
    Text,
    Price,
    Category,
    Image,
    Video,
}

impl PlaceholderType {
    pub const ALL: [PlaceholderType; 5] = [
        PlaceholderType::Text,
        PlaceholderType::Price,
        PlaceholderType::Category,
        PlaceholderType::Image,
        PlaceholderType::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceholderType::Text => "text",
            PlaceholderType::Price => "price",
            PlaceholderType::Category => "category",
            PlaceholderType::Image => "image",
            PlaceholderType::Video => "video",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Image and video placeholders carry a box size and an object fit.
    pub fn is_media(&self) -> bool {
        matches!(self, PlaceholderType::Image | PlaceholderType::Video)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    Cover,
    Contain,
    Fill,
    None,
}

impl ObjectFit {
    pub fn as_css(&self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
            ObjectFit::Fill => "fill",
            ObjectFit::None => "none",
        }
    }
}
