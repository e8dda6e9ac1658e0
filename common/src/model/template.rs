use crate::model::iteration::DataIteration;
use crate::model::placeholder::Placeholder;
use serde::{Deserialize, Serialize};

/// A background (image or video) plus the placeholders laid over it.
///
/// The background image and the background video are mutually exclusive; use
/// [`TemplateData::set_background_image`] and
/// [`TemplateData::set_background_video`] to keep it that way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_video: Option<String>,
    #[serde(default)]
    pub placeholders: Vec<Placeholder>,
}

impl TemplateData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn set_background_image(&mut self, url: String) {
        self.background_image = Some(url);
        self.background_video = None;
    }

    pub fn set_background_video(&mut self, url: String) {
        self.background_video = Some(url);
        self.background_image = None;
    }

    pub fn placeholder(&self, id: &str) -> Option<&Placeholder> {
        self.placeholders.iter().find(|p| p.id == id)
    }

    pub fn placeholder_mut(&mut self, id: &str) -> Option<&mut Placeholder> {
        self.placeholders.iter_mut().find(|p| p.id == id)
    }
}

/// A template together with its iterations: the unit that is shared,
/// persisted and replayed.
///
/// Serialized flat, so `{backgroundImage?, backgroundVideo?, placeholders,
/// iterations}` documents without `id`/`name` still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    #[serde(flatten)]
    pub template: TemplateData,
    #[serde(default)]
    pub iterations: Vec<DataIteration>,
}
