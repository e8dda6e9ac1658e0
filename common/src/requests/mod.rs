use crate::model::template::TemplateDocument;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/templates` and `PUT /api/templates?id=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePayload {
    pub template_data: TemplateDocument,
}

/// Query string of the template endpoints that address a single record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}
