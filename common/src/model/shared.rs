use crate::model::template::TemplateDocument;
use serde::{Deserialize, Serialize};

/// A template document persisted by the backend under a generated id.
///
/// Records are replaced as a whole on update; there is no versioning and the
/// last writer wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedTemplate {
    pub id: String,
    pub template_data: TemplateDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body of a successful `DELETE /api/templates?id=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
