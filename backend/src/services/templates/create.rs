use super::store::TemplateStore;
use crate::services::error_response;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::requests::TemplatePayload;
use log::{error, info};

/// Handler for `POST /api/templates`. Answers `201 Created` with the stored
/// record, whose `id` is generated here.
pub async fn process(store: web::Data<TemplateStore>, payload: web::Json<TemplatePayload>) -> HttpResponse {
    let document = &payload.template_data;
    info!(
        "[Templates API] Creating shared template (background: {}, placeholders: {}, iterations: {})",
        document.template.background_image.is_some() || document.template.background_video.is_some(),
        document.template.placeholders.len(),
        document.iterations.len()
    );

    match store.insert(document) {
        Ok(record) => {
            info!("[Templates API] Created shared template {}", record.id);
            HttpResponse::Created().json(record)
        }
        Err(e) => {
            error!("[Templates API] Insert failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create template")
        }
    }
}
