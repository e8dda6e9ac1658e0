use super::store::TemplateStore;
use crate::services::{error_response, method_not_allowed};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::requests::{IdQuery, TemplatePayload};
use log::{error, info};

/// Handler for `PUT /api/templates?id={id}`.
///
/// An unknown id is reported like any other write failure, as a `500` with
/// `"Failed to update template"`.
pub async fn process(
    store: web::Data<TemplateStore>,
    query: web::Query<IdQuery>,
    payload: web::Json<TemplatePayload>,
) -> HttpResponse {
    let Some(id) = query.into_inner().id else {
        return method_not_allowed().await;
    };
    info!("[Templates API] PUT request id={}", id);

    match store.replace(&id, &payload.template_data) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => {
            error!("[Templates API] Update of {} failed: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update template")
        }
    }
}
