use super::store::TemplateStore;
use crate::services::{error_response, method_not_allowed};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::model::shared::DeleteResponse;
use common::requests::IdQuery;
use log::{error, info};

/// Handler for `DELETE /api/templates?id={id}`.
pub async fn process(store: web::Data<TemplateStore>, query: web::Query<IdQuery>) -> HttpResponse {
    let Some(id) = query.into_inner().id else {
        return method_not_allowed().await;
    };
    info!("[Templates API] DELETE request id={}", id);

    match store.delete(&id) {
        Ok(()) => HttpResponse::Ok().json(DeleteResponse { success: true }),
        Err(e) => {
            error!("[Templates API] Delete of {} failed: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete template")
        }
    }
}
