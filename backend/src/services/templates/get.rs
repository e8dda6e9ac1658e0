//! # Shared Template Retrieval
//!
//! Backs `GET /api/templates?id={id}`: loads the stored document and returns
//! the full `SharedTemplate` record as JSON.

use super::store::{StoreError, TemplateStore};
use crate::services::{error_response, method_not_allowed};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::requests::IdQuery;
use log::{error, info};

/// # Returns
/// - `200 OK` with the record.
/// - `404 Not Found` with `{ "error": "Template not found" }` for an unknown id.
/// - `405` when no id is given.
pub async fn process(store: web::Data<TemplateStore>, query: web::Query<IdQuery>) -> HttpResponse {
    let Some(id) = query.into_inner().id else {
        return method_not_allowed().await;
    };
    info!("[Templates API] GET request id={}", id);

    match store.fetch(&id) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(StoreError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, "Template not found"),
        Err(e) => {
            error!("[Templates API] Failed to load template {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch template")
        }
    }
}
