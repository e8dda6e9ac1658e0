pub mod render;
pub mod templates;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use common::api::ErrorBody;
use log::warn;

/// Builds a JSON `{ "error": message }` response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody::new(message))
}

pub async fn method_not_allowed() -> HttpResponse {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// JSON extractor settings shared by every API scope: a raised body limit and
/// malformed bodies answered with a 400 JSON error instead of plain text.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            warn!("Rejected JSON body on {} {}: {}", req.method(), req.path(), err);
            let response = error_response(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", err));
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

/// Registers the API scopes and their shared state on an app or test service.
pub fn configure(
    store: web::Data<templates::store::TemplateStore>,
    orchestrator: web::Data<render::orchestrator::RenderOrchestrator>,
    json_limit: usize,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(json_config(json_limit))
            .app_data(store)
            .app_data(orchestrator)
            .service(templates::configure_routes())
            .service(render::configure_routes());
    }
}
