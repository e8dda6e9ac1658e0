//! # Render Service
//!
//! `POST /api/render` composites the overlays of a render request over the
//! template video with an external provider, then republishes the result to
//! object storage.
//!
//! ## Sub-modules:
//! - `orchestrator`: submit, poll and republish workflow.
//! - `providers`: Shotstack and Creatomate clients.
//! - `storage`: object storage upload.
//! - `error`: failure kinds and their JSON bodies.

pub mod error;
pub mod orchestrator;
pub mod providers;
pub mod storage;

use crate::services::method_not_allowed;
use actix_web::web::{post, resource, scope, to, Data, Json};
use actix_web::{HttpResponse, Scope};
use common::model::render::RenderRequest;
use log::error;
use orchestrator::RenderOrchestrator;

const API_PATH: &str = "/api/render";

pub fn configure_routes() -> Scope {
    scope(API_PATH).service(
        resource(["", "/"])
            .route(post().to(process))
            .default_service(to(method_not_allowed)),
    )
}

/// # Returns
/// - `200 OK` with a `RenderResponse` once the video is published.
/// - `500` with an error body otherwise; a missing provider configuration
///   adds `message` and `documentation` to it.
pub async fn process(orchestrator: Data<RenderOrchestrator>, payload: Json<RenderRequest>) -> HttpResponse {
    match orchestrator.render(&payload).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("[Render] {}", e);
            HttpResponse::InternalServerError().json(e.body())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::services::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::api::ErrorBody;
    use serde_json::json;
    use std::time::Duration;

    #[actix_web::test]
    async fn unconfigured_provider_is_reported_with_documentation() {
        let orchestrator = RenderOrchestrator::new(&RenderConfig {
            provider: None,
            poll_interval: Duration::ZERO,
            max_poll_attempts: 1,
            storage: None,
        });
        let app = test::init_service(
            App::new()
                .app_data(json_config(1024 * 1024))
                .app_data(Data::new(orchestrator))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/render")
            .set_json(json!({
                "templateUrl": "https://cdn.example.com/promo.mp4",
                "placeholders": []
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "Video processing API not configured");
        assert_eq!(
            body.message.as_deref(),
            Some("Please configure SHOTSTACK_API_KEY or CREATOMATE_API_KEY secret")
        );
        let docs = body.documentation.unwrap();
        assert_eq!(docs["shotstack"], "https://shotstack.io/docs");
        assert_eq!(docs["creatomate"], "https://creatomate.com/docs");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/render").to_request()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
