//! # Template Sharing Service
//!
//! CRUD endpoints for shared template documents, mounted under
//! `/api/templates`. All operations live on the scope root and are told apart
//! by HTTP method; the record id travels in the `?id=` query string.
//!
//! ## Sub-modules:
//! - `store`: SQLite persistence of shared documents.
//! - `get`: Fetches one shared document.
//! - `create`: Stores a new document and returns its generated id.
//! - `update`: Replaces an existing document.
//! - `delete`: Removes a document.

mod create;
mod delete;
mod get;
pub mod store;
mod update;

use crate::services::method_not_allowed;
use actix_web::web::{delete, get, post, put, resource, scope, to};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for the template routes.
///
/// # Registered Routes:
///
/// *   **`GET ?id={id}`**: returns the `SharedTemplate` record, `404` when unknown.
/// *   **`POST`**: body `{ "template_data": .. }`, answers `201` with the new record.
/// *   **`PUT ?id={id}`**: same body, answers `200` with the updated record.
/// *   **`DELETE ?id={id}`**: answers `{ "success": true }`.
///
/// Any other method, or a `GET`/`PUT`/`DELETE` without an id, gets `405`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).service(
        resource(["", "/"])
            .route(get().to(get::process))
            .route(post().to(create::process))
            .route(put().to(update::process))
            .route(delete().to(delete::process))
            .default_service(to(method_not_allowed)),
    )
}

#[cfg(test)]
mod tests {
    use super::store::TemplateStore;
    use crate::services::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::api::ErrorBody;
    use common::model::shared::{DeleteResponse, SharedTemplate};
    use serde_json::json;
    use tempfile::TempDir;

    fn store() -> (TempDir, web::Data<TemplateStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::open(dir.path().join("api.sqlite")).unwrap();
        (dir, web::Data::new(store))
    }

    fn body() -> serde_json::Value {
        json!({
            "template_data": {
                "id": "local-1",
                "name": "Promo",
                "backgroundImage": "data:image/png;base64,AAAA",
                "placeholders": [
                    {"id": "p1", "name": "Title", "type": "text", "x": 10.0, "y": 20.0, "fontSize": 24.0, "color": "#000000"}
                ],
                "iterations": [
                    {"id": "i1", "values": {"p1": "Hello"}, "duration": 2000}
                ]
            }
        })
    }

    #[actix_web::test]
    async fn share_fetch_update_and_delete() {
        let (_dir, store) = store();
        let app = test::init_service(
            App::new()
                .app_data(json_config(1024 * 1024))
                .app_data(store)
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/templates").set_json(body()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: SharedTemplate = test::read_body_json(resp).await;
        assert_eq!(created.template_data.template.name, "Promo");

        let uri = format!("/api/templates?id={}", created.id);
        let fetched: SharedTemplate =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(fetched.template_data, created.template_data);

        let mut changed = body();
        changed["template_data"]["name"] = json!("Promo v2");
        let req = test::TestRequest::put().uri(&uri).set_json(changed).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: SharedTemplate = test::read_body_json(resp).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.template_data.template.name, "Promo v2");

        let deleted: DeleteResponse =
            test::call_and_read_body_json(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert!(deleted.success);

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let err: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(err.error, "Template not found");
    }

    #[actix_web::test]
    async fn unsupported_methods_and_missing_ids_are_rejected() {
        let (_dir, store) = store();
        let app = test::init_service(
            App::new()
                .app_data(json_config(1024 * 1024))
                .app_data(store)
                .service(super::configure_routes()),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::patch().uri("/api/templates").to_request()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let err: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(err.error, "Method not allowed");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/templates").to_request()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let resp = test::call_service(&app, test::TestRequest::delete().uri("/api/templates/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn updating_an_unknown_id_fails() {
        let (_dir, store) = store();
        let app = test::init_service(
            App::new()
                .app_data(json_config(1024 * 1024))
                .app_data(store)
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/templates?id=missing")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let err: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(err.error, "Failed to update template");
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let (_dir, store) = store();
        let app = test::init_service(
            App::new()
                .app_data(json_config(1024 * 1024))
                .app_data(store)
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/templates")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"template_data\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let err: ErrorBody = test::read_body_json(resp).await;
        assert!(err.error.starts_with("Invalid request body"));
    }

    #[actix_web::test]
    async fn wrapper_key_is_snake_case() {
        let (_dir, store) = store();
        let app = test::init_service(
            App::new()
                .app_data(json_config(1024 * 1024))
                .app_data(store)
                .service(super::configure_routes()),
        )
        .await;

        let document = json!({"placeholders": [], "iterations": []});

        let req = test::TestRequest::post()
            .uri("/api/templates")
            .set_json(json!({ "templateData": document.clone() }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/templates")
            .set_json(json!({ "template_data": document }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}
