//! Handlers for the `actions` resource.
//!
//! Each handler applies exactly one outcome per request: it calls the
//! usecase once and hands the result to the [`Responder`]. Missing records
//! answer `403 Forbidden` with "Action not found", matching what deployed
//! clients already branch on.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Response,
    routing::{delete, get, put},
    Router,
};
use clinic_core::{
    ActionUsecase, CreateActionRequest, ServiceCode, UpdateActionRequest, UsecaseError, Validate,
    ValidationField,
};
use serde::de::DeserializeOwned;

use crate::response::Responder;

type Usecase = Arc<dyn ActionUsecase>;

const ACTIONS: Responder = Responder::new(ServiceCode::ACTIONS);

const NOT_FOUND: &str = "Action not found";
const BAD_REQUEST: &str = "Bad request";

/// Routes for the resource, relative to the API version prefix.
pub fn router(usecase: Usecase) -> Router {
    Router::new()
        .route("/actions", get(get_all).post(create))
        .route("/actions/{id}", get(get_by_id).put(update).delete(delete_action))
        .route("/actions/{id}/trash", delete(soft_delete))
        .route("/actions/{id}/restore", put(restore))
        .with_state(usecase)
}

fn duplicate_name() -> Vec<ValidationField> {
    vec![ValidationField::new("name", "Name is already registered")]
}

/// Decodes a JSON body whatever `Content-Type` the client sent.
fn bind<T: DeserializeOwned>(body: &Bytes) -> Result<T, Response> {
    serde_json::from_slice(body)
        .map_err(|e| ACTIONS.error(&e.to_string(), "01"))
}

/// `GET /actions`. An empty listing is reported as forbidden, not as `[]`.
pub async fn get_all(State(usecase): State<Usecase>) -> Response {
    match usecase.get_all().await {
        Err(e) => ACTIONS.error(&e.to_string(), "01"),
        Ok(actions) if actions.is_empty() => ACTIONS.forbidden("Actions not found", "02"),
        Ok(actions) => ACTIONS.success(actions, "actions successfully retrieved", "01"),
    }
}

/// `GET /actions/{id}`.
pub async fn get_by_id(State(usecase): State<Usecase>, Path(id): Path<String>) -> Response {
    match usecase.get_by_id(&id).await {
        Ok(action) => ACTIONS.success(action, "action successfully retrieved", "01"),
        Err(UsecaseError::NotFound) => ACTIONS.forbidden(NOT_FOUND, "01"),
        Err(e) => ACTIONS.error(&e.to_string(), "02"),
    }
}

/// `POST /actions`: bind, validate, then create.
///
/// A body that cannot be bound is an internal error (`01`), not a bad request.
pub async fn create(State(usecase): State<Usecase>, body: Bytes) -> Response {
    let request: CreateActionRequest = match bind(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let failures = request.validate();
    if !failures.is_empty() {
        return ACTIONS.bad_request(failures, BAD_REQUEST, "02");
    }

    match usecase.create(request).await {
        Ok(action) => ACTIONS.created(action, "Action created successfully", "01"),
        Err(UsecaseError::DuplicateName) => {
            ACTIONS.bad_request(duplicate_name(), BAD_REQUEST, "03")
        }
        Err(e) => ACTIONS.error(&e.to_string(), "04"),
    }
}

/// `PUT /actions/{id}`: bind, inject the path id, then update.
pub async fn update(
    State(usecase): State<Usecase>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let mut request: UpdateActionRequest = match bind(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    request.id = id;

    match usecase.update(request).await {
        Ok(action) => ACTIONS.success(action, "Action updated successfully", "01"),
        Err(UsecaseError::NotFound) => ACTIONS.forbidden(NOT_FOUND, "02"),
        Err(UsecaseError::DuplicateName) => {
            ACTIONS.bad_request(duplicate_name(), BAD_REQUEST, "03")
        }
        Err(e) => ACTIONS.error(&e.to_string(), "04"),
    }
}

/// `DELETE /actions/{id}`: permanent removal.
pub async fn delete_action(State(usecase): State<Usecase>, Path(id): Path<String>) -> Response {
    removal_outcome(usecase.delete(&id).await, "Action deleted successfully")
}

/// `DELETE /actions/{id}/trash`: move to the trash.
pub async fn soft_delete(State(usecase): State<Usecase>, Path(id): Path<String>) -> Response {
    removal_outcome(usecase.soft_delete(&id).await, "Action deleted successfully")
}

/// `PUT /actions/{id}/restore`: bring back from the trash.
pub async fn restore(State(usecase): State<Usecase>, Path(id): Path<String>) -> Response {
    removal_outcome(usecase.restore(&id).await, "Action restored successfully")
}

fn removal_outcome(result: Result<(), UsecaseError>, message: &str) -> Response {
    match result {
        Ok(()) => ACTIONS.success_empty(message, "01"),
        Err(UsecaseError::NotFound) => ACTIONS.forbidden(NOT_FOUND, "01"),
        Err(e) => ACTIONS.error(&e.to_string(), "02"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use clinic_core::Action;
    use tower::ServiceExt;

    use crate::store::ActionStore;

    /// Usecase whose every call fails with the same error.
    struct Failing(UsecaseError);

    #[async_trait]
    impl ActionUsecase for Failing {
        async fn get_all(&self) -> Result<Vec<Action>, UsecaseError> {
            Err(self.0.clone())
        }
        async fn get_by_id(&self, _id: &str) -> Result<Action, UsecaseError> {
            Err(self.0.clone())
        }
        async fn create(&self, _request: CreateActionRequest) -> Result<Action, UsecaseError> {
            Err(self.0.clone())
        }
        async fn update(&self, _request: UpdateActionRequest) -> Result<Action, UsecaseError> {
            Err(self.0.clone())
        }
        async fn delete(&self, _id: &str) -> Result<(), UsecaseError> {
            Err(self.0.clone())
        }
        async fn soft_delete(&self, _id: &str) -> Result<(), UsecaseError> {
            Err(self.0.clone())
        }
        async fn restore(&self, _id: &str) -> Result<(), UsecaseError> {
            Err(self.0.clone())
        }
    }

    async fn call(
        usecase: Usecase,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(b.to_owned())),
            None => builder.body(Body::empty()),
        };
        let req = match req {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match router(usecase).oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        match serde_json::from_slice(&bytes) {
            Ok(v) => (status, v),
            Err(e) => panic!("invalid JSON: {e}"),
        }
    }

    fn failing(err: UsecaseError) -> Usecase {
        Arc::new(Failing(err))
    }

    #[tokio::test]
    async fn get_all_empty_is_forbidden_not_success() {
        let (status, body) =
            call(Arc::new(ActionStore::new()), Method::GET, "/actions", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["responseCode"], "4030202");
        assert_eq!(body["responseMessage"], "Actions not found");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn get_all_internal_error_is_500() {
        let (status, body) =
            call(failing(UsecaseError::internal("db down")), Method::GET, "/actions", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["responseCode"], "5000201");
        assert_eq!(body["responseMessage"], "internal server error");
        assert_eq!(body["error"], "db down");
    }

    #[tokio::test]
    async fn not_found_maps_to_forbidden_on_every_id_route() {
        let routes = [
            (Method::GET, "/actions/abc", None, "4030201"),
            (Method::PUT, "/actions/abc", Some(r#"{"name":"X"}"#), "4030202"),
            (Method::DELETE, "/actions/abc", None, "4030201"),
            (Method::DELETE, "/actions/abc/trash", None, "4030201"),
            (Method::PUT, "/actions/abc/restore", None, "4030201"),
        ];
        for (method, uri, body, code) in routes {
            let (status, json) =
                call(failing(UsecaseError::NotFound), method.clone(), uri, body).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
            assert_eq!(json["responseCode"], code, "{method} {uri}");
            assert_eq!(json["responseMessage"], "Action not found", "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn internal_errors_on_id_routes_use_their_case_codes() {
        let routes = [
            (Method::GET, "/actions/abc", None, "5000202"),
            (Method::PUT, "/actions/abc", Some(r#"{"name":"X"}"#), "5000204"),
            (Method::DELETE, "/actions/abc", None, "5000202"),
            (Method::DELETE, "/actions/abc/trash", None, "5000202"),
            (Method::PUT, "/actions/abc/restore", None, "5000202"),
        ];
        for (method, uri, body, code) in routes {
            let (status, json) =
                call(failing(UsecaseError::internal("boom")), method.clone(), uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
            assert_eq!(json["responseCode"], code, "{method} {uri}");
            assert_eq!(json["error"], "boom");
        }
    }

    #[tokio::test]
    async fn create_duplicate_yields_single_name_field() {
        let (status, body) = call(
            failing(UsecaseError::DuplicateName),
            Method::POST,
            "/actions",
            Some(r#"{"name":"Triage"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["responseCode"], "4000203");
        assert_eq!(
            body["error_description"],
            serde_json::json!([{"field": "name", "message": "Name is already registered"}])
        );
    }

    #[tokio::test]
    async fn update_duplicate_yields_single_name_field() {
        let (status, body) = call(
            failing(UsecaseError::DuplicateName),
            Method::PUT,
            "/actions/abc",
            Some(r#"{"name":"Triage"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["responseCode"], "4000203");
        assert_eq!(body["error_description"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["error_description"][0]["field"], "name");
    }

    #[tokio::test]
    async fn create_validation_failure_skips_usecase() {
        // The failing usecase would answer 500 if it were reached.
        let (status, body) = call(
            failing(UsecaseError::internal("must not be called")),
            Method::POST,
            "/actions",
            Some(r#"{"name":""}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["responseCode"], "4000202");
        assert_eq!(body["responseMessage"], "Bad request");
        assert_eq!(body["error_description"][0]["message"], "Name is required");
    }

    #[tokio::test]
    async fn malformed_body_is_internal_error() {
        let (status, body) =
            call(Arc::new(ActionStore::new()), Method::POST, "/actions", Some("{not json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["responseCode"], "5000201");
        assert_eq!(body["responseMessage"], "internal server error");
        assert!(body["error"].is_string(), "raw bind error must be echoed");

        let (status, body) =
            call(Arc::new(ActionStore::new()), Method::PUT, "/actions/abc", Some("[1,2]")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["responseCode"], "5000201");
    }

    #[tokio::test]
    async fn update_injects_path_id() {
        let store = Arc::new(ActionStore::new());
        let created = match store.create(CreateActionRequest::new("Triage")).await {
            Ok(a) => a,
            Err(e) => panic!("seed failed: {e}"),
        };
        let uri = format!("/actions/{}", created.id);
        let (status, body) = call(store, Method::PUT, &uri, Some(r#"{"name":"Intake"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["responseCode"], "2000201");
        assert_eq!(body["responseMessage"], "Action updated successfully");
        assert_eq!(body["data"]["id"], created.id.to_string());
        assert_eq!(body["data"]["name"], "Intake");
    }

    #[tokio::test]
    async fn create_success_uses_created_envelope() {
        let (status, body) = call(
            Arc::new(ActionStore::new()),
            Method::POST,
            "/actions",
            Some(r#"{"name":"Triage"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["responseCode"], "2010201");
        assert_eq!(body["responseMessage"], "Action created successfully");
        assert_eq!(body["data"]["name"], "Triage");
    }

    #[tokio::test]
    async fn body_without_content_type_is_still_bound() {
        let req = match Request::builder()
            .method(Method::POST)
            .uri("/actions")
            .body(Body::from(r#"{"name":"Triage"}"#))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match router(Arc::new(ActionStore::new())).oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn empty_body_is_internal_error() {
        let (status, body) =
            call(Arc::new(ActionStore::new()), Method::POST, "/actions", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["responseCode"], "5000201");
    }
}
