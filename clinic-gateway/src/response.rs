//! Response encoder: turns an outcome category into the uniform envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clinic_core::{
    JsonBadRequestResponse, JsonErrorResponse, JsonResponse, ResponseCode, ServiceCode,
    ValidationField,
};
use serde::Serialize;

/// Encodes responses on behalf of one service.
///
/// Every method is a pure formatter over its arguments; only [`Responder::error`]
/// has a side effect (an error-level log entry with the raw error text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responder {
    service: ServiceCode,
}

impl Responder {
    /// Create an encoder stamping `service` into every response code.
    #[must_use]
    pub const fn new(service: ServiceCode) -> Self {
        Self { service }
    }

    /// `200 OK` carrying `data`.
    pub fn success<T: Serialize>(&self, data: T, message: &str, case: &str) -> Response {
        self.envelope(StatusCode::OK, Some(data), message, case)
    }

    /// `200 OK` without a `data` field.
    #[must_use]
    pub fn success_empty(&self, message: &str, case: &str) -> Response {
        self.envelope::<()>(StatusCode::OK, None, message, case)
    }

    /// `201 Created` carrying the created `data`.
    pub fn created<T: Serialize>(&self, data: T, message: &str, case: &str) -> Response {
        self.envelope(StatusCode::CREATED, Some(data), message, case)
    }

    /// `500 Internal Server Error`. The message is always
    /// `"internal server error"`; `err` is logged and echoed in `error`.
    #[must_use]
    pub fn error(&self, err: &str, case: &str) -> Response {
        let code = self.code(StatusCode::INTERNAL_SERVER_ERROR, case);
        tracing::error!(service = %self.service, code = %code, error = %err, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(JsonErrorResponse::new(code, err))).into_response()
    }

    /// `400 Bad Request` with one description per failed field.
    #[must_use]
    pub fn bad_request(&self, fields: Vec<ValidationField>, message: &str, case: &str) -> Response {
        let code = self.code(StatusCode::BAD_REQUEST, case);
        (StatusCode::BAD_REQUEST, Json(JsonBadRequestResponse::new(code, message, fields)))
            .into_response()
    }

    /// `401 Unauthorized`.
    #[must_use]
    pub fn unauthorized(&self, message: &str, case: &str) -> Response {
        self.envelope::<()>(StatusCode::UNAUTHORIZED, None, message, case)
    }

    /// `403 Forbidden`.
    #[must_use]
    pub fn forbidden(&self, message: &str, case: &str) -> Response {
        self.envelope::<()>(StatusCode::FORBIDDEN, None, message, case)
    }

    /// `404 Not Found`.
    #[must_use]
    pub fn not_found(&self, message: &str, case: &str) -> Response {
        self.envelope::<()>(StatusCode::NOT_FOUND, None, message, case)
    }

    fn code(&self, status: StatusCode, case: &str) -> ResponseCode {
        ResponseCode::compose(status.as_u16(), self.service, case)
    }

    fn envelope<T: Serialize>(
        &self,
        status: StatusCode,
        data: Option<T>,
        message: &str,
        case: &str,
    ) -> Response {
        let body = JsonResponse::new(self.code(status, case), message, data);
        (status, Json(body)).into_response()
    }
}
