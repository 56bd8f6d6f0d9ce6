//! The uniform JSON envelope returned by every endpoint.
//!
//! Every body carries a composite response code built from the HTTP status
//! digits, the code of the service that produced it, and a per-case suffix,
//! so clients can branch on one string without inspecting the status line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationField;

/// Fixed code identifying the business service behind a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceCode(&'static str);

impl ServiceCode {
    /// Router-level outcomes: health probe and unknown routes.
    pub const GATEWAY: Self = Self("00");
    /// Authentication and role checks.
    pub const AUTH: Self = Self("01");
    /// The `actions` resource.
    pub const ACTIONS: Self = Self("02");

    /// Returns the raw code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite response code: `<status><service><case>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseCode(String);

impl ResponseCode {
    /// Concatenates the status digits, service code and case suffix, in that
    /// order. No padding or validation is applied to any part.
    #[must_use]
    pub fn compose(status: u16, service: ServiceCode, case: &str) -> Self {
        Self(format!("{status}{service}{case}"))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Success, created, unauthorized, forbidden and not-found shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct JsonResponse<T> {
    /// Composite code, serialized as `responseCode`.
    #[serde(rename = "responseCode")]
    pub code: ResponseCode,
    /// Human-readable outcome, serialized as `responseMessage`.
    #[serde(rename = "responseMessage")]
    pub message: String,
    /// Payload; omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Pagination metadata slot. No endpoint fills it yet, so it is always
    /// omitted on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<serde_json::Value>,
}

impl<T> JsonResponse<T> {
    /// Builds an envelope with optional data and no paging.
    pub fn new(code: ResponseCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
            paging: None,
        }
    }
}

/// Internal-error shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct JsonErrorResponse {
    /// Composite code, serialized as `responseCode`.
    #[serde(rename = "responseCode")]
    pub code: ResponseCode,
    /// Always [`JsonErrorResponse::MESSAGE`].
    #[serde(rename = "responseMessage")]
    pub message: String,
    /// Raw error text; omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JsonErrorResponse {
    /// Message sent for every internal error, whatever the cause.
    pub const MESSAGE: &'static str = "internal server error";

    /// Builds the envelope, echoing `error` unless it is empty.
    pub fn new(code: ResponseCode, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            code,
            message: Self::MESSAGE.to_owned(),
            error: (!error.is_empty()).then_some(error),
        }
    }
}

/// Bad-request shape with field-level failure descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct JsonBadRequestResponse {
    /// Composite code, serialized as `responseCode`.
    #[serde(rename = "responseCode")]
    pub code: ResponseCode,
    /// Human-readable outcome, serialized as `responseMessage`.
    #[serde(rename = "responseMessage")]
    pub message: String,
    /// One entry per failed field; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_description: Vec<ValidationField>,
}

impl JsonBadRequestResponse {
    /// Builds the envelope; an empty field list is omitted from the body.
    pub fn new(
        code: ResponseCode,
        message: impl Into<String>,
        error_description: Vec<ValidationField>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            error_description,
        }
    }
}
