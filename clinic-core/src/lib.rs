//! Core types for the clinic administrative backend.
//!
//! Defines the `actions` resource model, the usecase contract the HTTP layer
//! consumes, request validation, and the uniform response envelope.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod action;
pub mod envelope;
pub mod error;
pub mod examples;
pub mod id;
pub mod usecase;
pub mod validation;

pub use action::{Action, CreateActionRequest, UpdateActionRequest};
pub use envelope::{
    JsonBadRequestResponse, JsonErrorResponse, JsonResponse, ResponseCode, ServiceCode,
};
pub use error::UsecaseError;
pub use id::ActionId;
pub use usecase::ActionUsecase;
pub use validation::{Validate, ValidationField};
