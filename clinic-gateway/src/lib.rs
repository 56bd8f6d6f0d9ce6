//! HTTP gateway for the clinic administrative backend.
//!
//! Serves the `actions` resource behind a role-checking bearer-token gate and
//! answers every request with the uniform response envelope.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod actions;
pub mod auth;
pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod store;
