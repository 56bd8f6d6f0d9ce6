//! Error types for the gateway crate.

use std::{io, net::SocketAddr};

use axum::response::{IntoResponse, Response};
use clinic_core::ServiceCode;

use crate::{config::ConfigError, response::Responder};

const AUTH: Responder = Responder::new(ServiceCode::AUTH);

/// Reasons the auth gate rejects a request before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was sent.
    #[error("missing bearer token")]
    MissingToken,

    /// The token failed signature, expiry or format checks.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The token is valid but does not carry the required role.
    #[error("missing required role '{0}'")]
    MissingRole(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request rejected by auth gate");
        match self {
            AuthError::MissingToken => {
                AUTH.unauthorized("Unauthorized: missing bearer token", "01")
            }
            AuthError::InvalidToken(_) => AUTH.unauthorized("Unauthorized: invalid token", "02"),
            AuthError::MissingRole(_) => AUTH.forbidden("Forbidden: insufficient role", "01"),
        }
    }
}

/// Fatal errors raised while starting the server.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The environment did not yield a usable configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The listen socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
