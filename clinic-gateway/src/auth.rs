//! Bearer-token auth gate requiring a role claim.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Claims carried by an accepted token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id).
    pub sub: String,
    /// Roles granted to the subject.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Check if the token grants `role`.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Turns a raw bearer token into verified claims.
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and return its claims.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidToken`] if the token is malformed, badly
    /// signed or expired.
    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// HS256 JWT verifier with a shared secret.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Create a verifier for tokens signed with `secret`.
    #[must_use]
    pub fn hs256(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// State for [`require_role`]: who verifies tokens and which role to demand.
#[derive(Clone)]
pub struct RoleGate {
    verifier: Arc<dyn TokenVerifier>,
    role: Arc<str>,
}

impl RoleGate {
    /// Gate requests on `role`, verifying tokens with `verifier`.
    pub fn new(verifier: Arc<dyn TokenVerifier>, role: impl Into<Arc<str>>) -> Self {
        Self {
            verifier,
            role: role.into(),
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// # Errors
/// Returns [`AuthError::MissingToken`] if the header is absent, not UTF-8,
/// uses another scheme, or carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// Middleware rejecting requests without a valid token bearing the gate's
/// role. Accepted claims are inserted into the request extensions.
///
/// # Errors
/// Returns [`AuthError`], rendered as a 401 or 403 envelope.
pub async fn require_role(
    State(gate): State<RoleGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = gate.verifier.verify(bearer_token(request.headers())?)?;
    if !claims.has_role(&gate.role) {
        return Err(AuthError::MissingRole(gate.role.to_string()));
    }
    tracing::debug!(sub = %claims.sub, role = %gate.role, "request authorized");
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
