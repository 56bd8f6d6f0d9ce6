//! Server configuration read from the environment.

use std::{fmt, net::AddrParseError, net::SocketAddr};

/// Socket address used when `CLINIC_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3456";

/// Role required on every `actions` route when `CLINIC_REQUIRED_ROLE` is unset.
pub const DEFAULT_REQUIRED_ROLE: &str = "ADMIN";

/// Errors raised while reading [`GatewayConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required variable is unset.
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),

    /// A variable is set to the empty string where a value is required.
    #[error("environment variable {0} must not be empty")]
    EmptyVar(&'static str),

    /// The listen address is not a `host:port` socket address.
    #[error("invalid listen address '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    /// A flag is not one of `true`, `false`, `1`, `0`.
    #[error("environment variable {var} must be a boolean, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

/// Runtime settings for the gateway binary.
#[derive(Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// HS256 shared secret used to verify bearer tokens.
    pub jwt_secret: String,
    /// Role claim every `actions` route requires.
    pub required_role: String,
    /// Whether to seed the in-memory store with example actions.
    pub seed_examples: bool,
}

impl GatewayConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `CLINIC_JWT_SECRET` is missing or empty, or
    /// if any set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("CLINIC_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr.clone(),
                source,
            })?;

        let jwt_secret =
            lookup("CLINIC_JWT_SECRET").ok_or(ConfigError::MissingVar("CLINIC_JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::EmptyVar("CLINIC_JWT_SECRET"));
        }

        let required_role =
            lookup("CLINIC_REQUIRED_ROLE").unwrap_or_else(|| DEFAULT_REQUIRED_ROLE.to_owned());
        if required_role.is_empty() {
            return Err(ConfigError::EmptyVar("CLINIC_REQUIRED_ROLE"));
        }

        let seed_examples = match lookup("CLINIC_SEED_EXAMPLES") {
            None => false,
            Some(value) => parse_bool("CLINIC_SEED_EXAMPLES", value)?,
        };

        Ok(Self {
            listen_addr,
            jwt_secret,
            required_role,
            seed_examples,
        })
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("listen_addr", &self.listen_addr)
            .field("jwt_secret", &"<redacted>")
            .field("required_role", &self.required_role)
            .field("seed_examples", &self.seed_examples)
            .finish()
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}
