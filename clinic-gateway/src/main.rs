//! Entry point for the `clinic-gateway` HTTP server.

use std::sync::Arc;

use clinic_core::examples::example_actions;
use clinic_gateway::{
    auth::{JwtVerifier, RoleGate},
    config::GatewayConfig,
    error::GatewayError,
    routes::create_router,
    store::ActionStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "clinic-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GatewayError> {
    let config = GatewayConfig::from_env()?;

    let store = if config.seed_examples {
        ActionStore::with_actions(example_actions())
    } else {
        ActionStore::new()
    };
    let gate = RoleGate::new(
        Arc::new(JwtVerifier::hs256(config.jwt_secret.as_bytes())),
        config.required_role.as_str(),
    );
    let app = create_router(Arc::new(store), gate);

    let addr = config.listen_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| GatewayError::Bind { addr, source })?;

    info!(
        %addr,
        role = %config.required_role,
        seeded = config.seed_examples,
        "clinic-gateway listening"
    );

    axum::serve(listener, app).await.map_err(GatewayError::Serve)
}
