// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use assistant_client::AssistantClient;
use disha_core::kernel::{AssistantAdapter, IdentityAdapter, ServerDeps};
use disha_core::{server::build_app, Config};
use identity_client::{IdentityOptions, IdentityService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,disha_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Disha API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Backend collaborators
    let assistant = Arc::new(
        AssistantClient::new(config.assistant_api_url.clone())
            .context("Failed to create assistant client")?,
    );
    let identity = Arc::new(
        IdentityService::new(IdentityOptions {
            url: config.identity_url.clone(),
            anon_key: config.identity_anon_key.clone(),
            email_redirect_to: config.email_redirect_url.clone(),
        })
        .context("Failed to create identity client")?,
    );
    tracing::info!(assistant_url = %assistant.base_url(), "Backend clients ready");

    // The identity provider also hosts the feedback table
    let identity_adapter = Arc::new(IdentityAdapter::new(identity));
    let server_deps = ServerDeps::new(
        Arc::new(AssistantAdapter::new(assistant)),
        identity_adapter.clone(),
        identity_adapter,
    );

    // Build application
    let app = build_app(server_deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
