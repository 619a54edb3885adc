use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use portfolio_llm_api::CompletionClient;

use crate::config::RelayConfig;
use crate::web::routes::{create_router, AppState};

/// Router with CORS and request tracing applied
pub fn build_app(state: AppState, cors: CorsLayer) -> Router {
    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Relay server instance
pub struct RelayServer {
    config: RelayConfig,
    client: Arc<dyn CompletionClient>,
}

impl RelayServer {
    /// Create a new relay server
    pub fn new(config: RelayConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self { config, client }
    }

    pub fn router(&self) -> Router {
        build_app(
            AppState::new(self.client.clone()),
            self.config.allowed_origins.cors_layer(),
        )
    }

    /// Start the relay and serve until Ctrl-C
    pub async fn start(self) -> Result<()> {
        if self.config.allowed_origins.is_any() {
            tracing::warn!("CORS accepts any origin; set ALLOWED_ORIGINS to restrict it");
        }
        if self.config.api_key.is_none() {
            tracing::warn!("GROQ_API_KEY is not set; chat requests will fail upstream");
        }

        let app = self.router();
        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            api_url = %self.config.api_url,
            "Groq chatbot backend listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("relay stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
