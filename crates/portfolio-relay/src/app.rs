use anyhow::Result;
use std::sync::Arc;

use portfolio_llm_api::GroqClient;

use crate::config::RelayConfig;
use crate::web::RelayServer;

/// Run the relay against the Groq completion provider
pub async fn run_relay(config: RelayConfig) -> Result<()> {
    let client = GroqClient::builder()
        .api_key(config.api_key.clone())
        .api_url(config.api_url.clone())
        .build();

    tracing::info!(model = %client.model(), "using completion provider at {}", client.api_url());

    let server = RelayServer::new(config, Arc::new(client));
    server.start().await
}
