use clap::Parser;

use portfolio_llm_api::GROQ_API_URL;

/// CLI arguments for the portfolio chat relay
///
/// Every option can also come from the environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio-relay")]
#[command(about = "Relays portfolio chat transcripts to the completion provider")]
#[command(version)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: String,

    /// API key for the completion provider
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Completion endpoint; a bare base URL gets /v1/chat/completions appended
    #[arg(long, env = "GROQ_API_URL", default_value = GROQ_API_URL)]
    pub api_url: String,

    /// Comma separated list of allowed CORS origins (default: any origin)
    #[arg(long, env = "ALLOWED_ORIGINS", value_name = "ORIGINS")]
    pub allowed_origins: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", value_parser = clap::builder::FalseyValueParser::new())]
    pub log_json: bool,
}
