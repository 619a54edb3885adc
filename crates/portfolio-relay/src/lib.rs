//! Chat relay for the portfolio site
//!
//! A stateless HTTP server: `POST /api/chat` forwards the browser's
//! transcript to the completion provider and returns the reply text,
//! `GET /` reports health.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod web;

pub use app::run_relay;
pub use cli::Cli;
pub use config::{AllowedOrigins, ConfigError, RelayConfig};
pub use web::{AppError, AppState, RelayServer};
