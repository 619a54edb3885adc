use std::net::{IpAddr, SocketAddr};

use axum::http::{HeaderValue, Method};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::cli::Cli;

/// Configuration errors detected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{addr}': {source}")]
    InvalidBindAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Which origins may call the relay from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Any origin. Placeholder until the production domain is pinned.
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// Parse a comma separated origin list; empty or `*` means any origin
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = match raw.map(str::trim) {
            None | Some("") | Some("*") => return Ok(Self::Any),
            Some(raw) => raw,
        };

        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                if origin == "*" || !(origin.starts_with("http://") || origin.starts_with("https://")) {
                    return Err(ConfigError::InvalidOrigin(origin.to_string()));
                }
                HeaderValue::from_str(origin.trim_end_matches('/'))
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if origins.is_empty() {
            return Ok(Self::Any);
        }
        Ok(Self::List(origins))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// CORS layer for this origin policy
    pub fn cors_layer(&self) -> CorsLayer {
        match self {
            Self::Any => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
            Self::List(origins) => CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins.clone()))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        }
    }
}

/// Relay configuration, read once at startup
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bind_addr: SocketAddr,
    pub api_key: Option<String>,
    pub api_url: String,
    pub allowed_origins: AllowedOrigins,
    pub log_json: bool,
}

impl RelayConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let ip: IpAddr = cli.bind.trim().parse().map_err(|source| ConfigError::InvalidBindAddress {
            addr: cli.bind.clone(),
            source,
        })?;
        let bind_addr = SocketAddr::new(ip, cli.port);

        let api_key = cli
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string);

        Ok(Self {
            bind_addr,
            api_key,
            api_url: cli.api_url.clone(),
            allowed_origins: AllowedOrigins::parse(cli.allowed_origins.as_deref())?,
            log_json: cli.log_json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_origins_default_to_any() {
        assert_eq!(AllowedOrigins::parse(None).unwrap(), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(Some("")).unwrap(), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(Some(" * ")).unwrap(), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(Some(" , ")).unwrap(), AllowedOrigins::Any);
    }

    #[test]
    fn test_origin_list() {
        let origins = AllowedOrigins::parse(Some("https://a.example, https://b.example/")).unwrap();
        assert_eq!(
            origins,
            AllowedOrigins::List(vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ])
        );
        assert!(!origins.is_any());
    }

    #[test]
    fn test_invalid_origin() {
        assert!(matches!(
            AllowedOrigins::parse(Some("example.com")),
            Err(ConfigError::InvalidOrigin(_))
        ));
        assert!(matches!(
            AllowedOrigins::parse(Some("https://a.example,*")),
            Err(ConfigError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "portfolio-relay",
            "--bind",
            "127.0.0.1",
            "--port",
            "5050",
            "--api-key",
            "  ",
        ])
        .unwrap();
        let config = RelayConfig::from_cli(&cli).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:5050".parse().unwrap());
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_from_cli_ipv6_bind() {
        let cli = Cli::try_parse_from(["portfolio-relay", "--bind", "::", "--port", "5050"]).unwrap();
        let config = RelayConfig::from_cli(&cli).unwrap();
        assert_eq!(config.bind_addr, "[::]:5050".parse().unwrap());

        let cli = Cli::try_parse_from(["portfolio-relay", "--bind", "::1"]).unwrap();
        let config = RelayConfig::from_cli(&cli).unwrap();
        assert!(config.bind_addr.is_ipv6());
        assert_eq!(config.bind_addr.port(), 5000);
    }

    #[test]
    fn test_from_cli_bad_bind() {
        let cli = Cli::try_parse_from(["portfolio-relay", "--bind", "not an address"]).unwrap();
        assert!(matches!(
            RelayConfig::from_cli(&cli),
            Err(ConfigError::InvalidBindAddress { .. })
        ));
    }
}
