use anyhow::{Context, Result};
use tracing::warn;

const DEFAULT_PORT: u16 = 5000;

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; a missing provider credential is just logged.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default Groq credential for the generator routes.
    /// The format-check route takes its credential from the request body instead.
    pub groq_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Logs a warning when the generator routes have no credential to use.
    /// Called after the subscriber is installed so the warning is not lost.
    pub fn warn_if_incomplete(&self) {
        if self.groq_api_key.is_none() {
            warn!("GROQ_API_KEY is not set; /generate_email and /analyze_existing will return provider errors");
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .context("PORT must be a valid port number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 5000);
    }

    #[test]
    fn test_port_parses_explicit_value() {
        assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
        assert_eq!(parse_port(Some(" 3000 ")).unwrap(), 3000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = parse_port(Some("not-a-port")).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(parse_port(Some("70000")).is_err());
    }
}
