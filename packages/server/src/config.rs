use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub assistant_api_url: String,
    pub identity_url: String,
    pub identity_anon_key: String,
    pub allowed_origins: Vec<String>,
    /// Where confirmation emails send new accounts back to
    pub email_redirect_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            assistant_api_url: env::var("ASSISTANT_API_URL")
                .context("ASSISTANT_API_URL must be set")?,
            identity_url: env::var("IDENTITY_URL").context("IDENTITY_URL must be set")?,
            identity_anon_key: env::var("IDENTITY_ANON_KEY")
                .context("IDENTITY_ANON_KEY must be set")?,
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
            ),
            email_redirect_url: env::var("EMAIL_REDIRECT_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}

/// Comma separated, blanks dropped
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
