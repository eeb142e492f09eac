use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Actor that scrapes comments of Instagram posts.
pub const DEFAULT_INSTAGRAM_ACTOR_ID: &str = "499mNnuVGkU2S5rh1";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub apify_token: String,
    pub apify_base_url: String,
    pub instagram_actor_id: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            apify_token: env::var("APIFY_TOKEN").context("APIFY_TOKEN must be set")?,
            apify_base_url: env::var("APIFY_BASE_URL")
                .unwrap_or_else(|_| apify_client::DEFAULT_BASE_URL.to_string()),
            instagram_actor_id: env::var("INSTAGRAM_ACTOR_ID")
                .unwrap_or_else(|_| DEFAULT_INSTAGRAM_ACTOR_ID.to_string()),
        })
    }
}
