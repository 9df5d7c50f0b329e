// src/config.rs
use std::env;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    /// Overall bound on one chat-completions call, in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, without trailing slash.
    pub url: String,
    pub key: String,
    pub table: String,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub openai: OpenAiConfig,
    pub supabase: SupabaseConfig,
}

impl ServiceConfig {
    /// Read the full configuration from environment variables
    /// (`dotenvy` has already loaded `.env` in local/dev).
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(v) => v.parse().context("PORT must be a number")?,
            Err(_) => 8000,
        };

        let openai = OpenAiConfig {
            api_key: env::var("OPENAI_API_KEY").context("Missing OPENAI_API_KEY env var")?,
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo-1106".to_string()),
            timeout_secs: match env::var("OPENAI_TIMEOUT_SECS") {
                Ok(v) => v.parse().context("OPENAI_TIMEOUT_SECS must be a number")?,
                Err(_) => 60,
            },
        };

        let supabase = SupabaseConfig {
            url: env::var("SUPABASE_URL")
                .context("Missing SUPABASE_URL env var")?
                .trim_end_matches('/')
                .to_string(),
            key: env::var("SUPABASE_KEY").context("Missing SUPABASE_KEY env var")?,
            table: env::var("SUPABASE_TABLE").unwrap_or_else(|_| "opportunities".to_string()),
        };

        Ok(Self {
            host,
            port,
            openai,
            supabase,
        })
    }
}
