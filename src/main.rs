//! Agricultural opportunity ingestion service — binary entrypoint.
//! Boots the Axum HTTP server, wiring the OpenAI summarizer and the
//! Supabase store into the upload route.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use agri_opportunity_api::api::{self, AppState};
use agri_opportunity_api::config::ServiceConfig;
use agri_opportunity_api::store::SupabaseStore;
use agri_opportunity_api::summarize::OpenAiSummarizer;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("agri_opportunity_api=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when the variables come from the
    // real environment.
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = ServiceConfig::from_env()?;

    let state = AppState {
        summarizer: Arc::new(OpenAiSummarizer::new(&config.openai)?),
        store: Arc::new(SupabaseStore::new(&config.supabase)?),
    };
    let router = api::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router).await?;
    Ok(())
}
