// src/store.rs
// Persistence gateway: one insert per request into a Supabase table
// through the PostgREST endpoint.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::SupabaseConfig;
use crate::error::ApiError;
use crate::opportunity::Opportunity;

#[async_trait]
pub trait OpportunityStore: Send + Sync {
    /// Insert the record as one row. No upsert, no existence check for
    /// the generated identifier.
    async fn insert(&self, opportunity: &Opportunity) -> Result<(), ApiError>;
}

pub struct SupabaseStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(config: &SupabaseConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("agri-opportunity-api/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: config.url.clone(),
            api_key: config.key.clone(),
            table: config.table.clone(),
        })
    }

    fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl OpportunityStore for SupabaseStore {
    async fn insert(&self, opportunity: &Opportunity) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.insert_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(opportunity)
            .send()
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // PostgREST puts the real reason in the body; pass it through.
            let detail = resp.text().await.unwrap_or_default();
            if detail.is_empty() {
                return Err(ApiError::Persistence(format!(
                    "insertion refusée (statut {status})"
                )));
            }
            return Err(ApiError::Persistence(detail));
        }
        Ok(())
    }
}
