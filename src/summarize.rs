// src/summarize.rs
// Remote model adapter: extracted text in, structured French summary out.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::OpenAiConfig;
use crate::error::ApiError;

/// Fixed instruction sent with every request. The labeled-section
/// format is what `parse::parse_summary` expects downstream.
const SYSTEM_PROMPT: &str = "Tu es un expert en analyse d'appels à projets agricoles. Génère un résumé STRUCTURÉ en français descriptif et compréhensif pour des personnes peu instruites avec ces sections :\n\
Titre: [Nom officiel de l'opportunité]\n\
Type: [Subvention/Concours/Formation/Projet/IA]\n\
Organisateur: [Organisme porteur]\n\
Objectif: [But principal en 3 phrases]\n\
Bénéficiaires: [Public éligible et détail d'éligibilité]\n\
Date limite: [DD/MM/YYYY]\n\
Montant: [Budget ou fourchette]\n\
Durée: [Délai de réalisation]\n\
Secteur: [Domaine agricole concerné]\n\
Localisation: [Zone géographique]\n\
Avantages: [Liste à puces des points forts]\n\
Documents requis: [Liste à puces des pièces nécessaires]";

/// Only the head of the document goes to the model.
const MAX_PROMPT_CHARS: usize = 6000;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

const TEMPERATURE: f32 = 0.2;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Returns the trimmed text of the model's first choice.
    async fn summarize(&self, text: &str) -> Result<String, ApiError>;
}

/// Chat Completions client. The call blocks the request until the
/// remote service answers, bounded by the configured timeout.
pub struct OpenAiSummarizer {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(config: &OpenAiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("agri-opportunity-api/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, ApiError> {
        #[derive(Serialize)]
        struct Msg<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            model: &'a str,
            messages: Vec<Msg<'a>>,
            temperature: f32,
        }
        #[derive(Deserialize)]
        struct Resp {
            choices: Vec<Choice>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChoiceMsg,
        }
        #[derive(Deserialize)]
        struct ChoiceMsg {
            content: String,
        }

        let req = Req {
            model: &self.model,
            messages: vec![
                Msg {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Msg {
                    role: "user",
                    content: truncate_chars(text, MAX_PROMPT_CHARS),
                },
            ],
            temperature: TEMPERATURE,
        };

        let resp = self
            .http
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .map_err(|e| ApiError::Summarization(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(ApiError::Summarization(format!("statut {status}: {detail}")));
        }

        let body: Resp = resp
            .json()
            .await
            .map_err(|e| ApiError::Summarization(e.to_string()))?;

        body.choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| ApiError::Summarization("réponse sans aucun choix".to_string()))
    }
}

/// Truncate to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("éléphant", 3), "élé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 5), "");
    }
}
