// src/opportunity.rs
// The persisted record and its assembly from parsed summary fields.

use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deadline;
use crate::parse::ParsedFields;

/// Literal defaults for optional summary fields, consulted uniformly by
/// the assembler. Fields absent from this table default to empty.
static FIELD_DEFAULTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("titre", "Opportunité sans titre"),
        ("type", "ia"),
        ("organisateur", "Organisme non spécifié"),
        ("secteur", "Agriculture générale"),
        ("localisation", "National"),
        ("montant", "Non spécifié"),
        ("durée", "Non spécifié"),
    ])
});

fn field_or_default(fields: &ParsedFields, key: &str) -> String {
    if let Some(value) = fields.get(key) {
        return value.clone();
    }
    FIELD_DEFAULTS
        .get(key)
        .map(|default| (*default).to_string())
        .unwrap_or_default()
}

/// Split a bullet list ("• pièce A • pièce B") into entries. An absent
/// or empty field yields an empty list, never `[""]`.
pub fn split_documents(raw: &str) -> Vec<String> {
    raw.split('•')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificData {
    pub sector: String,
    pub location: String,
    pub montant: String,
    pub duree: String,
}

/// One funding/training/contest listing, as stored. Built once per
/// request and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub organization: String,
    /// The raw summary, verbatim.
    pub description: String,
    pub eligibility_criteria: String,
    pub benefits: String,
    pub required_documents: Vec<String>,
    pub deadline: NaiveDateTime,
    pub external_link: Option<String>,
    pub official_document: Option<String>,
    pub cover_image: Option<String>,
    pub status: String,
    pub specific_data: SpecificData,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub embedding: Option<Vec<f32>>,
    /// Full text extracted from the PDF.
    pub full_text: String,
    pub ia_generated_at: NaiveDateTime,
}

impl Opportunity {
    /// Assemble the record from parsed fields plus the raw summary and
    /// the extracted full text. Infallible: every missing field gets a
    /// default, the deadline normalizer never errors.
    pub fn assemble(fields: &ParsedFields, raw_summary: &str, full_text: &str) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            title: field_or_default(fields, "titre"),
            kind: field_or_default(fields, "type").to_lowercase(),
            organization: field_or_default(fields, "organisateur"),
            description: raw_summary.to_string(),
            eligibility_criteria: field_or_default(fields, "bénéficiaires"),
            benefits: field_or_default(fields, "avantages"),
            required_documents: split_documents(&field_or_default(fields, "documents requis")),
            deadline: deadline::normalize(&field_or_default(fields, "date limite")),
            external_link: None,
            official_document: None,
            cover_image: None,
            status: "publié".to_string(),
            specific_data: SpecificData {
                sector: field_or_default(fields, "secteur"),
                location: field_or_default(fields, "localisation"),
                montant: field_or_default(fields, "montant"),
                duree: field_or_default(fields, "durée"),
            },
            created_at: now,
            updated_at: now,
            embedding: None,
            full_text: full_text.to_string(),
            ia_generated_at: now,
        }
    }
}
