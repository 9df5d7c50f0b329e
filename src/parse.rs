// src/parse.rs
// Turns the model's free-text summary into a field map.
//
// Two passes: a line tokenizer that tags every line as either a fresh
// `key: value` field or a continuation of the previous one, then a fold
// that accumulates the map. Keeping them separate makes the synonym
// canonicalization and the continuation rules testable on their own.

use std::collections::HashMap;

/// Field name → accumulated value. Keys are lower-case; unknown keys
/// pass through unmodified (no whitelist).
pub type ParsedFields = HashMap<String, String>;

/// Synonym table: any key *containing* an alias is replaced by the
/// canonical name. Kept as an ordered slice, not a map: entries are
/// tried top to bottom and the first hit wins.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("type", &["type", "catégorie"]),
    ("organisateur", &["organisateur", "porteur"]),
    ("date limite", &["date limite", "échéance"]),
    ("durée", &["durée", "délai"]),
    ("localisation", &["localisation", "zone"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent<'a> {
    /// A `key: value` line; the key is already canonicalized.
    Field { key: String, value: &'a str },
    /// A non-empty line without a colon, trimmed.
    Continuation(&'a str),
}

/// Canonicalize a raw key part: trim, lower-case, then map through the
/// synonym table by substring match.
pub fn canonical_key(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    for (canonical, aliases) in SYNONYMS {
        if aliases.iter().any(|alias| key.contains(alias)) {
            return (*canonical).to_string();
        }
    }
    key
}

/// Tag each line of the summary. Blank lines produce no event.
pub fn tokenize(summary: &str) -> impl Iterator<Item = LineEvent<'_>> {
    summary.split('\n').filter_map(|line| {
        if let Some((key_part, value_part)) = line.split_once(':') {
            Some(LineEvent::Field {
                key: canonical_key(key_part),
                value: value_part.trim(),
            })
        } else {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then_some(LineEvent::Continuation(trimmed))
        }
    })
}

/// Fold the tagged lines into a map. A fresh field line always resets
/// the current key (a repeated header overwrites, never accumulates);
/// continuations append to the current key's value with a single space.
/// Continuations before any field line are dropped.
pub fn parse_summary(summary: &str) -> ParsedFields {
    let mut fields = ParsedFields::new();
    let mut current_key: Option<String> = None;

    for event in tokenize(summary) {
        match event {
            LineEvent::Field { key, value } => {
                fields.insert(key.clone(), value.to_string());
                current_key = Some(key);
            }
            LineEvent::Continuation(text) => {
                if let Some(key) = current_key.as_deref() {
                    if let Some(value) = fields.get_mut(key) {
                        value.push(' ');
                        value.push_str(text);
                    }
                }
            }
        }
    }
    fields
}
