// tests/assemble_defaults.rs
// Opportunity assembly: defaults table, documents splitting, and the
// fields this flow never populates.

use agri_opportunity_api::opportunity::{split_documents, Opportunity};
use agri_opportunity_api::parse::ParsedFields;
use chrono::{NaiveDate, NaiveTime};

#[test]
fn empty_fields_get_the_literal_french_defaults() {
    let fields = ParsedFields::new();
    let opp = Opportunity::assemble(&fields, "résumé brut", "texte complet");

    assert_eq!(opp.title, "Opportunité sans titre");
    assert_eq!(opp.kind, "ia");
    assert_eq!(opp.organization, "Organisme non spécifié");
    assert_eq!(opp.eligibility_criteria, "");
    assert_eq!(opp.benefits, "");
    assert_eq!(opp.specific_data.sector, "Agriculture générale");
    assert_eq!(opp.specific_data.location, "National");
    assert_eq!(opp.specific_data.montant, "Non spécifié");
    assert_eq!(opp.specific_data.duree, "Non spécifié");
    assert_eq!(opp.status, "publié");
    assert_eq!(opp.description, "résumé brut");
    assert_eq!(opp.full_text, "texte complet");
}

#[test]
fn missing_documents_field_yields_an_empty_list() {
    let opp = Opportunity::assemble(&ParsedFields::new(), "", "");
    assert!(opp.required_documents.is_empty());
}

#[test]
fn documents_split_on_bullets_trimmed() {
    assert_eq!(
        split_documents("• Pièce d'identité • Justificatif de domicile •  Plan d'affaires "),
        vec![
            "Pièce d'identité",
            "Justificatif de domicile",
            "Plan d'affaires"
        ]
    );
    assert!(split_documents("").is_empty());
    assert!(split_documents(" • • ").is_empty());
}

#[test]
fn parsed_fields_flow_into_the_record() {
    let mut fields = ParsedFields::new();
    fields.insert("titre".into(), "Aide aux jeunes agriculteurs".into());
    fields.insert("type".into(), "Subvention".into());
    fields.insert("date limite".into(), "15/06/2024".into());
    fields.insert("documents requis".into(), "• CV • Budget prévisionnel".into());

    let opp = Opportunity::assemble(&fields, "résumé", "texte");

    assert_eq!(opp.title, "Aide aux jeunes agriculteurs");
    // Type is lower-cased on assembly.
    assert_eq!(opp.kind, "subvention");
    assert_eq!(
        opp.deadline,
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .expect("valid date")
            .and_time(NaiveTime::MIN)
    );
    assert_eq!(opp.required_documents, vec!["CV", "Budget prévisionnel"]);
}

#[test]
fn placeholder_fields_stay_unset_and_ids_are_unique() {
    let a = Opportunity::assemble(&ParsedFields::new(), "", "");
    let b = Opportunity::assemble(&ParsedFields::new(), "", "");

    assert!(a.external_link.is_none());
    assert!(a.official_document.is_none());
    assert!(a.cover_image.is_none());
    assert!(a.embedding.is_none());
    assert_eq!(a.created_at, a.updated_at);
    assert_eq!(a.created_at, a.ia_generated_at);
    assert_ne!(a.id, b.id);
}

#[test]
fn record_serializes_with_the_wire_field_names() {
    let opp = Opportunity::assemble(&ParsedFields::new(), "résumé", "texte");
    let json = serde_json::to_value(&opp).expect("serialize");

    assert_eq!(json["type"], "ia");
    assert_eq!(json["status"], "publié");
    assert!(json["deadline"].as_str().expect("iso deadline").contains('T'));
    assert!(json["external_link"].is_null());
}
