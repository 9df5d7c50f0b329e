// src/api.rs
// Router and the single upload endpoint. The pipeline is linear:
// Extract → Summarize → Parse → Assemble (deadline included) → Persist.
// Any stage error short-circuits and is mapped to a 500 JSON response
// by `ApiError::into_response`.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::error::ApiError;
use crate::opportunity::Opportunity;
use crate::store::OpportunityStore;
use crate::summarize::Summarizer;
use crate::{extract, parse};

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
    pub store: Arc<dyn OpportunityStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/upload-opportunity", post(upload_opportunity))
        .layer(cors_layer())
        .with_state(state)
}

/// The frontend runs on these origins in development.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:8080"),
        ]))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub message: String,
    pub data: Opportunity,
}

async fn upload_opportunity(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let pdf_bytes = read_upload(multipart).await?;

    let full_text = extract::text_from_pdf_bytes(&pdf_bytes)?;
    info!(chars = full_text.len(), "texte extrait du PDF");

    let raw_summary = state.summarizer.summarize(&full_text).await?;
    let fields = parse::parse_summary(&raw_summary);

    let opportunity = Opportunity::assemble(&fields, &raw_summary, &full_text);
    state.store.insert(&opportunity).await?;
    info!(id = %opportunity.id, title = %opportunity.title, "opportunité enregistrée");

    Ok(Json(UploadResponse {
        id: opportunity.id.clone(),
        message: "Opportunité créée avec succès".to_string(),
        data: opportunity,
    }))
}

/// Pull the uploaded PDF out of the multipart body: the first field
/// carrying a filename, or one explicitly named "pdf".
async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
    {
        if field.file_name().is_some() || field.name() == Some("pdf") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            return Ok(bytes.to_vec());
        }
    }
    Err(ApiError::Internal(
        "aucun fichier PDF dans la requête".to_string(),
    ))
}
