//! HTTP handlers for the Contract Analyzer API

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::AnalyzeResponse;
use crate::state::AppState;
use contract_text::TextError;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Analyze an uploaded PDF contract.
///
/// Expects a multipart form with a `file` part carrying the PDF bytes.
/// The whole pipeline runs synchronously within the request.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let analyzer = state
        .analyzer
        .as_ref()
        .ok_or(ApiError::ServiceUnavailable)?;

    // Find the uploaded file part
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .unwrap_or("document.pdf")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to read upload: {}", e)))?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = upload.ok_or(ApiError::NoFileUploaded)?;

    let text = contract_text::extract_text(&bytes).map_err(|e| match e {
        TextError::EmptyDocument => ApiError::EmptyDocument,
        TextError::Pdf(e) => ApiError::InvalidRequest(format!("Unreadable PDF: {}", e)),
    })?;

    let lang = contract_text::detect_language(&text);

    let result = analyzer
        .analyze(&text, lang, &filename)
        .map_err(|e| match e {
            analysis_engine::AnalysisError::EmptyDocument => ApiError::EmptyDocument,
        })?;

    tracing::info!(
        "Analyzed {}: language={}, type={}, recommendation={:?}",
        result.filename,
        result.language.code(),
        result.contract_type,
        result.recommendation
    );

    Ok(Json(AnalyzeResponse::from(result)))
}
