use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extract::join_pages;
use crate::llm_client::prompts::build_analysis_prompt;
use crate::state::AppState;

/// Fixed fallback returned in the success field when the inference service
/// answers without usable text.
pub const ANALYSIS_FAILED_FALLBACK: &str = "AI analysis failed. Please try again.";

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub ai_analysis: String,
}

/// POST /upload_resume/
///
/// Single-pass pipeline: read the multipart upload, extract per-page PDF
/// text, check it is non-empty, build the matching prompt, call the
/// inference service once, and return its narrative response. Every
/// failure surfaces as a body-shaped error; nothing is retried.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let upload = read_upload(multipart).await?;

    info!("Received file: {}", upload.filename);
    debug!("Job description: {}", upload.job_description);

    // pdf parsing is CPU-bound; spawn_blocking keeps the scheduler unblocked
    let extractor = state.extractor.clone();
    let file = upload.file;
    let pages = tokio::task::spawn_blocking(move || extractor.extract_pages(&file))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    let resume_text = join_pages(&pages);
    debug!("Extracted resume text:\n{resume_text}");

    if resume_text.trim().is_empty() {
        return Err(AppError::Extraction);
    }

    let prompt = build_analysis_prompt(&resume_text, &upload.job_description);
    let completion = state.llm.generate(&prompt).await?;

    let ai_analysis = completion.unwrap_or_else(|| ANALYSIS_FAILED_FALLBACK.to_string());
    debug!("AI response:\n{ai_analysis}");

    Ok(Json(AnalysisResponse { ai_analysis }))
}

struct ResumeUpload {
    filename: String,
    file: Bytes,
    job_description: String,
}

/// Pulls the `file` and `job_description` parts out of the multipart body.
/// Unknown parts are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut filename = None;
    let mut file = None;
    let mut job_description = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                filename = field.file_name().map(str::to_string);
                file = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?,
                );
            }
            "job_description" => {
                job_description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Upload("Missing 'file' field".to_string()))?;
    let job_description =
        job_description.ok_or_else(|| AppError::Upload("Missing 'job_description' field".to_string()))?;

    Ok(ResumeUpload {
        filename: filename.unwrap_or_else(|| "resume.pdf".to_string()),
        file,
        job_description,
    })
}
