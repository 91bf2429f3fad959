use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The public contract signals failure through the body shape, not the HTTP
/// status: every variant renders as `200 OK` with `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(
        "Unable to extract readable text from the PDF. Try using a text-based PDF instead of a scanned image."
    )]
    Extraction,

    #[error("{0}")]
    Upload(String),

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {self}");
        Json(json!({ "error": self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_errors_render_as_ok_with_error_body() {
        let response = AppError::Extraction.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("scanned image"));
        assert!(body.get("ai_analysis").is_none());
    }

    #[tokio::test]
    async fn test_upload_error_carries_message() {
        let response = AppError::Upload("Missing 'file' field".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Missing 'file' field");
    }
}
