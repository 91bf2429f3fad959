//! PDF text extraction — the seam between the upload handler and the
//! `pdf-extract` crate.
//!
//! `AppState` carries an `Arc<dyn TextExtractor>` so tests can substitute a
//! stub without touching the handler.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Parse(String),
}

/// Per-page text extraction backend.
pub trait TextExtractor: Send + Sync {
    /// Returns the text of each page in page order. A page with no text
    /// layer (e.g. a scanned image) yields an empty string, not an error.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError>;
}

/// Production extractor backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))
    }
}

/// Joins per-page text in page order, separated by newlines. Pages that
/// yielded no text are skipped.
pub fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_join_preserves_page_order() {
        let joined = join_pages(&pages(&["Page one", "Page two", "Page three"]));
        assert_eq!(joined, "Page one\nPage two\nPage three");
    }

    #[test]
    fn test_blank_pages_are_skipped() {
        let joined = join_pages(&pages(&["Intro", "", "  \n ", "Outro"]));
        assert_eq!(joined, "Intro\nOutro");
    }

    #[test]
    fn test_all_blank_pages_join_to_empty() {
        assert_eq!(join_pages(&pages(&["", "   "])), "");
    }

    #[test]
    fn test_no_pages_join_to_empty() {
        assert_eq!(join_pages(&[]), "");
    }
}
