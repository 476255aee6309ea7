//! PDF text extraction.
//!
//! Layout is irrelevant downstream, so all runs of whitespace (including
//! the line breaks pdf-extract inserts between text fragments) collapse to
//! a single space before the text leaves this module.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to extract text from PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
    #[error("document contains no extractable text")]
    EmptyDocument,
}

/// Pulls the text layer out of a PDF byte stream.
///
/// Scanned documents with no text layer come back as `EmptyDocument`
/// rather than an empty string, so callers never analyze a blank page.
pub fn extract_text(bytes: &[u8]) -> Result<String, TextError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)?;
    let text = collapse_whitespace(&raw);
    if text.is_empty() {
        return Err(TextError::EmptyDocument);
    }
    Ok(text)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
