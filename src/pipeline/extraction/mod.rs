pub mod docx;
pub mod pdf;
pub mod text;

use thiserror::Error;

use crate::models::DocumentFormat;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("DOCX container error: {0}")]
    DocxContainer(String),

    #[error("DOCX markup error: {0}")]
    DocxMarkup(String),
}

/// Extract plain text from an uploaded file.
///
/// Extraction never blocks an analysis: any failure is logged and the
/// document continues through the run with empty text.
pub fn extract_text(bytes: &[u8], format: &DocumentFormat) -> String {
    let result = match format {
        DocumentFormat::Text => Ok(text::extract_plain(bytes)),
        DocumentFormat::Pdf => pdf::extract_pdf(bytes),
        DocumentFormat::Docx => docx::extract_docx(bytes),
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                format = format.as_str(),
                error = %e,
                "Text extraction failed, treating document as empty"
            );
            String::new()
        }
    }
}
