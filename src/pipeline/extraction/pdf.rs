use super::ExtractionError;

/// Pull the text layer out of a digital PDF, pages joined by newlines.
/// Scanned PDFs without a text layer come back near-empty, which the
/// caller treats like any other empty document.
pub fn extract_pdf(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    Ok(pages.join("\n"))
}
