// src/extract.rs
// PDF text extraction over in-memory bytes.

use lopdf::Document;

use crate::error::ApiError;

/// Extract the text of every page, in document order, pages separated
/// by a single newline. The whole document is parsed transiently in
/// memory; nothing touches disk.
pub fn text_from_pdf_bytes(bytes: &[u8]) -> Result<String, ApiError> {
    let doc = Document::load_mem(bytes).map_err(|e| ApiError::Extraction(e.to_string()))?;

    let mut pages = Vec::new();
    for (page_num, _object_id) in doc.get_pages() {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| ApiError::Extraction(e.to_string()))?;
        pages.push(text);
    }
    Ok(pages.join("\n"))
}
