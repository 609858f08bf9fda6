use std::path::Path;
use tracing::{info, warn};

use super::{validate_file, Reader};
use crate::error::ExtractError;

/// PDF reader: per-page text extraction joined with newlines.
pub struct PdfReader;

impl Reader for PdfReader {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn read(&self, path: &Path) -> Result<String, ExtractError> {
        validate_file(path, self.extension())?;

        info!("Extracting text from PDF: {:?}", path);

        let raw = pdf_extract::extract_text(path)
            .map_err(|e| ExtractError::extraction_failed(path, e))?;

        // Page breaks come out as form feed characters; rejoin the pages
        // with plain newlines.
        let pages: Vec<&str> = raw.split('\x0C').collect();

        info!("Extracted {} pages from PDF", pages.len());

        let text = pages.join("\n").trim().to_string();

        if text.is_empty() {
            warn!(
                "PDF appears to be scanned or has no extractable text: {:?}",
                path
            );
        }

        Ok(text)
    }
}
