use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the extraction pipeline.
///
/// Only `ExtractionFailed` carries a nested cause; the other variants are
/// input-validation failures raised before any parsing happens.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid input: file path is empty or whitespace")]
    InvalidInput,

    #[error("File not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Unsupported file format: {path:?} (supported: .pdf, .epub, .txt)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to extract text from {path:?}: {source}")]
    ExtractionFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ExtractError {
    /// Wrap a lower-level parse/decode error with the file it came from.
    ///
    /// Accepts anything convertible into a boxed error so both plain
    /// std errors and `anyhow::Error` causes from format libraries fit.
    pub fn extraction_failed(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ExtractionFailed {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message_lists_formats() {
        let err = ExtractError::UnsupportedFormat {
            path: PathBuf::from("invalid.xyz"),
        };
        let msg = err.to_string();
        assert!(msg.contains(".pdf"));
        assert!(msg.contains(".epub"));
        assert!(msg.contains(".txt"));
    }

    #[test]
    fn test_invalid_input_message_covers_whitespace_paths() {
        let msg = ExtractError::InvalidInput.to_string();
        assert!(msg.contains("empty or whitespace"));
    }

    #[test]
    fn test_extraction_failed_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad header");
        let err = ExtractError::extraction_failed(Path::new("book.pdf"), io);
        assert!(err.to_string().contains("book.pdf"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
