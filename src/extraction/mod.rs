//! Format dispatch and the extraction entry points.
//!
//! `extract_text` resolves a file to its format reader by suffix and
//! returns the extracted text; `extract_text_with_metadata` additionally
//! runs chapter detection and assembles the metadata consumed by the
//! synthesis layer. Both are pure request/response calls: no caching, no
//! shared state, fresh output on every invocation.

mod epub_reader;
mod pdf_reader;
mod txt_reader;

pub use epub_reader::EpubReader;
pub use pdf_reader::PdfReader;
pub use txt_reader::TxtReader;

use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::chapters::{detect_chapters, ChapterMarker};
use crate::error::ExtractError;

/// Format-specific converter from a document file to plain Unicode text.
///
/// Each implementor re-validates existence and extension match on its own,
/// so readers are safely callable standalone (e.g. from targeted tests)
/// without going through the dispatcher.
pub trait Reader {
    /// Lowercased file extension this reader handles, without the dot.
    fn extension(&self) -> &'static str;

    /// Read the file and return its full text content.
    fn read(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Reader lookup table. Adding a format means adding an entry here, not
/// touching the dispatch logic.
static READERS: [&(dyn Reader + Sync); 3] = [&TxtReader, &PdfReader, &EpubReader];

fn reader_for(extension: &str) -> Option<&'static (dyn Reader + Sync)> {
    READERS.iter().copied().find(|r| r.extension() == extension)
}

/// Chapter metadata derived from one extraction call.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionMetadata {
    pub chapters: Vec<ChapterMarker>,
    pub chapter_count: usize,
    pub text_length: usize,
}

/// Extract text from a document, dispatching on its file extension.
///
/// Fails with `InvalidInput` on an empty or whitespace-only path (before
/// any filesystem access), `UnsupportedFormat` when the suffix is not one
/// of `.pdf`, `.epub`, `.txt`, and `NotFound` when the file is missing.
pub fn extract_text(path: &str) -> Result<String, ExtractError> {
    if path.trim().is_empty() {
        return Err(ExtractError::InvalidInput);
    }

    let path = Path::new(path);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let reader = reader_for(&extension).ok_or_else(|| ExtractError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    reader.read(path)
}

/// Extract text and chapter metadata in one call.
///
/// This is the entry point external callers should depend on; the
/// per-format readers and the detector are internal collaborators. Output
/// is atomic: text and metadata are either both returned or neither.
pub fn extract_text_with_metadata(
    path: &str,
) -> Result<(String, ExtractionMetadata), ExtractError> {
    let text = extract_text(path)?;
    let chapters = detect_chapters(&text);

    info!(
        "Extracted {} characters, {} chapter markers from {}",
        text.len(),
        chapters.len(),
        path
    );

    let metadata = ExtractionMetadata {
        chapter_count: chapters.len(),
        text_length: text.len(),
        chapters,
    };

    Ok((text, metadata))
}

/// Existence and extension re-validation shared by the format readers.
pub(crate) fn validate_file(path: &Path, expected_ext: &str) -> Result<(), ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }

    let ext_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(expected_ext))
        .unwrap_or(false);

    if !ext_matches {
        return Err(ExtractError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
