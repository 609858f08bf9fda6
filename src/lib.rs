// Document-to-structured-text pipeline: format readers, chapter
// detection, and the extraction entry points consumed by the
// audiobook synthesis layer.

pub mod chapters;
pub mod error;
pub mod extraction;

// Re-export commonly used types
pub use chapters::{chapter_slices, detect_chapters, ChapterMarker};
pub use error::ExtractError;
pub use extraction::{extract_text, extract_text_with_metadata, ExtractionMetadata, Reader};
