//! Heuristic chapter detection over extracted text.
//!
//! The detector scans the text with an ordered list of heading patterns
//! and returns position-sorted chapter markers. It is a best-effort text
//! heuristic, not a semantic document parser: false positives and missed
//! headings are accepted, and a text with no heading-like lines simply
//! yields an empty list.

mod patterns;

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use patterns::{heading_patterns, RawHeading};

/// Maximum preview length in characters before truncation.
const PREVIEW_MAX_CHARS: usize = 100;

/// A detected chapter heading.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterMarker {
    /// Chapter number as written in the heading (digits or roman numerals).
    pub number: String,
    /// Heading label after the number, or a synthesized "Chapitre {n}".
    pub title: String,
    /// Byte offset of the heading in the extracted text.
    pub position: usize,
    /// The heading line, truncated to 100 characters.
    pub text_preview: String,
}

impl ChapterMarker {
    fn from_raw(raw: RawHeading) -> Self {
        let title = derive_title(&raw);
        let text_preview = truncate_preview(&raw.line);
        Self {
            number: raw.number,
            title,
            position: raw.position,
            text_preview,
        }
    }
}

/// Detect chapter headings in `text`.
///
/// Every pattern scans the full text; matches are deduplicated by exact
/// start offset (first pattern in declared order wins) and sorted by
/// position. Positions are unique and strictly increasing in the result.
pub fn detect_chapters(text: &str) -> Vec<ChapterMarker> {
    let mut seen = HashSet::new();
    let mut markers = Vec::new();

    for pattern in heading_patterns() {
        for raw in pattern.find_markers(text) {
            if seen.insert(raw.position) {
                markers.push(ChapterMarker::from_raw(raw));
            }
        }
    }

    markers.sort_by_key(|m| m.position);

    debug!("Detected {} chapter markers", markers.len());

    markers
}

/// Slice `text` into per-chapter ranges for chapter-bounded synthesis.
///
/// Each slice runs from its marker's position to the next marker (the last
/// one runs to the end of the text). Text before the first marker is not
/// included. Returns an empty list when no chapters were detected.
pub fn chapter_slices<'a>(
    text: &'a str,
    chapters: &'a [ChapterMarker],
) -> Vec<(&'a ChapterMarker, &'a str)> {
    let mut slices = Vec::with_capacity(chapters.len());

    for (i, marker) in chapters.iter().enumerate() {
        let end = chapters
            .get(i + 1)
            .map(|next| next.position)
            .unwrap_or(text.len());
        slices.push((marker, &text[marker.position..end]));
    }

    slices
}

/// Derive a title from the heading line: the remainder after the matched
/// token, with the leading separator stripped. Falls back to a synthesized
/// French title when the heading has no label.
fn derive_title(raw: &RawHeading) -> String {
    let remainder = raw.line.get(raw.match_len..).unwrap_or("");
    let label = remainder
        .trim_start_matches(|c: char| {
            c.is_whitespace() || matches!(c, ':' | '.' | '-' | '–' | '—')
        })
        .trim_end();

    if label.is_empty() {
        format!("Chapitre {}", raw.number)
    } else {
        label.to_string()
    }
}

fn truncate_preview(line: &str) -> String {
    if line.chars().count() <= PREVIEW_MAX_CHARS {
        return line.to_string();
    }

    let mut preview: String = line.chars().take(PREVIEW_MAX_CHARS).collect();
    preview.push_str("...");
    preview
}
