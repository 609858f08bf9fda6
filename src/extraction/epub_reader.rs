use epub::doc::EpubDoc;
use regex::Regex;
use std::path::Path;
use tracing::{debug, info};

use super::{validate_file, Reader};
use crate::error::ExtractError;

/// EPUB reader: spine-ordered HTML sections stripped down to plain text.
pub struct EpubReader;

impl Reader for EpubReader {
    fn extension(&self) -> &'static str {
        "epub"
    }

    fn read(&self, path: &Path) -> Result<String, ExtractError> {
        validate_file(path, self.extension())?;

        info!("Extracting text from EPUB: {:?}", path);

        let mut doc =
            EpubDoc::new(path).map_err(|e| ExtractError::extraction_failed(path, e))?;

        let mut sections = Vec::new();
        let spine_len = doc.spine.len();

        for i in 0..spine_len {
            doc.set_current_page(i);

            if let Some((html, mime)) = doc.get_current_str() {
                // The spine can reference non-document resources; only
                // (x)html items contribute text.
                if !mime.contains("html") {
                    debug!("Skipping non-document spine item {} ({})", i, mime);
                    continue;
                }

                let text = html_to_text(&html);
                if !text.trim().is_empty() {
                    sections.push(text);
                }
            }
        }

        info!("Extracted {} sections from EPUB", sections.len());

        Ok(sections.join("\n").trim().to_string())
    }
}

/// Strip markup from an HTML section, keeping line structure.
///
/// Script and style bodies are dropped entirely; block-level closers and
/// line breaks become newlines so heading lines stay line-anchored for the
/// chapter detector.
fn html_to_text(html: &str) -> String {
    let re_script = Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap();
    let re_style = Regex::new(r"(?is)<style\b[^>]*>.*?</style>").unwrap();
    let re_breaks = Regex::new(r"(?i)</(?:p|div|li|tr|h[1-6]|title)\s*>|<br\s*/?>").unwrap();
    let re_tags = Regex::new(r"(?s)<[^>]*>").unwrap();
    let re_spaces = Regex::new(r"[ \t]+").unwrap();
    let re_newlines = Regex::new(r"\n{3,}").unwrap();

    let text = re_script.replace_all(html, "");
    let text = re_style.replace_all(&text, "");
    let text = re_breaks.replace_all(&text, "\n");
    let text = re_tags.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = re_spaces.replace_all(&text, " ");
    let text = re_newlines.replace_all(&text, "\n\n");

    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Decode the handful of entities that actually show up in book HTML.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_html_to_text_strips_tags() {
        let html = "<p>Hello <b>World</b>!</p>";
        assert_eq!(html_to_text(html), "Hello World!");
    }

    #[test]
    fn test_html_to_text_drops_script_and_style_bodies() {
        let html = "<p>Text</p><script>alert('hi');</script>\
                    <style>body { color: red; }</style><p>More text</p>";
        let text = html_to_text(html);
        assert!(text.contains("Text"));
        assert!(text.contains("More text"));
        assert!(!text.contains("alert"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_html_to_text_keeps_heading_lines_anchored() {
        let html = "<h1>Chapitre 1: Début</h1><p>Premier paragraphe.</p>\
                    <h1>Chapitre 2: Suite</h1><p>Second paragraphe.</p>";
        let text = html_to_text(html);
        let chapters = crate::chapters::detect_chapters(&text);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Début");
        assert_eq!(chapters[1].title, "Suite");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry &lt;3 &quot;cheese&quot;"),
            "Tom & Jerry <3 \"cheese\""
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = EpubReader.read(Path::new("no_such_file.epub")).unwrap_err();
        assert!(matches!(err, ExtractError::NotFound(_)));
    }

    #[test]
    fn test_garbage_content_wrapped_as_extraction_failed() {
        let mut file = Builder::new().suffix(".epub").tempfile().unwrap();
        write!(file, "this is not a zip archive").unwrap();

        let err = EpubReader.read(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed { .. }));
    }
}
