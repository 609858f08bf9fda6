use regex::Regex;

/// A raw pattern match before title/preview derivation.
#[derive(Debug, Clone)]
pub(crate) struct RawHeading {
    /// Captured chapter number (digits or roman numerals, as written).
    pub number: String,
    /// Byte offset of the match start in the scanned text.
    pub position: usize,
    /// Length in bytes of the matched heading token (up to the number).
    pub match_len: usize,
    /// The full heading line, from the match start to the next newline.
    pub line: String,
}

/// One line-anchored heading heuristic.
///
/// Patterns are independent: each one scans the whole text on its own and
/// yields every match. Combining and deduplicating is the detector's job.
pub(crate) struct HeadingPattern {
    regex: Regex,
}

impl HeadingPattern {
    fn new(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// Scan `text` and return one `RawHeading` per match, in text order.
    pub fn find_markers(&self, text: &str) -> Vec<RawHeading> {
        let mut matches = Vec::new();

        for caps in self.regex.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            let number = caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string();

            let line_end = text[whole.start()..]
                .find('\n')
                .map(|i| whole.start() + i)
                .unwrap_or(text.len());
            let line = text[whole.start()..line_end].trim_end_matches('\r');

            matches.push(RawHeading {
                number,
                position: whole.start(),
                match_len: whole.end() - whole.start(),
                line: line.to_string(),
            });
        }

        matches
    }
}

/// The ordered heading-pattern list.
///
/// Declaration order is the dedup precedence: when two patterns match at
/// the same offset, the earlier one wins. The all-caps variants are
/// case-sensitive and always shadowed by their case-insensitive siblings;
/// they are kept so the list states the full set of recognized forms.
pub(crate) fn heading_patterns() -> Vec<HeadingPattern> {
    // `[ \t]+` rather than `\s+`: a heading is one line, so the gap
    // between the token and the number must not swallow a newline.
    vec![
        // "Chapter 12" / "Chapitre 3"
        HeadingPattern::new(r"(?mi)^chap(?:ter|itre)[ \t]+(\d+)\b"),
        // "CHAPTER 12" / "CHAPITRE 3"
        HeadingPattern::new(r"(?m)^CHAP(?:TER|ITRE)[ \t]+(\d+)\b"),
        // "Part 2" / "Partie 2"
        HeadingPattern::new(r"(?mi)^part(?:ie)?[ \t]+(\d+)\b"),
        // "PART 2" / "PARTIE 2"
        HeadingPattern::new(r"(?m)^PART(?:IE)?[ \t]+(\d+)\b"),
        // "Chapter IV" / "Chapitre XII"
        HeadingPattern::new(r"(?mi)^chap(?:ter|itre)[ \t]+([IVXLCDM]+)\b"),
        // "3. Chapitre"
        HeadingPattern::new(r"(?mi)^(\d+)\.[ \t]+chap(?:ter|itre)\b"),
        // "# Chapter 1" / "### Chapitre IV"
        HeadingPattern::new(r"(?mi)^#{1,6}[ \t]*chap(?:ter|itre)[ \t]+(\d+|[IVXLCDM]+)\b"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(pattern_index: usize, text: &str) -> Option<RawHeading> {
        heading_patterns()[pattern_index]
            .find_markers(text)
            .into_iter()
            .next()
    }

    #[test]
    fn test_decimal_chapter_pattern() {
        let m = first_match(0, "Chapitre 7: La tempête").unwrap();
        assert_eq!(m.number, "7");
        assert_eq!(m.position, 0);
        assert_eq!(m.line, "Chapitre 7: La tempête");
    }

    #[test]
    fn test_decimal_pattern_is_case_insensitive() {
        let m = first_match(0, "CHAPTER 2\nmore text").unwrap();
        assert_eq!(m.number, "2");
        assert_eq!(m.line, "CHAPTER 2");
    }

    #[test]
    fn test_roman_chapter_pattern() {
        let m = first_match(4, "Chapter XIV: Endgame").unwrap();
        assert_eq!(m.number, "XIV");
    }

    #[test]
    fn test_roman_pattern_rejects_digits() {
        assert!(first_match(4, "Chapter 14: Endgame").is_none());
    }

    #[test]
    fn test_part_pattern_does_not_match_prefix_words() {
        assert!(first_match(2, "Particular attention is required").is_none());
        assert!(first_match(2, "Partie 2: Le retour").is_some());
    }

    #[test]
    fn test_ordinal_prefixed_pattern() {
        let m = first_match(5, "3. Chapitre de la forêt").unwrap();
        assert_eq!(m.number, "3");
        assert_eq!(m.position, 0);
    }

    #[test]
    fn test_markdown_pattern() {
        let text = "intro\n## Chapter 5: The Door\nbody";
        let m = first_match(6, text).unwrap();
        assert_eq!(m.number, "5");
        assert_eq!(m.position, text.find("##").unwrap());
    }

    #[test]
    fn test_matches_only_at_line_start() {
        assert!(first_match(0, "see Chapter 3 for details").is_none());
    }

    #[test]
    fn test_number_must_be_on_the_same_line() {
        assert!(first_match(0, "Chapitre\n12 suite du texte").is_none());
        assert!(first_match(2, "Partie\n2 suite").is_none());
        assert!(first_match(4, "Chapter\nIV snow").is_none());
    }
}
