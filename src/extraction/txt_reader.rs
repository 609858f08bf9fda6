use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::{validate_file, Reader};
use crate::error::ExtractError;

/// Plain-text reader: UTF-8 with a Latin-1 fallback.
pub struct TxtReader;

impl Reader for TxtReader {
    fn extension(&self) -> &'static str {
        "txt"
    }

    /// Read the file content verbatim, with no trimming.
    ///
    /// Files that are not valid UTF-8 are decoded as Latin-1 instead of
    /// failing; every byte maps to a character, so decoding never errors.
    fn read(&self, path: &Path) -> Result<String, ExtractError> {
        validate_file(path, self.extension())?;

        info!("Reading text file: {:?}", path);

        let bytes = fs::read(path).map_err(|e| ExtractError::extraction_failed(path, e))?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                debug!("File is not valid UTF-8, falling back to Latin-1: {:?}", path);
                decode_latin1(err.as_bytes())
            }
        };

        Ok(text)
    }
}

/// Latin-1 decoding: each byte is exactly one code point in U+0000..=U+00FF.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
