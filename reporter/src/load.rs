//! Loads raw TCK reports.
//!
//! Decoding into [`RawReport`] is the shape check: `parser` with its four
//! strings and `results` with `file` and `success` are required, `error`
//! is optional. Anything else is rejected before interpretation.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::model::RawReport;

/// Parses a raw report from JSON text.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] if `text` is not a well-formed report.
pub fn parse_report(text: &str) -> Result<RawReport, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses the raw report at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Decode`] if it is not a well-formed report.
pub fn read_report(path: &Path) -> Result<RawReport, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(&text)
}
