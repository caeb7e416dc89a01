//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Extracted page/token JSON
    Json,
    /// UTF-8 plain text, pages separated by form feeds
    PlainText,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Json => write!(f, "JSON"),
            InputFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// Number of leading bytes inspected when detecting from a path.
const SNIFF_LEN: usize = 4096;

/// Detect the input format from a file path.
///
/// Only the first few kilobytes are read.
///
/// # Example
/// ```no_run
/// use docsift::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.json").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file).take(SNIFF_LEN as u64);
    let mut head = Vec::with_capacity(SNIFF_LEN);
    reader.read_to_end(&mut head)?;
    detect_format_from_bytes(&head)
}

/// Detect the input format from bytes.
///
/// # Returns
/// * `Ok(InputFormat::Json)` if the first non-whitespace byte is `{`
/// * `Ok(InputFormat::PlainText)` if the data is UTF-8 text
/// * `Err(Error::UnknownFormat)` for empty or binary data
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    let first = data.iter().find(|b| !b.is_ascii_whitespace());

    match first {
        None if data.is_empty() => Err(Error::UnknownFormat),
        Some(b'{') => Ok(InputFormat::Json),
        _ if is_utf8_prefix(data) => Ok(InputFormat::PlainText),
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if bytes are UTF-8, tolerating a character cut off at the end.
fn is_utf8_prefix(data: &[u8]) -> bool {
    match std::str::from_utf8(data) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

/// Check if bytes are a supported input.
pub fn is_supported_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
