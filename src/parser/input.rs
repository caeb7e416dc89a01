//! Decoding raw input into [`DocumentInput`].

use crate::detect::{detect_format_from_bytes, InputFormat};
use crate::error::{Error, Result};
use crate::model::{DocumentInput, PageContent};

/// Decode bytes into a document input, detecting the format.
///
/// Text that merely starts with `{` but is not JSON at all is decoded as
/// plain text. Well-formed JSON of the wrong shape is still an error.
pub fn decode(data: &[u8]) -> Result<DocumentInput> {
    match detect_format_from_bytes(data)? {
        InputFormat::Json => match decode_json(data) {
            Ok(input) => Ok(input),
            Err(e) => match std::str::from_utf8(data) {
                Ok(text) if serde_json::from_str::<serde_json::Value>(text).is_err() => {
                    log::debug!("Input is not JSON ({}), decoding as plain text", e);
                    Ok(decode_text(text))
                }
                _ => Err(e),
            },
        },
        InputFormat::PlainText => {
            let text = std::str::from_utf8(data).map_err(|e| Error::Decode(e.to_string()))?;
            Ok(decode_text(text))
        }
    }
}

/// Decode token JSON.
///
/// Tokens without an explicit page inherit their page's number.
pub fn decode_json(data: &[u8]) -> Result<DocumentInput> {
    let mut input: DocumentInput = serde_json::from_slice(data)?;

    for page in &mut input.pages {
        if let PageContent::Positioned { tokens, .. } = &mut page.content {
            for token in tokens.iter_mut().filter(|t| t.page == 0) {
                token.page = page.number;
            }
        }
    }

    log::debug!("Decoded JSON input with {} page(s)", input.page_count());
    Ok(input)
}

/// Decode plain text; pages are separated by form feeds.
pub fn decode_text(text: &str) -> DocumentInput {
    let input = DocumentInput::from_text(text);
    log::debug!("Decoded plain text input with {} page(s)", input.page_count());
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontMetrics;

    #[test]
    fn test_decode_json_inherits_page() {
        let json = br#"{
            "metadata": {"title": "Q3"},
            "pages": [{
                "number": 4,
                "content": {"kind": "positioned", "tokens": [
                    {"text": "a", "x": 0, "y": 0, "width": 5, "height": 10},
                    {"text": "b", "x": 9, "y": 0, "width": 5, "height": 10, "page": 9}
                ]}
            }]
        }"#;

        let input = decode(json).unwrap();
        assert_eq!(input.metadata.title.as_deref(), Some("Q3"));
        match &input.pages[0].content {
            PageContent::Positioned {
                tokens,
                font_metrics,
            } => {
                assert_eq!(*font_metrics, FontMetrics::Precise);
                assert_eq!(tokens[0].page, 4);
                assert_eq!(tokens[1].page, 9);
            }
            PageContent::TextOnly { .. } => panic!("Expected positioned content"),
        }
    }

    #[test]
    fn test_decode_text() {
        let input = decode(b"one\x0ctwo\x0cthree").unwrap();
        assert_eq!(input.page_count(), 3);
        assert_eq!(input.pages[2].content, PageContent::text("three"));
    }

    #[test]
    fn test_decode_wrong_json_shape() {
        assert!(matches!(decode(b"{\"pages\": 5}"), Err(Error::Decode(_))));
        assert!(matches!(
            decode(b"{\"pages\": [{\"number\": 1}]}"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn test_decode_braced_prose_as_text() {
        let input = decode(b"{Draft} Annual report").unwrap();
        assert_eq!(input.page_count(), 1);
        assert_eq!(
            input.pages[0].content,
            PageContent::text("{Draft} Annual report")
        );
    }

    #[test]
    fn test_decode_binary() {
        assert!(matches!(decode(b"\xff\xfe\x00"), Err(Error::UnknownFormat)));
    }
}
