use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};
use tracing::{debug, warn};

use crate::error::{ConjugationError, Result};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
}

pub fn read_text(path: &Path) -> Result<DecodedText> {
    let bytes = fs::read(path).map_err(|e| ConjugationError::io(path, e))?;
    decode(path, &bytes)
}

/// Decodes spreadsheet bytes as UTF-8 (BOM tolerated), falling back once to
/// Shift-JIS. A failing fallback is fatal.
pub fn decode(path: &Path, bytes: &[u8]) -> Result<DecodedText> {
    let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(body) {
        debug!("{} decoded as UTF-8", path.display());
        return Ok(DecodedText {
            text: text.into_owned(),
            encoding: UTF_8.name(),
        });
    }

    warn!("UTF-8 decoding failed, trying Shift-JIS");
    match SHIFT_JIS.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => Ok(DecodedText {
            text: text.into_owned(),
            encoding: SHIFT_JIS.name(),
        }),
        None => {
            Err(ConjugationError::Encoding {
                path: path.to_path_buf(),
                guess: detect(bytes).name().to_string(),
            })
        }
    }
}

/// Best guess of the encoding of undecodable input, for error reporting.
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_with_and_without_bom() {
        let path = Path::new("sheet.csv");
        let plain = decode(path, "Definition\n食べる".as_bytes()).unwrap();
        assert_eq!(plain.text, "Definition\n食べる");
        assert_eq!(plain.encoding, "UTF-8");

        let mut bom = UTF8_BOM.to_vec();
        bom.extend_from_slice("Type".as_bytes());
        assert_eq!(decode(path, &bom).unwrap().text, "Type");
    }

    #[test]
    fn falls_back_to_shift_jis() {
        let (bytes, _, _) = SHIFT_JIS.encode("食べる,たべる");
        let decoded = decode(Path::new("sheet.csv"), &bytes).unwrap();
        assert_eq!(decoded.text, "食べる,たべる");
        assert_eq!(decoded.encoding, "Shift_JIS");
    }

    #[test]
    fn undecodable_input_is_fatal() {
        // 0x81 followed by 0x20 is neither valid UTF-8 nor a Shift-JIS pair.
        let err = decode(Path::new("bad.csv"), &[0x81, 0x20, 0xFF]).unwrap_err();
        assert!(matches!(err, ConjugationError::Encoding { .. }));
    }

    #[test]
    fn bom_does_not_decide_the_reported_guess() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(&[0x81, 0x20, 0xFF]);

        match decode(Path::new("bad.csv"), &bytes).unwrap_err() {
            ConjugationError::Encoding { guess, .. } => {
                assert!(!guess.is_empty());
                assert_ne!(guess, "utf-8-sig");
            }
            other => panic!("expected encoding error, got {other:?}"),
        }
    }
}
