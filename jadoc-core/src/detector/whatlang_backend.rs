//! whatlang detector backend
//!
//! Pure-Rust trigram detector. Reports ISO 639-3 codes ("jpn", "eng", ...).
//! Text written mostly in kana is reported as Japanese from the script alone;
//! Latin-script text goes through trigram scoring.

use super::LanguageDetector;
use crate::error::DetectError;
use crate::types::DetectorCode;

#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<DetectorCode, DetectError> {
        if !text.chars().any(char::is_alphabetic) {
            return Err(DetectError::NoFeatures);
        }

        let info = whatlang::detect(text).ok_or(DetectError::Undetermined)?;
        log::trace!(
            "whatlang: {} (confidence {:.2}, reliable: {})",
            info.lang().code(),
            info.confidence(),
            info.is_reliable()
        );
        Ok(DetectorCode::new(info.lang().code()))
    }

    fn name(&self) -> &str {
        "whatlang"
    }
}
