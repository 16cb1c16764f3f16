//! Two-pass language classifier
//!
//! Statistical detectors tend to call short or mixed Japanese/English text
//! "English". When the first pass says English, the text is stripped of
//! Latin letters, digits (half- and full-width) and spacing; if a large
//! enough residual survives, the detector is asked again about that residual
//! alone and its answer wins.

use crate::detector::LanguageDetector;
use crate::types::{DetectorCode, Language};
use crate::error::DetectError;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that say nothing about whether a text is Japanese:
/// ASCII letters and digits, full-width digits and letters, newline,
/// half-width space and ideographic space (U+3000).
static BENIGN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9０-９ａ-ｚＡ-Ｚ\n 　]").unwrap());

/// Remove every benign character, keeping everything else in order
pub fn strip_benign(text: &str) -> String {
    BENIGN_CHARS.replace_all(text, "").into_owned()
}

pub struct LanguageClassifier {
    detector: Box<dyn LanguageDetector>,
    residual_ratio: f64,
}

impl LanguageClassifier {
    pub fn new(detector: Box<dyn LanguageDetector>) -> Self {
        Self {
            detector,
            residual_ratio: 0.5,
        }
    }

    /// Override the residual share that triggers the second pass
    pub fn with_residual_ratio(mut self, residual_ratio: f64) -> Self {
        self.residual_ratio = residual_ratio;
        self
    }

    pub fn detector_name(&self) -> &str {
        self.detector.name()
    }

    pub fn classify(&self, text: &str) -> Language {
        let first_pass = map_detection(self.detector.detect(text));
        log::debug!("first pass: {first_pass}");

        match first_pass {
            Language::Japanese | Language::Other => return first_pass,
            Language::English => {}
        }

        let residual = strip_benign(text);
        let residual_len = residual.chars().count();
        let text_len = text.chars().count();

        if (residual_len as f64) < (text_len as f64) * self.residual_ratio {
            return Language::English;
        }

        let second_pass = map_detection(self.detector.detect(&residual));
        log::debug!("second pass on {residual_len}/{text_len} residual chars: {second_pass}");
        second_pass
    }
}

fn map_detection(result: Result<DetectorCode, DetectError>) -> Language {
    match result {
        Ok(code) => Language::from_code(&code),
        Err(e) => {
            log::debug!("detector failed: {e}");
            Language::Other
        }
    }
}
