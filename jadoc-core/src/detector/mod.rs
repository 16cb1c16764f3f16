//! Language detector trait and backends
//!
//! A detector looks at a string and answers with a raw language code. It knows
//! nothing about the target language or the sorting policy; that lives in
//! `classifier`.

use crate::error::DetectError;
use crate::types::DetectorCode;

/// Backend trait for statistical language detection
pub trait LanguageDetector {
    /// Detect the language of `text`
    fn detect(&self, text: &str) -> Result<DetectorCode, DetectError>;

    /// Backend identifier for logging/debugging
    fn name(&self) -> &str;
}

/// Any `Fn(&str) -> Result<DetectorCode, DetectError>` is a detector.
/// Handy for scripting detector answers in tests and for wrapping other libraries.
impl<F> LanguageDetector for F
where
    F: Fn(&str) -> Result<DetectorCode, DetectError>,
{
    fn detect(&self, text: &str) -> Result<DetectorCode, DetectError> {
        self(text)
    }

    fn name(&self) -> &str {
        "fn"
    }
}

#[cfg(feature = "whatlang-backend")]
pub mod whatlang_backend;

#[cfg(feature = "whatlang-backend")]
pub use whatlang_backend::WhatlangDetector;
