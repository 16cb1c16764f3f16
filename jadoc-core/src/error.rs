//! Error types for document extraction and language detection

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Everything that can go wrong between opening a document and writing its text.
///
/// The sorter treats every variant the same way (log one line, skip the
/// document), but keeps them apart so callers and reports can tell a corrupt
/// `.docx` from a missing `antiword`.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// External extraction tool could not be spawned or exited non-zero
    #[error("{program} failed: {message}")]
    Shell { program: String, message: String },

    #[error("unsupported document extension: .{0}")]
    UnsupportedExtension(String),

    /// The `.docx` container is not a readable zip archive
    #[error("not a valid zip container: {0}")]
    BadZip(#[from] zip::result::ZipError),

    /// A part the format requires is absent from the container
    #[error("missing document part: {0}")]
    MissingPart(String),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("extracted text is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Failure of the statistical language detector.
///
/// Never leaves the classifier: every detector failure resolves to `Language::Other`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    #[error("no linguistic content to detect")]
    NoFeatures,

    #[error("detector could not determine a language")]
    Undetermined,
}
