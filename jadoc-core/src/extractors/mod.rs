//! Text Extractors
//!
//! This module is the boundary between document formats and the rest of the
//! pipeline. Every extractor turns a document path into raw text bytes;
//! decoding and classification happen downstream in the sorter.
//!
//! ## Architecture
//!
//! ```text
//! Document (.doc, .docx)
//!     ↓
//! [DispatchExtractor] -- picks a backend by extension
//!     ↓
//! raw bytes (UTF-8 expected)
//!     ↓
//! [DocumentSorter] -> decode -> classify -> write
//! ```
//!
//! ## Available Extractors
//!
//! - `DocxExtractor` - Office Open XML via zip + WordprocessingML parsing
//! - `AntiwordExtractor` - Word 97-2003 binary via the `antiword` program

pub mod doc;
pub mod docx;

pub use doc::AntiwordExtractor;
pub use docx::DocxExtractor;

use crate::config::SortConfig;
use crate::error::DocumentError;
use std::path::Path;

/// Extractor trait - converts a document on disk into raw text bytes
///
/// Implementations report failures through `DocumentError`; they never
/// panic on malformed input.
pub trait TextExtractor {
    /// Extract the document's text
    fn extract(&self, path: &Path) -> Result<Vec<u8>, DocumentError>;

    /// Extractor name for logging/debugging
    fn name(&self) -> &str;

    /// Check if extractor supports the given file type
    fn supports_file_type(&self, path: &Path) -> bool;
}

/// Lowercased extension of a path, empty if there is none
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Routes each document to the backend for its extension
pub struct DispatchExtractor {
    docx: DocxExtractor,
    doc: AntiwordExtractor,
}

impl DispatchExtractor {
    pub fn new(docx: DocxExtractor, doc: AntiwordExtractor) -> Self {
        Self { docx, doc }
    }

    /// Build the default backends, honoring the configured `antiword` program
    pub fn from_config(config: &SortConfig) -> Self {
        Self::new(DocxExtractor::new(), AntiwordExtractor::new(&config.antiword_path))
    }
}

impl Default for DispatchExtractor {
    fn default() -> Self {
        Self::from_config(&SortConfig::default())
    }
}

impl TextExtractor for DispatchExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<u8>, DocumentError> {
        if self.docx.supports_file_type(path) {
            self.docx.extract(path)
        } else if self.doc.supports_file_type(path) {
            self.doc.extract(path)
        } else {
            Err(DocumentError::UnsupportedExtension(extension_of(path)))
        }
    }

    fn name(&self) -> &str {
        "DispatchExtractor"
    }

    fn supports_file_type(&self, path: &Path) -> bool {
        self.docx.supports_file_type(path) || self.doc.supports_file_type(path)
    }
}
