// jadoc Core Library
//
// Sorts legacy Word documents by language: extract text, detect Japanese,
// mirror matching documents as plain text into an output tree.

pub mod types;
pub mod error;
pub mod config;
pub mod extractors;
pub mod detector;
pub mod classifier;
pub mod sorter;
pub mod walker;

// Re-export main types and functions for easy use
pub use types::*;
pub use error::{DetectError, DocumentError};
pub use config::SortConfig;
pub use extractors::{AntiwordExtractor, DispatchExtractor, DocxExtractor, TextExtractor};
pub use detector::LanguageDetector;
pub use classifier::LanguageClassifier;
pub use sorter::DocumentSorter;
pub use walker::TreeWalker;

// Re-export backends for direct use
#[cfg(feature = "whatlang-backend")]
pub use detector::WhatlangDetector;
