use crate::error::DocumentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ===== LANGUAGE LABELS =====
// Detector output and classifier output are kept as two types.
// DetectorCode is whatever string the backend produced; Language is the
// closed set the sorter makes decisions on. `Language::from_code` is the
// only bridge between them.

/// Final label assigned to a document's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// The target language
    Japanese,
    English,
    /// Anything else, including texts the detector could not label
    Other,
}

impl Language {
    /// Map a raw detector code onto the closed label set.
    ///
    /// Accepts both ISO 639-1 and ISO 639-3 spellings. Unknown codes are
    /// `Other`, never an error.
    pub fn from_code(code: &DetectorCode) -> Self {
        match code.as_str() {
            "ja" | "jpn" => Language::Japanese,
            "en" | "eng" => Language::English,
            _ => Language::Other,
        }
    }

    pub fn is_target(&self) -> bool {
        matches!(self, Language::Japanese)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Language::Japanese => "ja",
            Language::English => "en",
            Language::Other => "other",
        };
        f.write_str(label)
    }
}

/// Raw language code as reported by a statistical detector (e.g. "jpn", "en")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetectorCode(String);

impl DetectorCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DetectorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DetectorCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

// ===== PER-DOCUMENT OUTCOME =====

/// What the sorter did with a single document
#[derive(Debug)]
pub enum SortOutcome {
    /// Classified as the target language and written to this path
    Written(PathBuf),
    /// Classified as a non-target language; nothing written
    Excluded(Language),
    /// Extraction, decoding or writing failed; nothing (more) written
    Skipped(DocumentError),
}

impl SortOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, SortOutcome::Written(_))
    }
}

// ===== RUN REPORT =====

/// Counters collected over one walk of an input tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub directories_visited: usize,
    /// Directories whose mirror already existed; their files were not touched
    pub directories_skipped: usize,
    pub documents_seen: usize,
    pub documents_written: usize,
    pub documents_excluded: usize,
    pub documents_failed: usize,
    /// Entries the directory walk itself could not read
    pub walk_errors: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunReport {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            directories_visited: 0,
            directories_skipped: 0,
            documents_seen: 0,
            documents_written: 0,
            documents_excluded: 0,
            documents_failed: 0,
            walk_errors: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record(&mut self, outcome: &SortOutcome) {
        self.documents_seen += 1;
        match outcome {
            SortOutcome::Written(_) => self.documents_written += 1,
            SortOutcome::Excluded(_) => self.documents_excluded += 1,
            SortOutcome::Skipped(_) => self.documents_failed += 1,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration of the run, if it has finished
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds())
    }
}
