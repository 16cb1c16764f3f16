use crate::classifier::LanguageClassifier;
use crate::config::SortConfig;
use crate::detector::LanguageDetector;
use crate::error::DocumentError;
use crate::extractors::{DispatchExtractor, TextExtractor};
use crate::types::SortOutcome;
use std::fs;
use std::path::{Path, PathBuf};

/// Extract, classify, and write one document.
///
/// Every failure on the way is logged as a single `"{error} skip: {path}"`
/// line and reported as `SortOutcome::Skipped`; nothing is propagated.
pub struct DocumentSorter {
    extractor: Box<dyn TextExtractor>,
    classifier: LanguageClassifier,
    output_extension: String,
}

impl DocumentSorter {
    /// Create DocumentSorter with full dependency injection
    pub fn new(extractor: Box<dyn TextExtractor>, classifier: LanguageClassifier) -> Self {
        Self {
            extractor,
            classifier,
            output_extension: "txt".to_string(),
        }
    }

    /// Default extractors, the given detector, and the config's tuning
    pub fn from_config(config: &SortConfig, detector: Box<dyn LanguageDetector>) -> Self {
        let extractor = Box::new(DispatchExtractor::from_config(config));
        let classifier =
            LanguageClassifier::new(detector).with_residual_ratio(config.residual_ratio);
        Self::new(extractor, classifier).with_output_extension(&config.output_extension)
    }

    pub fn with_output_extension(mut self, extension: &str) -> Self {
        self.output_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn process(&self, document: &Path, output_dir: &Path) -> SortOutcome {
        match self.try_process(document, output_dir) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("{e} skip: {}", document.display());
                SortOutcome::Skipped(e)
            }
        }
    }

    fn try_process(&self, document: &Path, output_dir: &Path) -> Result<SortOutcome, DocumentError> {
        let bytes = self.extractor.extract(document)?;
        let text = String::from_utf8(bytes)?;

        let language = self.classifier.classify(&text);
        if !language.is_target() {
            log::debug!("{language}: {}", document.display());
            return Ok(SortOutcome::Excluded(language));
        }

        fs::create_dir_all(output_dir)?;
        let target = self.output_path(document, output_dir);
        fs::write(&target, text)?;
        log::info!("{language}: {} -> {}", document.display(), target.display());

        Ok(SortOutcome::Written(target))
    }

    /// `<output_dir>/<document stem>.<output extension>`
    pub fn output_path(&self, document: &Path, output_dir: &Path) -> PathBuf {
        let mut name = document
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "output".into());
        name.push(".");
        name.push(&self.output_extension);
        output_dir.join(name)
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    pub fn detector_name(&self) -> &str {
        self.classifier.detector_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DetectError;
    use crate::types::{DetectorCode, Language};
    use tempfile::TempDir;

    /// Returns the same bytes for every path, or an unsupported-extension error
    struct FixedExtractor(Option<Vec<u8>>);

    impl TextExtractor for FixedExtractor {
        fn extract(&self, path: &Path) -> Result<Vec<u8>, DocumentError> {
            self.0.clone().ok_or_else(|| {
                DocumentError::UnsupportedExtension(
                    path.extension().unwrap_or_default().to_string_lossy().into_owned(),
                )
            })
        }

        fn name(&self) -> &str {
            "FixedExtractor"
        }

        fn supports_file_type(&self, _path: &Path) -> bool {
            true
        }
    }

    fn kana_means_japanese() -> Box<dyn LanguageDetector> {
        Box::new(|text: &str| {
            if text.is_empty() {
                Err(DetectError::NoFeatures)
            } else if text.chars().any(|c| ('\u{3040}'..='\u{30ff}').contains(&c)) {
                Ok(DetectorCode::new("ja"))
            } else {
                Ok(DetectorCode::new("en"))
            }
        })
    }

    fn sorter(bytes: Option<&[u8]>) -> DocumentSorter {
        DocumentSorter::new(
            Box::new(FixedExtractor(bytes.map(<[u8]>::to_vec))),
            LanguageClassifier::new(kana_means_japanese()),
        )
    }

    #[test]
    fn test_japanese_document_is_written() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out").join("nested");
        let text = "これは日本語の文書です。\n\n二段落目です。";

        let outcome = sorter(Some(text.as_bytes())).process(Path::new("in/memo.docx"), &out);

        let written = out.join("memo.txt");
        assert!(matches!(outcome, SortOutcome::Written(ref p) if *p == written));
        assert_eq!(fs::read_to_string(written).unwrap(), text);
    }

    #[test]
    fn test_english_document_leaves_no_trace() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        let outcome = sorter(Some(b"Quarterly budget summary")).process(Path::new("a.docx"), &out);

        assert!(matches!(outcome, SortOutcome::Excluded(Language::English)));
        assert!(!out.exists());
    }

    #[test]
    fn test_empty_text_is_excluded_as_other() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        let outcome = sorter(Some(b"")).process(Path::new("blank.doc"), &out);

        assert!(matches!(outcome, SortOutcome::Excluded(Language::Other)));
        assert!(!out.exists());
    }

    #[test]
    fn test_extraction_failure_is_skipped() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        let outcome = sorter(None).process(Path::new("scan.pdf"), &out);

        assert!(matches!(
            outcome,
            SortOutcome::Skipped(DocumentError::UnsupportedExtension(_))
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_utf8_is_skipped() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        let outcome = sorter(Some(&[0x82, 0xa0, 0xff])).process(Path::new("sjis.doc"), &out);

        assert!(matches!(outcome, SortOutcome::Skipped(DocumentError::Decode(_))));
        assert!(!out.exists());
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().to_path_buf();
        fs::write(out.join("memo.txt"), "stale").unwrap();

        let outcome = sorter(Some("新しい内容です".as_bytes())).process(Path::new("memo.doc"), &out);

        assert!(outcome.is_written());
        assert_eq!(fs::read_to_string(out.join("memo.txt")).unwrap(), "新しい内容です");
    }

    #[test]
    fn test_write_failure_is_skipped() {
        let dir = TempDir::new().unwrap();
        // A regular file where the output directory should go
        let blocker = dir.path().join("out");
        fs::write(&blocker, "").unwrap();

        let outcome = sorter(Some("ひらがな".as_bytes())).process(Path::new("memo.docx"), &blocker);

        assert!(matches!(outcome, SortOutcome::Skipped(DocumentError::Io(_))));
    }

    #[test]
    fn test_output_path_uses_stem_and_extension() {
        let s = sorter(None).with_output_extension(".md");
        assert_eq!(
            s.output_path(Path::new("a/b/report.v2.docx"), Path::new("out")),
            PathBuf::from("out/report.v2.md")
        );
    }

    #[test]
    fn test_from_config_wires_defaults() {
        let s = DocumentSorter::from_config(&SortConfig::default(), kana_means_japanese());
        assert_eq!(s.extractor_name(), "DispatchExtractor");
        assert_eq!(s.detector_name(), "fn");
        assert_eq!(
            s.output_path(Path::new("x.doc"), Path::new("o")),
            PathBuf::from("o/x.txt")
        );
    }
}
