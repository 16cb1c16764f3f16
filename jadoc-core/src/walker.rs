use crate::config::SortConfig;
use crate::detector::LanguageDetector;
use crate::sorter::DocumentSorter;
use crate::types::RunReport;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks an input tree top-down and sorts every eligible document into the
/// mirrored directory under the output root.
///
/// A directory whose mirror already exists is treated as done: its files are
/// skipped, but its subdirectories are still visited and checked on their own.
/// An interrupted run therefore leaves any unwritten files of a half-finished
/// directory behind on resume.
pub struct TreeWalker {
    sorter: DocumentSorter,
    extensions: Vec<String>,
}

impl TreeWalker {
    pub fn new(sorter: DocumentSorter, extensions: Vec<String>) -> Self {
        Self { sorter, extensions }
    }

    pub fn from_config(config: &SortConfig, detector: Box<dyn LanguageDetector>) -> Self {
        Self::new(
            DocumentSorter::from_config(config, detector),
            config.extensions.clone(),
        )
    }

    pub fn sorter(&self) -> &DocumentSorter {
        &self.sorter
    }

    pub fn run(&self, input_root: &Path, output_root: &Path) -> RunReport {
        let mut report = RunReport::new(input_root, output_root);

        for entry in WalkDir::new(input_root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("{e} skip: {}", e.path().unwrap_or(input_root).display());
                    report.walk_errors += 1;
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                self.visit_directory(entry.path(), input_root, output_root, &mut report);
            }
        }

        report.finish();
        report
    }

    fn visit_directory(
        &self,
        dir: &Path,
        input_root: &Path,
        output_root: &Path,
        report: &mut RunReport,
    ) {
        report.directories_visited += 1;

        let mirror = mirror_path(input_root, output_root, dir);
        if mirror.exists() {
            log::info!("skip: {} already exists", mirror.display());
            report.directories_skipped += 1;
            return;
        }

        let documents = match self.eligible_files(dir) {
            Ok(documents) => documents,
            Err(e) => {
                log::warn!("{e} skip: {}", dir.display());
                report.walk_errors += 1;
                return;
            }
        };

        for document in documents {
            let outcome = self.sorter.process(&document, &mirror);
            report.record(&outcome);
        }
    }

    /// Files directly inside `dir` whose names end with a configured suffix, sorted by name
    fn eligible_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if self.matches_extension(&name) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// Output directory for `dir`: its path relative to `input_root`, joined onto `output_root`
pub fn mirror_path(input_root: &Path, output_root: &Path, dir: &Path) -> PathBuf {
    match dir.strip_prefix(input_root) {
        Ok(relative) if relative.as_os_str().is_empty() => output_root.to_path_buf(),
        Ok(relative) => output_root.join(relative),
        Err(_) => output_root.to_path_buf(),
    }
}
