//! Word 97-2003 (.doc) text extraction
//!
//! The binary `.doc` format (MS-DOC, an OLE2/CFB container) is not parsed
//! here. Text comes from running `antiword <path>` and capturing its stdout,
//! the same tool most text-extraction stacks shell out to for this format.

use super::{extension_of, TextExtractor};
use crate::error::DocumentError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Extracts `.doc` text through an external `antiword` binary
#[derive(Debug, Clone)]
pub struct AntiwordExtractor {
    program: PathBuf,
}

impl AntiwordExtractor {
    /// `program` is either a bare name resolved through the search path or a full path
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn shell_error(&self, message: impl Into<String>) -> DocumentError {
        DocumentError::Shell {
            program: self.program.display().to_string(),
            message: message.into(),
        }
    }
}

impl Default for AntiwordExtractor {
    fn default() -> Self {
        Self::new("antiword")
    }
}

impl TextExtractor for AntiwordExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<u8>, DocumentError> {
        // A vanished or unreadable input is an OS error, not a tool failure
        std::fs::metadata(path)?;

        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .map_err(|e| self.shell_error(format!("could not run: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.shell_error(format!("{} ({})", output.status, stderr.trim())));
        }

        Ok(output.stdout)
    }

    fn name(&self) -> &str {
        "AntiwordExtractor"
    }

    fn supports_file_type(&self, path: &Path) -> bool {
        extension_of(path) == "doc"
    }
}
