use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Default value functions for serde
fn default_extensions() -> Vec<String> {
    vec![".doc".to_string(), ".docx".to_string()]
}

fn default_output_extension() -> String {
    "txt".to_string()
}

fn default_residual_ratio() -> f64 {
    0.5
}

fn default_antiword_path() -> PathBuf {
    PathBuf::from("antiword")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    /// File name suffixes that select a file for sorting (case-sensitive)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Extension of the text files written into the output tree
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    /// Share of the text the residual (after stripping Latin letters, digits
    /// and spaces) must reach before an English verdict is re-checked
    #[serde(default = "default_residual_ratio")]
    pub residual_ratio: f64,
    /// Program used to pull text out of binary `.doc` files
    #[serde(default = "default_antiword_path")]
    pub antiword_path: PathBuf,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            output_extension: default_output_extension(),
            residual_ratio: default_residual_ratio(),
            antiword_path: default_antiword_path(),
        }
    }
}

impl SortConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: SortConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                log::warn!("Failed to load config from {p} ({e:#}), using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
