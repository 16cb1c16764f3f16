//! Run summary output - console summary and JSON report file

use anyhow::{Context, Result};
use jadoc_core::RunReport;
use std::fs;
use std::path::Path;

/// Human-readable summary of a finished run, one line per counter
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = vec![
        format!("   - Directories visited: {}", report.directories_visited),
        format!(
            "   - Directories skipped (already mirrored): {}",
            report.directories_skipped
        ),
        format!("   - Documents examined: {}", report.documents_seen),
        format!("   - Japanese documents written: {}", report.documents_written),
        format!("   - Other-language documents: {}", report.documents_excluded),
        format!("   - Documents skipped on error: {}", report.documents_failed),
    ];
    if report.walk_errors > 0 {
        lines.push(format!("   - Unreadable directory entries: {}", report.walk_errors));
    }
    if let Some(ms) = report.elapsed_ms() {
        lines.push(format!("   - Elapsed: {:.3}s", ms as f64 / 1000.0));
    }
    lines
}

pub fn print_summary(report: &RunReport) {
    println!("📊 Run summary:");
    for line in summary_lines(report) {
        println!("{line}");
    }
}

/// Save the run report as pretty-printed JSON, creating parent directories
pub fn save_report(report: &RunReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
