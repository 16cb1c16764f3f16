// All sorting functionality is in jadoc-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod report;

// Re-export core types for convenience
pub use jadoc_core::*;

// Re-export CLI utilities
pub use report::{print_summary, save_report, summary_lines};
