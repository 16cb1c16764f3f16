use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

// Import from jadoc-core
use jadoc_core::{SortConfig, TreeWalker};

// Import CLI utilities
use jadoc::{print_summary, save_report};

#[derive(Parser)]
#[command(name = "jadoc")]
#[command(about = "Mirror the Japanese .doc/.docx documents of a directory tree as plain text")]
struct Args {
    /// Directory tree to read .doc/.docx documents from
    source_directory: PathBuf,

    /// Root of the mirrored output tree (directories that already exist there are skipped)
    target_directory: PathBuf,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    println!("🦀 jadoc Japanese document sorter");

    if !args.source_directory.is_dir() {
        anyhow::bail!(
            "Source directory not found: {}",
            args.source_directory.display()
        );
    }

    let config = SortConfig::load_with_fallback(args.config.as_deref());
    if let Some(config_path) = &args.config {
        println!("📋 Loaded config from: {}", config_path);
    } else {
        println!("📋 Using default config");
    }

    let walker = create_walker(&config)?;
    log::debug!(
        "extractor: {}, detector: {}",
        walker.sorter().extractor_name(),
        walker.sorter().detector_name()
    );

    println!(
        "📄 Sorting: {} → {}",
        args.source_directory.display(),
        args.target_directory.display()
    );

    let report = walker.run(&args.source_directory, &args.target_directory);
    print_summary(&report);

    if let Some(report_path) = &args.report {
        save_report(&report, report_path)?;
        println!("💾 Report saved to: {}", report_path.display());
    }

    Ok(())
}

/// Create TreeWalker with the whatlang detector backend
#[cfg(feature = "whatlang-backend")]
fn create_walker(config: &SortConfig) -> Result<TreeWalker> {
    Ok(TreeWalker::from_config(
        config,
        Box::new(jadoc_core::WhatlangDetector::new()),
    ))
}

/// Fallback when no detector backend is compiled in
#[cfg(not(feature = "whatlang-backend"))]
fn create_walker(_config: &SortConfig) -> Result<TreeWalker> {
    Err(anyhow::anyhow!(
        "No language detector compiled in!\n\
         Compile with: --features whatlang-backend"
    ))
}
