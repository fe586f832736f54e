// File: crates/history-report/src/main.rs
// Summary: Loads a coverage history CSV and writes CoverageHistory.png.
//
// Usage: coverage-history <history.csv> [target_dir] [--pro] [--subdir]
// Logging verbosity follows RUST_LOG (default: info).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use coverage_history_report::{load_history_csv, PngChartReportBuilder, ReportSettings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut settings = ReportSettings::default();
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pro" => settings.method_coverage_available = true,
            "--subdir" => settings.create_subdirectory_for_all_report_types = true,
            _ => positional.push(arg),
        }
    }

    let Some(input) = positional.first() else {
        anyhow::bail!("usage: coverage-history <history.csv> [target_dir] [--pro] [--subdir]");
    };
    if let Some(dir) = positional.get(1) {
        settings.target_directory = PathBuf::from(dir);
    }
    std::fs::create_dir_all(&settings.target_directory)
        .with_context(|| format!("creating {}", settings.target_directory.display()))?;

    let history = load_history_csv(Path::new(input))
        .with_context(|| format!("failed to load history '{input}'"))?;
    tracing::info!(records = history.len(), "loaded coverage history");

    match PngChartReportBuilder::new(settings).create_summary_report(&history)? {
        Some(path) => tracing::info!("wrote {}", path.display()),
        None => tracing::warn!("no chart written"),
    }
    Ok(())
}
