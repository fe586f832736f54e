// File: crates/history-report/src/builder.rs
// Summary: Summary report that renders the coverage history chart and writes it as PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use history_chart_core::{aggregate_by_execution_time, filter_history, render_history_chart, HistoricCoverage};
use tracing::{error, info};

use crate::settings::ReportSettings;

/// Report type name; also the subdirectory used when every report type gets its own folder.
pub const REPORT_TYPE: &str = "PngChart";
/// File name of the rendered chart.
pub const CHART_FILE_NAME: &str = "CoverageHistory.png";

pub struct PngChartReportBuilder {
    pub settings: ReportSettings,
}

impl PngChartReportBuilder {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn report_type(&self) -> &'static str { REPORT_TYPE }

    /// Aggregate, filter and render `history`, then write the chart.
    /// Returns the written path, or `None` when there was nothing to plot or the
    /// target directory could not be created.
    pub fn create_summary_report(&self, history: &[HistoricCoverage]) -> Result<Option<PathBuf>> {
        let aggregated = aggregate_by_execution_time(history);
        let filtered = filter_history(&aggregated, self.settings.maximum_points);

        if !filtered.iter().any(HistoricCoverage::has_line_or_branch_data) {
            info!(records = history.len(), "no line or branch coverage history; skipping chart");
            return Ok(None);
        }

        let image = render_history_chart(&filtered, self.settings.method_coverage_available)
            .context("rendering coverage history chart")?;

        let mut target_directory = self.settings.target_directory.clone();
        if self.settings.create_subdirectory_for_all_report_types {
            target_directory.push(self.report_type());
            if !target_directory.exists() {
                if let Err(e) = std::fs::create_dir_all(&target_directory) {
                    error!("target directory '{}' could not be created: {e}", target_directory.display());
                    return Ok(None);
                }
            }
        }

        let target_path = target_directory.join(CHART_FILE_NAME);
        info!("Writing report file '{}'", target_path.display());
        std::fs::write(&target_path, &image)
            .with_context(|| format!("writing {}", target_path.display()))?;
        Ok(Some(target_path))
    }
}
