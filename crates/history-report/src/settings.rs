// File: crates/history-report/src/settings.rs
// Summary: Configuration consumed by the history chart report builder.

use std::path::PathBuf;

use history_chart_core::MAX_HISTORY_POINTS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportSettings {
    pub target_directory: PathBuf,
    /// Write into `<target>/<report type>/` instead of `<target>/`.
    pub create_subdirectory_for_all_report_types: bool,
    /// Method coverage is collected, so the code element trend is drawn.
    pub method_coverage_available: bool,
    pub maximum_points: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            target_directory: PathBuf::from("target/out"),
            create_subdirectory_for_all_report_types: false,
            method_coverage_available: false,
            maximum_points: MAX_HISTORY_POINTS,
        }
    }
}
