// File: crates/history-report/src/lib.rs
// Summary: Report layer around the history chart core: settings, CSV loading and PNG output.

pub mod builder;
pub mod loader;
pub mod settings;

pub use builder::{PngChartReportBuilder, CHART_FILE_NAME, REPORT_TYPE};
pub use loader::{load_history_csv, read_history_csv};
pub use settings::ReportSettings;
