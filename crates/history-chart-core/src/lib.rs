// File: crates/history-chart-core/src/lib.rs
// Summary: Core library entry point; history aggregation, filtering and chart rendering.

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod model;
pub mod palette;
pub mod segments;
pub mod text;
pub mod types;

pub use aggregate::aggregate_by_execution_time;
pub use chart::{render_history_chart, HistoryChart};
pub use error::ChartError;
pub use filter::{filter_history, MAX_HISTORY_POINTS};
pub use geometry::ChartGeometry;
pub use model::{ExecutionTime, HistoricCoverage, Metric};
pub use palette::Palette;
pub use segments::present_runs;
pub use text::{FontSource, NoFonts, SystemFonts};
