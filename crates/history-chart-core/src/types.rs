// File: crates/history-chart-core/src/types.rs
// Summary: Fixed canvas size, drawable area and gridline positions of the history chart.

use crate::geometry::RectI32;

/// Canvas width in pixels.
pub const WIDTH: i32 = 1450;
/// Canvas height in pixels.
pub const HEIGHT: i32 = 150;

/// Pixel rectangle the trends are plotted in. Top is 100%, bottom is 0%.
pub const PLOT_AREA: RectI32 = RectI32::from_ltrb(50, 15, 1445, 115);

/// Percentages that get a horizontal gridline and an axis label.
pub const GRID_PERCENTAGES: [u32; 5] = [100, 75, 50, 25, 0];

/// Right edge of the axis labels.
pub const LABEL_RIGHT: f32 = 38.0;
/// Label font size in pixels.
pub const LABEL_SIZE: f32 = 11.0;

/// Stroke width of a trend line.
pub const TREND_STROKE: f32 = 2.0;
/// Radius of the marker drawn at every present value.
pub const MARKER_RADIUS: f32 = 3.0;
