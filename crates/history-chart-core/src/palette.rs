// File: crates/history-chart-core/src/palette.rs
// Summary: Fixed colors of the coverage history chart.

use skia_safe as skia;

use crate::model::Metric;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub line_coverage: skia::Color,
    pub branch_coverage: skia::Color,
    pub code_element_coverage: skia::Color,
}

impl Palette {
    pub const fn coverage() -> Self {
        Self {
            background: skia::Color::WHITE,
            grid: skia::Color::new(0xFFD3D3D3),                  // light gray
            axis_label: skia::Color::new(0xFF808080),            // gray
            line_coverage: skia::Color::new(0xFFCC0000),         // red
            branch_coverage: skia::Color::new(0xFF1C2298),       // blue
            code_element_coverage: skia::Color::new(0xFF0AAD0A), // green
        }
    }

    /// Stroke and marker color of a trend.
    pub fn trend(&self, metric: Metric) -> skia::Color {
        match metric {
            Metric::Line => self.line_coverage,
            Metric::Branch => self.branch_coverage,
            Metric::CodeElement => self.code_element_coverage,
        }
    }
}

impl Default for Palette {
    fn default() -> Self { Self::coverage() }
}
