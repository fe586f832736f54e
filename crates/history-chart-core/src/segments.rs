// File: crates/history-chart-core/src/segments.rs
// Summary: Split a metric's values into maximal runs of present values.

use std::ops::Range;

/// Lazily yields index ranges of consecutive `Some` values.
/// A gap (`None`) always ends a run, so no line is ever drawn across missing data.
pub fn present_runs(values: &[Option<f64>]) -> PresentRuns<'_> {
    PresentRuns { values, pos: 0 }
}

pub struct PresentRuns<'a> {
    values: &'a [Option<f64>],
    pos: usize,
}

impl Iterator for PresentRuns<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.values.len();
        while self.pos < n && self.values[self.pos].is_none() {
            self.pos += 1;
        }
        if self.pos >= n {
            return None;
        }
        let start = self.pos;
        while self.pos < n && self.values[self.pos].is_some() {
            self.pos += 1;
        }
        Some(start..self.pos)
    }
}
