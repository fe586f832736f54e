// File: crates/history-chart-core/src/filter.rs
// Summary: Collapse adjacent duplicate history records and keep the most recent `maximum`.

use crate::model::HistoricCoverage;

/// Default number of points plotted on the history chart.
pub const MAX_HISTORY_POINTS: usize = 100;

/// Drop records equal to their predecessor, then keep the last `maximum` records.
/// Only adjacent duplicates collapse; order is preserved.
pub fn filter_history(series: &[HistoricCoverage], maximum: usize) -> Vec<HistoricCoverage> {
    let mut out: Vec<HistoricCoverage> = Vec::with_capacity(series.len().min(maximum));
    if maximum == 0 {
        return out;
    }
    for h in series {
        if out.last() != Some(h) {
            out.push(h.clone());
        }
    }
    let excess = out.len().saturating_sub(maximum);
    out.drain(..excess);
    out
}
