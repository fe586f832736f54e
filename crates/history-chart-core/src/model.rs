// File: crates/history-chart-core/src/model.rs
// Summary: Historic coverage record, derived quotas and the plotted metrics.

use chrono::{DateTime, Utc};

/// Timestamp of one report generation run.
pub type ExecutionTime = DateTime<Utc>;

/// One timestamped snapshot of coverage counters.
/// Contract: quotas are derived from the counters and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HistoricCoverage {
    pub execution_time: ExecutionTime,
    pub tag: Option<String>,
    pub covered_lines: u64,
    pub coverable_lines: u64,
    pub total_lines: u64,
    pub covered_branches: u64,
    pub total_branches: u64,
    pub covered_code_elements: u64,
    pub total_code_elements: u64,
}

impl HistoricCoverage {
    /// Create an empty record (all counters zero, so every quota is absent).
    pub fn new(execution_time: ExecutionTime, tag: Option<String>) -> Self {
        Self {
            execution_time,
            tag,
            covered_lines: 0,
            coverable_lines: 0,
            total_lines: 0,
            covered_branches: 0,
            total_branches: 0,
            covered_code_elements: 0,
            total_code_elements: 0,
        }
    }

    pub fn with_lines(mut self, covered: u64, coverable: u64, total: u64) -> Self {
        self.covered_lines = covered;
        self.coverable_lines = coverable;
        self.total_lines = total;
        self
    }

    pub fn with_branches(mut self, covered: u64, total: u64) -> Self {
        self.covered_branches = covered;
        self.total_branches = total;
        self
    }

    pub fn with_code_elements(mut self, covered: u64, total: u64) -> Self {
        self.covered_code_elements = covered;
        self.total_code_elements = total;
        self
    }

    /// Line coverage in percent; `None` when nothing was coverable.
    pub fn coverage_quota(&self) -> Option<f64> {
        quota(self.covered_lines, self.coverable_lines)
    }

    pub fn branch_coverage_quota(&self) -> Option<f64> {
        quota(self.covered_branches, self.total_branches)
    }

    pub fn code_element_coverage_quota(&self) -> Option<f64> {
        quota(self.covered_code_elements, self.total_code_elements)
    }

    /// True when the record carries data for the line or branch trend.
    pub fn has_line_or_branch_data(&self) -> bool {
        self.coverage_quota().is_some() || self.branch_coverage_quota().is_some()
    }
}

fn quota(covered: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((covered as f64 * 100.0 / total as f64).clamp(0.0, 100.0))
}

/// The three trends drawn on the history chart, in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Line,
    Branch,
    CodeElement,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Line, Metric::Branch, Metric::CodeElement];

    /// Quota of this metric for one record.
    pub fn quota(self, h: &HistoricCoverage) -> Option<f64> {
        match self {
            Metric::Line => h.coverage_quota(),
            Metric::Branch => h.branch_coverage_quota(),
            Metric::CodeElement => h.code_element_coverage_quota(),
        }
    }

    /// Per-point quotas of this metric across a series.
    pub fn quotas(self, series: &[HistoricCoverage]) -> Vec<Option<f64>> {
        series.iter().map(|h| self.quota(h)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> ExecutionTime {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn quota_absent_without_denominator() {
        let h = HistoricCoverage::new(t0(), None).with_lines(0, 0, 10);
        assert_eq!(h.coverage_quota(), None);
        assert_eq!(h.branch_coverage_quota(), None);
        assert_eq!(h.code_element_coverage_quota(), None);
        assert!(!h.has_line_or_branch_data());
    }

    #[test]
    fn zero_percent_is_not_absent() {
        let h = HistoricCoverage::new(t0(), None).with_branches(0, 8);
        assert_eq!(h.branch_coverage_quota(), Some(0.0));
        assert!(h.has_line_or_branch_data());
    }

    #[test]
    fn quotas_are_percentages() {
        let h = HistoricCoverage::new(t0(), None)
            .with_lines(50, 200, 300)
            .with_branches(3, 4)
            .with_code_elements(9, 10);
        assert_eq!(Metric::Line.quota(&h), Some(25.0));
        assert_eq!(Metric::Branch.quota(&h), Some(75.0));
        assert_eq!(Metric::CodeElement.quota(&h), Some(90.0));
    }

    #[test]
    fn quota_clamped_to_hundred() {
        let h = HistoricCoverage::new(t0(), None).with_lines(12, 10, 10);
        assert_eq!(h.coverage_quota(), Some(100.0));
    }
}
