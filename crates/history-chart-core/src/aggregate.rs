// File: crates/history-chart-core/src/aggregate.rs
// Summary: Collapse per-class history records into one summed record per execution time.

use std::collections::BTreeMap;

use crate::model::{ExecutionTime, HistoricCoverage};

/// Sum every counter of all records sharing an execution time.
/// Output is ascending by execution time with exactly one record per distinct time.
/// The tag is taken from the first record seen for that time; which record comes
/// first is up to the caller's input order, so the choice is stable but arbitrary.
/// Sums saturate at `u64::MAX` instead of overflowing.
pub fn aggregate_by_execution_time(records: &[HistoricCoverage]) -> Vec<HistoricCoverage> {
    let mut buckets: BTreeMap<ExecutionTime, HistoricCoverage> = BTreeMap::new();
    for r in records {
        let acc = buckets
            .entry(r.execution_time)
            .or_insert_with(|| HistoricCoverage::new(r.execution_time, r.tag.clone()));
        acc.covered_lines = acc.covered_lines.saturating_add(r.covered_lines);
        acc.coverable_lines = acc.coverable_lines.saturating_add(r.coverable_lines);
        acc.total_lines = acc.total_lines.saturating_add(r.total_lines);
        acc.covered_branches = acc.covered_branches.saturating_add(r.covered_branches);
        acc.total_branches = acc.total_branches.saturating_add(r.total_branches);
        acc.covered_code_elements = acc.covered_code_elements.saturating_add(r.covered_code_elements);
        acc.total_code_elements = acc.total_code_elements.saturating_add(r.total_code_elements);
    }
    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn at(minutes: i64) -> ExecutionTime {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn rec(minutes: i64, tag: &str, covered: u64, coverable: u64) -> HistoricCoverage {
        HistoricCoverage::new(at(minutes), Some(tag.to_string()))
            .with_lines(covered, coverable, coverable + 5)
            .with_branches(covered / 2, coverable / 2)
            .with_code_elements(1, 2)
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(aggregate_by_execution_time(&[]).is_empty());
    }

    #[test]
    fn sums_counters_per_execution_time() {
        let input = vec![
            rec(10, "b", 4, 10),
            rec(0, "a", 1, 2),
            rec(10, "b2", 6, 10),
            rec(0, "a2", 3, 4),
            rec(5, "c", 7, 7),
        ];
        let out = aggregate_by_execution_time(&input);
        assert_eq!(out.len(), 3);

        let times: Vec<_> = out.iter().map(|h| h.execution_time).collect();
        assert_eq!(times, vec![at(0), at(5), at(10)]);

        for h in &out {
            let group: Vec<_> = input.iter().filter(|r| r.execution_time == h.execution_time).collect();
            assert_eq!(h.covered_lines, group.iter().map(|r| r.covered_lines).sum::<u64>());
            assert_eq!(h.coverable_lines, group.iter().map(|r| r.coverable_lines).sum::<u64>());
            assert_eq!(h.total_lines, group.iter().map(|r| r.total_lines).sum::<u64>());
            assert_eq!(h.covered_branches, group.iter().map(|r| r.covered_branches).sum::<u64>());
            assert_eq!(h.total_branches, group.iter().map(|r| r.total_branches).sum::<u64>());
            assert_eq!(h.covered_code_elements, group.iter().map(|r| r.covered_code_elements).sum::<u64>());
            assert_eq!(h.total_code_elements, group.iter().map(|r| r.total_code_elements).sum::<u64>());
        }
    }

    #[test]
    fn tag_comes_from_first_record_of_a_time() {
        let input = vec![rec(0, "first", 1, 2), rec(0, "second", 1, 2)];
        let out = aggregate_by_execution_time(&input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tag.as_deref(), Some("first"));
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let big = HistoricCoverage::new(at(0), None)
            .with_lines(u64::MAX - 1, u64::MAX - 1, u64::MAX)
            .with_branches(3, 4);
        let out = aggregate_by_execution_time(&[big.clone(), big]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].covered_lines, u64::MAX);
        assert_eq!(out[0].total_lines, u64::MAX);
        assert_eq!(out[0].covered_branches, 6);
        assert_eq!(out[0].coverage_quota(), Some(100.0));
    }

    #[test]
    fn distinct_times_pass_through() {
        let input = vec![rec(0, "a", 50, 100), rec(1, "b", 75, 100)];
        assert_eq!(aggregate_by_execution_time(&input), input);
    }
}
