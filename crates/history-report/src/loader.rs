// File: crates/history-report/src/loader.rs
// Summary: Load per-class historic coverage samples from a headered CSV file.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use history_chart_core::{ExecutionTime, HistoricCoverage};
use tracing::{debug, warn};

/// Load history CSV into records. Columns are found by header name, case-insensitive.
/// Rows without a readable execution time are skipped; missing counters read as 0.
pub fn load_history_csv(path: &Path) -> Result<Vec<HistoricCoverage>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_history(rdr).with_context(|| format!("reading {}", path.display()))
}

/// Same as [`load_history_csv`] over any reader.
pub fn read_history_csv<R: std::io::Read>(input: R) -> Result<Vec<HistoricCoverage>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    read_history(rdr)
}

fn read_history<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<HistoricCoverage>> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase().replace(['_', '-', ' '], ""))
        .collect::<Vec<_>>();
    debug!(?headers, "history csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_time = idx(&["executiontime", "time", "timestamp", "date", "datetime"]);
    let i_tag = idx(&["tag", "label"]);
    let i_covered_lines = idx(&["coveredlines", "linescovered"]);
    let i_coverable_lines = idx(&["coverablelines", "linescoverable"]);
    let i_total_lines = idx(&["totallines", "lines"]);
    let i_covered_branches = idx(&["coveredbranches", "branchescovered"]);
    let i_total_branches = idx(&["totalbranches", "branches"]);
    let i_covered_elements = idx(&["coveredcodeelements", "coveredmethods"]);
    let i_total_elements = idx(&["totalcodeelements", "totalmethods", "methods"]);

    let Some(i_time) = i_time else {
        anyhow::bail!("no execution time column in headers {:?}", headers);
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let count = |i: Option<usize>| -> u64 {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<u64>().ok()).unwrap_or(0)
        };

        let Some(execution_time) = rec.get(i_time).and_then(parse_execution_time) else {
            warn!(row = row + 1, "skipping history row without a readable execution time");
            continue;
        };
        let tag = i_tag
            .and_then(|ix| rec.get(ix))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        out.push(
            HistoricCoverage::new(execution_time, tag)
                .with_lines(count(i_covered_lines), count(i_coverable_lines), count(i_total_lines))
                .with_branches(count(i_covered_branches), count(i_total_branches))
                .with_code_elements(count(i_covered_elements), count(i_total_elements)),
        );
    }
    Ok(out)
}

/// RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC), or integer epoch seconds/milliseconds.
pub fn parse_execution_time(s: &str) -> Option<ExecutionTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms -> sec
        if n > 10_i64.pow(12) {
            return DateTime::from_timestamp_millis(n);
        }
        return DateTime::from_timestamp(n, 0);
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|t| t.and_utc())
}
