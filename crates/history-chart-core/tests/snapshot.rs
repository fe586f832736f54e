// File: crates/history-chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic history chart (no fonts) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, records the snapshot so the next run compares against it.
// - In every mode, two renders of the same history must produce identical pixels.

use chrono::{Duration, TimeZone, Utc};
use history_chart_core::{HistoricCoverage, HistoryChart, NoFonts};

fn render_bytes() -> Vec<u8> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let series: Vec<_> = (0..12u64)
        .map(|i| {
            let h = HistoricCoverage::new(start + Duration::days(i as i64), None)
                .with_lines(40 + i * 4, 100, 140)
                .with_code_elements(10 + i, 30);
            // branch data only from the fourth run on
            if i >= 3 { h.with_branches(20 + i * 3, 80) } else { h }
        })
        .collect();
    HistoryChart::new(&series, true)
        .render_to_png_bytes(&NoFonts)
        .expect("render bytes")
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

#[test]
fn golden_history_chart() {
    let bytes = render_bytes();
    let again = render_bytes();
    assert_eq!(decode(&bytes).as_raw(), decode(&again).as_raw(), "rendering is not deterministic");

    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("history_chart.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update || !snap_path.exists() {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Recorded {} ({} bytes)", snap_path.display(), bytes.len());
    }

    let want = std::fs::read(&snap_path).expect("read snapshot");
    // Compare decoded pixel buffers to avoid PNG encoder variance
    let got_img = decode(&bytes);
    let want_img = decode(&want);
    assert_eq!(got_img.dimensions(), (1450, 150));
    assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
}
