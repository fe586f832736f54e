// File: crates/history-chart-core/src/chart.rs
// Summary: History chart and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::geometry::ChartGeometry;
use crate::model::{HistoricCoverage, Metric};
use crate::palette::Palette;
use crate::segments::present_runs;
use crate::text::{FontSource, LabelPainter, SystemFonts};
use crate::types::{GRID_PERCENTAGES, HEIGHT, LABEL_RIGHT, LABEL_SIZE, MARKER_RADIUS, TREND_STROKE, WIDTH};

/// Distance between a label's top edge and its gridline.
const LABEL_OFFSET: f32 = 10.0;

/// Coverage trend chart over an already aggregated and filtered history.
pub struct HistoryChart<'a> {
    pub series: &'a [HistoricCoverage],
    /// Draw the code element (method) trend in addition to line and branch coverage.
    pub show_code_elements: bool,
    pub palette: Palette,
}

impl<'a> HistoryChart<'a> {
    pub fn new(series: &'a [HistoricCoverage], show_code_elements: bool) -> Self {
        Self { series, show_code_elements, palette: Palette::coverage() }
    }

    /// Metrics drawn by this chart, in drawing order.
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        Metric::ALL
            .into_iter()
            .filter(move |m| *m != Metric::CodeElement || self.show_code_elements)
    }

    /// Render the chart and return it PNG-encoded.
    pub fn render_to_png_bytes(&self, fonts: &dyn FontSource) -> Result<Vec<u8>> {
        let mut surface = new_surface()?;
        self.draw(surface.canvas(), fonts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart into a tightly packed RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, fonts: &dyn FontSource) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = new_surface()?;
        self.draw(surface.canvas(), fonts);

        let info = skia::ImageInfo::new(
            (WIDTH, HEIGHT),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = WIDTH as usize * 4;
        let mut pixels = vec![0u8; stride * HEIGHT as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::PixelRead);
        }
        Ok((pixels, WIDTH as u32, HEIGHT as u32, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, fonts: &dyn FontSource) {
        debug!(points = self.series.len(), code_elements = self.show_code_elements, "rendering coverage history chart");
        let geometry = ChartGeometry::new(self.series.len());

        canvas.clear(self.palette.background);
        draw_grid(canvas, &geometry, self.series.len(), self.palette.grid);

        // Lines first so the markers sit on top of them.
        for metric in self.metrics() {
            let quotas = metric.quotas(self.series);
            draw_trend(canvas, &geometry, &quotas, self.palette.trend(metric));
        }
        for metric in self.metrics() {
            let quotas = metric.quotas(self.series);
            draw_markers(canvas, &geometry, &quotas, self.palette.trend(metric));
        }

        match fonts.label_typeface() {
            Some(typeface) => {
                let labels = LabelPainter::new(typeface, LABEL_SIZE, self.palette.axis_label);
                draw_axis_labels(canvas, &geometry, &labels);
            }
            None => debug!("no label font available; skipping axis labels"),
        }
    }
}

/// Render `series` with system fonts. Entry point for report builders.
pub fn render_history_chart(series: &[HistoricCoverage], show_code_elements: bool) -> Result<Vec<u8>> {
    HistoryChart::new(series, show_code_elements).render_to_png_bytes(&SystemFonts::new())
}

// ---- helpers ----------------------------------------------------------------

fn new_surface() -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((WIDTH, HEIGHT))
        .ok_or(ChartError::Surface { width: WIDTH, height: HEIGHT })
}

fn draw_grid(canvas: &skia::Canvas, geometry: &ChartGeometry, points: usize, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::PathEffect::dash(&[3.0, 1.0], 0.0));

    let area = geometry.area();
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);

    // horizontals
    for p in GRID_PERCENTAGES {
        let y = geometry.y(p as f64);
        canvas.draw_line((l, y), (r, y), &paint);
    }
    // verticals, one per point
    for i in 0..points {
        let x = geometry.x(i);
        canvas.draw_line((x, t), (x, b), &paint);
    }
}

fn draw_trend(canvas: &skia::Canvas, geometry: &ChartGeometry, quotas: &[Option<f64>], color: skia::Color) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(TREND_STROKE);
    stroke.set_color(color);

    for run in present_runs(quotas) {
        // a lone value only gets its marker
        if run.len() < 2 {
            continue;
        }
        let mut points = run.filter_map(|i| quotas[i].map(|v| geometry.point(i, v)));
        let Some(first) = points.next() else { continue };
        let mut path = skia::Path::new();
        path.move_to(first);
        for pt in points {
            path.line_to(pt);
        }
        canvas.draw_path(&path, &stroke);
    }
}

fn draw_markers(canvas: &skia::Canvas, geometry: &ChartGeometry, quotas: &[Option<f64>], color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    for (i, v) in quotas.iter().enumerate() {
        if let Some(v) = *v {
            canvas.draw_circle(geometry.point(i, v), MARKER_RADIUS, &fill);
        }
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, geometry: &ChartGeometry, labels: &LabelPainter) {
    for p in GRID_PERCENTAGES {
        let top = geometry.y(p as f64) - LABEL_OFFSET;
        labels.draw_right(canvas, &p.to_string(), LABEL_RIGHT, top);
    }
}
