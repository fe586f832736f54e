// File: crates/history-chart-core/src/text.rs
// Summary: Font capability lookup and right-aligned axis label drawing.

use skia_safe as skia;

/// Resolves the typeface used for axis labels.
/// Returning `None` means labels are skipped; the rest of the chart is still drawn.
pub trait FontSource {
    fn label_typeface(&self) -> Option<skia::Typeface>;
}

/// Looks up the first installed family out of a preference list.
pub struct SystemFonts {
    families: Vec<String>,
}

impl SystemFonts {
    pub fn new() -> Self {
        Self::with_families(&["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans", "sans-serif"])
    }

    pub fn with_families(families: &[&str]) -> Self {
        Self { families: families.iter().map(|f| f.to_string()).collect() }
    }
}

impl Default for SystemFonts {
    fn default() -> Self { Self::new() }
}

impl FontSource for SystemFonts {
    fn label_typeface(&self) -> Option<skia::Typeface> {
        let mgr = skia::FontMgr::default();
        self.families
            .iter()
            .find_map(|family| mgr.match_family_style(family, skia::FontStyle::normal()))
    }
}

/// Never provides a typeface. Useful for headless environments and pixel-exact tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFonts;

impl FontSource for NoFonts {
    fn label_typeface(&self) -> Option<skia::Typeface> { None }
}

/// Draws short labels whose right edge sits at a given x.
pub struct LabelPainter {
    font: skia::Font,
    paint: skia::Paint,
}

impl LabelPainter {
    pub fn new(typeface: skia::Typeface, size: f32, color: skia::Color) -> Self {
        let font = skia::Font::from_typeface(typeface, size.max(1.0));
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        Self { font, paint }
    }

    pub fn measure_width(&self, text: &str) -> f32 {
        self.font.measure_str(text, Some(&self.paint)).0
    }

    /// `top` is the upper edge of the text box, not the baseline.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, top: f32) {
        let (_, metrics) = self.font.metrics();
        let baseline = top - metrics.ascent;
        let x = right - self.measure_width(text);
        canvas.draw_str(text, (x, baseline), &self.font, &self.paint);
    }
}
