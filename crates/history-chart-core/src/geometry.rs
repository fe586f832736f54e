// File: crates/history-chart-core/src/geometry.rs
// Summary: Maps series indices and coverage percentages onto chart pixels.

use crate::types::PLOT_AREA;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Coordinate mapping for a series of `points` records inside [`PLOT_AREA`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    area: RectI32,
    step: f32,
}

impl ChartGeometry {
    /// A single point is spaced as if there were two, so the step is always defined.
    pub fn new(points: usize) -> Self {
        Self::with_area(PLOT_AREA, points)
    }

    pub fn with_area(area: RectI32, points: usize) -> Self {
        let divisor = points.max(2) - 1;
        Self { area, step: area.width() as f32 / divisor as f32 }
    }

    /// Horizontal distance between two consecutive points.
    pub fn step(&self) -> f32 { self.step }

    pub fn area(&self) -> RectI32 { self.area }

    #[inline]
    pub fn x(&self, index: usize) -> f32 {
        self.area.left as f32 + index as f32 * self.step
    }

    /// 100% maps to the top edge, 0% to the bottom edge.
    #[inline]
    pub fn y(&self, percent: f64) -> f32 {
        let height = self.area.height() as f32;
        self.area.top as f32 + (100.0 - percent as f32) * height / 100.0
    }

    #[inline]
    pub fn point(&self, index: usize, percent: f64) -> (f32, f32) {
        (self.x(index), self.y(percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_percentages_hit_area_edges() {
        let g = ChartGeometry::new(10);
        assert_eq!(g.y(100.0), 15.0);
        assert_eq!(g.y(0.0), 115.0);
        assert_eq!(g.y(50.0), 65.0);
        assert_eq!(g.y(75.0), 40.0);
    }

    #[test]
    fn single_point_uses_two_point_step() {
        let one = ChartGeometry::new(1);
        let two = ChartGeometry::new(2);
        assert_eq!(one.step(), 1395.0);
        assert_eq!(one, two);
        assert_eq!(one.x(0), 50.0);
    }

    #[test]
    fn last_point_lands_on_right_edge() {
        let g = ChartGeometry::new(6);
        assert_eq!(g.step(), 279.0);
        assert_eq!(g.x(0), 50.0);
        assert_eq!(g.x(5), 1445.0);
    }

    #[test]
    fn custom_area() {
        let g = ChartGeometry::with_area(RectI32::from_ltrb(0, 0, 100, 200), 3);
        assert_eq!(g.point(2, 25.0), (100.0, 150.0));
    }
}
