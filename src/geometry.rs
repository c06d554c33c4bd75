//! Geometric primitives shared by the Grid, the search and the smoothing pass.

use crate::Point;

/// A rectangular shape measured in whole Cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    width: usize,
    height: usize,
}

impl Rect {
    /// Creates a Rect of the given size.
    pub fn new(width: usize, height: usize) -> Rect {
        Rect { width, height }
    }

    /// The width of the rectangle.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the rectangle.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of Cells the rectangle covers.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the Point lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }
}

use std::fmt;
impl fmt::Display for Rect {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}x{}", self.width, self.height)
    }
}

/// Euclidean distance between two Cell positions.
pub fn distance(from: Point, to: Point) -> f64 {
    distance_squared(from, to).sqrt()
}

/// Euclidean distance squared; avoids the square root where comparing suffices.
pub fn distance_squared(from: Point, to: Point) -> f64 {
    let dx = from.0 as f64 - to.0 as f64;
    let dy = from.1 as f64 - to.1 as f64;
    dx * dx + dy * dy
}

/// Linearly interpolate between `from` and `to`.
pub fn lerp(from: f64, to: f64, ratio: f64) -> f64 {
    from + (to - from) * ratio
}

/// Push values outside the range `[min, max]` back into the range.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// A WKT `POLYGON` covering the axis-aligned rectangle spanned by two corners.
///
/// The corners are world coordinates, not Cell positions; the string labels
/// download areas and cache keys and is never parsed by this crate. `padding`
/// widens the rectangle by that fraction of its span on every side.
///
/// ## Examples
/// Basic usage:
/// ```
/// use raster_pathfinding::geometry::wkt_rect_from_corners;
///
/// let wkt = wkt_rect_from_corners((0, 0), (10, 20), 0.0);
/// assert_eq!(wkt, "POLYGON((0 0, 0 20, 10 20, 10 0, 0 0))");
/// ```
pub fn wkt_rect_from_corners(start: (i64, i64), opposite: (i64, i64), padding: f64) -> String {
    let horizontal = (start.0 - opposite.0).abs() as f64;
    let vertical = (start.1 - opposite.1).abs() as f64;

    let left = (start.0.min(opposite.0) as f64 - horizontal * padding) as i64;
    let right = (start.0.max(opposite.0) as f64 + horizontal * padding) as i64;
    let up = (start.1.max(opposite.1) as f64 + vertical * padding) as i64;
    let down = (start.1.min(opposite.1) as f64 - vertical * padding) as i64;

    format!(
        "POLYGON(({} {}, {} {}, {} {}, {} {}, {} {}))",
        left, down, left, up, right, up, right, down, left, down
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(distance((0, 0), (3, 4)), 5.0);
        assert_eq!(distance_squared((1, 1), (2, 3)), 5.0);
        assert_eq!(distance((2, 2), (2, 2)), 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 1.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 1.0, 1.0), 1.0);
        assert_eq!(lerp(10.0, 1.0, 0.5), 5.5);
    }

    #[test]
    fn clamp_range() {
        assert_eq!(clamp(-1.0, 0.0, 5.0), 0.0);
        assert_eq!(clamp(7.0, 0.0, 5.0), 5.0);
        assert_eq!(clamp(3.0, 0.0, 5.0), 3.0);
    }

    #[test]
    fn rect_contains() {
        let rect = Rect::new(4, 3);
        assert!(rect.contains((0, 0)));
        assert!(rect.contains((3, 2)));
        assert!(!rect.contains((4, 0)));
        assert!(!rect.contains((0, 3)));
        assert_eq!(rect.area(), 12);
    }

    #[test]
    fn wkt_padding() {
        let wkt = wkt_rect_from_corners((100, 200), (0, 0), 0.1);
        assert_eq!(wkt, "POLYGON((-10 -20, -10 220, 110 220, 110 -20, -10 -20))");
    }
}
