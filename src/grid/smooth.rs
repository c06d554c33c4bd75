//! Cosmetic straightening of reconstructed Paths.
//!
//! The shortcut test follows the line-of-sight smoothing from "Toward More
//! Realistic Pathfinding": a point may be dropped when the straight segment
//! between its neighbours crosses only Cells of one identical Weight, so the
//! straightened Path costs the same as the original.

use super::Grid;
use crate::{geometry, path, Path, Point};

/// Cells this close to the traced line are checked as well.
const BOUNDARY_TOLERANCE: f64 = 0.1;

fn transpose((x, y): Point) -> Point {
    (y, x)
}

impl Grid {
    /// Straightens a Path by dropping interior points wherever the direct
    /// segment between the remaining points is isocost.
    ///
    /// Smoothing is cosmetic: the endpoints and the traversal cost are
    /// preserved, only the Euclidean length can shrink. Consecutive points of
    /// the result are no longer guaranteed to be neighbours.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// use raster_pathfinding::prelude::*;
    ///
    /// let mut grid = Grid::new(10, 10).unwrap();
    /// for x in 0..10 {
    ///     for y in 0..10 {
    ///         grid.register((x, y), 1.0, &[]).unwrap();
    ///     }
    /// }
    /// let path = grid
    ///     .find_path((0, 0), (9, 0), &PathOptions::default())
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// // uniform terrain straightens completely
    /// let smoothed = grid.smooth(&path);
    /// assert_eq!(smoothed, vec![(0, 0), (9, 0)]);
    /// ```
    pub fn smooth(&self, path: &Path) -> Path {
        let mut points: Vec<Point> = path.iter().collect();

        let mut check_point = 0;
        let mut current_point = 1;
        while current_point + 1 < points.len() {
            if self.segment_is_isocost(points[check_point], points[current_point + 1]) {
                points.remove(current_point);
            } else {
                check_point = current_point;
                current_point += 1;
            }
        }

        let length = path::polyline_length(&points);
        Path::new(points, path.cost(), length)
    }

    /// Whether the straight segment between two Cells crosses only Cells
    /// whose Weight equals the segment end's Weight.
    fn segment_is_isocost(&self, a: Point, b: Point) -> bool {
        if a.0 == b.0 {
            let x = a.0;
            let (y_min, y_max) = (a.1.min(b.1), a.1.max(b.1));
            let reference = self.weight((x, y_max));
            return (y_min..y_max).all(|y| self.cell_matches((x, y), reference, false));
        }
        if a.1 == b.1 {
            let y = a.1;
            let (x_min, x_max) = (a.0.min(b.0), a.0.max(b.0));
            let reference = self.weight((x_max, y));
            return (x_min..x_max).all(|x| self.cell_matches((x, y), reference, false));
        }

        // trace along the axis with the larger delta so that every crossed
        // row (or column) gets sampled
        let swapped = a.0.abs_diff(b.0) > a.1.abs_diff(b.1);
        let (a, b) = if swapped {
            (transpose(a), transpose(b))
        } else {
            (a, b)
        };
        self.raycast_isocost(a, b, swapped)
    }

    /// Raytrace from Cell center to Cell center, major axis second.
    fn raycast_isocost(&self, a: Point, b: Point, swapped: bool) -> bool {
        let (ax, ay) = (a.0 as f64 + 0.5, a.1 as f64 + 0.5);
        let (bx, by) = (b.0 as f64 + 0.5, b.1 as f64 + 0.5);
        let slope = (bx - ax) / (by - ay);

        let reference = match self.checked_weight(b, swapped) {
            Some(weight) => weight,
            None => return false,
        };

        let (y_low, y_high) = (ay.min(by), ay.max(by));
        for row in a.1.min(b.1)..=a.1.max(b.1) {
            // the part of the line inside this row, widened by the tolerance
            let entry = geometry::clamp(row as f64, y_low, y_high);
            let exit = geometry::clamp(row as f64 + 1.0, y_low, y_high);
            let x_entry = ax + (entry - ay) * slope;
            let x_exit = ax + (exit - ay) * slope;

            let low = x_entry.min(x_exit) - BOUNDARY_TOLERANCE;
            let high = x_entry.max(x_exit) + BOUNDARY_TOLERANCE;
            if low < 0.0 {
                return false;
            }
            for x in (low.floor() as usize)..=(high.floor() as usize) {
                if !self.cell_matches((x, row), reference, swapped) {
                    return false;
                }
            }
        }
        true
    }

    fn checked_weight(&self, pos: Point, swapped: bool) -> Option<f64> {
        let pos = if swapped { transpose(pos) } else { pos };
        if !self.dimensions().contains(pos) || !self.is_registered(pos) {
            return None;
        }
        Some(self.weight(pos))
    }

    fn cell_matches(&self, pos: Point, reference: f64, swapped: bool) -> bool {
        self.checked_weight(pos, swapped) == Some(reference)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn uniform_grid(size: usize, weight: f64) -> Grid {
        let mut grid = Grid::new(size, size).unwrap();
        for x in 0..size {
            for y in 0..size {
                grid.register((x, y), weight, &[]).unwrap();
            }
        }
        grid
    }

    #[test]
    fn collapses_uniform_terrain() {
        let grid = uniform_grid(5, 1.0);
        let path = Path::new(
            vec![(0, 0), (1, 1), (2, 2), (3, 2), (4, 2)],
            0.0,
            2.0 * 2f64.sqrt() + 2.0,
        );

        let smoothed = grid.smooth(&path);
        assert_eq!(smoothed, vec![(0, 0), (4, 2)]);
        assert_eq!(smoothed.cost(), path.cost());
        assert!(smoothed.length() < path.length());
    }

    #[test]
    fn keeps_weight_boundaries() {
        // a more expensive column at x = 3
        let mut grid = uniform_grid(7, 1.0);
        for y in 0..7 {
            grid.set_weight((3, y), 5.0);
        }

        let points: Vec<_> = (0..7).map(|x| (x, 1)).collect();
        let path = Path::new(points, 0.0, 6.0);

        let smoothed = grid.smooth(&path);
        assert_eq!(smoothed, vec![(0, 1), (2, 1), (3, 1), (4, 1), (6, 1)]);
    }

    #[test]
    fn shortcut_rejected_by_on_line_bump() {
        let mut grid = uniform_grid(5, 1.0);
        let path = Path::new(vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)], 0.0, 5.0);

        // a bump right under the segment blocks the shortcut
        grid.set_weight((2, 1), 5.0);
        let smoothed = grid.smooth(&path);
        assert!(smoothed.len() > 2);

        // the same bump away from the line does not
        grid.set_weight((2, 1), 1.0);
        grid.set_weight((0, 4), 5.0);
        let smoothed = grid.smooth(&path);
        assert_eq!(smoothed, vec![(0, 0), (4, 2)]);
    }

    #[test]
    fn short_paths_are_untouched() {
        let grid = uniform_grid(3, 1.0);

        let single = Path::new(vec![(1, 1)], 0.0, 0.0);
        assert_eq!(grid.smooth(&single), vec![(1, 1)]);

        let pair = Path::new(vec![(0, 0), (1, 1)], 0.0, 2f64.sqrt());
        assert_eq!(grid.smooth(&pair), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn unregistered_cells_block_shortcuts() {
        let mut grid = uniform_grid(3, 1.0);
        grid.deregister((1, 1)).unwrap();

        // the detour over (1, 0) cannot be cut to the diagonal
        let path = Path::new(vec![(0, 0), (1, 0), (2, 1), (2, 2)], 0.0, 3.0);
        let smoothed = grid.smooth(&path);
        assert!(smoothed.iter().count() > 2);
    }
}
