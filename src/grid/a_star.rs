//! The A* search over the Grid.

use super::{Grid, PathOptions, VisitState};
use crate::{geometry, AttributeWeights, GridError, Path, Point};

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queue entry: cost with heuristic, cost without, insertion sequence, Cell.
///
/// Entries are never updated in place. When a better route to a queued Cell
/// turns up, a cheaper entry is pushed and the stale one is discarded when it
/// eventually pops (its Cell is `Visited` by then).
#[derive(Clone, Copy, Debug)]
struct HeuristicElement(f64, f64, u64, Point);

impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        // BinaryHeap pops the greatest element, so all comparisons are
        // reversed: lowest full cost first, ties broken by plain cost, then
        // by insertion order
        rhs.0
            .total_cmp(&self.0)
            .then(rhs.1.total_cmp(&self.1))
            .then(rhs.2.cmp(&self.2))
    }
}

impl Grid {
    /// Calculates the least-cost Path from `from_pos` to `to_pos`.
    ///
    /// Returns `Ok(None)` if the endpoints are not connected (or not
    /// connectable within [`max_length`](PathOptions::max_length)). The
    /// transient search state of an earlier run is reset implicitly.
    ///
    /// Before the search starts, effective Weights are re-derived from the
    /// base Weights whenever [`attribute_weights`](PathOptions::attribute_weights)
    /// is supplied or the corridor correction is active, so repeated searches
    /// with the same options see the same Weights.
    ///
    /// ## Arguments
    /// - `from_pos` - the Cell where the search starts; must be registered
    /// - `to_pos` - the Cell to search for; must be registered
    /// - `options` - see [`PathOptions`]
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
    ///
    /// let path = grid
    ///     .find_path((0, 0), (9, 9), &PathOptions::default())
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(path[0], (0, 0));
    /// assert_eq!(path[path.len() - 1], (9, 9));
    /// ```
    ///
    /// Biasing a second Path away from the first:
    /// ```
    /// # use raster_pathfinding::prelude::*;
    /// #
    /// # let mut grid = Grid::new(10, 10).unwrap();
    /// # for x in 0..10 {
    /// #     for y in 0..10 {
    /// #         grid.register((x, y), 1.0, &[]).unwrap();
    /// #     }
    /// # }
    /// #
    /// let first = grid
    ///     .find_path((0, 0), (9, 9), &PathOptions::default())
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// let options = PathOptions {
    ///     existing_paths: vec![first.clone()],
    ///     existing_path_multiplier: 10.0,
    ///     existing_path_radius: 2,
    ///     ..Default::default()
    /// };
    /// let second = grid.find_path((0, 0), (9, 9), &options).unwrap().unwrap();
    ///
    /// // endpoints unchanged, route distinct
    /// assert_eq!(second[0], (0, 0));
    /// assert_ne!(first, second);
    /// ```
    pub fn find_path(
        &mut self,
        from_pos: Point,
        to_pos: Point,
        options: &PathOptions,
    ) -> Result<Option<Path>, GridError> {
        options.validate()?;
        let from = self.checked_index(from_pos)?;
        let to = self.checked_index(to_pos)?;
        if !self.registered[from] {
            return Err(GridError::NotRegistered { pos: from_pos });
        }
        if !self.registered[to] {
            return Err(GridError::NotRegistered { pos: to_pos });
        }

        if self.search_has_run {
            self.reset();
        }
        self.search_has_run = true;

        if options.attribute_weights.is_some() || options.corridor_active() {
            let empty = AttributeWeights::new();
            let table = options.attribute_weights.as_ref().unwrap_or(&empty);
            self.derive_weights(table);
        }
        if options.corridor_active() {
            self.correct_weights_to_paths(
                &options.existing_paths,
                options.existing_path_multiplier,
                options.existing_path_radius,
            );
        }

        let path_cost = options.path_cost;
        let mut to_visit = BinaryHeap::new();
        let mut sequence = 0;

        self.costs[from] = 0.0;
        self.path_lengths[from] = 0.0;
        self.heuristics[from] = path_cost * geometry::distance(from_pos, to_pos);
        to_visit.push(HeuristicElement(
            self.heuristics[from],
            0.0,
            sequence,
            from_pos,
        ));

        let mut neighbours: Vec<Point> = Vec::new();
        let mut expanded = 0usize;
        while let Some(HeuristicElement(_, current_cost, _, current_pos)) = to_visit.pop() {
            let current = self.index(current_pos);
            if self.visit_states[current] == VisitState::Visited {
                continue;
            }
            if let Some(max_length) = options.max_length {
                if self.path_lengths[current] >= max_length {
                    continue;
                }
            }

            if current_pos == to_pos {
                debug!(
                    "path from {:?} to {:?} found after expanding {} cells, cost {}",
                    from_pos, to_pos, expanded, self.costs[to]
                );
                return Ok(Some(self.path_to(to_pos)?));
            }

            self.visit_states[current] = VisitState::Visited;
            expanded += 1;

            neighbours.clear();
            neighbours.extend(self.neighbours(current_pos));
            for &neighbour_pos in &neighbours {
                let neighbour = self.index(neighbour_pos);
                if self.visit_states[neighbour] == VisitState::Visited {
                    continue;
                }

                // crossing an expensive Cell costs the same from either side
                let step = geometry::distance(current_pos, neighbour_pos);
                let neighbour_cost = current_cost
                    + (self.weights[neighbour] + self.weights[current]) / 2.0
                    + step * path_cost;

                if self.visit_states[neighbour] == VisitState::Discovered {
                    // cost + heuristic of a Discovered cell is the lowest
                    // full cost still queued for it
                    let queued = self.costs[neighbour] + self.heuristics[neighbour];
                    if neighbour_cost + self.heuristics[neighbour] >= queued {
                        continue;
                    }
                } else {
                    self.heuristics[neighbour] =
                        path_cost * geometry::distance(neighbour_pos, to_pos);
                }

                self.visit_states[neighbour] = VisitState::Discovered;
                self.parents[neighbour] = current as u32;
                self.costs[neighbour] = neighbour_cost;
                self.path_lengths[neighbour] = self.path_lengths[current] + step;
                sequence += 1;
                to_visit.push(HeuristicElement(
                    neighbour_cost + self.heuristics[neighbour],
                    neighbour_cost,
                    sequence,
                    neighbour_pos,
                ));
            }
        }

        debug!(
            "no path from {:?} to {:?}, queue drained after expanding {} cells",
            from_pos, to_pos, expanded
        );
        Ok(None)
    }
}
