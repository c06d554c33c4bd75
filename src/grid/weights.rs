//! Effective Weight derivation, run before a search touches the queue.

use super::{Grid, VisitState};
use crate::{geometry, AttributeWeights, Path, Point};

use log::trace;
use std::collections::VecDeque;

impl Grid {
    /// Recomputes every registered Cell's effective Weight from its base
    /// Weight plus the table values of the tags it carries.
    ///
    /// Cells without matching tags end up back at their base Weight, so the
    /// derivation is idempotent across searches.
    pub(crate) fn derive_weights(&mut self, attribute_weights: &AttributeWeights) {
        for index in 0..self.registered.len() {
            if !self.registered[index] {
                continue;
            }
            let mut weight = self.base_weights[index];
            for attribute in self.attributes[index].iter() {
                if let Some(&attribute_weight) = attribute_weights.get(&attribute) {
                    weight += attribute_weight;
                }
            }
            self.weights[index] = weight;
        }
    }

    /// Scales the Weights in a corridor around the given Paths.
    ///
    /// A breadth-first expansion from every registered Path Cell multiplies
    /// each reached Cell's Weight once, by `multiplier` at depth 0 fading
    /// linearly to 1 at depth `radius`. The expansion borrows the visit
    /// states and clears them afterwards so a search starts clean.
    pub(crate) fn correct_weights_to_paths(
        &mut self,
        paths: &[Path],
        multiplier: f64,
        radius: usize,
    ) {
        let mut to_visit = VecDeque::new();
        for path in paths {
            for pos in path.iter() {
                if !self.dimensions().contains(pos) || !self.is_registered(pos) {
                    continue;
                }
                let index = self.index(pos);
                if self.visit_states[index] == VisitState::Visited {
                    continue;
                }
                self.visit_states[index] = VisitState::Visited;
                to_visit.push_back((pos, 0));
            }
        }

        let mut corrected = 0usize;
        let mut neighbours: Vec<Point> = Vec::new();
        while let Some((pos, depth)) = to_visit.pop_front() {
            let ratio = if radius == 0 {
                0.0
            } else {
                depth as f64 / radius as f64
            };
            let index = self.index(pos);
            self.weights[index] *= geometry::lerp(multiplier, 1.0, ratio);
            corrected += 1;

            if depth >= radius {
                continue;
            }
            neighbours.clear();
            neighbours.extend(self.neighbours(pos));
            for &neighbour in &neighbours {
                let neighbour_index = self.index(neighbour);
                if self.visit_states[neighbour_index] == VisitState::Visited {
                    continue;
                }
                self.visit_states[neighbour_index] = VisitState::Visited;
                to_visit.push_back((neighbour, depth + 1));
            }
        }
        trace!(
            "corridor correction scaled {} cells around {} existing paths",
            corrected,
            paths.len()
        );

        self.undiscover_all();
    }
}
