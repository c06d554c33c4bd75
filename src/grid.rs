//! The dense Cell store and the operations on it.

use crate::{
    errors::GridError,
    geometry::Rect,
    path::Path,
    tile_attribute::{AttributeSet, TileAttribute},
    Point,
};

mod a_star;
mod smooth;
mod weights;

mod options;
pub use self::options::PathOptions;

/// Parent index of a Cell without a predecessor.
const INVALID_PARENT: u32 = u32::MAX;

/// Search bookkeeping state of a single Cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisitState {
    /// Not yet touched by the current search.
    #[default]
    Undiscovered,
    /// Queued with a tentative cost and parent.
    Discovered,
    /// Expanded; cost and parent are final.
    Visited,
}

/// A dense rectangular Grid of weighted Cells, the input and the working state
/// of every search.
///
/// The Grid stores one flat buffer per Cell field rather than one record per
/// Cell: at the targeted sizes (millions of Cells) a record-per-Cell layout
/// would cost several times the memory and scatter the hot fields across the
/// heap. Dimensions are fixed at construction.
///
/// Only *registered* Cells take part in a search. Cells are registered with a
/// base Weight and optional [`TileAttribute`]s by the rasterizer side of the
/// pipeline; everything else (visit states, parents, costs) is transient
/// bookkeeping owned by the Grid and reset between searches.
///
/// ## Examples
/// Basic usage:
/// ```
/// use raster_pathfinding::prelude::*;
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.register((1, 2), 3.5, &[TileAttribute::Pand]).unwrap();
///
/// assert!(grid.is_registered((1, 2)));
/// assert!(!grid.is_registered((0, 0)));
/// assert_eq!(grid.base_weight((1, 2)), 3.5);
/// assert!(grid.has_attribute((1, 2), TileAttribute::Pand));
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    registered: Vec<bool>,
    base_weights: Vec<f64>,
    weights: Vec<f64>,
    attributes: Vec<AttributeSet>,
    visit_states: Vec<VisitState>,
    parents: Vec<u32>,
    costs: Vec<f64>,
    heuristics: Vec<f64>,
    path_lengths: Vec<f64>,
    search_has_run: bool,
}

impl Grid {
    /// Creates a Grid of the given dimensions with every Cell unregistered.
    ///
    /// Fails with [`GridError::InvalidDimension`] if either dimension is zero
    /// or the Cell count does not fit the internal 32-bit Cell index.
    pub fn new(width: usize, height: usize) -> Result<Grid, GridError> {
        let cells = width.checked_mul(height);
        let cells = match cells {
            Some(cells) if width > 0 && height > 0 && cells < INVALID_PARENT as usize => cells,
            _ => return Err(GridError::InvalidDimension { width, height }),
        };
        Ok(Grid {
            width,
            height,
            registered: vec![false; cells],
            base_weights: vec![0.0; cells],
            weights: vec![0.0; cells],
            attributes: vec![AttributeSet::EMPTY; cells],
            visit_states: vec![VisitState::Undiscovered; cells],
            parents: vec![INVALID_PARENT; cells],
            costs: vec![0.0; cells],
            heuristics: vec![0.0; cells],
            path_lengths: vec![0.0; cells],
            search_has_run: false,
        })
    }

    /// The width of the Grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the Grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The dimensions of the Grid.
    pub fn dimensions(&self) -> Rect {
        Rect::new(self.width, self.height)
    }

    /// Flat index of an in-bounds position; the store is column-major.
    fn index(&self, (x, y): Point) -> usize {
        assert!(
            x < self.width && y < self.height,
            "position ({}, {}) lies outside the {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        x * self.height + y
    }

    fn checked_index(&self, pos: Point) -> Result<usize, GridError> {
        if self.dimensions().contains(pos) {
            Ok(self.index(pos))
        } else {
            Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Position of a flat index.
    fn position(&self, index: u32) -> Point {
        let index = index as usize;
        (index / self.height, index % self.height)
    }

    /// Registers the Cell with the given base Weight and attributes.
    ///
    /// The effective Weight is set to the base Weight; attribute bits are
    /// added to the Cell's existing mask, since multiple rasterized layers may
    /// register the same Cell under different tags. Registering an already
    /// registered Cell replaces its Weights.
    ///
    /// `base_weight` must be non-negative, or the search heuristic stops being
    /// admissible.
    pub fn register(
        &mut self,
        pos: Point,
        base_weight: f64,
        attributes: &[TileAttribute],
    ) -> Result<(), GridError> {
        debug_assert!(base_weight >= 0.0);
        let index = self.checked_index(pos)?;
        self.registered[index] = true;
        self.base_weights[index] = base_weight;
        self.weights[index] = base_weight;
        self.attributes[index] = self.attributes[index].union(AttributeSet::from_slice(attributes));
        Ok(())
    }

    /// Deregisters the Cell; its other fields become semantically ignored.
    ///
    /// Deregistering an unregistered Cell is a no-op.
    pub fn deregister(&mut self, pos: Point) -> Result<(), GridError> {
        let index = self.checked_index(pos)?;
        self.registered[index] = false;
        Ok(())
    }

    /// Whether the Cell is registered.
    ///
    /// ## Panics
    /// Panics if `pos` is out of bounds, as do all per-Cell accessors.
    pub fn is_registered(&self, pos: Point) -> bool {
        self.registered[self.index(pos)]
    }

    /// The Cell's base Weight.
    pub fn base_weight(&self, pos: Point) -> f64 {
        self.base_weights[self.index(pos)]
    }

    /// Sets the Cell's base Weight; must be non-negative.
    pub fn set_base_weight(&mut self, pos: Point, value: f64) {
        debug_assert!(value >= 0.0);
        let index = self.index(pos);
        self.base_weights[index] = value;
    }

    /// The Cell's effective Weight, after attribute and corridor adjustments.
    pub fn weight(&self, pos: Point) -> f64 {
        self.weights[self.index(pos)]
    }

    /// Sets the Cell's effective Weight; must be non-negative.
    pub fn set_weight(&mut self, pos: Point, value: f64) {
        debug_assert!(value >= 0.0);
        let index = self.index(pos);
        self.weights[index] = value;
    }

    /// The Cell's attribute set.
    pub fn attributes(&self, pos: Point) -> AttributeSet {
        self.attributes[self.index(pos)]
    }

    /// Whether the Cell carries the attribute.
    pub fn has_attribute(&self, pos: Point, attribute: TileAttribute) -> bool {
        self.attributes[self.index(pos)].contains(attribute)
    }

    /// Adds or removes one of the Cell's attributes.
    pub fn set_attribute(&mut self, pos: Point, attribute: TileAttribute, value: bool) {
        let index = self.index(pos);
        if value {
            self.attributes[index].insert(attribute);
        } else {
            self.attributes[index].remove(attribute);
        }
    }

    /// The Cell's accumulated cost along the best known path, without
    /// heuristic.
    pub fn cost(&self, pos: Point) -> f64 {
        self.costs[self.index(pos)]
    }

    pub(crate) fn set_cost(&mut self, pos: Point, value: f64) {
        let index = self.index(pos);
        self.costs[index] = value;
    }

    /// The Cell's cached heuristic towards the current search's goal.
    pub fn heuristic(&self, pos: Point) -> f64 {
        self.heuristics[self.index(pos)]
    }

    /// The Cell's predecessor along the best known path, if any.
    pub fn parent(&self, pos: Point) -> Option<Point> {
        let parent = self.parents[self.index(pos)];
        if parent == INVALID_PARENT {
            None
        } else {
            Some(self.position(parent))
        }
    }

    /// The Euclidean length of the best known path to the Cell.
    pub fn path_length(&self, pos: Point) -> f64 {
        self.path_lengths[self.index(pos)]
    }

    /// The Cell's search bookkeeping state.
    pub fn visit_state(&self, pos: Point) -> VisitState {
        self.visit_states[self.index(pos)]
    }

    /// Restores all transient search fields to their defaults.
    ///
    /// `registered`, base Weights, effective Weights and attributes are left
    /// untouched; a later search re-derives effective Weights as needed.
    pub fn reset(&mut self) {
        self.visit_states.fill(VisitState::Undiscovered);
        self.parents.fill(INVALID_PARENT);
        self.costs.fill(0.0);
        self.heuristics.fill(0.0);
        self.path_lengths.fill(0.0);
        self.search_has_run = false;
    }

    /// Resets only the visit states, after a corridor BFS borrowed them.
    fn undiscover_all(&mut self) {
        self.visit_states.fill(VisitState::Undiscovered);
    }

    /// The up-to-eight registered Moore neighbours of the Cell, in column
    /// order.
    ///
    /// Unregistered and out-of-bounds Cells are skipped; `pos` itself is not a
    /// neighbour.
    pub fn neighbours(&self, pos: Point) -> impl Iterator<Item = Point> + '_ {
        let (x, y) = pos;
        let x_min = x.saturating_sub(1);
        let x_max = (x + 2).min(self.width);
        let y_min = y.saturating_sub(1);
        let y_max = (y + 2).min(self.height);
        (x_min..x_max)
            .flat_map(move |nx| (y_min..y_max).map(move |ny| (nx, ny)))
            .filter(move |&neighbour| neighbour != pos && self.is_registered(neighbour))
    }

    /// The path from the last search's start to the given Cell.
    ///
    /// Walks the parent chain recorded by the most recent
    /// [`find_path`](Grid::find_path); the returned Path carries the cost and
    /// Euclidean length accumulated up to `pos`. Fails with
    /// [`GridError::SearchNotRun`] if no search has run since the last
    /// [`reset`](Grid::reset).
    pub fn path_to(&self, pos: Point) -> Result<Path, GridError> {
        if !self.search_has_run {
            return Err(GridError::SearchNotRun);
        }
        let target = self.checked_index(pos)?;

        let mut points = vec![pos];
        let mut index = target;
        while self.parents[index] != INVALID_PARENT {
            let parent = self.parents[index];
            points.push(self.position(parent));
            index = parent as usize;
        }
        points.reverse();

        Ok(Path::new(points, self.costs[target], self.path_lengths[target]))
    }
}
