//! Error types for Grid construction and searches.

use crate::Point;
use thiserror::Error;

/// The ways a Grid operation can fail.
///
/// A search that merely finds no Path is not an error: [`find_path`] reports
/// that case as `Ok(None)` so callers can decide what to do with it.
///
/// [`find_path`]: crate::Grid::find_path
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// The requested dimensions cannot back a Grid.
    ///
    /// Either dimension is zero, or the Cell count does not fit the internal
    /// 32-bit parent encoding.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A position outside `[0, width) x [0, height)`.
    #[error("position {pos:?} lies outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending position.
        pos: Point,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// A search endpoint without registered Tile data.
    #[error("tile {pos:?} is not registered")]
    NotRegistered {
        /// The unregistered position.
        pos: Point,
    },

    /// A search option with a nonsensical value.
    #[error("invalid search options: {0}")]
    InvalidConfig(String),

    /// [`path_to`](crate::Grid::path_to) was called before any search ran.
    #[error("a search must run before a path can be reconstructed")]
    SearchNotRun,
}
