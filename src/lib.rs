#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find least-cost Paths on dense weighted Grids.
//!
//! ## Introduction
//! The Grids this crate works on are rasterized from cartographic vector data:
//! every Cell carries a numeric base Weight plus a set of categorical terrain
//! tags ([`TileAttribute`]) that further modulate its traversal cost. Searches
//! run A* over the eight-connected neighbourhood with Euclidean edge lengths,
//! so Paths may cut diagonals where the terrain allows it.
//!
//! The same pair of endpoints can be searched repeatedly: handing the Paths of
//! earlier runs back in via [`PathOptions::existing_paths`] raises the Weights
//! in a corridor around them, which biases the new Path into a visually
//! distinct alternative instead of a duplicate.
//!
//! ## Examples
//! Registering Tiles and finding a Path:
//! ```
//! use raster_pathfinding::prelude::*;
//!
//! // a 5x5 Grid with a cheap road along x = 2
//! let mut grid = Grid::new(5, 5).unwrap();
//! for x in 0..5 {
//!     for y in 0..5 {
//!         let weight = if x == 2 { 1.0 } else { 10.0 };
//!         grid.register((x, y), weight, &[]).unwrap();
//!     }
//! }
//!
//! let path = grid
//!     .find_path((0, 0), (4, 4), &PathOptions::default())
//!     .unwrap()
//!     .expect("the grid is fully registered");
//!
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[path.len() - 1], (4, 4));
//! ```
//!
//! Terrain tags contribute to the effective Weight through an externally
//! supplied table. The engine never interprets a tag, it only sums the
//! supplied Weights:
//! ```
//! use raster_pathfinding::{prelude::*, AttributeWeights};
//!
//! let mut grid = Grid::new(3, 1).unwrap();
//! grid.register((0, 0), 1.0, &[]).unwrap();
//! grid.register((1, 0), 1.0, &[TileAttribute::Waterdeel]).unwrap();
//! grid.register((2, 0), 1.0, &[]).unwrap();
//!
//! let mut weights = AttributeWeights::new();
//! weights.insert(TileAttribute::Waterdeel, 125.0);
//!
//! let options = PathOptions {
//!     attribute_weights: Some(weights),
//!     ..Default::default()
//! };
//! let path = grid.find_path((0, 0), (2, 0), &options).unwrap().unwrap();
//!
//! // both edges average the water Tile's Weight of 1 + 125
//! assert_eq!(path.cost(), 127.0);
//! ```
//!
//! ## Alternative routes
//! A Path is cheap to clone and can be fed straight back into the next search.
//! The corridor correction multiplies the Weight of every Cell within
//! [`existing_path_radius`](PathOptions::existing_path_radius) of an existing
//! Path by a factor that starts at
//! [`existing_path_multiplier`](PathOptions::existing_path_multiplier) on the
//! Path itself and fades linearly to 1 at the corridor's edge. See
//! [`Grid::find_path`] for a worked example.
//!
//! ## Smoothing
//! Raw Paths follow Cell centers and zig-zag accordingly. [`Grid::smooth`]
//! drops interior points wherever the straight segment between the remaining
//! points crosses only Cells of one identical Weight, which straightens the
//! Path without changing its cost.

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A map from [`TileAttribute`] to the Weight it adds to a Tile's base Weight
pub type AttributeWeights = hashbrown::HashMap<TileAttribute, f64>;

mod errors;
pub use self::errors::GridError;

pub mod geometry;

mod tile_attribute;
pub use self::tile_attribute::{AttributeSet, TileAttribute};

mod path;
pub use self::path::Path;

mod grid;
pub use self::grid::{Grid, PathOptions, VisitState};

/// The prelude for this crate.
///
/// Note: Even though most examples use the internal type-definition [`Point`]
/// (aka `(usize, usize)`), it is not included in the prelude since most users
/// probably have another implementation with the same name in scope.
pub mod prelude {
    pub use crate::{Grid, GridError, Path, PathOptions, TileAttribute};
}
