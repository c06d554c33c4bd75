use crate::{AttributeWeights, GridError, Path};

/// Options for a single [`find_path`](crate::Grid::find_path) run.
///
/// Default options:
/// ```
/// # use raster_pathfinding::PathOptions;
/// let options = PathOptions::default();
///
/// assert_eq!(options.max_length, None);
/// assert_eq!(options.path_cost, 0.0);
/// assert!(options.attribute_weights.is_none());
/// assert!(options.existing_paths.is_empty());
/// assert_eq!(options.existing_path_multiplier, 1.0);
/// assert_eq!(options.existing_path_radius, 0);
/// ```
#[derive(Clone, Debug)]
pub struct PathOptions {
    /// Upper bound on the Euclidean length of the Path (defaults to `None`).
    ///
    /// Cells whose best known path meets or exceeds the bound are discarded
    /// when popped, so a search may fail even though the endpoints connect.
    pub max_length: Option<f64>,

    /// Cost added per unit of Euclidean length (defaults to `0`).
    ///
    /// This is also the scale of the A* heuristic: with a `path_cost` of `0`
    /// the search degenerates to Dijkstra over the Weights alone.
    pub path_cost: f64,

    /// Additive Weight per [`TileAttribute`](crate::TileAttribute) (defaults
    /// to `None`).
    ///
    /// When supplied, every registered Cell's effective Weight is re-derived
    /// as its base Weight plus the table values of the tags it carries.
    pub attribute_weights: Option<AttributeWeights>,

    /// Previously computed Paths the new Path should steer away from
    /// (defaults to empty).
    pub existing_paths: Vec<Path>,

    /// Weight factor applied on the Cells of existing Paths (defaults to `1`).
    ///
    /// Must be at least 1; the factor fades linearly to 1 at the edge of the
    /// corridor. A value of exactly 1 disables the corridor correction.
    pub existing_path_multiplier: f64,

    /// How many Cells the corridor around existing Paths stretches (defaults
    /// to `0`, which penalizes only the Path Cells themselves).
    pub existing_path_radius: usize,
}

impl Default for PathOptions {
    fn default() -> PathOptions {
        PathOptions {
            max_length: None,
            path_cost: 0.0,
            attribute_weights: None,
            existing_paths: Vec::new(),
            existing_path_multiplier: 1.0,
            existing_path_radius: 0,
        }
    }
}

impl PathOptions {
    pub(crate) fn validate(&self) -> Result<(), GridError> {
        if !(self.path_cost >= 0.0) {
            return Err(GridError::InvalidConfig(format!(
                "path cost must be non-negative, got {}",
                self.path_cost
            )));
        }
        if let Some(max_length) = self.max_length {
            if !(max_length >= 0.0) {
                return Err(GridError::InvalidConfig(format!(
                    "max length must be non-negative, got {}",
                    max_length
                )));
            }
        }
        if !(self.existing_path_multiplier >= 1.0) {
            return Err(GridError::InvalidConfig(format!(
                "an existing path multiplier below 1 would make existing paths cheaper, got {}",
                self.existing_path_multiplier
            )));
        }
        Ok(())
    }

    /// Whether the corridor correction has anything to do.
    pub(crate) fn corridor_active(&self) -> bool {
        self.existing_path_multiplier > 1.0 && !self.existing_paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_values() {
        let options = PathOptions {
            path_cost: -1.0,
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(GridError::InvalidConfig(_))));

        let options = PathOptions {
            max_length: Some(-0.5),
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(GridError::InvalidConfig(_))));

        let options = PathOptions {
            existing_path_multiplier: 0.5,
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(GridError::InvalidConfig(_))));

        assert!(PathOptions::default().validate().is_ok());
    }

    #[test]
    fn corridor_needs_paths_and_multiplier() {
        let mut options = PathOptions {
            existing_path_multiplier: 2.0,
            ..Default::default()
        };
        assert!(!options.corridor_active());

        options.existing_paths = vec![Path::new(vec![(0, 0)], 0.0, 0.0)];
        assert!(options.corridor_active());

        options.existing_path_multiplier = 1.0;
        assert!(!options.corridor_active());
    }
}
