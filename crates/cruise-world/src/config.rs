//! World configuration and validation.

use crate::{WorldError, WorldResult};

/// Parameters for a generated grid world.
///
/// Validated before any generation happens; an invalid configuration never
/// produces a half-built world.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Grid rows.  Must be at least 1.
    pub rows: usize,
    /// Grid columns.  Must be at least 1.
    pub cols: usize,

    /// Lower bound for drawn edge weights.  Must be non-negative and
    /// strictly less than `weight_high`.
    pub weight_low: f64,
    /// Upper bound for drawn edge weights (exclusive).
    pub weight_high: f64,

    /// Number of parking lots to place (distinct nodes).  May be zero; a
    /// world without lots makes every selection fail, which is useful for
    /// exercising the error path.
    pub lot_count: usize,

    /// Lower bound for drawn lot costs.  Must be strictly less than
    /// `cost_high`.
    pub cost_low: f64,
    /// Upper bound for drawn lot costs (exclusive).
    pub cost_high: f64,
}

impl WorldConfig {
    /// A rows×cols grid with weight bounds `(0, 1)` — the classic traffic
    /// model — three lots, and costs in `(1, 10)`.
    pub fn grid(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            weight_low: 0.0,
            weight_high: 1.0,
            lot_count: 3,
            cost_low: 1.0,
            cost_high: 10.0,
        }
    }

    /// Total node count of the configured grid.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check every parameter, reporting the first violation.
    pub fn validate(&self) -> WorldResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(WorldError::Config(format!(
                "grid must have at least one row and one column (got {}x{})",
                self.rows, self.cols
            )));
        }
        if !(self.weight_low < self.weight_high) {
            return Err(WorldError::InvalidBounds {
                low: self.weight_low,
                high: self.weight_high,
            });
        }
        if self.weight_low < 0.0 {
            return Err(WorldError::Config(format!(
                "edge weights must be non-negative (weight_low = {})",
                self.weight_low
            )));
        }
        if !(self.cost_low < self.cost_high) {
            return Err(WorldError::InvalidBounds {
                low: self.cost_low,
                high: self.cost_high,
            });
        }
        if self.lot_count > self.node_count() {
            return Err(WorldError::Config(format!(
                "cannot place {} lots on {} nodes",
                self.lot_count,
                self.node_count()
            )));
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    /// The 4×4 reference grid.
    fn default() -> Self {
        Self::grid(4, 4)
    }
}
