//! Playing-field geometry.
//!
//! [`Field`] describes the whole grid; [`CellRegion`] is the half reserved
//! for one side, used to sample trap placements and target spawn points.

use crate::error::ConfigError;
use crate::ga::Placement;
use rand::Rng;

/// One of the two halves of the field together with its defenders.
///
/// Side A holds the left half and defends it with manually placed traps.
/// Side B holds the right half and defends it with the evolved layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in checking order.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Stable array index (A = 0, B = 1).
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Grid geometry of the playing field, in pixels.
///
/// # Defaults
///
/// ```
/// use trap_evolve::sim::Field;
///
/// let field = Field::default();
/// assert_eq!((field.width, field.height, field.grid_size), (1200, 600, 10));
/// assert_eq!(field.columns(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Total width covering both halves.
    pub width: i32,

    /// Height of the field.
    pub height: i32,

    /// Edge length of one grid cell.
    pub grid_size: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            grid_size: 10,
        }
    }
}

impl Field {
    /// Width of one half.
    pub fn half_width(&self) -> i32 {
        self.width / 2
    }

    /// Whole grid columns in one half.
    pub fn columns(&self) -> i32 {
        self.half_width() / self.grid_size
    }

    /// Whole grid rows.
    pub fn rows(&self) -> i32 {
        self.height / self.grid_size
    }

    /// Left edge of the half owned by `side`.
    pub fn x_offset(&self, side: Side) -> i32 {
        match side {
            Side::A => 0,
            Side::B => self.half_width(),
        }
    }

    /// The half of the field reserved for `side`.
    pub fn region(&self, side: Side) -> CellRegion {
        CellRegion {
            x_offset: self.x_offset(side),
            columns: self.columns(),
            rows: self.rows(),
            grid_size: self.grid_size,
        }
    }

    /// Validates the geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.columns() < 1 || self.rows() < 1 {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }
}

/// A rectangular block of grid cells: one half of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRegion {
    pub x_offset: i32,
    pub columns: i32,
    pub rows: i32,
    pub grid_size: i32,
}

impl CellRegion {
    /// Checks that at least one cell can be sampled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.columns < 1 || self.rows < 1 {
            return Err(ConfigError::EmptyRegion {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Draws the centre of a uniformly chosen cell.
    pub fn random_placement<R: Rng>(&self, rng: &mut R) -> Placement {
        let col = rng.random_range(0..self.columns);
        let row = rng.random_range(0..self.rows);
        self.cell_centre(col, row)
    }

    /// Draws the top-left corner of a uniformly chosen cell.
    ///
    /// Targets spawn on cell corners while traps sit on cell centres.
    pub fn random_corner<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let col = rng.random_range(0..self.columns);
        let row = rng.random_range(0..self.rows);
        (
            (self.x_offset + col * self.grid_size) as f64,
            (row * self.grid_size) as f64,
        )
    }

    /// Snaps a pointer position to the centre of the cell under it.
    ///
    /// Returns `None` when the position lies outside this region.
    pub fn snap(&self, x: i32, y: i32) -> Option<Placement> {
        let local_x = x - self.x_offset;
        if local_x < 0 || y < 0 {
            return None;
        }
        let col = local_x / self.grid_size;
        let row = y / self.grid_size;
        if col >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.cell_centre(col, row))
    }

    /// Whether `placement` lies on a cell centre inside this region.
    pub fn contains(&self, placement: Placement) -> bool {
        let half = self.grid_size / 2;
        let local_x = placement.x() - self.x_offset - half;
        let local_y = placement.y() - half;
        local_x >= 0
            && local_y >= 0
            && local_x % self.grid_size == 0
            && local_y % self.grid_size == 0
            && local_x / self.grid_size < self.columns
            && local_y / self.grid_size < self.rows
    }

    /// Inclusive range a target's x coordinate may take.
    pub fn x_bounds(&self) -> (f64, f64) {
        let min = self.x_offset as f64;
        let max = (self.x_offset + (self.columns - 1) * self.grid_size) as f64;
        (min, max)
    }

    /// Inclusive range a target's y coordinate may take.
    pub fn y_bounds(&self) -> (f64, f64) {
        (0.0, ((self.rows - 1) * self.grid_size) as f64)
    }

    fn cell_centre(&self, col: i32, row: i32) -> Placement {
        let half = self.grid_size / 2;
        Placement::new(
            self.x_offset + col * self.grid_size + half,
            row * self.grid_size + half,
        )
    }
}
