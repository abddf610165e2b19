mod cell;
mod color;
mod grid;
mod patterns;
mod registry;

pub use cell::Cell;
pub use color::{GREEN_SPECTRUM, Rgba, cell_color, spectrum_color};
pub use grid::{Evolution, Grid};
pub use patterns::{Pattern, presets};
pub use registry::{CellKey, CellMeta, CellRegistry, MetaChange, MetaStats};

/// Pixels per cell edge
pub const CELL_SIZE: usize = 4;

/// Probability of a cell starting alive when the grid is seeded
pub const SEED_DENSITY: f64 = 0.09;

/// Grid dimensions for a viewport of the given pixel size
pub const fn grid_dimensions(width_px: u32, height_px: u32) -> (usize, usize) {
    (width_px as usize / CELL_SIZE, height_px as usize / CELL_SIZE)
}
