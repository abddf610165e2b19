// Domain layer - grid, rule, cell metadata, colors
pub mod domain;

// Application layer - controller, scheduling, settings
pub mod application;

// Infrastructure layer - raster, snapshots, overlay, input
pub mod rendering;
pub mod ui;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellRegistry, Grid, Pattern, presets};
pub use application::{GameState, Scheduler, Settings, Viewport};
pub use rendering::{Palette, Raster, Snapshot, SnapshotError};
