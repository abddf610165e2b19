use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::domain::{CellRegistry, Grid, Pattern, SEED_DENSITY, grid_dimensions};
use crate::rendering::{Palette, Raster, Snapshot, SnapshotError};

/// Pixel size of the area the grid fills
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True until real dimensions are known
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// GameState owns the whole simulation: grid, metadata, surface and counters.
/// All mutation goes through tick / resize / set_visible from one thread.
pub struct GameState {
    grid: Grid,
    registry: CellRegistry,
    raster: Option<Raster>,
    viewport: Viewport,
    visible: bool,
    generation: u64,
    palette: Palette,
    /// Bumped whenever the raster is repainted
    revision: u64,
    rng: StdRng,
}

impl GameState {
    /// Create an empty state; nothing happens until the first resize.
    /// `seed` makes the random seeding reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            grid: Grid::new(0, 0),
            registry: CellRegistry::new(),
            raster: None,
            viewport: Viewport::default(),
            visible: true,
            generation: 0,
            palette: Palette::default(),
            revision: 0,
            rng,
        }
    }

    /// Set the palette (builder pattern)
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn registry(&self) -> &CellRegistry {
        &self.registry
    }

    /// The drawing surface, absent while the viewport is zero-sized
    pub fn raster(&self) -> Option<&Raster> {
        self.raster.as_ref()
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Advance one generation and repaint. Returns false (doing nothing)
    /// while hidden or before the viewport has a size.
    pub fn tick(&mut self) -> bool {
        if !self.visible || self.grid.is_empty() {
            return false;
        }

        let evolution = self.grid.step();
        let stats = self.registry.apply(&evolution.grid, &evolution.neighbor_counts);
        self.grid = evolution.grid;
        self.generation += 1;
        self.render();

        debug!(
            generation = self.generation,
            born = stats.born,
            survived = stats.survived,
            evicted = stats.evicted,
            "tick"
        );
        true
    }

    /// Adopt a new viewport size. A changed size re-seeds the grid at random
    /// and rebuilds the surface; the same size is a no-op.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let viewport = Viewport::new(width, height);
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;

        let (grid_width, grid_height) = grid_dimensions(width, height);
        self.raster = (!viewport.is_empty())
            .then(|| Raster::new(width as usize, height as usize));
        self.grid = Grid::random(grid_width, grid_height, SEED_DENSITY, &mut self.rng);
        self.registry.seed(&self.grid);
        self.render();

        info!(
            width,
            height,
            grid_width,
            grid_height,
            population = self.grid.population(),
            "viewport resized, grid re-seeded"
        );
        true
    }

    /// Re-seed the current grid at random, keeping its size
    pub fn reseed(&mut self) {
        let (w, h) = self.grid.dimensions();
        self.grid = Grid::random(w, h, SEED_DENSITY, &mut self.rng);
        self.registry.seed(&self.grid);
        self.render();
        info!(population = self.grid.population(), "grid re-seeded");
    }

    /// Replace the grid contents with a single pattern in the middle of the grid
    pub fn reseed_centered(&mut self, pattern: &Pattern) {
        let (w, h) = self.grid.dimensions();
        let (x, y) = pattern.centered_origin(w, h);
        self.reseed_with(pattern, x, y);
    }

    /// Replace the grid contents with a single pattern at (x, y)
    pub fn reseed_with(&mut self, pattern: &Pattern, x: usize, y: usize) {
        let (w, h) = self.grid.dimensions();
        let mut grid = Grid::new(w, h);
        pattern.place_on(&mut grid, x, y);
        self.grid = grid;
        self.registry.seed(&self.grid);
        self.render();
        info!(
            pattern = pattern.name,
            description = pattern.description,
            x,
            y,
            "grid seeded with pattern"
        );
    }

    /// Show or hide the view; hidden ticks are skipped, never replayed
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            info!(visible, generation = self.generation, "visibility changed");
        }
        self.visible = visible;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        if self.palette != palette {
            self.palette = palette;
            self.render();
            info!(palette = palette.name(), "palette changed");
        }
    }

    /// Encode the current surface as PNG. Ok(None) when there is no surface yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if encoding fails.
    pub fn export_image(&self) -> Result<Option<Snapshot>, SnapshotError> {
        self.raster.as_ref().map(Snapshot::encode).transpose()
    }

    fn render(&mut self) {
        if let Some(raster) = self.raster.as_mut() {
            raster.render(&self.grid, &self.registry, self.palette);
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CELL_SIZE, cell_color, presets, spectrum_color};
    use std::collections::BTreeSet;

    fn state(width: u32, height: u32) -> GameState {
        let mut state = GameState::new(Some(1));
        state.resize(width, height);
        state
    }

    #[test]
    fn test_new_state_is_inert() {
        let mut state = GameState::new(Some(1));
        assert!(state.raster().is_none());
        assert!(!state.tick());
        assert_eq!(state.generation(), 0);
        assert!(state.export_image().unwrap().is_none());
    }

    #[test]
    fn test_resize_derives_grid_dimensions() {
        for (w, h) in [(1920, 1080), (1001, 803), (4, 4), (7, 13)] {
            let state = state(w, h);
            assert_eq!(
                state.grid().dimensions(),
                ((w / 4) as usize, (h / 4) as usize),
                "{w}x{h}"
            );
            assert_eq!(state.raster().unwrap().dimensions(), (w as usize, h as usize));
            assert_eq!(state.viewport(), Viewport::new(w, h));
        }
    }

    #[test]
    fn test_resize_to_zero_drops_surface() {
        let mut state = state(40, 40);
        assert!(state.resize(0, 40));
        assert!(state.raster().is_none());
        assert!(state.grid().is_empty());
        assert!(!state.tick());
        assert!(state.export_image().unwrap().is_none());
    }

    #[test]
    fn test_same_size_resize_keeps_grid() {
        let mut state = state(80, 60);
        let before = state.grid().clone();
        assert!(!state.resize(80, 60));
        assert_eq!(state.grid(), &before);
    }

    #[test]
    fn test_resize_reseeds_and_rebuilds_metadata() {
        let mut state = state(200, 200);
        state.tick();
        state.tick();
        assert!(!state.registry().is_empty());

        state.resize(120, 80);
        assert_eq!(state.registry().len(), state.population());
        assert!(state.registry().iter().all(|(_, meta)| meta.generation == 0));
        state.tick();
        assert!(state.registry().iter().all(|(key, _)| key.x < 30 && key.y < 20));
        assert_eq!(state.registry().len(), state.population());
    }

    #[test]
    fn test_generation_counts_executed_ticks() {
        let mut state = state(64, 64);
        for expected in 1..=5 {
            assert!(state.tick());
            assert_eq!(state.generation(), expected);
        }
    }

    #[test]
    fn test_hidden_ticks_are_skipped() {
        let mut state = state(64, 64);
        state.tick();
        let grid = state.grid().clone();

        state.set_visible(false);
        for _ in 0..10 {
            assert!(!state.tick());
        }
        assert_eq!(state.generation(), 1);
        assert_eq!(state.grid(), &grid);

        state.set_visible(true);
        assert!(state.tick());
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_glider_through_controller() {
        let mut state = state(40, 40); // 10x10 grid
        let glider = presets::glider();
        state.reseed_with(&glider, 2, 5);
        for _ in 0..4 {
            state.tick();
        }
        let alive: BTreeSet<_> = state.grid().alive_cells().collect();
        let expected: BTreeSet<_> = glider.cells_at(3, 6, 10, 10).into_iter().collect();
        assert_eq!(alive, expected);
        assert_eq!(state.registry().len(), 5);
    }

    #[test]
    fn test_registry_ages_block() {
        let mut state = state(32, 32);
        state.reseed_with(&presets::block(), 1, 1);
        assert!(state.registry().iter().all(|(_, meta)| meta.generation == 0));
        state.tick();
        assert!(state.registry().iter().all(|(_, meta)| meta.generation == 1));
        state.tick();
        state.tick();
        assert_eq!(state.registry().len(), 4);
        assert!(state.registry().iter().all(|(_, meta)| meta.generation == 3));
    }

    #[test]
    fn test_tick_repaints_surface() {
        let mut state = state(16, 16);
        state.reseed_with(&presets::block(), 1, 1);
        let revision = state.revision();
        state.tick();
        assert!(state.revision() > revision);

        let raster = state.raster().unwrap();
        let (px, py) = (2 * CELL_SIZE, CELL_SIZE);
        assert_eq!(raster.pixel(px, py), Some(cell_color(2, 1)));
    }

    #[test]
    fn test_export_matches_surface_size() {
        let state = state(48, 20);
        let snapshot = state.export_image().unwrap().unwrap();
        assert_eq!((snapshot.width, snapshot.height), (48, 20));
    }

    #[test]
    fn test_seeded_states_are_reproducible() {
        let a = state(100, 100);
        let b = state(100, 100);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_palette_change_repaints() {
        let mut state = state(16, 16).with_palette(Palette::Coordinate);
        let revision = state.revision();
        state.set_palette(Palette::Spectrum);
        assert_eq!(state.palette(), Palette::Spectrum);
        assert_eq!(state.revision(), revision + 1);
        state.set_palette(Palette::Spectrum);
        assert_eq!(state.revision(), revision + 1);
    }

    #[test]
    fn test_reseed_centered_places_pattern_mid_grid() {
        let mut state = state(40, 40);
        let toad = presets::toad();
        state.reseed_centered(&toad);
        let alive: BTreeSet<_> = state.grid().alive_cells().collect();
        let expected: BTreeSet<_> = toad.cells_at(3, 4, 10, 10).into_iter().collect();
        assert_eq!(alive, expected);
        assert_eq!(state.registry().len(), 6);
    }

    fn assert_spectrum_painted(state: &GameState) {
        let raster = state.raster().unwrap();
        for (x, y) in state.grid().alive_cells() {
            let meta = state.registry().get(x, y).copied().unwrap();
            let pixel = raster.pixel(x * CELL_SIZE, y * CELL_SIZE);
            assert_eq!(pixel, Some(meta.color), "cell ({x}, {y})");
        }
    }

    #[test]
    fn test_spectrum_paints_seeded_pattern_before_any_tick() {
        let mut state = GameState::new(Some(1)).with_palette(Palette::Spectrum);
        state.resize(16, 16);
        state.set_visible(false);
        state.reseed_with(&presets::block(), 1, 1);

        let pixel = state.raster().unwrap().pixel(4, 4);
        assert_eq!(pixel, Some(spectrum_color(3)));
        assert_ne!(pixel, Some(cell_color(1, 1)));
    }

    #[test]
    fn test_spectrum_follows_metadata_through_controller() {
        let mut state = GameState::new(Some(3)).with_palette(Palette::Spectrum);
        state.resize(120, 80);
        assert_spectrum_painted(&state);

        state.reseed();
        assert_spectrum_painted(&state);

        for _ in 0..3 {
            state.tick();
            assert_spectrum_painted(&state);
        }

        state.reseed_with(&presets::blinker(), 4, 4);
        state.tick();
        assert_spectrum_painted(&state);
        // Blinker centre keeps 2 neighbors, the new tips were born on 3
        assert_eq!(state.registry().get(5, 5).unwrap().color, spectrum_color(2));
        assert_eq!(state.registry().get(5, 4).unwrap().color, spectrum_color(3));
    }
}
