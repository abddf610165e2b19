//! Per-cell metadata tracked alongside the grid.
//!
//! An entry appears when a cell is seeded or born, ages by one on every
//! tick it survives, and is evicted the tick it dies, so the registry keys
//! are always exactly the live cells.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use super::{Grid, Rgba, spectrum_color};

/// Coordinate key of a tracked cell, displayed as `"x.y"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub x: usize,
    pub y: usize,
}

impl CellKey {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.x, self.y)
    }
}

/// What a tracked cell looked like on its last update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMeta {
    pub alive_neighbors: u8,
    /// Consecutive survived ticks since the cell was born
    pub generation: u64,
    pub color: Rgba,
}

impl CellMeta {
    fn newborn(alive_neighbors: u8) -> Self {
        Self {
            alive_neighbors,
            generation: 0,
            color: spectrum_color(alive_neighbors),
        }
    }
}

/// Outcome of a single metadata update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaChange {
    Born,
    Survived,
    Evicted,
    Unchanged,
}

/// Per-tick summary of metadata changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetaStats {
    pub born: usize,
    pub survived: usize,
    pub evicted: usize,
}

#[derive(Clone, Debug, Default)]
pub struct CellRegistry {
    entries: HashMap<CellKey, CellMeta>,
}

impl CellRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&CellMeta> {
        self.entries.get(&CellKey::new(x, y))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &CellMeta)> {
        self.entries.iter()
    }

    /// Start tracking a freshly seeded grid: every live cell becomes a
    /// newborn entry tagged with its current neighbor count.
    pub fn seed(&mut self, grid: &Grid) -> usize {
        self.entries.clear();
        let counts = grid.neighbor_counts();
        self.entries.extend(
            grid.iter_cells()
                .zip(counts)
                .filter(|((_, _, cell), _)| cell.is_alive())
                .map(|((x, y, _), neighbors)| (CellKey::new(x, y), CellMeta::newborn(neighbors))),
        );
        self.entries.len()
    }

    /// Record the new state of one cell after a step.
    ///
    /// `alive` is the cell's next state and `neighbors` the count it saw on
    /// the previous grid.
    pub fn update(&mut self, x: usize, y: usize, alive: bool, neighbors: u8) -> MetaChange {
        let key = CellKey::new(x, y);
        if !alive {
            return match self.entries.remove(&key) {
                Some(_) => MetaChange::Evicted,
                None => MetaChange::Unchanged,
            };
        }

        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(CellMeta::newborn(neighbors));
                MetaChange::Born
            }
            // A tracked cell still alive after a step had 2 or 3 neighbors
            Entry::Occupied(mut slot) => {
                let meta = slot.get_mut();
                meta.alive_neighbors = neighbors;
                meta.generation += 1;
                meta.color = spectrum_color(neighbors);
                MetaChange::Survived
            }
        }
    }

    /// Apply a whole step: `grid` is the new generation and `neighbor_counts`
    /// the row-major counts taken on the previous one.
    pub fn apply(&mut self, grid: &Grid, neighbor_counts: &[u8]) -> MetaStats {
        let mut stats = MetaStats::default();
        for ((x, y, cell), &neighbors) in grid.iter_cells().zip(neighbor_counts) {
            match self.update(x, y, cell.is_alive(), neighbors) {
                MetaChange::Born => stats.born += 1,
                MetaChange::Survived => stats.survived += 1,
                MetaChange::Evicted => stats.evicted += 1,
                MetaChange::Unchanged => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_key_display() {
        assert_eq!(CellKey::new(12, 7).to_string(), "12.7");
    }

    #[test]
    fn test_newborn_entry() {
        let mut registry = CellRegistry::new();
        assert_eq!(registry.update(3, 4, true, 3), MetaChange::Born);

        let meta = registry.get(3, 4).copied().unwrap();
        assert_eq!(meta.generation, 0);
        assert_eq!(meta.alive_neighbors, 3);
        assert_eq!(meta.color, spectrum_color(3));
    }

    #[test]
    fn test_dead_untracked_cell_creates_nothing() {
        let mut registry = CellRegistry::new();
        assert_eq!(registry.update(0, 0, false, 3), MetaChange::Unchanged);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_survivor_ages_and_refreshes_tag() {
        let mut registry = CellRegistry::new();
        registry.update(1, 1, true, 3);
        assert_eq!(registry.update(1, 1, true, 2), MetaChange::Survived);
        assert_eq!(registry.update(1, 1, true, 3), MetaChange::Survived);
        let meta = registry.get(1, 1).copied().unwrap();
        assert_eq!(meta.generation, 2);
        assert_eq!(meta.alive_neighbors, 3);
        assert_eq!(meta.color, spectrum_color(3));
    }

    #[test]
    fn test_seed_tracks_every_live_cell() {
        let mut grid = Grid::new(8, 8);
        presets::block().place_on(&mut grid, 2, 2);
        let mut registry = CellRegistry::new();
        registry.update(7, 7, true, 3);

        assert_eq!(registry.seed(&grid), 4);
        assert!(registry.get(7, 7).is_none());
        for (x, y) in grid.alive_cells() {
            let meta = registry.get(x, y).copied().unwrap();
            assert_eq!(meta.generation, 0);
            assert_eq!(meta.alive_neighbors, 3);
            assert_eq!(meta.color, spectrum_color(3));
        }
    }

    #[test]
    fn test_seeded_block_ages_from_first_tick() {
        let mut grid = Grid::new(8, 8);
        presets::block().place_on(&mut grid, 2, 2);
        let mut registry = CellRegistry::new();
        registry.seed(&grid);

        let next = grid.step();
        let stats = registry.apply(&next.grid, &next.neighbor_counts);
        assert_eq!(stats, MetaStats { born: 0, survived: 4, evicted: 0 });
        assert!(registry.iter().all(|(_, meta)| meta.generation == 1));
    }

    #[test]
    fn test_death_evicts_entry() {
        let mut registry = CellRegistry::new();
        registry.update(2, 2, true, 3);
        assert_eq!(registry.update(2, 2, false, 1), MetaChange::Evicted);
        assert!(registry.get(2, 2).is_none());

        // Reborn later starts from zero again
        assert_eq!(registry.update(2, 2, true, 3), MetaChange::Born);
        assert_eq!(registry.get(2, 2).unwrap().generation, 0);
    }

    #[test]
    fn test_apply_tracks_blinker() {
        let mut grid = Grid::new(6, 6);
        presets::blinker().place_on(&mut grid, 1, 1);
        let mut registry = CellRegistry::new();

        let first = grid.step();
        let stats = registry.apply(&first.grid, &first.neighbor_counts);
        // Centre survives (first sighting), two tips are born
        assert_eq!(stats, MetaStats { born: 3, survived: 0, evicted: 0 });
        assert_eq!(registry.len(), 3);

        let second = first.grid.step();
        let stats = registry.apply(&second.grid, &second.neighbor_counts);
        assert_eq!(stats, MetaStats { born: 2, survived: 1, evicted: 2 });
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(2, 2).unwrap().generation, 1);
        assert_eq!(registry.len(), second.grid.population());
    }
}
