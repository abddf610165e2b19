use super::{Cell, Grid};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Absolute cell positions when the pattern's origin sits at (x, y)
    /// on a torus of the given size
    pub fn cells_at(&self, x: usize, y: usize, width: usize, height: usize) -> Vec<(usize, usize)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        self.cells
            .iter()
            .map(|(dx, dy)| ((x + dx) % width, (y + dy) % height))
            .collect()
    }

    /// Origin that puts the pattern's bounding box in the middle of a
    /// `width` x `height` grid
    pub const fn centered_origin(&self, width: usize, height: usize) -> (usize, usize) {
        (
            width.saturating_sub(self.width) / 2,
            height.saturating_sub(self.height) / 2,
        )
    }

    /// Place pattern on grid at specified position, wrapping past the edges
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        let (width, height) = grid.dimensions();
        for (cx, cy) in self.cells_at(x, y, width, height) {
            grid.set(cx, cy, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves (1, 1) every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), toad(), beacon(), block()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!((presets::beacon().width, presets::beacon().height), (4, 4));
    }

    #[test]
    fn test_place_wraps_at_edges() {
        let mut grid = Grid::new(5, 5);
        presets::block().place_on(&mut grid, 4, 4);
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 0), (4, 0), (0, 4), (4, 4)]);
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::toad(), presets::beacon()] {
            let mut grid = Grid::new(12, 12);
            pattern.place_on(&mut grid, 4, 4);
            let once = grid.evolve();
            assert_ne!(once, grid, "{}", pattern.name);
            assert_eq!(once.evolve(), grid, "{}", pattern.name);
        }
    }

    #[test]
    fn test_library_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
        for pattern in presets::all_patterns() {
            let mut grid = Grid::new(pattern.width + 1, pattern.height + 1);
            pattern.place_on(&mut grid, 0, 0);
            assert_eq!(grid.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_centered_origin() {
        let glider = presets::glider();
        assert_eq!(glider.centered_origin(10, 9), (3, 3));
        // Larger than the grid: pinned to the corner and wrapped on placement
        assert_eq!(presets::beacon().centered_origin(2, 3), (0, 0));
    }

    #[test]
    fn test_cells_at_on_empty_torus() {
        assert!(presets::glider().cells_at(0, 0, 0, 10).is_empty());
    }
}
