use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid is the toroidal cellular automaton board.
/// Every step produces a fresh grid; the previous one is never written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Result of one generation: the next grid plus the neighbor count
/// each cell saw on the previous one (row-major, same layout as the grid).
#[derive(Clone, Debug)]
pub struct Evolution {
    pub grid: Grid,
    pub neighbor_counts: Vec<u8>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid where each cell is alive independently with `density` probability
    pub fn random<R: Rng>(width: usize, height: usize, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        let cells = (0..width * height)
            .map(|_| Cell::from_alive(rng.random_bool(density)))
            .collect();

        Self { width, height, cells }
    }

    /// Create a grid with the given cells alive; coordinates wrap around the edges
    pub fn from_alive(
        width: usize,
        height: usize,
        alive: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut grid = Self::new(width, height);
        if grid.is_empty() {
            return grid;
        }
        for (x, y) in alive {
            grid.set(x % width, y % height, Cell::Alive);
        }
        grid
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True when the grid has no cells at all (zero-sized viewport)
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Alive flag at position; out of bounds reads as dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out of bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus).
    /// Coordinates themselves are wrapped too, so any (x, y) is accepted.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        if self.is_empty() {
            return 0;
        }
        let w = self.width as i64;
        let h = self.height as i64;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| {
                let nx = (x as i64 + dx).rem_euclid(w) as usize;
                let ny = (y as i64 + dy).rem_euclid(h) as usize;
                self.cells[self.get_index(nx, ny)].is_alive()
            })
            .count() as u8
    }

    /// Neighbor count for every cell, row-major, computed across the rayon pool
    pub fn neighbor_counts(&self) -> Vec<u8> {
        let width = self.width;
        (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.count_alive_neighbors(idx % width, idx / width))
            .collect()
    }

    /// Compute the next generation as a new grid
    pub fn step(&self) -> Evolution {
        let neighbor_counts = self.neighbor_counts();
        let cells = self
            .cells
            .par_iter()
            .zip(neighbor_counts.par_iter())
            .map(|(cell, &neighbors)| cell.evolve(neighbors))
            .collect();

        Evolution {
            grid: Self {
                width: self.width,
                height: self.height,
                cells,
            },
            neighbor_counts,
        }
    }

    /// Next generation without the neighbor counts
    pub fn evolve(&self) -> Self {
        self.step().grid
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Coordinates of all live cells, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}
