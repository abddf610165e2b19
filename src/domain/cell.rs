/// State of one square on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// State after one generation given the live neighbor count (B3/S23)
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) | (Cell::Alive, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
