//! Grid state for one side of the match: ship cells, hits and misses.

use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use core::fmt;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, never shot at.
    Empty,
    /// Intact cell of the ship with this id (ids start at 1).
    Ship(u8),
    /// Resolved shot that struck water.
    Miss,
    /// Resolved shot that struck a ship cell.
    Hit,
}

/// A 10×10 board owned by one side. Coordinates are `(x, y)` with `x` the
/// column and `y` the row, both zero-based.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// State of the cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.cells[y][x])
    }

    /// Write `Ship(id)` into every listed cell. Validity (bounds, overlap,
    /// adjacency) is the caller's responsibility and is checked upstream by
    /// the placement validator.
    pub fn place(&mut self, id: u8, cells: impl IntoIterator<Item = (usize, usize)>) {
        for (x, y) in cells {
            debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
            debug_assert_eq!(self.cells[y][x], Cell::Empty);
            self.cells[y][x] = Cell::Ship(id);
        }
    }

    /// `true` while the cell may still be fired at, i.e. it is neither a
    /// recorded hit nor a recorded miss. Out-of-bounds cells are not shootable.
    pub fn is_shootable(&self, x: usize, y: usize) -> bool {
        matches!(self.cell(x, y), Ok(Cell::Empty) | Ok(Cell::Ship(_)))
    }

    /// Resolve a shot at `(x, y)`. Callers must check [`Board::is_shootable`]
    /// first; firing on an already-resolved cell leaves the board unchanged
    /// and reports [`BoardError::AlreadyResolved`].
    pub fn fire(&mut self, x: usize, y: usize) -> Result<ShotResult, BoardError> {
        match self.cell(x, y)? {
            Cell::Ship(_) => {
                self.cells[y][x] = Cell::Hit;
                Ok(ShotResult::Hit)
            }
            Cell::Empty => {
                self.cells[y][x] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
            Cell::Miss | Cell::Hit => Err(BoardError::AlreadyResolved),
        }
    }

    /// `true` while any intact ship cell remains. This is the win/loss
    /// predicate: a side has lost exactly when its board reports `false`.
    pub fn has_live_ship_cells(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|c| matches!(c, Cell::Ship(_)))
    }

    /// Number of cells resolved to [`Cell::Hit`].
    pub fn hit_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Hit))
            .count()
    }

    /// Clear every cell back to [`Cell::Empty`].
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub(crate) fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        self.cells[y][x] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for y in 0..BOARD_SIZE {
            write!(f, "  ")?;
            for x in 0..BOARD_SIZE {
                let ch = match self.cells[y][x] {
                    Cell::Empty => '.',
                    Cell::Ship(_) => 'S',
                    Cell::Miss => 'o',
                    Cell::Hit => 'X',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// In-bounds 8-connected (Chebyshev distance 1) neighbors of `(x, y)`.
pub(crate) fn neighbors8(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    let (xi, yi) = (x as isize, y as isize);
    (-1..=1isize)
        .flat_map(move |dy| (-1..=1isize).map(move |dx| (xi + dx, yi + dy)))
        .filter(move |&(nx, ny)| (nx, ny) != (xi, yi))
        .filter(|&(nx, ny)| {
            nx >= 0 && ny >= 0 && (nx as usize) < BOARD_SIZE && (ny as usize) < BOARD_SIZE
        })
        .map(|(nx, ny)| (nx as usize, ny as usize))
}

/// In-bounds 4-connected (orthogonal) neighbors of `(x, y)`.
pub(crate) fn neighbors4(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    let (xi, yi) = (x as isize, y as isize);
    [(0isize, -1isize), (0, 1), (-1, 0), (1, 0)]
        .into_iter()
        .map(move |(dx, dy)| (xi + dx, yi + dy))
        .filter(|&(nx, ny)| {
            nx >= 0 && ny >= 0 && (nx as usize) < BOARD_SIZE && (ny as usize) < BOARD_SIZE
        })
        .map(|(nx, ny)| (nx as usize, ny as usize))
}
