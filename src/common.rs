//! Common types: shot results, movement directions, board errors.

/// Result of resolving a shot against a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot struck an intact ship cell.
    Hit,
    /// Shot landed on open water.
    Miss,
}

/// Movement direction for ship staging and cursor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Errors returned by board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 10×10 grid.
    OutOfBounds,
    /// Target cell was already resolved to a hit or miss.
    AlreadyResolved,
    /// Random fleet generation gave up after exhausting its retry budget.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::AlreadyResolved => write!(f, "Cell was already shot at"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}
