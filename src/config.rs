//! Board and fleet constants shared across the crate.

pub const BOARD_SIZE: usize = 10;

/// Number of ships in a fleet.
pub const NUM_SHIPS: usize = 10;

/// Ship lengths in commit order: one four-decker down to four single-cell boats.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of cells covered by a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 20;

/// Shot budget at the start of a match.
pub const STARTING_SHOTS: u32 = 100;

/// Score weight of a single hit cell, on either board.
pub const HIT_WEIGHT: i32 = 10;
