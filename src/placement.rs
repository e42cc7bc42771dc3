//! Placement legality checks and random fleet generation.

use crate::board::{neighbors8, Board, Cell};
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET_LENGTHS};
use crate::ship::{Orientation, Ship};
use log::debug;
use rand::Rng;

/// Attempts per ship before the whole board is cleared and regenerated.
const ATTEMPTS_PER_SHIP: usize = 1_000;

/// Full-board restarts before giving up. The standard fleet always fits, so
/// this bound only matters for degenerate configurations.
const MAX_RESTARTS: usize = 100;

/// Check whether `ship` may legally be committed to `board`: every occupied
/// cell must be in bounds and empty, and no 8-connected neighbor may hold
/// another ship. Ships may never touch, not even diagonally. Does not mutate.
pub fn placement_is_valid(ship: &Ship, board: &Board) -> bool {
    for (x, y) in ship.cells() {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return false;
        }
        match board.cell(x, y) {
            Ok(Cell::Empty) => {}
            _ => return false,
        }
        // Neighbors occupied by this same ship are still Empty on the board,
        // so one pass rejects both overlap and adjacency.
        for (nx, ny) in neighbors8(x, y) {
            if matches!(board.cell(nx, ny), Ok(Cell::Ship(_))) {
                return false;
            }
        }
    }
    true
}

/// Populate `board` with the standard fleet at random, assigning ship ids
/// from 1 in fleet order. Each ship is sampled until the validator accepts
/// it; if a ship exhausts its attempt budget the board is cleared and
/// generation starts over.
pub fn populate<R: Rng>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    'restart: for restart in 0..MAX_RESTARTS {
        if restart > 0 {
            debug!("fleet generation restarting (attempt {})", restart + 1);
            board.reset();
        }
        for (i, &length) in FLEET_LENGTHS.iter().enumerate() {
            let id = i as u8 + 1;
            let mut placed = false;
            for _ in 0..ATTEMPTS_PER_SHIP {
                let ship = random_candidate(id, length, rng);
                if placement_is_valid(&ship, board) {
                    board.place(id, ship.cells());
                    placed = true;
                    break;
                }
            }
            if !placed {
                continue 'restart;
            }
        }
        return Ok(());
    }
    Err(BoardError::UnableToPlaceShip)
}

/// Random anchor and orientation for a ship of `length`, always in bounds.
fn random_candidate<R: Rng>(id: u8, length: usize, rng: &mut R) -> Ship {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_x, max_y) = match orientation {
        Orientation::Horizontal => (BOARD_SIZE - length, BOARD_SIZE - 1),
        Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - length),
    };
    let x = rng.random_range(0..=max_x);
    let y = rng.random_range(0..=max_y);
    Ship::new(id, length, x, y, orientation)
}
