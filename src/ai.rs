//! Opponent targeting: uniform-random search for a shootable cell.

use crate::board::Board;
use crate::config::BOARD_SIZE;
use rand::Rng;

/// Random samples before falling back to a deterministic sweep. On a mostly
/// open board the first sample almost always lands; the sweep only matters
/// when the board is nearly exhausted.
const MAX_SAMPLES: usize = 1_024;

/// Pick a target cell on `board` that has not been resolved yet. Sampling is
/// uniform over the whole grid; cells already marked hit or miss are
/// rejected and redrawn. Returns `None` only when no shootable cell remains,
/// which a live board (one with intact ship cells) can never report.
pub fn choose_target<R: Rng>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    for _ in 0..MAX_SAMPLES {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        if board.is_shootable(x, y) {
            return Some((x, y));
        }
    }
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if board.is_shootable(x, y) {
                return Some((x, y));
            }
        }
    }
    None
}
