//! Detection of fully-sunk ships and automatic marking of the water around
//! them.
//!
//! A sunk ship is a maximal 4-connected component of [`Cell::Hit`] cells with
//! no intact ship cell among its 8-connected neighbors. Because ships never
//! touch, such a component always corresponds to exactly one ship. Once a
//! ship is identified as sunk, every empty neighbor is marked as a miss so
//! the player never wastes shots on water that cannot hold a ship.

use crate::board::{neighbors4, neighbors8, Board, Cell};
use crate::config::BOARD_SIZE;

/// Mark the surroundings of every fully-sunk ship on `board` as misses.
///
/// Must run after every resolved shot so the automatic miss marking stays
/// consistent before the board is shown or the opponent moves again.
/// Idempotent: a second pass over an already-surrounded ship finds no empty
/// neighbors left to mark.
pub fn mark_sunk_surroundings(board: &mut Board) {
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if seen[y][x] || !matches!(board.cell(x, y), Ok(Cell::Hit)) {
                continue;
            }
            let component = collect_hit_component(board, x, y, &mut seen);
            if is_sunk(board, &component) {
                surround_with_misses(board, &component);
            }
        }
    }
}

/// Flood-fill the 4-connected component of hit cells containing `(x, y)`.
fn collect_hit_component(
    board: &Board,
    x: usize,
    y: usize,
    seen: &mut [[bool; BOARD_SIZE]; BOARD_SIZE],
) -> Vec<(usize, usize)> {
    let mut component = Vec::new();
    let mut stack = vec![(x, y)];
    seen[y][x] = true;
    while let Some((cx, cy)) = stack.pop() {
        component.push((cx, cy));
        for (nx, ny) in neighbors4(cx, cy) {
            if !seen[ny][nx] && matches!(board.cell(nx, ny), Ok(Cell::Hit)) {
                seen[ny][nx] = true;
                stack.push((nx, ny));
            }
        }
    }
    component
}

/// A hit component belongs to a sunk ship when no cell of the component has
/// an intact ship cell within Chebyshev distance 1.
fn is_sunk(board: &Board, component: &[(usize, usize)]) -> bool {
    component.iter().all(|&(x, y)| {
        neighbors8(x, y).all(|(nx, ny)| !matches!(board.cell(nx, ny), Ok(Cell::Ship(_))))
    })
}

fn surround_with_misses(board: &mut Board, component: &[(usize, usize)]) {
    for &(x, y) in component {
        for (nx, ny) in neighbors8(x, y) {
            if matches!(board.cell(nx, ny), Ok(Cell::Empty)) {
                board.set_cell(nx, ny, Cell::Miss);
            }
        }
    }
}
