//! Ship records and the player's staged fleet.

use crate::common::Direction;
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, NUM_SHIPS};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single ship: id, length and staged position. The ship itself never
/// records damage; once committed to a board its live/sunk status is derived
/// entirely from board cell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    id: u8,
    length: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
}

impl Ship {
    /// Ship staged for placement: anchored at the origin, horizontal.
    pub fn staged(id: u8, length: usize) -> Self {
        Ship::new(id, length, 0, 0, Orientation::Horizontal)
    }

    /// Ship at an explicit anchor and orientation.
    pub fn new(id: u8, length: usize, x: usize, y: usize, orientation: Orientation) -> Self {
        debug_assert!((1..=BOARD_SIZE).contains(&length));
        Ship {
            id,
            length,
            x,
            y,
            orientation,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Anchor cell `(x, y)`; the ship extends right or down from here.
    pub fn anchor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Coordinates the ship occupies, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.x + i, self.y),
            Orientation::Vertical => (self.x, self.y + i),
        })
    }

    /// Largest anchor coordinates that keep the ship fully on the board.
    fn anchor_limits(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (BOARD_SIZE - self.length, BOARD_SIZE - 1),
            Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - self.length),
        }
    }

    /// Move the anchor one cell, staying inside the board for the current
    /// orientation. Moves past the limit are dropped.
    pub fn nudge(&mut self, dir: Direction) {
        let (max_x, max_y) = self.anchor_limits();
        match dir {
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Down => {
                if self.y < max_y {
                    self.y += 1;
                }
            }
            Direction::Right => {
                if self.x < max_x {
                    self.x += 1;
                }
            }
        }
    }

    /// Toggle the orientation, clamping the anchor so the rotated ship still
    /// fits on the board.
    pub fn rotate(&mut self) {
        self.orientation = match self.orientation {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
        let (max_x, max_y) = self.anchor_limits();
        self.x = self.x.min(max_x);
        self.y = self.y.min(max_y);
    }
}

/// The player's ordered fleet and its placement progress. Ship ids run from
/// 1 to [`NUM_SHIPS`] in commit order.
#[derive(Debug, Clone)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
    committed: usize,
}

impl Fleet {
    /// Full fleet with every ship staged at the origin.
    pub fn new() -> Self {
        let ships =
            core::array::from_fn(|i| Ship::staged(i as u8 + 1, FLEET_LENGTHS[i]));
        Fleet {
            ships,
            committed: 0,
        }
    }

    /// The ship currently being placed, if any remain.
    pub fn current(&self) -> Option<&Ship> {
        self.ships.get(self.committed)
    }

    /// Mutable handle on the ship currently being placed.
    pub fn current_mut(&mut self) -> Option<&mut Ship> {
        self.ships.get_mut(self.committed)
    }

    /// Ships already committed to the board, in commit order.
    pub fn committed(&self) -> &[Ship] {
        &self.ships[..self.committed]
    }

    /// Mark the current ship committed and advance to the next one.
    pub fn advance(&mut self) {
        debug_assert!(self.committed < NUM_SHIPS);
        self.committed += 1;
    }

    /// `true` once every ship has been committed.
    pub fn is_complete(&self) -> bool {
        self.committed == NUM_SHIPS
    }

    /// Restage the whole fleet at the origin for a new match. Ships are
    /// value-like records, so reinitializing them in place is fine.
    pub fn reset(&mut self) {
        for (i, ship) in self.ships.iter_mut().enumerate() {
            *ship = Ship::staged(i as u8 + 1, FLEET_LENGTHS[i]);
        }
        self.committed = 0;
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Fleet::new()
    }
}
