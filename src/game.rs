//! Match state machine: phases, commands and score accounting.

use crate::ai;
use crate::board::Board;
use crate::common::{BoardError, Direction, ShotResult};
use crate::config::{BOARD_SIZE, HIT_WEIGHT, STARTING_SHOTS};
use crate::placement::{placement_is_valid, populate};
use crate::ship::Fleet;
use crate::sunk::mark_sunk_surroundings;
use log::{debug, info};
use rand::Rng;

/// Phase of a match. A single tagged variant, so no invalid flag combination
/// is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player is placing ships on their own board.
    Placement,
    /// The player aims and fires at the opponent board.
    PlayerTurn,
    /// The opponent fires at the player board, repeating while it hits.
    OpponentTurn,
    /// Terminal: every opponent ship cell is hit.
    Win,
    /// Terminal: every player ship cell is hit.
    Loss,
}

/// Discrete input commands delivered by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the ship currently being placed.
    MoveShip(Direction),
    /// Rotate the ship currently being placed.
    RotateShip,
    /// Commit the current ship to the board, if the validator approves.
    CommitShip,
    /// Move the aiming cursor on the opponent board.
    MoveCursor(Direction),
    /// Fire at the cell under the cursor.
    Fire,
    /// Start a fresh match from a terminal phase.
    Reset,
}

/// What a command did, for frontend messaging. Rejections are outcomes, not
/// errors: the match state is unchanged and no turn is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command does not apply to the current phase; nothing changed.
    Ignored,
    /// The staged ship moved or rotated.
    ShipMoved,
    /// The staged ship was committed to the board.
    ShipCommitted,
    /// The validator rejected the commit; placement is unchanged.
    PlacementRejected,
    /// The last ship was committed and the opponent fleet was generated.
    FleetDeployed,
    /// The aiming cursor moved.
    CursorMoved,
    /// The player's shot resolved to a hit or miss.
    PlayerShot(ShotResult),
    /// The targeted cell was already resolved; no shot was spent.
    TargetRejected,
    /// The match was reinitialized for a new game.
    MatchReset,
}

/// A single match: both boards, the player's fleet, the current phase and
/// the score ledger.
///
/// Invariant: `score = shots_remaining + 10·(opponent cells hit) −
/// 10·(player cells hit)`, frozen once a terminal phase is reached.
pub struct Game {
    player_board: Board,
    opponent_board: Board,
    fleet: Fleet,
    phase: Phase,
    cursor: (usize, usize),
    shots_remaining: u32,
    score: i32,
}

impl Game {
    /// Fresh match in the placement phase.
    pub fn new() -> Self {
        Game {
            player_board: Board::new(),
            opponent_board: Board::new(),
            fleet: Fleet::new(),
            phase: Phase::Placement,
            cursor: (0, 0),
            shots_remaining: STARTING_SHOTS,
            score: STARTING_SHOTS as i32,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn shots_remaining(&self) -> u32 {
        self.shots_remaining
    }

    /// Aiming cursor on the opponent board.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Apply one frontend command. Commands that do not fit the current
    /// phase are reported as [`Outcome::Ignored`] and change nothing.
    pub fn apply<R: Rng>(&mut self, command: Command, rng: &mut R) -> Result<Outcome, BoardError> {
        match (self.phase, command) {
            (Phase::Placement, Command::MoveShip(dir)) => {
                if let Some(ship) = self.fleet.current_mut() {
                    ship.nudge(dir);
                    Ok(Outcome::ShipMoved)
                } else {
                    Ok(Outcome::Ignored)
                }
            }
            (Phase::Placement, Command::RotateShip) => {
                if let Some(ship) = self.fleet.current_mut() {
                    ship.rotate();
                    Ok(Outcome::ShipMoved)
                } else {
                    Ok(Outcome::Ignored)
                }
            }
            (Phase::Placement, Command::CommitShip) => self.commit_ship(rng),
            (Phase::PlayerTurn, Command::MoveCursor(dir)) => {
                self.move_cursor(dir);
                Ok(Outcome::CursorMoved)
            }
            (Phase::PlayerTurn, Command::Fire) => Ok(self.player_fire()),
            (Phase::Win | Phase::Loss, Command::Reset) => {
                self.reset();
                Ok(Outcome::MatchReset)
            }
            _ => Ok(Outcome::Ignored),
        }
    }

    /// Resolve one opponent shot against the player board. Only meaningful in
    /// [`Phase::OpponentTurn`]; the opponent keeps the turn while it hits, so
    /// callers invoke this repeatedly until the phase changes. Loss is
    /// checked after every individual shot, terminating a hit streak the
    /// moment the last ship cell falls.
    pub fn opponent_fire<R: Rng>(&mut self, rng: &mut R) -> Option<(usize, usize, ShotResult)> {
        if self.phase != Phase::OpponentTurn {
            return None;
        }
        let (x, y) = ai::choose_target(&self.player_board, rng)?;
        let result = self.player_board.fire(x, y).ok()?;
        mark_sunk_surroundings(&mut self.player_board);
        self.recompute_score();
        debug!("opponent fired at ({}, {}): {:?}", x, y, result);
        if !self.player_board.has_live_ship_cells() {
            info!("player fleet destroyed, match lost with score {}", self.score);
            self.phase = Phase::Loss;
        } else if result == ShotResult::Miss {
            self.phase = Phase::PlayerTurn;
        }
        Some((x, y, result))
    }

    fn commit_ship<R: Rng>(&mut self, rng: &mut R) -> Result<Outcome, BoardError> {
        let Some(ship) = self.fleet.current().copied() else {
            return Ok(Outcome::Ignored);
        };
        if !placement_is_valid(&ship, &self.player_board) {
            return Ok(Outcome::PlacementRejected);
        }
        self.player_board.place(ship.id(), ship.cells());
        self.fleet.advance();
        if self.fleet.is_complete() {
            populate(&mut self.opponent_board, rng)?;
            self.cursor = (0, 0);
            self.phase = Phase::PlayerTurn;
            info!("placement complete, battle begins");
            return Ok(Outcome::FleetDeployed);
        }
        Ok(Outcome::ShipCommitted)
    }

    fn move_cursor(&mut self, dir: Direction) {
        let (x, y) = self.cursor;
        self.cursor = match dir {
            Direction::Up => (x, y.saturating_sub(1)),
            Direction::Down => (x, (y + 1).min(BOARD_SIZE - 1)),
            Direction::Left => (x.saturating_sub(1), y),
            Direction::Right => ((x + 1).min(BOARD_SIZE - 1), y),
        };
    }

    fn player_fire(&mut self) -> Outcome {
        let (x, y) = self.cursor;
        if !self.opponent_board.is_shootable(x, y) {
            return Outcome::TargetRejected;
        }
        let Ok(result) = self.opponent_board.fire(x, y) else {
            // is_shootable was checked above
            return Outcome::TargetRejected;
        };
        mark_sunk_surroundings(&mut self.opponent_board);
        self.shots_remaining = self.shots_remaining.saturating_sub(1);
        self.recompute_score();
        debug!("player fired at ({}, {}): {:?}", x, y, result);
        if !self.opponent_board.has_live_ship_cells() {
            info!("opponent fleet destroyed, match won with score {}", self.score);
            self.phase = Phase::Win;
        } else if result == ShotResult::Miss {
            self.phase = Phase::OpponentTurn;
        }
        Outcome::PlayerShot(result)
    }

    fn recompute_score(&mut self) {
        let dealt = self.opponent_board.hit_cells() as i32;
        let taken = self.player_board.hit_cells() as i32;
        self.score = self.shots_remaining as i32 + HIT_WEIGHT * dealt - HIT_WEIGHT * taken;
    }

    /// Reinitialize everything for a new match: both boards empty, fleet
    /// restaged at the origin, shot budget and score back to their starting
    /// values.
    fn reset(&mut self) {
        self.player_board.reset();
        self.opponent_board.reset();
        self.fleet.reset();
        self.cursor = (0, 0);
        self.shots_remaining = STARTING_SHOTS;
        self.score = STARTING_SHOTS as i32;
        self.phase = Phase::Placement;
        info!("match reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
