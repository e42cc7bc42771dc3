//! Terminal rendering of match state: the render collaborator of the core.
//!
//! Everything here reads snapshots only; no function mutates the game.

use crate::board::{Board, Cell};
use crate::common::ShotResult;
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::game::{Game, Outcome, Phase};
use crate::leaderboard::ScoreEntry;

fn cell_char(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Ship(_) if reveal => 'S',
        _ => '.',
    }
}

/// Print one board. `reveal` shows intact ship cells; `overlay` cells are
/// drawn as `#` on top (the ship being staged); `cursor` marks a cell with a
/// leading `>`.
fn print_board(
    board: &Board,
    reveal: bool,
    overlay: &[(usize, usize)],
    cursor: Option<(usize, usize)>,
) {
    println!("    ╔═══════════════════════╗");
    print!("    ║  ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!(" ║");
    println!("    ╠═══════════════════════╣");
    for y in 0..BOARD_SIZE {
        print!("    ║{:2}", y + 1);
        for x in 0..BOARD_SIZE {
            let ch = if overlay.contains(&(x, y)) {
                '#'
            } else {
                cell_char(board.cell(x, y).unwrap_or(Cell::Empty), reveal)
            };
            let prefix = if cursor == Some((x, y)) { '>' } else { ' ' };
            print!("{}{}", prefix, ch);
        }
        println!(" ║");
    }
    println!("    ╚═══════════════════════╝");
}

/// Render the whole match view for the current phase.
pub fn render(game: &Game) {
    match game.phase() {
        Phase::Placement => render_placement(game),
        Phase::PlayerTurn | Phase::OpponentTurn => render_battle(game),
        Phase::Win => render_terminal(game, "VICTORY! The enemy fleet is destroyed."),
        Phase::Loss => render_terminal(game, "DEFEAT! Your fleet is destroyed."),
    }
}

fn render_placement(game: &Game) {
    println!("\n════════════ SHIP PLACEMENT ════════════");
    let staged: Vec<(usize, usize)> = match game.fleet().current() {
        Some(ship) => ship.cells().collect(),
        None => Vec::new(),
    };
    print_board(game.player_board(), true, &staged, None);
    if let Some(ship) = game.fleet().current() {
        println!(
            "    Placing ship {}/{} (length {})",
            ship.id(),
            NUM_SHIPS,
            ship.length()
        );
    }
    println!("    Keys: w/a/s/d move, r rotate, ENTER commit, q quit");
}

fn render_battle(game: &Game) {
    println!("\n══════════════ BATTLE ══════════════");
    println!("    Enemy waters:");
    let cursor = (game.phase() == Phase::PlayerTurn).then(|| game.cursor());
    print_board(game.opponent_board(), false, &[], cursor);
    println!("    Your fleet:");
    print_board(game.player_board(), true, &[], None);
    print_status(game);
    if game.phase() == Phase::PlayerTurn {
        println!("    Keys: w/a/s/d aim, f or ENTER fire, q quit");
    }
}

fn render_terminal(game: &Game, banner: &str) {
    println!("\n════════════════════════════════════");
    println!("    {}", banner);
    println!("════════════════════════════════════");
    print_board(game.opponent_board(), true, &[], None);
    print_board(game.player_board(), true, &[], None);
    print_status(game);
}

fn print_status(game: &Game) {
    println!(
        "    Score: {}   Shots remaining: {}",
        game.score(),
        game.shots_remaining()
    );
}

/// One-line feedback for the outcome of a command.
pub fn announce(outcome: Outcome) {
    match outcome {
        Outcome::PlacementRejected => {
            println!("✗ Ships must stay on the board and may not touch each other.");
        }
        Outcome::ShipCommitted => println!("✓ Ship placed."),
        Outcome::FleetDeployed => println!("✓ All ships placed. Enemy fleet sighted!"),
        Outcome::PlayerShot(result) => match result {
            ShotResult::Hit => println!("🎯 HIT! Fire again."),
            ShotResult::Miss => println!("💧 Miss. The enemy takes aim..."),
        },
        Outcome::TargetRejected => println!("✗ You already shot there. Pick another cell."),
        Outcome::MatchReset => println!("New match. Place your ships."),
        Outcome::Ignored | Outcome::ShipMoved | Outcome::CursorMoved => {}
    }
}

/// Report an opponent shot at `(x, y)`.
pub fn announce_opponent_shot(x: usize, y: usize, result: ShotResult) {
    let col = (b'A' + x as u8) as char;
    match result {
        ShotResult::Hit => println!("⚠️  Enemy HIT at {}{}!", col, y + 1),
        ShotResult::Miss => println!("✓ Enemy missed at {}{}.", col, y + 1),
    }
}

/// Print the leaderboard, best score first.
pub fn render_scores(entries: &[ScoreEntry]) {
    println!("\n═══════════ LEADERBOARD ═══════════");
    if entries.is_empty() {
        println!("    No scores recorded yet.");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("    {:>2}. {:<20} {:>6}", i + 1, entry.name, entry.score);
    }
}
