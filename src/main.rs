use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{ui, Command, Direction, Game, Phase};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "leaderboard.txt")]
        leaderboard: PathBuf,
    },
    /// Show the saved leaderboard.
    Scores {
        #[arg(long, default_value = "leaderboard.txt")]
        leaderboard: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed, leaderboard } => play(seed, &leaderboard),
        Commands::Scores { leaderboard } => {
            ui::render_scores(&seabattle::load_entries(&leaderboard));
            Ok(())
        }
    }
}

fn play(seed: Option<u64>, leaderboard: &Path) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut game = Game::new();

    loop {
        ui::render(&game);
        match game.phase() {
            Phase::Placement | Phase::PlayerTurn => {
                let Some(cmd) = read_command(game.phase())? else {
                    break;
                };
                let outcome = game.apply(cmd, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
                ui::announce(outcome);
            }
            Phase::OpponentTurn => {
                while let Some((x, y, result)) = game.opponent_fire(&mut rng) {
                    ui::announce_opponent_shot(x, y, result);
                    if game.phase() == Phase::OpponentTurn {
                        // pacing between consecutive enemy hits
                        std::thread::sleep(Duration::from_millis(500));
                    }
                }
            }
            Phase::Win | Phase::Loss => {
                let score = game.score();
                let name = prompt("Enter your name for the leaderboard (blank to skip): ")?;
                let name = name.trim();
                if !name.is_empty() {
                    seabattle::append_entry(leaderboard, name, score)?;
                }
                ui::render_scores(&seabattle::load_entries(leaderboard));
                let answer = prompt("Play again? (n = new game, anything else quits): ")?;
                if answer.trim().eq_ignore_ascii_case("n") {
                    let outcome = game
                        .apply(Command::Reset, &mut rng)
                        .map_err(|e| anyhow::anyhow!(e))?;
                    ui::announce(outcome);
                } else {
                    break;
                }
            }
        }
    }
    println!("Thanks for playing!");
    Ok(())
}

/// Map a line of input to a command. `None` means quit (explicit `q` or EOF).
fn read_command(phase: Phase) -> anyhow::Result<Option<Command>> {
    let placement = phase == Phase::Placement;
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim().to_ascii_lowercase();
        let cmd = match line.as_str() {
            "q" | "quit" => return Ok(None),
            "w" => move_command(placement, Direction::Up),
            "s" => move_command(placement, Direction::Down),
            "a" => move_command(placement, Direction::Left),
            "d" => move_command(placement, Direction::Right),
            "r" if placement => Command::RotateShip,
            "" if placement => Command::CommitShip,
            "" | "f" => Command::Fire,
            _ => {
                println!("Unrecognized input '{}'.", line);
                continue;
            }
        };
        return Ok(Some(cmd));
    }
}

fn move_command(placement: bool, dir: Direction) -> Command {
    if placement {
        Command::MoveShip(dir)
    } else {
        Command::MoveCursor(dir)
    }
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
