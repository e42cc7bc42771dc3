mod ai;
mod board;
mod common;
mod config;
mod game;
mod leaderboard;
mod logging;
mod placement;
mod ship;
mod sunk;
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use leaderboard::*;
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;
pub use sunk::*;
