//! Arena: the game loop around the tactical bot.
//!
//! Plays the bot against an opponent from the initial position (or a given
//! FEN), prints the board after every ply and reports how each game ended.
//!
//! # Usage
//!
//! ```bash
//! # One game, bot as Black against random moves
//! cargo run -p arena
//!
//! # Ten games as White, results saved as JSON
//! cargo run -p arena -- --games 10 --bot-color white --output results.json
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
