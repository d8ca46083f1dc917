//! Game loop: alternate the two players until the game ends.

use chess_core::{legal_moves, Engine};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::error::ArenaError;
use crate::results::{GameOutcome, GameRecord, MatchResult};

/// Runs games between the bot and an opponent
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every configured game. The result is from the bot's perspective.
    pub fn run_match(
        &self,
        bot: &mut dyn Engine,
        opponent: &mut dyn Engine,
    ) -> Result<MatchResult, ArenaError> {
        let mut result = MatchResult::new(bot.name(), opponent.name());

        for game_num in 0..self.config.games {
            let game = self.play_game(bot, opponent)?;
            let (score_text, outcome) = (game.outcome.score_text(), game.outcome);
            result.record(game);

            println!(
                "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                game_num + 1,
                self.config.games,
                score_text,
                outcome,
                result.wins,
                result.losses,
                result.draws
            );
        }

        Ok(result)
    }

    /// Play a single game from the configured start position.
    pub fn play_game(
        &self,
        bot: &mut dyn Engine,
        opponent: &mut dyn Engine,
    ) -> Result<GameRecord, ArenaError> {
        let mut pos = self.config.start_position()?;
        let start_fen = pos.to_fen();
        let bot_color = self.config.bot_color;
        bot.new_game();
        opponent.new_game();

        info!(bot = bot.name(), opponent = opponent.name(), %bot_color, "game started");
        let started = Instant::now();

        let mut moves = Vec::new();
        let mut book_moves = 0;
        let outcome = loop {
            if let Some(termination) = pos.termination() {
                break GameOutcome::from(termination);
            }
            if moves.len() >= self.config.max_plies as usize {
                break GameOutcome::MoveCap;
            }

            let mover: &mut dyn Engine = if pos.side_to_move == bot_color {
                &mut *bot
            } else {
                &mut *opponent
            };
            let reply = mover.search(&pos);
            let Some(mv) = reply.best_move else {
                return Err(ArenaError::NoMove {
                    engine: mover.name().to_string(),
                    fen: pos.to_fen(),
                });
            };
            if !legal_moves(&pos).contains(&mv) {
                return Err(ArenaError::IllegalMove {
                    engine: mover.name().to_string(),
                    mv: mv.to_string(),
                    fen: pos.to_fen(),
                });
            }
            if pos.side_to_move == bot_color && reply.from_book {
                book_moves += 1;
            }
            debug!(player = mover.name(), mv = %mv, nodes = reply.nodes, "move played");

            pos = pos.play(mv);
            moves.push(mv.to_string());

            if self.config.show_board {
                println!("{pos}");
            }
        };

        let duration = started.elapsed();
        if self.config.show_board {
            println!("Game over: {outcome}");
        }
        info!(
            %outcome,
            plies = moves.len(),
            elapsed_ms = duration.as_millis() as u64,
            "game ended"
        );
        println!("Total time: {:.2?}", duration);

        Ok(GameRecord {
            start_fen,
            bot_color,
            result: outcome.result_for(bot_color),
            moves,
            outcome,
            book_moves,
            duration_ms: duration.as_millis() as u64,
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
