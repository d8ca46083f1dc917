use anyhow::Result;
use chess_core::{move_to_uci, set_position_from_uci, Engine, Position};
use std::io::{self, BufRead, Write};
use tactical_engine::TacticalEngine;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut engine = TacticalEngine::new();
    let mut pos = Position::startpos();

    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name {}", engine.name())?;
                writeln!(stdout, "id author {}", engine.author())?;
                writeln!(stdout, "option name Seed type string default <random>")?;
                writeln!(stdout, "option name OwnBook type check default true")?;
                writeln!(stdout, "uciok")?;
                stdout.flush()?;
            }
            "isready" => {
                writeln!(stdout, "readyok")?;
                stdout.flush()?;
            }
            "setoption" => {
                // setoption name <id> [value <x>]
                let name_idx = parts.iter().position(|&x| x == "name");
                let value_idx = parts.iter().position(|&x| x == "value");
                if let Some(n) = name_idx {
                    let name_end = value_idx.unwrap_or(parts.len());
                    let name = parts[n + 1..name_end].join(" ");
                    let value = value_idx
                        .map(|v| parts[v + 1..].join(" "))
                        .unwrap_or_default();
                    if !engine.set_option(&name, &value) {
                        warn!(%name, %value, "ignored option");
                    }
                }
            }
            "ucinewgame" => {
                pos = Position::startpos();
                engine.new_game();
            }
            "position" => {
                let mut next = pos.clone();
                match set_position_from_uci(&mut next, &parts[1..]) {
                    Ok(()) => pos = next,
                    Err(e) => warn!(error = %e, "bad position command"),
                }
            }
            "go" => {
                // No clock handling: the search depth is fixed.
                let result = engine.search(&pos);
                match result.best_move {
                    Some(mv) => writeln!(stdout, "bestmove {}", move_to_uci(mv))?,
                    None => writeln!(stdout, "bestmove 0000")?,
                }
                stdout.flush()?;
            }
            "quit" => break,
            _ => {}
        }
    }

    Ok(())
}
