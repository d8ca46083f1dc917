//! Arena CLI
//!
//! Plays the tactical bot against an opponent and prints each game.

use anyhow::{Context, Result};
use arena::{MatchConfig, MatchRunner, OpponentKind};
use chess_core::{Color, Engine};
use clap::Parser;
use random_engine::RandomEngine;
use std::path::PathBuf;
use tactical_engine::{EngineConfig, TacticalEngine};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Play the tactical bot against an opponent")]
struct Args {
    /// Match settings (TOML); flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Engine settings (TOML)
    #[arg(long)]
    engine_config: Option<PathBuf>,

    #[arg(short, long)]
    games: Option<u32>,

    #[arg(long)]
    max_plies: Option<u32>,

    /// white or black
    #[arg(long)]
    bot_color: Option<String>,

    /// random or tactical
    #[arg(long)]
    opponent: Option<String>,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    #[arg(long)]
    seed: Option<u64>,

    /// Only print results, not the board after every ply
    #[arg(long)]
    no_board: bool,

    /// Write the match results here as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_color(text: &str) -> Result<Color> {
    match text.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        other => anyhow::bail!("unknown colour '{other}' (expected white or black)"),
    }
}

fn match_config(args: &Args) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }
    if let Some(color) = &args.bot_color {
        config.bot_color = parse_color(color)?;
    }
    if let Some(opponent) = &args.opponent {
        config.opponent = opponent.parse()?;
    }
    if let Some(fen) = &args.fen {
        config.start_fen = Some(fen.clone());
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_board {
        config.show_board = false;
    }
    Ok(config)
}

fn create_opponent(
    kind: OpponentKind,
    engine_config: &EngineConfig,
    seed: Option<u64>,
) -> Box<dyn Engine> {
    match kind {
        OpponentKind::Random => match seed {
            // Offset so the two players never share a random stream.
            Some(seed) => Box::new(RandomEngine::seeded(seed.wrapping_add(1))),
            None => Box::new(RandomEngine::new()),
        },
        OpponentKind::Tactical => Box::new(TacticalEngine::with_config(EngineConfig {
            seed: seed.map(|s| s.wrapping_add(1)),
            ..engine_config.clone()
        })),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match_config(&args).context("failed to build match config")?;

    let mut engine_config = match &args.engine_config {
        Some(path) => EngineConfig::load(path).context("failed to load engine config")?,
        None => EngineConfig::default(),
    };
    if config.seed.is_some() {
        engine_config.seed = config.seed;
    }

    let mut bot = TacticalEngine::with_config(engine_config.clone());
    let mut opponent = create_opponent(config.opponent, &engine_config, config.seed);

    println!(
        "=== {} ({}) vs {} ===",
        bot.name(),
        config.bot_color,
        opponent.name()
    );
    println!("Games: {}, ply limit: {}", config.games, config.max_plies);
    println!();

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut bot, opponent.as_mut())?;

    println!();
    print!("{}", result.generate_report());

    if let Some(path) = &args.output {
        result
            .save(path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
        println!("Results saved to {}", path.display());
    }

    Ok(())
}
