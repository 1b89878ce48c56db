//! Tapoo maze runner
//!
//! Generates one perfect maze sized to the terminal and prints it.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

use tp_core::GameRng;
use tp_core::maze::{GOAL_MARKER, MazeResult, START_MARKER, generate};
use tp_core::scoring::{score, time_limit};

use config::{Config, FALLBACK_TERMINAL, Settings};

/// Tapoo: the maze runner, hide and seek game
#[derive(Parser, Debug)]
#[command(name = "tapoo")]
#[command(author, version, about = "Tapoo - Find the target in the maze!", long_about = None)]
pub struct Args {
    /// Game level (0 is the training level)
    #[arg(short = 'l', long = "level")]
    level: Option<u32>,

    /// Wall style: 1 thin, 2 double, 3 box drawing
    #[arg(short = 'i', long = "intensity")]
    intensity: Option<i32>,

    /// Maximum maze length in cells (defaults to what the terminal can show;
    /// level 0 needs 10x10 or 20x5, so at least an 80x24 terminal)
    #[arg(long = "length")]
    length: Option<usize>,

    /// Maximum maze width in cells (defaults to what the terminal can show)
    #[arg(long = "width")]
    width: Option<usize>,

    /// Seed for a reproducible maze
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the maze as JSON
    #[arg(long = "json")]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tapoo: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let settings = Settings::resolve(args, &config, terminal_size());
    debug!("settings: {:?}", settings);

    let mut rng = settings.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let maze = generate(settings.level, settings.bound, settings.intensity, &mut rng)
        .with_context(|| format!("cannot generate level {} (seed {})", settings.level, rng.seed()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&maze)?);
    } else {
        print_maze(&maze, settings.level);
    }

    Ok(())
}

/// Terminal (columns, rows), or a standard size when it cannot be read
fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or_else(|err| {
        warn!("cannot read terminal size ({}), assuming {:?}", err, FALLBACK_TERMINAL);
        FALLBACK_TERMINAL
    })
}

/// Two header rows, the maze, one footer row
fn print_maze(maze: &MazeResult, level: u32) {
    println!(
        "   Tapoo level {}: {} maze. Find the target ({GOAL_MARKER}) starting from ({START_MARKER}).",
        level, maze.dims
    );
    println!();

    for line in maze.render() {
        println!("   {line}");
    }

    println!(
        "   Time limit: {}s    Max score: {}",
        time_limit(maze.dims).as_secs(),
        score(maze.dims, std::time::Duration::ZERO)
    );
}
