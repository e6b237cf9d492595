//! Command-line front end: run one engine on one JSON request.
//!
//! Run: cargo run --bin trek -- puzzle request.json
//!      echo '{"capacities": [4, 3], "goal": {"either": 2}}' | cargo run --bin trek -- jug

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use trek_core::SearchConfig;
use trek_demos::{Command, Options, respond};
use trek_games::MinimaxConfig;

#[derive(Parser)]
#[command(name = "trek", about = "State-space search over JSON requests")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
    /// Stop after this many expansions (game-tree nodes for minimax)
    #[arg(long, global = true)]
    max_expansions: Option<usize>,
    /// Let hill climbing accept equally good neighbours
    #[arg(long, global = true)]
    plateau: bool,
    /// Search the full game tree without alpha-beta pruning
    #[arg(long, global = true)]
    no_pruning: bool,
    /// Pretty-print the response
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Sliding-tile puzzle by A*, greedy or breadth-first search
    Puzzle {
        /// Request file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Two-jug measuring puzzle by A*, greedy or breadth-first search
    Jug { file: Option<PathBuf> },
    /// Hill climbing on a puzzle or jug request
    Hill { file: Option<PathBuf> },
    /// Best tic-tac-toe move for the maximizing player
    Minimax { file: Option<PathBuf> },
    /// Play one tic-tac-toe move, optionally against the computer
    Play { file: Option<PathBuf> },
    /// Exact traveling-salesman tour
    Tsp { file: Option<PathBuf> },
}

impl Cmd {
    fn split(self) -> (Command, Option<PathBuf>) {
        match self {
            Cmd::Puzzle { file } => (Command::Puzzle, file),
            Cmd::Jug { file } => (Command::Jug, file),
            Cmd::Hill { file } => (Command::Hill, file),
            Cmd::Minimax { file } => (Command::Minimax, file),
            Cmd::Play { file } => (Command::Play, file),
            Cmd::Tsp { file } => (Command::Tsp, file),
        }
    }
}

fn read_request(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read request from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let opts = Options {
        search: SearchConfig {
            max_expansions: cli.max_expansions,
            allow_plateau: cli.plateau,
        },
        minimax: MinimaxConfig {
            pruning: !cli.no_pruning,
            max_nodes: cli.max_expansions,
        },
    };
    let (command, file) = cli.command.split();
    log::debug!("running {command:?}");

    let request = read_request(file.as_deref())?;
    let response = respond(command, &request, &opts)?;
    let out = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{out}");
    Ok(())
}
