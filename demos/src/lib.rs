//! Request handling shared by the `trek` binary and its tests.
//!
//! Every command takes one JSON request and answers with one JSON value.
//! Requests use the engines' serde shapes: boards as nested rows, jug
//! levels as `[first, second]` pairs, cost matrices as nested maps of city
//! to neighbour cost. Malformed values are rejected while parsing, before
//! any engine runs.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use trek_core::{Cell, Cost, Domain, InputError, SearchConfig, SearchResult, Termination};
use trek_domains::{Board, JugGoal, Levels, SlidingPuzzle, WaterJug, is_solvable};
use trek_games::{
    Decision, Mark, Minimax, MinimaxConfig, MoveReport, TicTacToe, play, play_vs_computer,
    run_minimax_with,
};
use trek_paths::{Blend, Searcher};
use trek_tsp::{CostMatrix, TspStrategy};

/// What to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Puzzle,
    Jug,
    Hill,
    Minimax,
    Play,
    Tsp,
}

/// Engine settings taken from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub search: SearchConfig,
    pub minimax: MinimaxConfig,
}

/// Parse `input` as the request for `command`, run it, and return the
/// response.
pub fn respond(command: Command, input: &str, opts: &Options) -> Result<Value> {
    let value = match command {
        Command::Puzzle => {
            let req: PuzzleRequest = parse(input)?;
            to_value(SearchResponse::from(solve_puzzle(&req, opts)?))?
        }
        Command::Jug => {
            let req: JugRequest = parse(input)?;
            to_value(SearchResponse::from(solve_jug(&req, opts)?))?
        }
        Command::Hill => match parse::<HillRequest>(input)? {
            HillRequest::Puzzle(req) => to_value(SearchResponse::from(climb_puzzle(&req, opts)?))?,
            HillRequest::Jug(req) => to_value(SearchResponse::from(climb_jug(&req, opts)?))?,
        },
        Command::Minimax => {
            let req: MinimaxRequest = parse(input)?;
            to_value(decide(&req, opts)?)?
        }
        Command::Play => {
            let req: PlayRequest = parse(input)?;
            to_value(take_turn(&req, opts)?)?
        }
        Command::Tsp => {
            let req: TspRequest = parse(input)?;
            to_value(TourResponse::from(tour(&req, opts)?))?
        }
    };
    Ok(value)
}

fn parse<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input).context("invalid request")
}

fn to_value<T: Serialize>(response: T) -> Result<Value> {
    serde_json::to_value(response).context("cannot encode response")
}

fn default_alpha() -> u8 {
    1
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A path search outcome with an explicit success flag.
#[derive(Debug, Serialize)]
pub struct SearchResponse<S> {
    pub success: bool,
    #[serde(flatten)]
    pub result: SearchResult<S>,
}

impl<S> From<SearchResult<S>> for SearchResponse<S> {
    fn from(result: SearchResult<S>) -> Self {
        Self {
            success: result.success(),
            result,
        }
    }
}

/// A TSP outcome, with the path reported as a tour.
#[derive(Debug, Serialize)]
pub struct TourResponse {
    pub success: bool,
    pub tour: Vec<String>,
    pub cost: Option<Cost>,
    pub termination: Termination,
    pub expanded: usize,
}

impl From<SearchResult<String>> for TourResponse {
    fn from(r: SearchResult<String>) -> Self {
        Self {
            success: r.success(),
            tour: r.path,
            cost: r.cost,
            termination: r.termination,
            expanded: r.expanded,
        }
    }
}

// ---------------------------------------------------------------------------
// Sliding puzzle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleRequest {
    pub start: Board,
    pub goal: Board,
    /// `1` for A*, `0` for greedy.
    #[serde(default = "default_alpha")]
    pub alpha: u8,
    #[serde(default)]
    pub breadth_first: bool,
}

fn puzzle_domain(req: &PuzzleRequest) -> Result<SlidingPuzzle, InputError> {
    let domain = SlidingPuzzle::new(req.goal.clone());
    // Ahead of the parity shortcut, which treats a size mismatch as unreachable.
    domain.check_start(&req.start)?;
    Ok(domain)
}

pub fn solve_puzzle(req: &PuzzleRequest, opts: &Options) -> Result<SearchResult<Board>, InputError> {
    let blend = Blend::from_alpha(req.alpha)?;
    let domain = puzzle_domain(req)?;
    if !is_solvable(&req.start, &req.goal) {
        log::info!("goal is not reachable from the start board, skipping search");
        return Ok(SearchResult::failed(Termination::Exhausted, 0));
    }
    let searcher = Searcher::new(opts.search);
    if req.breadth_first {
        searcher.breadth_first(&domain, &req.start)
    } else {
        searcher.best_first(&domain, &req.start, blend)
    }
}

pub fn climb_puzzle(req: &PuzzleRequest, opts: &Options) -> Result<SearchResult<Board>, InputError> {
    let domain = puzzle_domain(req)?;
    Searcher::new(opts.search).hill_climb(&domain, &req.start)
}

// ---------------------------------------------------------------------------
// Water jug
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct JugRequest {
    pub capacities: (u32, u32),
    pub goal: JugGoal,
    #[serde(default)]
    pub start: Levels,
    /// `1` for A*, `0` for greedy.
    #[serde(default = "default_alpha")]
    pub alpha: u8,
    #[serde(default)]
    pub breadth_first: bool,
}

pub fn solve_jug(req: &JugRequest, opts: &Options) -> Result<SearchResult<Levels>, InputError> {
    let blend = Blend::from_alpha(req.alpha)?;
    let domain = WaterJug::new(req.capacities, req.goal)?;
    let searcher = Searcher::new(opts.search);
    if req.breadth_first {
        searcher.breadth_first(&domain, &req.start)
    } else {
        searcher.best_first(&domain, &req.start, blend)
    }
}

pub fn climb_jug(req: &JugRequest, opts: &Options) -> Result<SearchResult<Levels>, InputError> {
    let domain = WaterJug::new(req.capacities, req.goal)?;
    Searcher::new(opts.search).hill_climb(&domain, &req.start)
}

/// Hill-climbing request, tagged by `"domain"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "domain", rename_all = "snake_case")]
pub enum HillRequest {
    Puzzle(PuzzleRequest),
    Jug(JugRequest),
}

// ---------------------------------------------------------------------------
// Tic-tac-toe
// ---------------------------------------------------------------------------

fn default_x() -> String {
    "X".into()
}

fn default_o() -> String {
    "O".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MinimaxRequest {
    #[serde(default)]
    pub board: TicTacToe,
    #[serde(default = "default_x")]
    pub maximizing: String,
    #[serde(default = "default_o")]
    pub minimizing: String,
}

pub fn decide(req: &MinimaxRequest, opts: &Options) -> Result<Decision<Cell>, InputError> {
    let engine = Minimax::new(opts.minimax);
    run_minimax_with(&engine, &req.board, &req.maximizing, &req.minimizing)
}

fn default_human() -> Mark {
    Mark::X
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayRequest {
    #[serde(default)]
    pub board: TicTacToe,
    pub cell: Cell,
    #[serde(default = "default_human")]
    pub mark: Mark,
    /// Let the computer answer with the other mark.
    #[serde(default)]
    pub vs_computer: bool,
}

pub fn take_turn(req: &PlayRequest, opts: &Options) -> Result<MoveReport, InputError> {
    if req.vs_computer {
        play_vs_computer(&req.board, req.cell, req.mark, &Minimax::new(opts.minimax))
    } else {
        play(&req.board, req.cell, req.mark)
    }
}

// ---------------------------------------------------------------------------
// Traveling salesman
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TspRequest {
    pub matrix: CostMatrix,
    pub start: String,
    #[serde(default)]
    pub strategy: TspStrategy,
}

pub fn tour(req: &TspRequest, opts: &Options) -> Result<SearchResult<String>, InputError> {
    trek_tsp::solve(&req.matrix, &req.start, req.strategy, &opts.search)
}
