//! Full-depth minimax with optional alpha-beta pruning.

use trek_core::Termination;

use crate::game::{Game, Score};

/// Minimax configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MinimaxConfig {
    /// Skip branches that cannot change the root decision.
    pub pruning: bool,
    /// Give up once this many nodes have been visited.
    pub max_nodes: Option<usize>,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            max_nodes: None,
        }
    }
}

/// The outcome of a minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision<M> {
    /// Value of the root from the maximizing player's view. Zero when the
    /// search was cut short.
    pub score: Score,
    /// `None` at a terminal root, or when the budget ran out.
    pub best_move: Option<M>,
    pub termination: Termination,
    /// Nodes visited, root included.
    pub nodes: usize,
}

impl<M> Decision<M> {
    /// Whether the search ran to completion.
    #[inline]
    pub fn complete(&self) -> bool {
        self.termination != Termination::BudgetExceeded
    }
}

/// Raised internally when the node budget runs out.
struct OutOfNodes;

/// Minimax search engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: MinimaxConfig,
}

impl Minimax {
    /// Create an engine with the given configuration.
    pub fn new(config: MinimaxConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Search the tree below `root`, where the side to move is the
    /// maximizing player.
    ///
    /// Among moves with equal value the first one in
    /// [`Game::moves`] order wins, with or without pruning.
    pub fn decide<G: Game>(&self, game: &G, root: &G::State) -> Decision<G::Move> {
        let mut nodes = 0usize;
        match self.search(game, root, true, Score::MIN, Score::MAX, &mut nodes) {
            Ok((score, best_move)) => {
                let termination = if best_move.is_some() {
                    Termination::Goal
                } else {
                    Termination::Exhausted
                };
                log::debug!("minimax decided {best_move:?} with score {score} after {nodes} nodes");
                Decision {
                    score,
                    best_move,
                    termination,
                    nodes,
                }
            }
            Err(OutOfNodes) => {
                log::warn!("minimax stopped after {nodes} nodes");
                Decision {
                    score: 0,
                    best_move: None,
                    termination: Termination::BudgetExceeded,
                    nodes,
                }
            }
        }
    }

    fn search<G: Game>(
        &self,
        game: &G,
        state: &G::State,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        nodes: &mut usize,
    ) -> Result<(Score, Option<G::Move>), OutOfNodes> {
        if self.config.max_nodes.is_some_and(|max| *nodes >= max) {
            return Err(OutOfNodes);
        }
        *nodes += 1;

        if let Some(utility) = game.terminal(state) {
            return Ok((utility, None));
        }

        let mut moves = Vec::new();
        game.moves(state, &mut moves);

        let mut best_score = if maximizing { Score::MIN } else { Score::MAX };
        let mut best_move = None;

        for mv in moves {
            // Children are fresh copies; no sibling ever sees this move.
            let child = game.play(state, mv);
            let (score, _) = self.search(game, &child, !maximizing, alpha, beta, nodes)?;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }
            if self.config.pruning && alpha >= beta {
                break;
            }
        }

        Ok((best_score, best_move))
    }
}
