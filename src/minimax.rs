//! Depth-bounded adversarial tree search: Minimax and Alpha-Beta
//!
//! One engine covers both strategies; pruning is strictly an optimization
//! and never changes the selected move. Layers alternate between the player
//! (maximizing) and the enemy (minimizing), and leaves are scored by
//! [`crate::eval::evaluate`].

use std::time::Instant;

use log::debug;

use crate::{
    config::{SearchConfig, StrategyKind},
    eval::evaluate,
    grid::{Actor, GridState},
    runner::Decision,
    stats::SearchStatistics,
    EngineError, Result,
};

/// The Minimax / Alpha-Beta engine.
///
/// Construct with [`AdversarialSearch::minimax`] or
/// [`AdversarialSearch::alpha_beta`], then call
/// [`search`](AdversarialSearch::search) with the current state. The engine
/// is stateless between calls apart from the statistics of the last search.
pub struct AdversarialSearch {
    depth: u8,
    prune: bool,
    statistics: SearchStatistics,
}

impl AdversarialSearch {
    /// Creates a plain Minimax engine. Fails when `config.depth` is 0.
    pub fn minimax(config: &SearchConfig) -> Result<Self> {
        config.validate(StrategyKind::Minimax)?;
        Ok(AdversarialSearch {
            depth: config.depth,
            prune: false,
            statistics: SearchStatistics::new(),
        })
    }

    /// Creates an Alpha-Beta engine. Fails when `config.depth` is 0.
    pub fn alpha_beta(config: &SearchConfig) -> Result<Self> {
        config.validate(StrategyKind::AlphaBeta)?;
        Ok(AdversarialSearch {
            depth: config.depth,
            prune: true,
            statistics: SearchStatistics::new(),
        })
    }

    /// Picks the player's best move from `state`.
    ///
    /// Returns [`Decision::SkipTurn`] when the player has no legal moves;
    /// asking for a move on an already-terminal state is a caller contract
    /// violation and reported as [`EngineError::TerminalState`]. Root ties
    /// are broken by the first-encountered move in the fixed ordering, so
    /// the result is deterministic.
    pub fn search(&mut self, state: &GridState) -> Result<Decision> {
        if state.is_terminal() {
            return Err(EngineError::TerminalState(state.outcome()));
        }

        self.statistics = SearchStatistics::new();
        let start = Instant::now();
        self.statistics.nodes_visited = 1;

        let moves = state.legal_moves(Actor::Player);
        if moves.is_empty() {
            self.statistics.elapsed = start.elapsed();
            return Ok(Decision::SkipTurn);
        }

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = moves[0];

        for mv in &moves {
            let child = state.apply(Actor::Player, mv);
            let value = self.min_value(&child, self.depth - 1, alpha, beta);
            if value > best_value {
                best_value = value;
                best_move = *mv;
            }
            if self.prune {
                alpha = alpha.max(best_value);
            }
        }

        self.statistics.elapsed = start.elapsed();
        debug!(
            "{} depth {}: chose {:?} (value {:.1}), {}",
            if self.prune { "alpha-beta" } else { "minimax" },
            self.depth,
            best_move.direction,
            best_value,
            self.statistics.summary()
        );

        Ok(Decision::Move(best_move))
    }

    /// Statistics of the most recent search.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Consumes the engine, yielding the statistics of the last search.
    pub fn into_statistics(self) -> SearchStatistics {
        self.statistics
    }

    fn max_value(&mut self, state: &GridState, depth: u8, mut alpha: f64, beta: f64) -> f64 {
        self.statistics.nodes_visited += 1;

        if depth == 0 || state.is_terminal() {
            return evaluate(state);
        }

        let moves = state.legal_moves(Actor::Player);
        if moves.is_empty() {
            // Boxed-in player off the goal: spontaneous loss.
            return evaluate(&state.boxed_in());
        }

        let mut value = f64::NEG_INFINITY;
        for (i, mv) in moves.iter().enumerate() {
            let child = state.apply(Actor::Player, mv);
            value = value.max(self.min_value(&child, depth - 1, alpha, beta));

            if self.prune {
                if value >= beta {
                    self.statistics.nodes_pruned += (moves.len() - i - 1) as u64;
                    return value;
                }
                alpha = alpha.max(value);
            }
        }
        value
    }

    fn min_value(&mut self, state: &GridState, depth: u8, alpha: f64, mut beta: f64) -> f64 {
        self.statistics.nodes_visited += 1;

        if depth == 0 || state.is_terminal() {
            return evaluate(state);
        }

        let moves = state.legal_moves(Actor::Enemy);
        if moves.is_empty() {
            // Absent or boxed-in enemy: its ply is skipped.
            return self.max_value(state, depth - 1, alpha, beta);
        }

        let mut value = f64::INFINITY;
        for (i, mv) in moves.iter().enumerate() {
            let child = state.apply(Actor::Enemy, mv);
            value = value.min(self.max_value(&child, depth - 1, alpha, beta));

            if self.prune {
                if value <= alpha {
                    self.statistics.nodes_pruned += (moves.len() - i - 1) as u64;
                    return value;
                }
                beta = beta.min(value);
            }
        }
        value
    }
}
