//! Strategy dispatch behind a uniform "choose next move" contract
//!
//! The external turn loop owns the canonical state and hands the runner a
//! read-only view; the runner delegates to the configured strategy and hands
//! back one decision plus the metrics of the search that produced it.

use log::debug;

use crate::{
    config::{SearchConfig, StrategyKind},
    grid::{GridState, Move},
    mcts::MonteCarloSearch,
    minimax::AdversarialSearch,
    stats::SearchStatistics,
    Result,
};

/// The outcome of a decision request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The chosen move for the player.
    Move(Move),
    /// The player has no legal moves; the turn passes. Not an error.
    SkipTurn,
}

impl Decision {
    /// The move, if one was chosen.
    pub fn as_move(&self) -> Option<Move> {
        match self {
            Decision::Move(mv) => Some(*mv),
            Decision::SkipTurn => None,
        }
    }
}

/// Thin dispatcher over the three strategies.
///
/// Holds the configuration and the statistics of the most recent decision.
/// `choose_move` only ever reads the state it is given.
///
/// # Example
///
/// ```
/// use gridpursuit::{Decision, GridState, SearchConfig, StrategyKind, StrategyRunner};
///
/// let state = GridState::parse(
///     "P . . . . \
///     \n. . . . . \
///     \n. . . . . \
///     \n. . . . . \
///     \n. . . . G ",
/// ).unwrap();
///
/// let mut runner = StrategyRunner::new(SearchConfig::default().with_depth(3));
/// let decision = runner.choose_move(&state, StrategyKind::AlphaBeta).unwrap();
/// assert!(matches!(decision, Decision::Move(_)));
/// ```
pub struct StrategyRunner {
    config: SearchConfig,
    statistics: SearchStatistics,
}

impl StrategyRunner {
    pub fn new(config: SearchConfig) -> Self {
        StrategyRunner {
            config,
            statistics: SearchStatistics::new(),
        }
    }

    /// The configuration this runner dispatches with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Chooses the player's next move from `state` with the given strategy.
    ///
    /// Validates the configuration for the chosen kind before any search
    /// work. Returns [`Decision::SkipTurn`] when the player is boxed in and
    /// an error for invalid configuration or an already-terminal state.
    pub fn choose_move(&mut self, state: &GridState, kind: StrategyKind) -> Result<Decision> {
        self.config.validate(kind)?;
        debug!("choose_move: {kind:?} at turn {}", state.turn());

        let decision = match kind {
            StrategyKind::Minimax => {
                let mut engine = AdversarialSearch::minimax(&self.config)?;
                let decision = engine.search(state)?;
                self.statistics = engine.into_statistics();
                decision
            }
            StrategyKind::AlphaBeta => {
                let mut engine = AdversarialSearch::alpha_beta(&self.config)?;
                let decision = engine.search(state)?;
                self.statistics = engine.into_statistics();
                decision
            }
            StrategyKind::Mcts => {
                let mut engine = MonteCarloSearch::new(state, &self.config)?;
                let decision = engine.search()?;
                self.statistics = engine.into_statistics();
                decision
            }
        };

        Ok(decision)
    }

    /// Metrics of the most recent decision, for the external logging and
    /// plotting collaborator.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}
