//! Configuration for the search strategies
//!
//! One [`SearchConfig`] carries the parameters of every strategy kind; the
//! runner validates the slice of it relevant to the requested kind before any
//! search work begins. Invalid values are reported, never silently clamped.

use std::time::Duration;

use crate::{EngineError, Result};

/// The available decision strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Plain depth-bounded minimax.
    Minimax,
    /// Minimax with alpha-beta pruning. Selects the same move as
    /// [`StrategyKind::Minimax`] on identical inputs, only faster.
    AlphaBeta,
    /// Monte Carlo Tree Search.
    Mcts,
}

/// Parameters controlling the search strategies.
///
/// # Example
///
/// ```
/// use gridpursuit::SearchConfig;
/// use std::time::Duration;
///
/// let config = SearchConfig::default()
///     .with_depth(5)
///     .with_iterations(4_000)
///     .with_max_time(Duration::from_millis(250))
///     .with_exploration_constant(1.2);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search depth in plies for Minimax and Alpha-Beta. Must be at least 1.
    pub depth: u8,

    /// MCTS iteration budget. Must be at least 1.
    pub iterations: usize,

    /// Optional wall-clock budget for MCTS. When it expires the best move
    /// found so far is returned. Tree search depth is its own time bound and
    /// ignores this field.
    pub max_time: Option<Duration>,

    /// UCB1 exploration constant. The standard value is sqrt(2).
    pub exploration_constant: f64,

    /// Maximum plies simulated per MCTS rollout before falling back to the
    /// heuristic reward. Prevents unbounded playouts on cyclic play.
    pub rollout_depth: usize,

    /// Seed for all stochastic choices. Identical state + config always
    /// yields the identical decision.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            iterations: 2_000,
            max_time: None,
            exploration_constant: std::f64::consts::SQRT_2,
            rollout_depth: 64,
            seed: 0x5eed,
        }
    }
}

impl SearchConfig {
    /// Sets the tree-search depth in plies.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the MCTS iteration budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the MCTS wall-clock budget.
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Sets the UCB1 exploration constant.
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the rollout depth cap.
    pub fn with_rollout_depth(mut self, depth: usize) -> Self {
        self.rollout_depth = depth;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the parameters relevant to the given strategy kind.
    pub fn validate(&self, kind: StrategyKind) -> Result<()> {
        match kind {
            StrategyKind::Minimax | StrategyKind::AlphaBeta => {
                if self.depth == 0 {
                    return Err(EngineError::InvalidConfiguration(
                        "search depth must be at least 1".into(),
                    ));
                }
            }
            StrategyKind::Mcts => {
                if self.iterations == 0 {
                    return Err(EngineError::InvalidConfiguration(
                        "iteration budget must be at least 1".into(),
                    ));
                }
                if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
                    return Err(EngineError::InvalidConfiguration(
                        "exploration constant must be finite and non-negative".into(),
                    ));
                }
                if self.rollout_depth == 0 {
                    return Err(EngineError::InvalidConfiguration(
                        "rollout depth must be at least 1".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}
