//! # gridpursuit
//!
//! An adversarial decision engine for turn-based grid pursuit games: a
//! player must reach a goal tile across variable-cost and hazardous terrain
//! while a pursuing enemy tries to intercept it. The crate provides the
//! game-state representation and three interchangeable search strategies —
//! Minimax, Alpha-Beta and Monte Carlo Tree Search — behind a uniform
//! "choose next move" contract.
//!
//! Map authoring, rendering, metric plotting and the outer turn loop are
//! external collaborators: the engine only reads the state it is handed,
//! returns one decision per call, and exposes per-decision metrics as plain
//! counters.
//!
//! ## Basic usage
//!
//! ```
//! use gridpursuit::{Decision, GridState, SearchConfig, StrategyKind, StrategyRunner};
//!
//! // Build a state from an ASCII sketch. `#` walls, `^` traps, `G` goal,
//! // `P` player, `E` enemy, digits are terrain costs.
//! let state = GridState::parse(
//!     "P . . 2 . \
//!     \n. # # 2 . \
//!     \n. . ^ . . \
//!     \n. # . # . \
//!     \n. . . E G ",
//! )?;
//!
//! let config = SearchConfig::default()
//!     .with_depth(4)
//!     .with_iterations(1_000);
//! let mut runner = StrategyRunner::new(config);
//!
//! match runner.choose_move(&state, StrategyKind::AlphaBeta)? {
//!     Decision::Move(mv) => println!("move {:?} to {}", mv.direction, mv.target),
//!     Decision::SkipTurn => println!("boxed in, skipping"),
//! }
//! println!("{}", runner.statistics().summary());
//! # Ok::<(), gridpursuit::EngineError>(())
//! ```
//!
//! ## Strategies
//!
//! - **Minimax** explores the full game tree to a configured depth,
//!   alternating maximizing (player) and minimizing (enemy) layers.
//! - **Alpha-Beta** adds pruning bounds; it always selects the same move as
//!   plain Minimax, only visiting fewer nodes.
//! - **MCTS** builds a partial tree by repeated selection, expansion,
//!   simulation and backpropagation under an iteration and/or wall-clock
//!   budget, then picks the most-visited root move.
//!
//! All three are deterministic for identical state and configuration: ties
//! break on a fixed Up/Down/Left/Right move ordering and all randomness is
//! seeded from the configuration.

pub mod config;
pub mod eval;
pub mod grid;
pub mod mcts;
pub mod minimax;
pub mod policy;
pub mod runner;
pub mod stats;
pub mod tree;

pub use config::{SearchConfig, StrategyKind};
pub use grid::{Actor, Board, Direction, GridState, LossReason, Move, Outcome, Pos, Tile};
pub use mcts::MonteCarloSearch;
pub use minimax::AdversarialSearch;
pub use runner::{Decision, StrategyRunner};
pub use stats::SearchStatistics;

/// Error types for the decision engine
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// A strategy parameter is out of range for the requested kind.
    /// Reported before any search work begins, never silently corrected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A move was requested on a state whose episode is already over.
    #[error("state is already terminal ({0:?})")]
    TerminalState(grid::Outcome),

    /// A map sketch could not be turned into a valid state.
    #[error("invalid map: {0}")]
    InvalidMap(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
