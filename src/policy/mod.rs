//! Policies for the configurable phases of MCTS
//!
//! - Selection policies: which child to descend into during the selection
//!   phase
//! - Rollout policies: how the player picks moves during simulation

pub mod rollout;
pub mod selection;

pub use rollout::{chase_move, GoalBiasedRollout, RandomRollout, RolloutPolicy};
pub use selection::{SelectionPolicy, Ucb1Policy};
