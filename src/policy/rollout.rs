//! Rollout (default) policies for MCTS simulations
//!
//! A rollout policy picks the player's moves during the simulation phase:
//! fast, low-quality selection whose only job is to reach a terminal state
//! or the rollout depth cap. The enemy side of a rollout always follows the
//! greedy [`chase_move`] policy.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Actor, GridState, Move};

/// Trait for policies that pick the player's move during a rollout.
pub trait RolloutPolicy: Send + Sync {
    /// Picks one of `moves`. `moves` is never empty when this is called.
    fn pick_move(&self, state: &GridState, moves: &[Move], rng: &mut StdRng) -> Move;

    /// Create a boxed clone of this policy.
    fn clone_box(&self) -> Box<dyn RolloutPolicy>;
}

/// Uniform-random rollout policy.
#[derive(Debug, Clone, Default)]
pub struct RandomRollout;

impl RandomRollout {
    pub fn new() -> Self {
        RandomRollout
    }
}

impl RolloutPolicy for RandomRollout {
    fn pick_move(&self, _state: &GridState, moves: &[Move], rng: &mut StdRng) -> Move {
        *moves.choose(rng).unwrap()
    }

    fn clone_box(&self) -> Box<dyn RolloutPolicy> {
        Box::new(self.clone())
    }
}

/// Goal-biased rollout policy.
///
/// With probability `bias` the move minimizing the Manhattan distance to the
/// goal is taken (first such move in the fixed ordering); otherwise a
/// uniform-random legal move. A bias of 0.7 keeps playouts cheap while
/// pulling them toward informative outcomes.
#[derive(Debug, Clone)]
pub struct GoalBiasedRollout {
    pub bias: f64,
}

impl GoalBiasedRollout {
    pub fn new(bias: f64) -> Self {
        GoalBiasedRollout {
            bias: bias.clamp(0.0, 1.0),
        }
    }
}

impl Default for GoalBiasedRollout {
    fn default() -> Self {
        Self::new(0.7)
    }
}

impl RolloutPolicy for GoalBiasedRollout {
    fn pick_move(&self, state: &GridState, moves: &[Move], rng: &mut StdRng) -> Move {
        if rng.gen::<f64>() >= self.bias {
            return *moves.choose(rng).unwrap();
        }

        let goal = state.board().goal();
        let mut best = moves[0];
        let mut best_distance = best.target.manhattan(goal);
        for mv in &moves[1..] {
            let distance = mv.target.manhattan(goal);
            if distance < best_distance {
                best_distance = distance;
                best = *mv;
            }
        }
        best
    }

    fn clone_box(&self) -> Box<dyn RolloutPolicy> {
        Box::new(self.clone())
    }
}

/// Greedy chase policy for the enemy.
///
/// Captures immediately when the player is adjacent, otherwise takes the
/// legal move minimizing the Manhattan distance to the player (first such
/// move in the fixed ordering). Returns `None` when the enemy is absent or
/// boxed in. Used by rollouts and available to external turn loops.
pub fn chase_move(state: &GridState) -> Option<Move> {
    let moves = state.legal_moves(Actor::Enemy);
    if moves.is_empty() {
        return None;
    }

    let player = state.player();
    if let Some(capture) = moves.iter().find(|mv| mv.target == player) {
        return Some(*capture);
    }

    let mut best = moves[0];
    let mut best_distance = best.target.manhattan(player);
    for mv in &moves[1..] {
        let distance = mv.target.manhattan(player);
        if distance < best_distance {
            best_distance = distance;
            best = *mv;
        }
    }
    Some(best)
}
