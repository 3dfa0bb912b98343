//! Evaluation of grid states from the player's perspective
//!
//! Two scoring surfaces live here: [`evaluate`], the heuristic used by the
//! tree-search strategies (unbounded scale, higher is better for the player),
//! and [`rollout_reward`], the [0, 1] outcome used by MCTS simulations.

use crate::grid::{GridState, Outcome};

/// Score for a terminal win, before the path-cost adjustment.
pub const WIN_SCORE: f64 = 10_000.0;

/// Score for a terminal loss.
pub const LOSS_SCORE: f64 = -10_000.0;

/// Weight on the Manhattan distance to the goal.
const DISTANCE_WEIGHT: f64 = 10.0;

/// Weight on the accumulated path cost.
const COST_WEIGHT: f64 = 1.0;

/// Graduated penalty for enemy proximity. Distances above 3 are safe.
fn proximity_penalty(distance: u32) -> f64 {
    match distance {
        0 | 1 => 250.0,
        2 => 60.0,
        3 => 20.0,
        _ => 0.0,
    }
}

/// Scores a state from the player's perspective; higher is better.
///
/// Total and side-effect-free: defined for every reachable state, terminal
/// or not. Combines the distance to the goal, the accumulated path cost and
/// a stepped enemy-proximity risk term. Winning prefers cheaper paths;
/// losing is a flat floor.
pub fn evaluate(state: &GridState) -> f64 {
    match state.outcome() {
        Outcome::Won => return WIN_SCORE - state.path_cost() as f64,
        Outcome::Lost(_) => return LOSS_SCORE,
        Outcome::Ongoing => {}
    }

    let mut score = -DISTANCE_WEIGHT * state.distance_to_goal() as f64
        - COST_WEIGHT * state.path_cost() as f64;

    if let Some(distance) = state.distance_to_enemy() {
        score -= proximity_penalty(distance);
    }

    score
}

/// Scalar outcome of an MCTS playout, in [0, 1].
///
/// Any loss is 0.0. A win scores close to 1.0, shaded down by the
/// accumulated path cost so that cheap wins beat expensive ones; a
/// depth-capped non-terminal playout is shaped by goal closeness and
/// dampened when the enemy is nearby, always below the value of any win.
pub fn rollout_reward(state: &GridState) -> f64 {
    let board = state.board();
    let max_distance = (board.width() + board.height()) as f64;

    match state.outcome() {
        Outcome::Won => {
            let cost_share = state.path_cost() as f64 / (2.0 * max_distance);
            return (1.0 - cost_share).max(0.75);
        }
        Outcome::Lost(_) => return 0.0,
        Outcome::Ongoing => {}
    }

    let closeness = 1.0 - state.distance_to_goal() as f64 / max_distance;
    let mut reward = 0.1 + 0.6 * closeness;

    match state.distance_to_enemy() {
        Some(d) if d <= 2 => return 0.0,
        Some(3) => reward *= 0.5,
        _ => {}
    }

    reward.clamp(0.0, 0.7)
}
