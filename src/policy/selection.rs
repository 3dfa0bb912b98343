//! Selection policies for the MCTS algorithm
//!
//! Selection policies decide which child to descend into during the
//! selection phase, balancing exploration and exploitation.

use crate::grid::Actor;
use crate::tree::MctsNode;

/// Trait for policies that pick a child to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Returns the index of the child to descend into. `node` always has at
    /// least one child when this is called.
    fn select_child(&self, node: &MctsNode) -> usize;

    /// Create a boxed clone of this policy.
    fn clone_box(&self) -> Box<dyn SelectionPolicy>;
}

/// Upper Confidence Bound 1 (UCB1) selection.
///
/// ```text
/// UCB1 = exploitation + C * sqrt(ln(parent_visits) / child_visits)
/// ```
///
/// Rewards are stored from the player's perspective, so at nodes where the
/// enemy is to move the exploitation term is flipped to `1 - mean`: the
/// adversary descends into the children that hurt the player most. Children
/// that have never been visited score infinity and are explored first.
#[derive(Debug, Clone)]
pub struct Ucb1Policy {
    /// Exploration constant. Higher values favor less-visited children.
    pub exploration_constant: f64,
}

impl Ucb1Policy {
    pub fn new(exploration_constant: f64) -> Self {
        Ucb1Policy {
            exploration_constant,
        }
    }

    fn ucb1_value(&self, exploitation: f64, child_visits: u64, parent_visits: u64) -> f64 {
        if child_visits == 0 {
            return f64::INFINITY;
        }
        let exploration = self.exploration_constant
            * ((parent_visits.max(1) as f64).ln() / child_visits as f64).sqrt();
        exploitation + exploration
    }
}

impl SelectionPolicy for Ucb1Policy {
    fn select_child(&self, node: &MctsNode) -> usize {
        let parent_visits = node.visits;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_index = 0;

        for (i, child) in node.children.iter().enumerate() {
            let exploitation = match node.to_move {
                Actor::Player => child.value(),
                Actor::Enemy => 1.0 - child.value(),
            };
            let ucb_value = self.ucb1_value(exploitation, child.visits, parent_visits);

            if ucb_value > best_value {
                best_value = ucb_value;
                best_index = i;
            }
        }

        best_index
    }

    fn clone_box(&self) -> Box<dyn SelectionPolicy> {
        Box::new(self.clone())
    }
}
