//! Tree data structures for Monte Carlo Tree Search
//!
//! Nodes own their children outright; ancestry is expressed as a [`NodePath`]
//! of child indices from the root, so backpropagation walks the path instead
//! of following parent pointers and the tree has no ownership cycles. A tree
//! lives for exactly one decision and is dropped with its search.

use std::fmt;

use crate::grid::{Actor, GridState, Move};

/// A node in the MCTS tree.
pub struct MctsNode {
    /// Game state at this node.
    pub state: GridState,

    /// Move that led to this state (`None` for the root).
    pub mv: Option<Move>,

    /// Actor whose move the children of this node represent.
    pub to_move: Actor,

    /// Number of simulations that passed through this node.
    pub visits: u64,

    /// Sum of rollout rewards backpropagated through this node.
    pub total_reward: f64,

    /// Child nodes, in expansion order.
    pub children: Vec<MctsNode>,

    /// Legal moves not yet expanded into children, in the fixed move
    /// ordering.
    pub untried: Vec<Move>,

    /// Depth in the tree (root = 0).
    pub depth: usize,
}

impl MctsNode {
    /// Creates a node for the given state and actor to move.
    pub fn new(state: GridState, mv: Option<Move>, to_move: Actor, depth: usize) -> Self {
        let untried = state.legal_moves(to_move);
        MctsNode {
            state,
            mv,
            to_move,
            visits: 0,
            total_reward: 0.0,
            children: Vec::new(),
            untried,
            depth,
        }
    }

    /// Mean rollout reward at this node, 0.0 when unvisited.
    pub fn value(&self) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        self.total_reward / self.visits as f64
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Expands the untried move at `index` into a new child and returns the
    /// child's index, or `None` when out of bounds.
    ///
    /// The next actor alternates, except that an absent enemy never gets a
    /// turn: its ply is skipped and the player moves again.
    pub fn expand(&mut self, index: usize) -> Option<usize> {
        if index >= self.untried.len() {
            return None;
        }

        let mv = self.untried.remove(index);
        let next_state = self.state.apply(self.to_move, &mv);
        let next_actor = if next_state.enemy().is_none() {
            Actor::Player
        } else {
            self.to_move.opponent()
        };

        let child = MctsNode::new(next_state, Some(mv), next_actor, self.depth + 1);
        self.children.push(child);
        Some(self.children.len() - 1)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(MctsNode::subtree_size).sum::<usize>()
    }
}

/// A path through the tree: child indices to follow from the root.
#[derive(Debug, Clone, Default)]
pub struct NodePath {
    pub indices: Vec<usize>,
}

impl NodePath {
    pub fn new() -> Self {
        NodePath {
            indices: Vec::new(),
        }
    }

    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[")?;
        for (i, idx) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{idx}")?;
        }
        write!(f, "]")
    }
}
