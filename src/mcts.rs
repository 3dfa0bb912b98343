//! Monte Carlo Tree Search over grid pursuit states
//!
//! Orchestrates the four phases of MCTS: selection (UCB1 descent through
//! fully expanded nodes), expansion (one untried move), simulation (playout
//! alternating actors under a rollout policy and the greedy chase enemy),
//! and backpropagation (visit/reward updates along the root path).
//!
//! The tree is built fresh for every decision and dropped with the engine;
//! nothing persists across turns.

use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    config::{SearchConfig, StrategyKind},
    eval::rollout_reward,
    grid::{Actor, GridState},
    policy::{
        rollout::{chase_move, GoalBiasedRollout, RolloutPolicy},
        selection::{SelectionPolicy, Ucb1Policy},
    },
    runner::Decision,
    stats::SearchStatistics,
    tree::{MctsNode, NodePath},
    EngineError, Result,
};

/// The MCTS engine for a single decision.
pub struct MonteCarloSearch {
    root: MctsNode,
    iterations: usize,
    max_time: Option<std::time::Duration>,
    rollout_depth: usize,
    statistics: SearchStatistics,
    selection_policy: Box<dyn SelectionPolicy>,
    rollout_policy: Box<dyn RolloutPolicy>,
    rng: StdRng,
}

impl MonteCarloSearch {
    /// Creates an engine rooted at the given state.
    ///
    /// Fails with [`EngineError::InvalidConfiguration`] for a zero iteration
    /// budget and with [`EngineError::TerminalState`] when the game is
    /// already over.
    pub fn new(state: &GridState, config: &SearchConfig) -> Result<Self> {
        config.validate(StrategyKind::Mcts)?;
        if state.is_terminal() {
            return Err(EngineError::TerminalState(state.outcome()));
        }

        Ok(MonteCarloSearch {
            root: MctsNode::new(state.clone(), None, Actor::Player, 0),
            iterations: config.iterations,
            max_time: config.max_time,
            rollout_depth: config.rollout_depth,
            statistics: SearchStatistics::new(),
            selection_policy: Box::new(Ucb1Policy::new(config.exploration_constant)),
            rollout_policy: Box::new(GoalBiasedRollout::default()),
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Replaces the selection policy.
    pub fn with_selection_policy<P: SelectionPolicy + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Replaces the rollout policy.
    pub fn with_rollout_policy<P: RolloutPolicy + 'static>(mut self, policy: P) -> Self {
        self.rollout_policy = Box::new(policy);
        self
    }

    /// Runs the search and returns the chosen move.
    ///
    /// Runs until the iteration budget is spent or the wall-clock budget
    /// expires, whichever comes first; an early stop still returns the best
    /// move found so far. A root without legal moves yields
    /// [`Decision::SkipTurn`].
    pub fn search(&mut self) -> Result<Decision> {
        if self.root.untried.is_empty() && self.root.children.is_empty() {
            return Ok(Decision::SkipTurn);
        }

        let start = Instant::now();
        for i in 0..self.iterations {
            if let Some(max_time) = self.max_time {
                if start.elapsed() >= max_time {
                    self.statistics.stopped_early = true;
                    break;
                }
            }

            self.execute_iteration();
            self.statistics.iterations = i + 1;
        }

        self.statistics.elapsed = start.elapsed();
        self.statistics.tree_size = self.root.subtree_size();

        let decision = self.select_best_move();
        debug!("mcts: chose {:?}, {}", decision, self.statistics.summary());
        Ok(decision)
    }

    /// Statistics of the most recent search.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Consumes the engine, yielding the statistics of the last search.
    pub fn into_statistics(self) -> SearchStatistics {
        self.statistics
    }

    /// Root of the search tree, for inspection after a search.
    pub fn root(&self) -> &MctsNode {
        &self.root
    }

    fn execute_iteration(&mut self) {
        // 1. Selection
        let mut path = self.selection();

        // 2. Expansion
        let reward_state = self.expansion(&mut path);

        // 3. Simulation
        let reward = self.simulation(reward_state);

        // 4. Backpropagation
        self.backpropagation(&path, reward);
    }

    /// Descends from the root through fully expanded nodes, stopping at a
    /// node with untried moves or a terminal node.
    fn selection(&mut self) -> NodePath {
        let mut path = NodePath::new();
        let mut current = &self.root;

        while !current.state.is_terminal()
            && current.is_fully_expanded()
            && !current.children.is_empty()
        {
            let index = self.selection_policy.select_child(current);
            path.push(index);
            current = &current.children[index];

            self.statistics.max_depth = self.statistics.max_depth.max(current.depth);
        }

        path
    }

    /// Expands one untried move of the selected node, pushing the new child
    /// onto the path. Returns the state to simulate from, together with the
    /// actor to move there.
    fn expansion(&mut self, path: &mut NodePath) -> (GridState, Actor) {
        let mut node = &mut self.root;
        for &index in &path.indices {
            node = &mut node.children[index];
        }

        if !node.state.is_terminal() && !node.untried.is_empty() {
            let pick = self.rng.gen_range(0..node.untried.len());
            if let Some(child_index) = node.expand(pick) {
                path.push(child_index);
                let child = &node.children[child_index];
                self.statistics.max_depth = self.statistics.max_depth.max(child.depth);
                return (child.state.clone(), child.to_move);
            }
        }

        (node.state.clone(), node.to_move)
    }

    /// Plays out the game from `state` with the configured rollout policy
    /// for the player and the greedy chase for the enemy, up to the rollout
    /// depth cap.
    fn simulation(&mut self, from: (GridState, Actor)) -> f64 {
        let (mut state, mut actor) = from;

        for ply in 0..self.rollout_depth {
            if state.is_terminal() {
                break;
            }
            match actor {
                Actor::Player => {
                    let moves = state.legal_moves(Actor::Player);
                    if moves.is_empty() {
                        state = state.boxed_in();
                        break;
                    }
                    let mv = self.rollout_policy.pick_move(&state, &moves, &mut self.rng);
                    state = state.apply(Actor::Player, &mv);
                }
                Actor::Enemy => {
                    if let Some(mv) = chase_move(&state) {
                        state = state.apply(Actor::Enemy, &mv);
                    }
                    // An absent or boxed-in enemy just skips its ply.
                }
            }
            if state.enemy().is_some() {
                actor = actor.opponent();
            }
            trace!("rollout ply {ply}: player at {}", state.player());
        }

        rollout_reward(&state)
    }

    /// Adds one visit and the reward to the root and every node on the path.
    fn backpropagation(&mut self, path: &NodePath, reward: f64) {
        self.root.visits += 1;
        self.root.total_reward += reward;

        let mut node = &mut self.root;
        for &index in &path.indices {
            node = &mut node.children[index];
            node.visits += 1;
            node.total_reward += reward;
        }
    }

    /// Final move choice: most visits, ties broken by highest mean reward,
    /// then by the fixed move ordering (children are created in untried
    /// order, so earlier-ordered moves win remaining ties).
    fn select_best_move(&self) -> Decision {
        let mut best: Option<&MctsNode> = None;

        for child in &self.root.children {
            let better = match best {
                None => true,
                Some(current) => {
                    child.visits > current.visits
                        || (child.visits == current.visits && child.value() > current.value())
                        || (child.visits == current.visits
                            && child.value() == current.value()
                            && ordinal(child) < ordinal(current))
                }
            };
            if better {
                best = Some(child);
            }
        }

        match best.and_then(|node| node.mv) {
            Some(mv) => Decision::Move(mv),
            // No child was ever expanded (zero completed iterations under a
            // tight time budget): fall back to the first untried move.
            None => match self.root.untried.first() {
                Some(mv) => Decision::Move(*mv),
                None => Decision::SkipTurn,
            },
        }
    }
}

fn ordinal(node: &MctsNode) -> usize {
    node.mv.map(|mv| mv.direction.ordinal()).unwrap_or(usize::MAX)
}
