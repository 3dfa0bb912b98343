//! Per-decision search metrics
//!
//! Every strategy fills a [`SearchStatistics`] while it runs; the runner
//! exposes the struct of the most recent decision so an external logging or
//! plotting collaborator can consume it. The engine itself never prints.

use std::time::Duration;

/// Metrics collected while computing a single decision.
///
/// Tree search fills the node counters; MCTS fills the iteration, tree and
/// depth fields. Fields that do not apply to the strategy that ran stay at
/// their zero values.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Wall-clock time spent on the decision.
    pub elapsed: Duration,

    /// States evaluated or expanded by Minimax / Alpha-Beta.
    pub nodes_visited: u64,

    /// Children skipped by alpha-beta cutoffs.
    pub nodes_pruned: u64,

    /// MCTS iterations actually run.
    pub iterations: usize,

    /// Number of nodes in the MCTS tree, including the root.
    pub tree_size: usize,

    /// Deepest tree node touched during MCTS selection or expansion.
    pub max_depth: usize,

    /// True when MCTS returned early because the wall-clock budget expired.
    pub stopped_early: bool,
}

impl SearchStatistics {
    pub fn new() -> Self {
        SearchStatistics {
            tree_size: 1,
            ..Default::default()
        }
    }

    /// Average time per MCTS iteration in microseconds.
    pub fn avg_time_per_iteration_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_micros() as f64 / self.iterations as f64
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "elapsed: {:.3}s, nodes: {} ({} pruned), iterations: {}, tree: {} nodes, max depth: {}, stopped early: {}",
            self.elapsed.as_secs_f64(),
            self.nodes_visited,
            self.nodes_pruned,
            self.iterations,
            self.tree_size,
            self.max_depth,
            self.stopped_early
        )
    }
}
