use std::time::Duration;

use gridpursuit::{
    Actor, Decision, EngineError, GridState, MonteCarloSearch, SearchConfig,
};

const OPEN_5X5: &str = ". . . . . \
                      \n. . . . . \
                      \n. . P . . \
                      \n. . . . . \
                      \n. . . . G ";

const PURSUIT_5X5: &str = "P . . 2 . \
                         \n. # # 2 . \
                         \n. . ^ . . \
                         \n. # . # . \
                         \n. . . E G ";

const AMBUSH_3X3: &str = "P E . \
                        \n. # . \
                        \nG . . ";

const BOXED_IN: &str = "# # # \
                      \n# P # \
                      \n# # G ";

#[test]
fn zero_iteration_budget_is_a_configuration_error() {
    let state = GridState::parse(OPEN_5X5).unwrap();
    let config = SearchConfig::default().with_iterations(0);
    assert!(matches!(
        MonteCarloSearch::new(&state, &config),
        Err(EngineError::InvalidConfiguration(_))
    ));
}

#[test]
fn terminal_state_is_a_caller_error() {
    let state = GridState::parse("P G ").unwrap();
    let mv = state.legal_moves(Actor::Player)[0];
    let won = state.apply(Actor::Player, &mv);

    assert!(matches!(
        MonteCarloSearch::new(&won, &SearchConfig::default()),
        Err(EngineError::TerminalState(_))
    ));
}

#[test]
fn boxed_in_player_skips_the_turn() {
    let state = GridState::parse(BOXED_IN).unwrap();
    let mut engine = MonteCarloSearch::new(&state, &SearchConfig::default()).unwrap();
    assert_eq!(engine.search().unwrap(), Decision::SkipTurn);
}

#[test]
fn root_visits_sum_to_the_iteration_budget() {
    let state = GridState::parse(PURSUIT_5X5).unwrap();
    let config = SearchConfig::default().with_iterations(337);

    let mut engine = MonteCarloSearch::new(&state, &config).unwrap();
    engine.search().unwrap();

    assert_eq!(engine.statistics().iterations, 337);
    assert!(engine.statistics().tree_size > 1);

    let root = engine.root();
    let child_visits: u64 = root.children.iter().map(|child| child.visits).sum();
    assert_eq!(child_visits, 337);
    assert_eq!(root.visits, 337);
}

#[test]
fn search_is_idempotent_for_identical_state_and_config() {
    let state = GridState::parse(PURSUIT_5X5).unwrap();
    let config = SearchConfig::default().with_iterations(500).with_seed(42);

    let mut first = MonteCarloSearch::new(&state, &config).unwrap();
    let mut second = MonteCarloSearch::new(&state, &config).unwrap();
    assert_eq!(first.search().unwrap(), second.search().unwrap());
}

#[test]
fn moves_toward_goal_on_open_grid() {
    let state = GridState::parse(OPEN_5X5).unwrap();
    let config = SearchConfig::default().with_iterations(2_000).with_seed(7);

    let mut engine = MonteCarloSearch::new(&state, &config).unwrap();
    let mv = engine.search().unwrap().as_move().unwrap();

    let before = state.distance_to_goal();
    let after = state.apply(Actor::Player, &mv).distance_to_goal();
    assert!(
        after < before,
        "mcts chose {:?}, which does not approach the goal",
        mv.direction
    );
}

#[test]
fn avoids_walking_into_the_enemy() {
    let state = GridState::parse(AMBUSH_3X3).unwrap();
    let enemy = state.enemy().unwrap();
    let config = SearchConfig::default().with_iterations(1_000).with_seed(11);

    let mut engine = MonteCarloSearch::new(&state, &config).unwrap();
    let mv = engine.search().unwrap().as_move().unwrap();
    assert_ne!(mv.target, enemy, "mcts walked straight into the enemy");
}

#[test]
fn time_budget_stops_the_search_early() {
    let state = GridState::parse(PURSUIT_5X5).unwrap();
    let config = SearchConfig::default()
        .with_iterations(50_000_000)
        .with_max_time(Duration::from_millis(20));

    let mut engine = MonteCarloSearch::new(&state, &config).unwrap();
    let decision = engine.search().unwrap();

    assert!(matches!(decision, Decision::Move(_)));
    assert!(engine.statistics().stopped_early);
    assert!(engine.statistics().iterations < 50_000_000);
}

#[test]
fn rollout_depth_cap_keeps_playouts_bounded() {
    // A tight cap still yields a decision; playouts cannot run unbounded on
    // cyclic non-terminal play.
    let state = GridState::parse(OPEN_5X5).unwrap();
    let config = SearchConfig::default()
        .with_iterations(200)
        .with_rollout_depth(2);

    let mut engine = MonteCarloSearch::new(&state, &config).unwrap();
    assert!(matches!(engine.search().unwrap(), Decision::Move(_)));
}

#[test]
fn statistics_track_tree_growth() {
    let state = GridState::parse(OPEN_5X5).unwrap();
    let config = SearchConfig::default().with_iterations(400);

    let mut engine = MonteCarloSearch::new(&state, &config).unwrap();
    engine.search().unwrap();

    let stats = engine.statistics();
    assert!(stats.tree_size > 4, "tree never grew: {}", stats.summary());
    assert!(stats.max_depth >= 1);
    assert!(!stats.stopped_early);
}
