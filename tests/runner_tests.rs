use gridpursuit::{
    Actor, Decision, EngineError, GridState, SearchConfig, StrategyKind, StrategyRunner,
};

const PURSUIT_5X5: &str = "P . . 2 . \
                         \n. # # 2 . \
                         \n. . ^ . . \
                         \n. # . # . \
                         \n. . . E G ";

const BOXED_IN: &str = "# # # \
                      \n# P # \
                      \n# # G ";

const ALL_KINDS: [StrategyKind; 3] = [
    StrategyKind::Minimax,
    StrategyKind::AlphaBeta,
    StrategyKind::Mcts,
];

#[test]
fn every_strategy_produces_a_move() {
    let state = GridState::parse(PURSUIT_5X5).unwrap();
    let config = SearchConfig::default().with_depth(3).with_iterations(300);
    let mut runner = StrategyRunner::new(config);

    for kind in ALL_KINDS {
        let decision = runner.choose_move(&state, kind).unwrap();
        assert!(
            matches!(decision, Decision::Move(_)),
            "{kind:?} failed to produce a move"
        );
    }
}

#[test]
fn invalid_configuration_is_reported_per_kind() {
    let state = GridState::parse(PURSUIT_5X5).unwrap();

    // Depth 0 only affects the tree-search strategies.
    let mut runner = StrategyRunner::new(SearchConfig::default().with_depth(0));
    for kind in [StrategyKind::Minimax, StrategyKind::AlphaBeta] {
        assert!(matches!(
            runner.choose_move(&state, kind),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }
    assert!(runner.choose_move(&state, StrategyKind::Mcts).is_ok());

    // A zero iteration budget only affects MCTS.
    let mut runner = StrategyRunner::new(SearchConfig::default().with_iterations(0));
    assert!(matches!(
        runner.choose_move(&state, StrategyKind::Mcts),
        Err(EngineError::InvalidConfiguration(_))
    ));
    assert!(runner.choose_move(&state, StrategyKind::Minimax).is_ok());
}

#[test]
fn terminal_state_is_rejected_for_every_kind() {
    let state = GridState::parse("P G ").unwrap();
    let mv = state.legal_moves(Actor::Player)[0];
    let won = state.apply(Actor::Player, &mv);

    let mut runner = StrategyRunner::new(SearchConfig::default());
    for kind in ALL_KINDS {
        assert!(matches!(
            runner.choose_move(&won, kind),
            Err(EngineError::TerminalState(_))
        ));
    }
}

#[test]
fn boxed_in_player_skips_for_every_kind() {
    let state = GridState::parse(BOXED_IN).unwrap();
    let mut runner = StrategyRunner::new(SearchConfig::default().with_iterations(50));

    for kind in ALL_KINDS {
        assert_eq!(runner.choose_move(&state, kind).unwrap(), Decision::SkipTurn);
    }
}

#[test]
fn choose_move_is_idempotent() {
    let state = GridState::parse(PURSUIT_5X5).unwrap();
    let config = SearchConfig::default()
        .with_depth(4)
        .with_iterations(400)
        .with_seed(99);
    let mut runner = StrategyRunner::new(config);

    for kind in ALL_KINDS {
        let first = runner.choose_move(&state, kind).unwrap();
        let second = runner.choose_move(&state, kind).unwrap();
        assert_eq!(first, second, "{kind:?} is not deterministic");
    }
}

#[test]
fn choose_move_does_not_touch_the_canonical_state() {
    let state = GridState::parse(PURSUIT_5X5).unwrap();
    let player_before = state.player();
    let cost_before = state.path_cost();

    let mut runner = StrategyRunner::new(SearchConfig::default().with_iterations(200));
    for kind in ALL_KINDS {
        runner.choose_move(&state, kind).unwrap();
    }

    assert_eq!(state.player(), player_before);
    assert_eq!(state.path_cost(), cost_before);
    assert_eq!(state.outcome(), gridpursuit::Outcome::Ongoing);
}

#[test]
fn statistics_reflect_the_last_decision() {
    let state = GridState::parse(PURSUIT_5X5).unwrap();
    let mut runner = StrategyRunner::new(SearchConfig::default().with_depth(3).with_iterations(250));

    runner.choose_move(&state, StrategyKind::AlphaBeta).unwrap();
    assert!(runner.statistics().nodes_visited > 0);
    assert_eq!(runner.statistics().iterations, 0);

    runner.choose_move(&state, StrategyKind::Mcts).unwrap();
    assert_eq!(runner.statistics().iterations, 250);
    assert!(runner.statistics().tree_size > 1);
}
