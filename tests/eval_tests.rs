use gridpursuit::eval::{evaluate, rollout_reward, LOSS_SCORE, WIN_SCORE};
use gridpursuit::{Actor, Direction, GridState};

fn step(state: &GridState, actor: Actor, direction: Direction) -> GridState {
    let mv = state
        .legal_moves(actor)
        .into_iter()
        .find(|mv| mv.direction == direction)
        .unwrap();
    state.apply(actor, &mv)
}

#[test]
fn closer_to_goal_scores_higher() {
    let state = GridState::parse(
        ". . . . \
       \n. P . . \
       \n. . . . \
       \n. . . G ",
    )
    .unwrap();

    let closer = step(&state, Actor::Player, Direction::Down);
    let farther = step(&state, Actor::Player, Direction::Up);
    assert!(evaluate(&closer) > evaluate(&farther));
}

#[test]
fn enemy_proximity_is_penalized() {
    let far = GridState::parse(
        "P . . . E \
       \n. . . . . \
       \n. . . . G ",
    )
    .unwrap();
    let near = GridState::parse(
        "P . E . . \
       \n. . . . . \
       \n. . . . G ",
    )
    .unwrap();

    // Same player, goal and cost; only the enemy distance differs.
    assert!(evaluate(&far) > evaluate(&near));
}

#[test]
fn terminal_scores_dominate_heuristics() {
    let state = GridState::parse("P G E ").unwrap();
    assert!(evaluate(&state) > LOSS_SCORE);
    assert!(evaluate(&state) < WIN_SCORE);

    let won = step(&state, Actor::Player, Direction::Right);
    assert!(evaluate(&won) > 0.9 * WIN_SCORE);

    let chased = GridState::parse("P E G ").unwrap();
    let caught = step(&chased, Actor::Enemy, Direction::Left);
    assert_eq!(evaluate(&caught), LOSS_SCORE);
}

#[test]
fn accumulated_cost_lowers_the_score() {
    let state = GridState::parse(
        "P 9 . \
       \n. 9 . \
       \nG . . ",
    )
    .unwrap();

    // Walking right over cost-9 terrain and back left ends on the starting
    // tile with a higher path cost.
    let wander = step(&state, Actor::Player, Direction::Right);
    let back = step(&wander, Actor::Player, Direction::Left);
    assert_eq!(back.player(), state.player());
    assert!(evaluate(&back) < evaluate(&state));
}

#[test]
fn rollout_reward_ranges() {
    let state = GridState::parse("P . G E ").unwrap();
    let reward = rollout_reward(&state);
    assert!((0.0..=0.7).contains(&reward));

    let ongoing_far = GridState::parse(
        "P . . . . . . G ",
    )
    .unwrap();
    let near = step(
        &step(&ongoing_far, Actor::Player, Direction::Right),
        Actor::Player,
        Direction::Right,
    );
    assert!(rollout_reward(&near) > rollout_reward(&ongoing_far));
}

#[test]
fn rollout_reward_prefers_cheap_wins() {
    let short = GridState::parse("P G . . . ").unwrap();
    let cheap_win = step(&short, Actor::Player, Direction::Right);
    assert!(rollout_reward(&cheap_win) >= 0.75);

    let long = GridState::parse("P 9 9 9 G ").unwrap();
    let mut expensive = long;
    for _ in 0..4 {
        expensive = step(&expensive, Actor::Player, Direction::Right);
    }
    assert!(rollout_reward(&cheap_win) > rollout_reward(&expensive));

    let caught = GridState::parse("P E G ").unwrap();
    let lost = step(&caught, Actor::Player, Direction::Right);
    assert_eq!(rollout_reward(&lost), 0.0);
}
