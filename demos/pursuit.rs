//! Grid pursuit demo
//!
//! Runs a full episode on a fixed map: the engine drives the player with the
//! strategy named on the command line, the enemy follows the greedy chase
//! policy. Run with:
//!
//! ```bash
//! cargo run --example pursuit -- minimax|alphabeta|mcts
//! ```

use std::env;
use std::process::ExitCode;

use gridpursuit::policy::chase_move;
use gridpursuit::{
    Actor, Decision, GridState, Outcome, SearchConfig, StrategyKind, StrategyRunner,
};

const MAP: &str = "P . . 2 2 . . . . . \
                 \n. # # # 2 . # # . . \
                 \n. . ^ # . . # ^ . . \
                 \n# . . # . # # . . . \
                 \n. . . . . . . . # . \
                 \n. # # . ^ . # . # . \
                 \n. . . . # . # . . E \
                 \n. . # . . . . . . G ";

const MAX_TURNS: usize = 120;

fn main() -> ExitCode {
    env_logger::init();

    let kind = match env::args().nth(1).as_deref() {
        Some("minimax") => StrategyKind::Minimax,
        Some("alphabeta") | None => StrategyKind::AlphaBeta,
        Some("mcts") => StrategyKind::Mcts,
        Some(other) => {
            eprintln!("unknown strategy '{other}' (expected minimax, alphabeta or mcts)");
            return ExitCode::FAILURE;
        }
    };

    let mut state = match GridState::parse(MAP) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("map error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = SearchConfig::default()
        .with_depth(5)
        .with_iterations(3_000);
    let mut runner = StrategyRunner::new(config);

    println!("Grid pursuit, strategy {kind:?}");
    println!("{state}");

    for turn in 1..=MAX_TURNS {
        // Player decision
        let decision = match runner.choose_move(&state, kind) {
            Ok(decision) => decision,
            Err(err) => {
                eprintln!("engine error: {err}");
                return ExitCode::FAILURE;
            }
        };

        match decision {
            Decision::Move(mv) => {
                println!(
                    "turn {turn}: player {:?} -> {} [{}]",
                    mv.direction,
                    mv.target,
                    runner.statistics().summary()
                );
                state = state.apply(Actor::Player, &mv);
            }
            Decision::SkipTurn => println!("turn {turn}: player boxed in, skipping"),
        }

        if state.is_terminal() {
            break;
        }

        // Enemy response: greedy chase
        if let Some(mv) = chase_move(&state) {
            state = state.apply(Actor::Enemy, &mv);
        }

        println!("{state}");
        if state.is_terminal() {
            break;
        }
    }

    println!("{state}");
    match state.outcome() {
        Outcome::Won => println!(
            "Player reached the goal in {} turns, path cost {}",
            state.turn(),
            state.path_cost()
        ),
        Outcome::Lost(reason) => println!("Player lost: {reason:?}"),
        Outcome::Ongoing => println!("No outcome after {MAX_TURNS} turns"),
    }

    ExitCode::SUCCESS
}
