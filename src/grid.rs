//! Board and game-state representation for the grid pursuit game
//!
//! This module defines the immutable board (tiles, walls, traps, goal), the
//! per-turn [`GridState`] snapshot, and move generation for both actors.
//! States are never mutated in place: [`GridState::apply`] derives a fresh
//! state for every hypothetical move a search strategy explores.

use std::fmt;
use std::sync::Arc;

use crate::{EngineError, Result};

/// A tile coordinate, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }

    /// Manhattan distance to another position.
    pub fn manhattan(&self, other: Pos) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal move directions.
///
/// The declaration order Up, Down, Left, Right is the fixed move ordering
/// used for deterministic tie-breaking by every search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the fixed move ordering.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Index of this direction within the fixed ordering.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// A single tile of the board. Immutable after map load.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tile {
    /// Terrain cost paid by the player for stepping onto this tile.
    pub cost: u32,
    pub wall: bool,
    pub trap: bool,
    pub goal: bool,
}

/// The static part of the game: dimensions, tiles and the goal position.
///
/// A board is built once (from a map definition) and shared behind an `Arc`
/// by every `GridState` derived during search, so cloning a state copies
/// only positions and counters.
#[derive(Debug)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    goal: Pos,
}

impl Board {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn tile(&self, pos: Pos) -> &Tile {
        &self.tiles[pos.row * self.width + pos.col]
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// The neighboring position in the given direction, if it is within
    /// bounds and not a wall.
    pub fn neighbor(&self, pos: Pos, direction: Direction) -> Option<Pos> {
        let (row, col) = (pos.row as isize, pos.col as isize);
        let (row, col) = match direction {
            Direction::Up => (row - 1, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col - 1),
            Direction::Right => (row, col + 1),
        };
        if !self.in_bounds(row, col) {
            return None;
        }
        let target = Pos::new(row as usize, col as usize);
        if self.tile(target).wall {
            return None;
        }
        Some(target)
    }
}

/// A legal single-step move for one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    /// The tile the actor ends up on.
    pub target: Pos,
    /// Terrain cost added to the player's accumulated path cost.
    /// Always zero for enemy moves.
    pub cost: u32,
}

/// The two actors alternating turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Player,
    Enemy,
}

impl Actor {
    pub fn opponent(&self) -> Actor {
        match self {
            Actor::Player => Actor::Enemy,
            Actor::Enemy => Actor::Player,
        }
    }
}

/// Why the player lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// The enemy reached the player's tile.
    Caught,
    /// The player stepped onto a trap.
    Trapped,
    /// The player had no legal move and was not on the goal.
    Boxed,
}

/// Episode outcome from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Won,
    Lost(LossReason),
}

/// A snapshot of the game: shared board plus the positions and counters
/// that vary per turn.
///
/// Invariants: both positions are in bounds and never on a wall tile, and
/// `path_cost` is non-decreasing across player moves. The canonical state is
/// owned by the external turn loop; search strategies only ever derive
/// hypothetical copies via [`GridState::apply`].
#[derive(Debug, Clone)]
pub struct GridState {
    board: Arc<Board>,
    player: Pos,
    enemy: Option<Pos>,
    path_cost: u32,
    turn: u32,
    outcome: Outcome,
}

impl GridState {
    /// Creates a fresh state on the given board.
    ///
    /// The caller is responsible for handing in validated positions (map
    /// loading is an external concern); see [`GridState::parse`] for a
    /// validating constructor.
    pub fn new(board: Arc<Board>, player: Pos, enemy: Option<Pos>) -> Self {
        GridState {
            board,
            player,
            enemy,
            path_cost: 0,
            turn: 0,
            outcome: Outcome::Ongoing,
        }
    }

    /// Builds a state from an ASCII map sketch.
    ///
    /// Recognized tiles: `.` floor (cost 1), `1`..`9` floor with that cost,
    /// `#` wall, `^` trap, `G` goal, `P` player start, `E` enemy start.
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// ```
    /// use gridpursuit::GridState;
    ///
    /// let state = GridState::parse(
    ///     "P . . \
    ///     \n. # . \
    ///     \n. . G ",
    /// ).unwrap();
    /// assert_eq!(state.board().width(), 3);
    /// ```
    pub fn parse(text: &str) -> Result<GridState> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.split_whitespace().flat_map(|tok| tok.chars()).collect())
            .filter(|row: &Vec<char>| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(EngineError::InvalidMap("empty map".into()));
        }
        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(EngineError::InvalidMap(
                "rows have inconsistent widths".into(),
            ));
        }

        let height = rows.len();
        let mut tiles = vec![Tile::default(); width * height];
        let mut player = None;
        let mut enemy = None;
        let mut goal = None;

        for (row, chars) in rows.iter().enumerate() {
            for (col, ch) in chars.iter().enumerate() {
                let pos = Pos::new(row, col);
                let tile = &mut tiles[row * width + col];
                match ch {
                    '.' => tile.cost = 1,
                    '1'..='9' => tile.cost = ch.to_digit(10).unwrap(),
                    '#' => tile.wall = true,
                    '^' => {
                        tile.cost = 1;
                        tile.trap = true;
                    }
                    'G' => {
                        tile.cost = 1;
                        tile.goal = true;
                        if goal.replace(pos).is_some() {
                            return Err(EngineError::InvalidMap("multiple goal tiles".into()));
                        }
                    }
                    'P' => {
                        tile.cost = 1;
                        if player.replace(pos).is_some() {
                            return Err(EngineError::InvalidMap(
                                "multiple player positions".into(),
                            ));
                        }
                    }
                    'E' => {
                        tile.cost = 1;
                        if enemy.replace(pos).is_some() {
                            return Err(EngineError::InvalidMap(
                                "multiple enemy positions".into(),
                            ));
                        }
                    }
                    other => {
                        return Err(EngineError::InvalidMap(format!(
                            "unrecognized tile '{other}' at {pos}",
                            pos = Pos::new(row, col)
                        )))
                    }
                }
            }
        }

        let player =
            player.ok_or_else(|| EngineError::InvalidMap("missing player position".into()))?;
        let goal = goal.ok_or_else(|| EngineError::InvalidMap("missing goal tile".into()))?;

        let board = Arc::new(Board {
            width,
            height,
            tiles,
            goal,
        });
        Ok(GridState::new(board, player, enemy))
    }

    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn enemy(&self) -> Option<Pos> {
        self.enemy
    }

    /// Accumulated terrain cost of the player's path so far.
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Number of completed player turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::Ongoing
    }

    fn position_of(&self, actor: Actor) -> Option<Pos> {
        match actor {
            Actor::Player => Some(self.player),
            Actor::Enemy => self.enemy,
        }
    }

    /// All legal moves for the given actor, in the fixed Up/Down/Left/Right
    /// ordering. Never includes wall tiles or out-of-bounds targets; trap
    /// tiles and the opponent's tile are legal (they are hazards, resolved
    /// by [`GridState::apply`]). Returns an empty list for an absent enemy
    /// or a terminal state.
    pub fn legal_moves(&self, actor: Actor) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let Some(from) = self.position_of(actor) else {
            return Vec::new();
        };

        let mut moves = Vec::with_capacity(4);
        for direction in Direction::ALL {
            if let Some(target) = self.board.neighbor(from, direction) {
                let cost = match actor {
                    Actor::Player => self.board.tile(target).cost,
                    Actor::Enemy => 0,
                };
                moves.push(Move {
                    direction,
                    target,
                    cost,
                });
            }
        }
        moves
    }

    /// Applies a move for the given actor, returning the successor state.
    ///
    /// Pure: `self` is untouched. The move must come from
    /// [`GridState::legal_moves`] for the same actor.
    pub fn apply(&self, actor: Actor, mv: &Move) -> GridState {
        debug_assert!(!self.is_terminal(), "apply on terminal state");
        debug_assert!(!self.board.tile(mv.target).wall, "move onto wall");

        let mut next = self.clone();
        match actor {
            Actor::Player => {
                next.player = mv.target;
                next.path_cost += mv.cost;
                next.turn += 1;

                let tile = next.board.tile(mv.target);
                if tile.goal {
                    next.outcome = Outcome::Won;
                } else if tile.trap {
                    next.outcome = Outcome::Lost(LossReason::Trapped);
                } else if next.enemy == Some(mv.target) {
                    next.outcome = Outcome::Lost(LossReason::Caught);
                }
            }
            Actor::Enemy => {
                next.enemy = Some(mv.target);
                if mv.target == next.player {
                    next.outcome = Outcome::Lost(LossReason::Caught);
                }
            }
        }
        next
    }

    /// Marks the state as lost because the player is boxed in.
    ///
    /// Used by the search layers when the player has no legal moves and is
    /// not on the goal (spontaneously terminal per the game rules).
    pub fn boxed_in(&self) -> GridState {
        let mut next = self.clone();
        next.outcome = Outcome::Lost(LossReason::Boxed);
        next
    }

    /// Manhattan distance from the player to the goal.
    pub fn distance_to_goal(&self) -> u32 {
        self.player.manhattan(self.board.goal)
    }

    /// Manhattan distance between the player and the enemy, if one exists.
    pub fn distance_to_enemy(&self) -> Option<u32> {
        self.enemy.map(|enemy| self.player.manhattan(enemy))
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.board.height {
            for col in 0..self.board.width {
                let pos = Pos::new(row, col);
                let tile = self.board.tile(pos);
                let ch = if pos == self.player {
                    'P'
                } else if self.enemy == Some(pos) {
                    'E'
                } else if tile.wall {
                    '#'
                } else if tile.goal {
                    'G'
                } else if tile.trap {
                    '^'
                } else if tile.cost > 1 {
                    char::from_digit(tile.cost.min(9), 10).unwrap_or('9')
                } else {
                    '.'
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
