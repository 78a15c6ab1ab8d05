//! The common structures and traits.

use std::fmt::Debug;

/// The guaranteed outcome of a position from the perspective of the player
/// whose turn it is to play. Only `WIN`, `DRAW` and `LOSE` are ever produced.
pub type Evaluation = i8;

/// The player to move can force a win.
pub const WIN: Evaluation = 1;
/// Neither player can force a win.
pub const DRAW: Evaluation = 0;
/// The opponent can force a win.
pub const LOSE: Evaluation = -1;

/// One of the two competitors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent of this player.
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// An immutable game position.
///
/// Transitions are pure: `apply` derives a successor and leaves `self`
/// untouched, so a state can be shared freely between tree nodes.
pub trait State: Clone {
    /// The type of game moves. The ordering must be deterministic, since
    /// move selection breaks ties by generation order.
    type M: Copy + Ord + Debug;

    /// The currently legal moves, in generation order. Empty exactly when the
    /// state is terminal.
    fn legal_moves(&self) -> Vec<Self::M>;

    /// The state that results from playing `m` here.
    fn apply(&self, m: Self::M) -> Self;

    /// The player whose turn it is.
    fn mover(&self) -> Player;

    /// A cheap estimate in `[-1, 1]` of the outcome for the mover. Only the
    /// shallow `RoughOutcome` strategy looks at this.
    fn heuristic(&self) -> f64;
}

/// Defines the terminal rules for a two-player, zero-sum game and holds the
/// position currently being played.
pub trait Game {
    /// The type of the game state.
    type S: State;

    /// The position the game is currently in.
    fn current_state(&self) -> &Self::S;

    /// Advance the game to a new position. Only drivers call this; strategies
    /// are handed a shared reference and never write to the game.
    fn set_current_state(&mut self, state: Self::S);

    /// Whether `state` ends the game.
    fn is_over(&self, state: &Self::S) -> bool;

    /// Whether `player` has won in `state`.
    fn is_winner(&self, state: &Self::S, player: Player) -> bool;
}

/// Shorthand for the move type of a game.
pub type MoveOf<G> = <<G as Game>::S as State>::M;

/// Defines a method of choosing a move for the player to move in the game's
/// current state.
pub trait Strategy<G: Game> {
    /// Returns `None` only when the current state is already terminal.
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>>;
}

/// Whether the search should stop at `state`.
///
/// A state is terminal when it has no moves left, or when the game declares
/// it over even though moves remain.
pub fn is_terminal<G: Game>(game: &G, state: &G::S, moves: &[MoveOf<G>]) -> bool {
    moves.is_empty() || game.is_over(state)
}

/// Canonical evaluation of a terminal state, from its mover's perspective.
pub fn terminal_evaluation<G: Game>(game: &G, state: &G::S) -> Evaluation {
    let mover = state.mover();
    if game.is_winner(state, mover) {
        WIN
    } else if game.is_winner(state, mover.other()) {
        LOSE
    } else {
        DRAW
    }
}
