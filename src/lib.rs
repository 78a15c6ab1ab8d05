//! Exhaustive minimax for small two-player, zero-sum games whose outcomes are
//! win, lose or draw.
//!
//! Implement `State` and `Game` for your game, then ask one of the strategies
//! for a move. `RecursiveMinimax` and `IterativeMinimax` search the entire
//! game tree and always agree; the iterative one trades call-stack depth for
//! heap memory. `RoughOutcome` only looks one ply ahead through the state's
//! own heuristic.

pub mod choosers;
pub mod error;
pub mod interface;
pub mod stonehenge;
pub mod strategies;
pub mod tree;
pub mod util;

pub use choosers::preferred_move;
pub use error::Error;
pub use interface::{
    is_terminal, terminal_evaluation, Evaluation, Game, MoveOf, Player, State, Strategy, DRAW,
    LOSE, WIN,
};
pub use strategies::iterative::{evaluate_tree, iterative_evaluation, IterativeMinimax};
pub use strategies::random::Random;
pub use strategies::recursive::{recursive_evaluation, RecursiveMinimax};
pub use strategies::rough::RoughOutcome;
pub use tree::GameTree;
