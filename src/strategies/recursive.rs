//! Exhaustive minimax by direct recursion.
//!
//! Simple and allocation-light, but the call stack grows with the depth of
//! the game tree. Prefer `IterativeMinimax` for games with long lines of play.

use super::super::choosers::preferred_move;
use super::super::interface::*;
use super::super::tree::GameTree;

use log::{debug, warn};
use std::cmp::max;

/// The outcome the mover of `state` can guarantee under optimal play.
///
/// The game's terminal rules are consulted against `state` directly; the
/// game's own current state is never read or modified.
pub fn recursive_evaluation<G: Game>(game: &G, state: &G::S) -> Evaluation {
    let moves = state.legal_moves();
    if is_terminal(game, state, &moves) {
        return terminal_evaluation(game, state);
    }
    let mut best = LOSE;
    for m in moves {
        let value = -recursive_evaluation(game, &state.apply(m));
        best = max(best, value);
    }
    best
}

/// Chooses moves by scoring every successor of the current state with
/// `recursive_evaluation`.
#[derive(Debug, Default)]
pub struct RecursiveMinimax {
    prev_value: Option<Evaluation>,
}

impl RecursiveMinimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// The score of the root from the last `choose_move`, from the
    /// perspective of the player who was to move there.
    pub fn root_value(&self) -> Option<Evaluation> {
        self.prev_value
    }
}

impl<G: Game> Strategy<G> for RecursiveMinimax {
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>> {
        let state = game.current_state();
        let moves = state.legal_moves();
        if is_terminal(game, state, &moves) {
            warn!("recursive minimax asked to move in a finished game");
            self.prev_value = Some(terminal_evaluation(game, state));
            return None;
        }
        let children = moves
            .into_iter()
            .map(|m| {
                let mut child = GameTree::child(state.apply(m), m);
                child.score = Some(recursive_evaluation(game, &child.state));
                child
            })
            .collect::<Vec<_>>();
        self.prev_value = children.iter().filter_map(|child| child.score).map(|s| -s).max();
        let best = preferred_move(&children);
        debug!("recursive minimax chose {:?} among {} moves", best, children.len());
        best
    }
}
