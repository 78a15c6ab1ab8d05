//! A shallow, non-exhaustive strategy built on the state's own heuristic.

use super::super::interface::*;

use log::{debug, warn};

/// Picks the move whose resulting position looks worst for the opponent,
/// according to `State::heuristic`.
///
/// This looks exactly one ply ahead. Whatever else it sees comes from the
/// heuristic itself. Ties keep the earliest move.
#[derive(Debug, Default)]
pub struct RoughOutcome;

impl RoughOutcome {
    pub fn new() -> Self {
        RoughOutcome
    }
}

impl<G: Game> Strategy<G> for RoughOutcome {
    fn choose_move(&mut self, game: &G) -> Option<MoveOf<G>> {
        let state = game.current_state();
        let moves = state.legal_moves();
        if is_terminal(game, state, &moves) {
            warn!("rough outcome asked to move in a finished game");
            return None;
        }
        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = None;
        for &m in moves.iter() {
            // Bad for the opponent is good for us.
            let value = -state.apply(m).heuristic();
            debug_assert!(!value.is_nan());
            if value > best_value {
                best_value = value;
                best_move = Some(m);
            }
        }
        debug!("rough outcome chose {:?} with estimate {}", best_move, best_value);
        best_move
    }
}
