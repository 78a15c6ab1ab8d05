//! Utility functions for driving games with strategies.

use super::error::Error;
use super::interface::*;

/// Ask `strategy` for a move in the game's current state.
///
/// Fails with `Error::GameOver` if there is nothing left to play, and with
/// `Error::NoMove` if the strategy gives up on a live position.
pub fn next_move<G, S>(game: &G, strategy: &mut S) -> Result<MoveOf<G>, Error>
where
    G: Game,
    S: Strategy<G> + ?Sized,
{
    let state = game.current_state();
    if is_terminal(game, state, &state.legal_moves()) {
        return Err(Error::GameOver);
    }
    strategy.choose_move(game).ok_or(Error::NoMove)
}

/// Play the game to completion from its current state, with the first
/// strategy moving first.
///
/// Returns `None` if the game ends in a draw, or `Some(0)`, `Some(1)` if the
/// first or second strategy won, respectively.
pub fn battle_royale<G, S1, S2>(game: &mut G, s1: &mut S1, s2: &mut S2) -> Result<Option<usize>, Error>
where
    G: Game,
    S1: Strategy<G>,
    S2: Strategy<G>,
{
    let first = game.current_state().mover();
    let strategies: [&mut dyn Strategy<G>; 2] = [s1, s2];
    let mut s = 0;
    loop {
        let state = game.current_state();
        if is_terminal(game, state, &state.legal_moves()) {
            break;
        }
        let m = next_move(game, &mut *strategies[s])?;
        let next = game.current_state().apply(m);
        game.set_current_state(next);
        s = 1 - s;
    }
    let state = game.current_state();
    Ok(if game.is_winner(state, first) {
        Some(0)
    } else if game.is_winner(state, first.other()) {
        Some(1)
    } else {
        None
    })
}
