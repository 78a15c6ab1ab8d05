//! Plays Stonehenge between two strategies and prints each move.
//!
//! Usage: `cargo run --example stonehenge -- [side length]`. Set
//! `RUST_LOG=debug` to see what the strategies are doing.

use minimax_solver::stonehenge::{Stonehenge, StonehengeOptions};
use minimax_solver::{util, Game, IterativeMinimax, RoughOutcome, State, Strategy};

fn main() {
    env_logger::init();

    let side_length = std::env::args().nth(1).and_then(|arg| arg.parse().ok()).unwrap_or(2);
    let mut game = match Stonehenge::new(StonehengeOptions::new().with_side_length(side_length)) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    println!("{}", Stonehenge::instructions());

    let mut strategies: [(&str, Box<dyn Strategy<Stonehenge>>); 2] = [
        ("iterative minimax", Box::new(IterativeMinimax::new())),
        ("rough outcome", Box::new(RoughOutcome::new())),
    ];
    let first = game.current_state().mover();
    let players = [first, first.other()];
    let mut s = 0;
    loop {
        let name = strategies[s].0;
        match util::next_move(&game, &mut *strategies[s].1) {
            Ok(m) => {
                println!("{} claims {}", name, m);
                let next = game.current_state().apply(m);
                game.set_current_state(next);
            }
            Err(e) => {
                println!("{}", e);
                break;
            }
        }
        s = 1 - s;
    }

    let state = game.current_state();
    for (&(name, _), &player) in strategies.iter().zip(players.iter()) {
        if game.is_winner(state, player) {
            println!("{} wins", name);
        }
    }
}
