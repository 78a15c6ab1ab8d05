//! A subtraction game: players alternately take one, two or three stones
//! from a single pile, and whoever takes the last stone wins. The player to
//! move loses exactly when the pile is a multiple of one more than the most
//! stones that may be taken, which makes it handy for checking solvers.
#![allow(dead_code)]

use minimax_solver::{Player, State};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    stones: u32,
    max_take: u32,
    to_move: Player,
}

impl Pile {
    pub fn new(stones: u32, max_take: u32) -> Pile {
        Pile { stones, max_take, to_move: Player::One }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Take(pub u32);

impl State for Pile {
    type M = Take;

    fn legal_moves(&self) -> Vec<Take> {
        (1..=self.max_take.min(self.stones)).map(Take).collect()
    }

    fn apply(&self, m: Take) -> Pile {
        Pile { stones: self.stones - m.0, max_take: self.max_take, to_move: self.to_move.other() }
    }

    fn mover(&self) -> Player {
        self.to_move
    }

    // Only notices the immediate win.
    fn heuristic(&self) -> f64 {
        if self.stones == 0 {
            -1.0
        } else if self.stones <= self.max_take {
            1.0
        } else {
            0.0
        }
    }
}

pub struct Nim {
    pile: Pile,
}

impl Nim {
    pub fn new(stones: u32, max_take: u32) -> Nim {
        Nim { pile: Pile::new(stones, max_take) }
    }
}

impl minimax_solver::Game for Nim {
    type S = Pile;

    fn current_state(&self) -> &Pile {
        &self.pile
    }

    fn set_current_state(&mut self, state: Pile) {
        self.pile = state;
    }

    fn is_over(&self, pile: &Pile) -> bool {
        pile.stones == 0
    }

    // The player who just moved took the last stone.
    fn is_winner(&self, pile: &Pile, p: Player) -> bool {
        pile.stones == 0 && pile.to_move != p
    }
}

fn main() {
    use minimax_solver::{util, IterativeMinimax, RoughOutcome};

    env_logger::init();
    let mut game = Nim::new(15, 3);
    let result = util::battle_royale(&mut game, &mut IterativeMinimax::new(), &mut RoughOutcome::new());
    match result {
        Ok(Some(0)) => println!("minimax won"),
        Ok(Some(_)) => println!("rough outcome won"),
        Ok(None) => println!("draw"),
        Err(e) => println!("{}", e),
    }
}
