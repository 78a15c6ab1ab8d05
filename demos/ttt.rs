//! A definition of the game Tic-Tac-Toe using the library, for use in tests.
//!
//! For example, playing a correctly-implemented strategy against itself should
//! always result in a draw; and playing such a strategy against one that picks
//! moves randomly should always result in a win or draw.
#![allow(dead_code)]

use minimax_solver::{Player, State};
use std::default::Default;
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Square {
    Empty,
    X,
    O,
}

impl Square {
    fn of(p: Player) -> Square {
        match p {
            Player::One => Square::X,
            Player::Two => Square::O,
        }
    }
}

impl Default for Square {
    fn default() -> Square {
        Square::Empty
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Square::Empty => ' ',
                Square::X => 'X',
                Square::O => 'O',
            }
        )
    }
}

const LINES: [[usize; 3]; 8] =
    [[0, 1, 2], [3, 4, 5], [6, 7, 8], [0, 3, 6], [1, 4, 7], [2, 5, 8], [0, 4, 8], [2, 4, 6]];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 9],
    to_move: Player,
}

impl Board {
    pub fn has_line(&self, p: Player) -> bool {
        let s = Square::of(p);
        LINES.iter().any(|line| line.iter().all(|&i| self.squares[i] == s))
    }

    fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    pub fn is_over(&self) -> bool {
        self.has_line(Player::One) || self.has_line(Player::Two) || self.is_full()
    }

    // Lines the player could still complete.
    fn open_lines(&self, p: Player) -> usize {
        let theirs = Square::of(p.other());
        LINES.iter().filter(|line| line.iter().all(|&i| self.squares[i] != theirs)).count()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board { squares: [Square::default(); 9], to_move: Player::One }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{} | {} | {}", self.squares[0], self.squares[1], self.squares[2])?;
        writeln!(f, "{} | {} | {}", self.squares[3], self.squares[4], self.squares[5])?;
        writeln!(f, "{} | {} | {}", self.squares[6], self.squares[7], self.squares[8])?;
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Place {
    i: u8,
}

impl Place {
    pub fn new(i: u8) -> Place {
        Place { i }
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "@{}", self.i)
    }
}

impl State for Board {
    type M = Place;

    fn legal_moves(&self) -> Vec<Place> {
        if self.is_over() {
            return Vec::new();
        }
        (0..9).filter(|&i| self.squares[i] == Square::Empty).map(|i| Place { i: i as u8 }).collect()
    }

    fn apply(&self, m: Place) -> Board {
        let mut b = self.clone();
        b.squares[m.i as usize] = Square::of(self.to_move);
        b.to_move = self.to_move.other();
        b
    }

    fn mover(&self) -> Player {
        self.to_move
    }

    fn heuristic(&self) -> f64 {
        if self.has_line(self.to_move) {
            return 1.0;
        }
        if self.has_line(self.to_move.other()) {
            return -1.0;
        }
        let mine = self.open_lines(self.to_move) as f64;
        let theirs = self.open_lines(self.to_move.other()) as f64;
        (mine - theirs) / LINES.len() as f64
    }
}

#[derive(Default)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn from_board(board: Board) -> Game {
        Game { board }
    }
}

impl minimax_solver::Game for Game {
    type S = Board;

    fn current_state(&self) -> &Board {
        &self.board
    }

    fn set_current_state(&mut self, state: Board) {
        self.board = state;
    }

    fn is_over(&self, b: &Board) -> bool {
        b.is_over()
    }

    fn is_winner(&self, b: &Board, p: Player) -> bool {
        b.has_line(p)
    }
}

fn main() {
    use minimax_solver::{util, IterativeMinimax, RecursiveMinimax};
    use minimax_solver::{Game as _, Strategy};

    env_logger::init();
    let mut game = Game::default();
    let mut strategies: [Box<dyn Strategy<Game>>; 2] =
        [Box::new(IterativeMinimax::new()), Box::new(RecursiveMinimax::new())];
    let mut s = 0;
    loop {
        println!("{}", game.current_state());
        match util::next_move(&game, &mut *strategies[s]) {
            Ok(m) => {
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
}
