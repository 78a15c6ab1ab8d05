//! Stonehenge, a small ley-line claiming game.
//!
//! Players take turns claiming cells. Whoever first holds at least half of
//! the cells on a ley-line claims that line, and the first player to claim at
//! least half of all ley-lines wins. Boards have side length 1 through 5.

use super::error::Error;
use super::interface::{self, Evaluation, Player, State, DRAW, LOSE, WIN};

use std::fmt::{Display, Formatter, Result};

// Each ley-line as the labels of the cells on it: the down-right diagonals,
// then the down-left diagonals, then the rows from the bottom up.
static SIDE_1: [&str; 6] = ["A", "BC", "B", "AC", "C", "AB"];
static SIDE_2: [&str; 9] = ["AC", "BDF", "EG", "BE", "ADG", "CF", "FG", "CDE", "AB"];
static SIDE_3: [&str; 12] =
    ["ACF", "BDGJ", "EHK", "IL", "BEI", "ADHL", "CGK", "FJ", "JKL", "FGHI", "CDE", "AB"];
static SIDE_4: [&str; 15] = [
    "ACFJ", "BDGKO", "EHLP", "IMQ", "NR", "BEIN", "ADHMR", "CGLQ", "FKP", "JO", "OPQR", "JKLMN",
    "FGHI", "CDE", "AB",
];
static SIDE_5: [&str; 18] = [
    "ACFJO", "BDGKPU", "EHLQV", "IMRW", "NSX", "TY", "BEINT", "ADHMSY", "CGLRX", "FKQW", "JPV",
    "OU", "UVWXY", "OPQRST", "JKLMN", "FGHI", "CDE", "AB",
];

fn layout(side_length: usize) -> Option<&'static [&'static str]> {
    match side_length {
        1 => Some(&SIDE_1),
        2 => Some(&SIDE_2),
        3 => Some(&SIDE_3),
        4 => Some(&SIDE_4),
        5 => Some(&SIDE_5),
        _ => None,
    }
}

/// A cell on the board, identified by its letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// The cell with this letter, if the letter names a cell on some board.
    pub fn from_label(label: char) -> Option<Cell> {
        if label.is_ascii_uppercase() && label <= 'Y' {
            Some(Cell(label as u8 - b'A'))
        } else {
            None
        }
    }

    fn index(self) -> usize {
        self.0 as usize
    }

    pub fn label(self) -> char {
        (b'A' + self.0) as char
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    lines: &'static [&'static str],
    // Owner of each cell, indexed by label.
    cells: Vec<Option<Player>>,
    // Owner of each ley-line. Once set, never changes.
    claimed: Vec<Option<Player>>,
    to_move: Player,
}

impl Board {
    pub fn new(side_length: usize, to_move: Player) -> std::result::Result<Board, Error> {
        let lines = layout(side_length).ok_or(Error::UnsupportedSideLength(side_length))?;
        // Rows widen from two cells to side_length + 1, then one last row of
        // side_length cells.
        let num_cells = (side_length + 1) * (side_length + 2) / 2 - 1 + side_length;
        Ok(Board { lines, cells: vec![None; num_cells], claimed: vec![None; lines.len()], to_move })
    }

    pub fn num_ley_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn ley_line_owner(&self, line: usize) -> Option<Player> {
        self.claimed.get(line).copied().flatten()
    }

    /// The cell with this letter, if the letter names a cell on this board.
    pub fn cell(&self, label: char) -> Option<Cell> {
        Cell::from_label(label).filter(|c| c.index() < self.cells.len())
    }

    pub fn cell_owner(&self, cell: Cell) -> Option<Player> {
        self.cells.get(cell.index()).copied().flatten()
    }

    fn ley_lines_held(&self, p: Player) -> usize {
        self.claimed.iter().filter(|&&owner| owner == Some(p)).count()
    }

    /// Whether `p` holds at least half of the ley-lines.
    pub fn has_won(&self, p: Player) -> bool {
        2 * self.ley_lines_held(p) >= self.lines.len()
    }

    pub fn is_over(&self) -> bool {
        self.has_won(Player::One) || self.has_won(Player::Two)
    }

    fn cells_on(line: &str) -> impl Iterator<Item = usize> + '_ {
        line.bytes().map(|b| (b - b'A') as usize)
    }

    /// Whether some move from here ends the game.
    fn can_finish(&self) -> bool {
        self.legal_moves().into_iter().any(|m| self.apply(m).is_over())
    }
}

impl State for Board {
    type M = Cell;

    fn legal_moves(&self) -> Vec<Cell> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.cells.len())
            .filter(|&i| self.cells[i].is_none())
            .map(|i| Cell(i as u8))
            .collect()
    }

    /// # Panics
    ///
    /// Panics if `m` is not a cell on this board. Use `Board::cell` or
    /// `Stonehenge::parse_move` to get a cell from a label.
    fn apply(&self, m: Cell) -> Board {
        debug_assert!(self.cells[m.index()].is_none(), "cell {} already claimed", m);
        let mut next = self.clone();
        let p = self.to_move;
        next.cells[m.index()] = Some(p);
        for (i, line) in self.lines.iter().enumerate() {
            if next.claimed[i].is_some() {
                continue;
            }
            let held = Board::cells_on(line).filter(|&c| next.cells[c] == Some(p)).count();
            if 2 * held >= line.len() {
                next.claimed[i] = Some(p);
            }
        }
        next.to_move = p.other();
        next
    }

    fn mover(&self) -> Player {
        self.to_move
    }

    fn heuristic(&self) -> f64 {
        let moves = self.legal_moves();
        if moves.is_empty() {
            return f64::from(LOSE);
        }
        let mut opponent_can_always_finish = true;
        for &m in moves.iter() {
            let next = self.apply(m);
            if next.is_over() {
                return f64::from(WIN);
            }
            if !next.can_finish() {
                opponent_can_always_finish = false;
            }
        }
        let estimate: Evaluation = if opponent_can_always_finish { LOSE } else { DRAW };
        f64::from(estimate)
    }
}

/// Options to use for a new `Stonehenge` game.
#[derive(Clone, Copy, Debug)]
pub struct StonehengeOptions {
    side_length: usize,
    first: Player,
}

impl Default for StonehengeOptions {
    fn default() -> Self {
        StonehengeOptions { side_length: 1, first: Player::One }
    }
}

impl StonehengeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of cells on each outer edge, 1 through 5.
    pub fn with_side_length(mut self, side_length: usize) -> Self {
        self.side_length = side_length;
        self
    }

    /// Which player makes the first move.
    pub fn with_first_player(mut self, first: Player) -> Self {
        self.first = first;
        self
    }
}

pub struct Stonehenge {
    current: Board,
}

impl Stonehenge {
    pub fn new(options: StonehengeOptions) -> std::result::Result<Stonehenge, Error> {
        Ok(Stonehenge { current: Board::new(options.side_length, options.first)? })
    }

    pub fn instructions() -> &'static str {
        "Players take turns claiming cells. When a player captures at least half of the cells \
         in a ley-line, then the player captures that ley-line. The first player to capture at \
         least half of the ley-lines is the winner."
    }

    /// Parse a cell label typed by a person. Anything that is not a cell
    /// legal in the current position is rejected.
    pub fn parse_move(&self, s: &str) -> std::result::Result<Cell, Error> {
        let label = s.trim().to_ascii_uppercase();
        self.current
            .legal_moves()
            .into_iter()
            .find(|m| label.len() == 1 && label.starts_with(m.label()))
            .ok_or_else(|| Error::InvalidMove(s.to_string()))
    }
}

impl interface::Game for Stonehenge {
    type S = Board;

    fn current_state(&self) -> &Board {
        &self.current
    }

    fn set_current_state(&mut self, state: Board) {
        self.current = state;
    }

    fn is_over(&self, state: &Board) -> bool {
        state.is_over()
    }

    fn is_winner(&self, state: &Board, player: Player) -> bool {
        state.has_won(player)
    }
}
