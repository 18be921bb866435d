//! Board representation and game rules.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

/// Board side length.
pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::O => "O",
        })
    }
}

/// A cell to mark, `(row, col)` from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell ({}, {}) is already taken", mv.row, mv.col)]
    CellOccupied { mv: Move },
    #[error("cell ({}, {}) is off the board", mv.row, mv.col)]
    OutOfBounds { mv: Move },
}

/// Every line that wins when filled by one player.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A board position. Boards are values: applying a move returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Player>; SIZE]; SIZE],
}

impl Board {
    /// The empty starting board.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Build a board from rows of `'X'`, `'O'` and anything else for empty.
    #[must_use]
    pub fn from_rows(rows: [&str; SIZE]) -> Self {
        let mut cells = [[None; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().take(SIZE).enumerate() {
                cells[r][c] = match ch {
                    'X' => Some(Player::X),
                    'O' => Some(Player::O),
                    _ => None,
                };
            }
        }
        Self { cells }
    }

    #[must_use]
    pub fn cell(&self, mv: Move) -> Option<Player> {
        self.cells.get(mv.row)?.get(mv.col).copied().flatten()
    }

    /// Whose turn it is. X moves first, so X moves whenever the counts tie.
    #[must_use]
    pub fn player(&self) -> Player {
        let (mut x, mut o) = (0, 0);
        for cell in self.cells.iter().flatten() {
            match cell {
                Some(Player::X) => x += 1,
                Some(Player::O) => o += 1,
                None => {}
            }
        }
        if x > o {
            Player::O
        } else {
            Player::X
        }
    }

    /// Every empty cell, in row-major order.
    #[must_use]
    pub fn actions(&self) -> BTreeSet<Move> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
            .filter(|&mv| self.cell(mv).is_none())
            .collect()
    }

    /// The board after the player to move marks `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::CellOccupied`].
    pub fn result(&self, mv: Move) -> Result<Self, GameError> {
        if mv.row >= SIZE || mv.col >= SIZE {
            return Err(GameError::OutOfBounds { mv });
        }
        if self.cells[mv.row][mv.col].is_some() {
            return Err(GameError::CellOccupied { mv });
        }
        let mut next = *self;
        next.cells[mv.row][mv.col] = Some(self.player());
        Ok(next)
    }

    /// The player holding a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(r, col)| self.cells[r][col]);
            match (a, b, c) {
                (Some(p), Some(q), Some(s)) if p == q && q == s => Some(p),
                _ => None,
            }
        })
    }

    /// Game over: someone won or no cell is left.
    #[must_use]
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().flatten().all(Option::is_some)
    }

    /// `1` if X has won, `-1` if O has won, `0` otherwise.
    #[must_use]
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}
