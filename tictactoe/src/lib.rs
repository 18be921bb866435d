//! Tic-tac-toe with an exhaustive minimax player.
//!
//! Game-tree evaluation is plain recursion over every legal move: no
//! pruning, no transposition table, no depth limit. The 3x3 board keeps the
//! full tree small enough for that.

#![forbid(unsafe_code)]

pub mod board;
pub mod minimax;

pub use board::{Board, GameError, Move, Player};
pub use minimax::{minimax, value};
