//! Exhaustive minimax.
//!
//! X maximizes the utility, O minimizes it.

use crate::board::{Board, Move, Player};

/// Game value of `board` under optimal play by both sides.
#[must_use]
pub fn value(board: &Board) -> i8 {
    if board.terminal() {
        return board.utility();
    }
    let children = board
        .actions()
        .into_iter()
        .filter_map(|mv| board.result(mv).ok())
        .map(|next| value(&next));
    match board.player() {
        Player::X => children.max().unwrap_or(0),
        Player::O => children.min().unwrap_or(0),
    }
}

/// Optimal move for the player to move, or `None` on a terminal board.
///
/// Among equally valued moves the first in row-major order is chosen.
#[must_use]
pub fn minimax(board: &Board) -> Option<Move> {
    if board.terminal() {
        return None;
    }
    let maximizing = board.player() == Player::X;

    let mut best: Option<(Move, i8)> = None;
    for mv in board.actions() {
        let Ok(next) = board.result(mv) else {
            continue;
        };
        let v = value(&next);
        let better = match best {
            None => true,
            Some((_, b)) if maximizing => v > b,
            Some((_, b)) => v < b,
        };
        if better {
            best = Some((mv, v));
        }
    }
    best.map(|(mv, _)| mv)
}
