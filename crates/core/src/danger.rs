use crate::game::{Board, Move};

/// Returns true if drawing `m` would leave a neighbouring box with three sides,
/// i.e. hand the opponent a capture on their next move.
///
/// `m` must be a legal move on `board`. Completing a box is never dangerous.
pub fn is_dangerous(board: &Board, m: &Move) -> bool {
    board
        .adjacent_boxes(m)
        .into_iter()
        .any(|pos| board.box_sides(pos) == 2)
}

pub fn has_safe_move(board: &Board, moves: &[Move]) -> bool {
    moves.iter().any(|m| !is_dangerous(board, m))
}
