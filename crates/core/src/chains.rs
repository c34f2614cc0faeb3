use crate::game::{capturing_grids, Board, Move, Side};

/// Lets `side` keep taking the first capture available until none is left.
/// Returns how many boxes it collected.
pub fn greedy_capture_chain(board: &mut Board, side: Side) -> usize {
    let mut captures = 0;

    while let Some(m) = board.first_capturing_move() {
        captures += capturing_grids(board, &m).len();
        board.make_move(&m, side);
    }

    captures
}

/// Plays `mv` on a copy of `board`, then lets the opponent run its greedy
/// capture chain. Returns how many boxes the opponent collects.
pub fn simulate_opponent_captures(
    board: &Board,
    mv: &Move,
    my_side: Side,
    opponent_side: Side,
) -> usize {
    let mut board = board.clone();
    board.make_move(mv, my_side);

    greedy_capture_chain(&mut board, opponent_side)
}
