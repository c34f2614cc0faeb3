//! Text notation for moves and positions.
//!
//! A move is `h<row>,<col>` or `v<row>,<col>`. A position is the grid size in
//! boxes, optionally followed by the moves played so far:
//!
//! ```text
//! 3x3: h0,0 v0,0 h1,0 v0,1
//! ```
//!
//! Moves are replayed from an empty board. `Side::First` starts and the side
//! only changes after a move that captures nothing.

use anyhow::{anyhow, bail, Result};
use nom::{
    character::complete::{char, multispace0, multispace1, one_of, u64},
    combinator::{all_consuming, map, opt},
    multi::separated_list0,
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};

use crate::game::{Board, CoordTyp, Move, Side};

fn coord(input: &str) -> IResult<&str, CoordTyp> {
    map(u64, |n| n as CoordTyp)(input)
}

fn edge(input: &str) -> IResult<&str, Move> {
    map(
        tuple((one_of("hv"), separated_pair(coord, char(','), coord))),
        |(orientation, (row, col))| Move {
            row,
            col,
            is_horizontal: orientation == 'h',
        },
    )(input)
}

fn dimensions(input: &str) -> IResult<&str, (CoordTyp, CoordTyp)> {
    separated_pair(coord, char('x'), coord)(input)
}

fn position(input: &str) -> IResult<&str, ((CoordTyp, CoordTyp), Vec<Move>)> {
    let moves = preceded(
        delimited(multispace0, char(':'), multispace0),
        separated_list0(multispace1, edge),
    );

    delimited(
        multispace0,
        tuple((dimensions, map(opt(moves), Option::unwrap_or_default))),
        multispace0,
    )(input)
}

pub fn parse_move(s: &str) -> Result<Move> {
    all_consuming(terminated(preceded(multispace0, edge), multispace0))(s)
        .map(|(_, m)| m)
        .map_err(|e| anyhow!("Invalid move {s:?}: {e}"))
}

/// Parses a position and replays its moves. Returns the board and the side to move.
pub fn parse_position(s: &str) -> Result<(Board, Side)> {
    let ((rows, cols), moves) = all_consuming(position)(s)
        .map(|(_, parsed)| parsed)
        .map_err(|e| anyhow!("Invalid position {s:?}: {e}"))?;

    let mut board = Board::try_new(rows, cols)?;
    let mut side = Side::First;

    for m in moves {
        if !board.is_valid(&m) {
            bail!("Move {m} is outside a {rows}x{cols} board");
        }
        if board.is_drawn(&m) {
            bail!("Move {m} is played twice");
        }

        if board.make_move(&m, side).is_empty() {
            side = side.opponent();
        }
    }

    Ok((board, side))
}

pub fn format_position(board: &Board) -> String {
    let size = format!("{}x{}", board.rows(), board.cols());

    if board.history().is_empty() {
        return size;
    }

    let moves = board
        .history()
        .iter()
        .map(|(m, _)| m.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!("{size}: {moves}")
}
