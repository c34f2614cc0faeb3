use std::{
    fmt::{Display, Formatter},
    ops::Index,
    str::FromStr,
};

use anyhow::{bail, Result};
use arrayvec::ArrayVec;
use derivative::Derivative;

use crate::notation;

pub type CoordTyp = usize;

/// Boxes completed by a single move. An edge borders at most two boxes.
pub type CaptureGrid = ArrayVec<BoxPos, 2>;

type Lines = Vec<Vec<bool>>;

#[derive(Derivative)]
#[derivative(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Board {
    rows: CoordTyp,
    cols: CoordTyp,
    horizontal_lines: Lines,
    vertical_lines: Lines,
    owners: Vec<Vec<Option<Side>>>,
    scores: [usize; 2],
    #[derivative(Hash = "ignore", PartialEq = "ignore")]
    history: Vec<(Move, Side)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameOutcome {
    Win(Side),
    Draw,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Letter drawn inside boxes owned by this side
    pub const fn initial(self) -> char {
        match self {
            Side::First => 'A',
            Side::Second => 'B',
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "First"),
            Side::Second => write!(f, "Second"),
        }
    }
}

impl Board {
    pub const DEFAULT_ROWS: CoordTyp = 4;
    pub const DEFAULT_COLS: CoordTyp = 4;
    /// Largest number of boxes along either side
    pub const MAX_SIZE: CoordTyp = 64;

    /// Creates an empty board of `rows` x `cols` boxes.
    pub fn new(rows: CoordTyp, cols: CoordTyp) -> Self {
        Self {
            rows,
            cols,
            horizontal_lines: vec![vec![false; cols]; rows + 1],
            vertical_lines: vec![vec![false; cols + 1]; rows],
            owners: vec![vec![None; cols]; rows],
            scores: [0; 2],
            history: Vec::new(),
        }
    }

    /// Like `new`, but rejects empty boards and sides longer than `MAX_SIZE`.
    pub fn try_new(rows: CoordTyp, cols: CoordTyp) -> Result<Self> {
        if rows == 0 || cols == 0 || rows > Self::MAX_SIZE || cols > Self::MAX_SIZE {
            bail!(
                "Invalid board size: {rows}x{cols} (each side must be 1 to {})",
                Self::MAX_SIZE
            );
        }

        Ok(Self::new(rows, cols))
    }

    pub fn from_notation(s: &str) -> Result<Self> {
        notation::parse_position(s).map(|(board, _)| board)
    }

    pub fn to_notation(&self) -> String {
        notation::format_position(self)
    }

    pub fn rows(&self) -> CoordTyp {
        self.rows
    }

    pub fn cols(&self) -> CoordTyp {
        self.cols
    }

    /// `(rows + 1) x cols` flags, indexed `[row][col]`
    pub fn horizontal_lines(&self) -> &[Vec<bool>] {
        &self.horizontal_lines
    }

    /// `rows x (cols + 1)` flags, indexed `[row][col]`
    pub fn vertical_lines(&self) -> &[Vec<bool>] {
        &self.vertical_lines
    }

    /// Moves played on this board, in order, with the side that played them.
    pub fn history(&self) -> &[(Move, Side)] {
        &self.history
    }

    pub fn score(&self, side: Side) -> usize {
        self.scores[side.index()]
    }

    pub fn owner(&self, pos: BoxPos) -> Option<Side> {
        self[pos]
    }

    pub fn is_valid(&self, m: &Move) -> bool {
        if m.is_horizontal {
            m.row <= self.rows && m.col < self.cols
        } else {
            m.row < self.rows && m.col <= self.cols
        }
    }

    pub fn is_drawn(&self, m: &Move) -> bool {
        self[*m]
    }

    /// Number of drawn edges around the box at `pos`.
    pub fn box_sides(&self, pos: BoxPos) -> u8 {
        let BoxPos { row, col } = pos;
        self.horizontal_lines[row][col] as u8
            + self.horizontal_lines[row + 1][col] as u8
            + self.vertical_lines[row][col] as u8
            + self.vertical_lines[row][col + 1] as u8
    }

    /// The boxes on either side of an edge: above/left first, then below/right.
    /// Edges on the border of the grid only touch one box.
    pub fn adjacent_boxes(&self, m: &Move) -> ArrayVec<BoxPos, 2> {
        let mut boxes = ArrayVec::new();

        if m.is_horizontal {
            if m.row > 0 {
                boxes.push(BoxPos::new(m.row - 1, m.col));
            }
            if m.row < self.rows {
                boxes.push(BoxPos::new(m.row, m.col));
            }
        } else {
            if m.col > 0 {
                boxes.push(BoxPos::new(m.row, m.col - 1));
            }
            if m.col < self.cols {
                boxes.push(BoxPos::new(m.row, m.col));
            }
        }

        boxes
    }

    /// Every undrawn edge: horizontal edges row by row, then vertical edges row by row.
    pub fn valid_moves(&self) -> Vec<Move> {
        let horizontal = self.horizontal_lines.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter_map(move |(col, &drawn)| (!drawn).then_some(Move::horizontal(row, col)))
        });
        let vertical = self.vertical_lines.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter_map(move |(col, &drawn)| (!drawn).then_some(Move::vertical(row, col)))
        });

        horizontal.chain(vertical).collect()
    }

    pub fn is_capturing_move(&self, m: &Move) -> bool {
        !capturing_grids(self, m).is_empty()
    }

    /// First capturing move in `valid_moves` order
    pub fn first_capturing_move(&self) -> Option<Move> {
        self.valid_moves()
            .into_iter()
            .find(|m| self.is_capturing_move(m))
    }

    /// Draws the edge for `side` and hands it every box the edge completes.
    pub fn make_move(&mut self, m: &Move, side: Side) -> CaptureGrid {
        assert!(self.is_valid(m), "Move out of range!\nBoard:\n{self}\nMove: {m}");
        assert!(!self[*m], "Line already drawn!\nBoard:\n{self}\nMove: {m}");

        let captured = capturing_grids(self, m);

        if m.is_horizontal {
            self.horizontal_lines[m.row][m.col] = true;
        } else {
            self.vertical_lines[m.row][m.col] = true;
        }

        for pos in &captured {
            self.owners[pos.row][pos.col] = Some(side);
        }
        self.scores[side.index()] += captured.len();
        self.history.push((*m, side));

        captured
    }

    pub fn is_completed(&self) -> bool {
        self.horizontal_lines
            .iter()
            .chain(&self.vertical_lines)
            .all(|line| line.iter().all(|&drawn| drawn))
    }

    pub fn get_game_outcome(&self) -> Option<GameOutcome> {
        if !self.is_completed() {
            return None;
        }

        let first = self.score(Side::First);
        let second = self.score(Side::Second);

        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameOutcome::Win(Side::First),
            std::cmp::Ordering::Less => GameOutcome::Win(Side::Second),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }
}

/// Boxes that drawing `m` would complete. Empty if the edge is already drawn.
pub fn capturing_grids(board: &Board, m: &Move) -> CaptureGrid {
    if board[*m] {
        return CaptureGrid::new();
    }

    board
        .adjacent_boxes(m)
        .into_iter()
        .filter(|&pos| board.box_sides(pos) == 3)
        .collect()
}

impl Index<Move> for Board {
    type Output = bool;

    fn index(&self, index: Move) -> &Self::Output {
        if index.is_horizontal {
            &self.horizontal_lines[index.row][index.col]
        } else {
            &self.vertical_lines[index.row][index.col]
        }
    }
}

impl Index<BoxPos> for Board {
    type Output = Option<Side>;

    fn index(&self, index: BoxPos) -> &Self::Output {
        &self.owners[index.row][index.col]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct BoxPos {
    pub row: CoordTyp,
    pub col: CoordTyp,
}

impl BoxPos {
    pub const fn new(row: CoordTyp, col: CoordTyp) -> Self {
        Self { row, col }
    }
}

impl Display for BoxPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One edge of the grid.
///
/// A horizontal edge `(row, col)` joins dots `(row, col)` and `(row, col + 1)`,
/// a vertical edge joins dots `(row, col)` and `(row + 1, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: CoordTyp,
    pub col: CoordTyp,
    pub is_horizontal: bool,
}

impl Move {
    /// Returned alongside `false` when there is nothing left to play.
    pub const SENTINEL: Move = Move::horizontal(0, 0);

    pub const fn horizontal(row: CoordTyp, col: CoordTyp) -> Self {
        Self {
            row,
            col,
            is_horizontal: true,
        }
    }

    pub const fn vertical(row: CoordTyp, col: CoordTyp) -> Self {
        Self {
            row,
            col,
            is_horizontal: false,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let orientation = if self.is_horizontal { 'h' } else { 'v' };
        write!(f, "{orientation}{},{}", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        notation::parse_move(s)
    }
}
