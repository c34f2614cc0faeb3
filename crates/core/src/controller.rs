use anyhow::{bail, Result};
use log::{debug, warn};

use crate::{
    game::{Board, GameOutcome, Move, Side},
    notation, Agent,
};

/// What an agent sees of the game it is playing.
pub trait Controller {
    fn current_board(&self) -> &Board;

    /// Commits a move for `my_side`. Returns true if the same side moves again.
    fn make_move(&mut self, m: &Move) -> bool;

    fn my_side(&self) -> Side;

    fn opponent_side(&self) -> Side;
}

/// A game played locally, with the controller always speaking for the side to move.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    to_move: Side,
    illegal_move: Option<(Side, Move)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub scores: [usize; 2],
    pub moves: Vec<(Move, Side)>,
}

impl GameRecord {
    pub fn score(&self, side: Side) -> usize {
        self.scores[side.index()]
    }
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self::with_side_to_move(board, Side::First)
    }

    pub fn with_side_to_move(board: Board, to_move: Side) -> Self {
        Self {
            board,
            to_move,
            illegal_move: None,
        }
    }

    pub fn from_notation(s: &str) -> Result<Self> {
        let (board, to_move) = notation::parse_position(s)?;
        Ok(Self::with_side_to_move(board, to_move))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.to_move
    }

    /// Plays the game to the end. `first` moves whenever `Side::First` is to move.
    pub fn play(&mut self, first: &mut dyn Agent, second: &mut dyn Agent) -> Result<GameRecord> {
        while !self.board.is_completed() {
            let side = self.to_move;
            let played = self.board.history().len();

            let agent: &mut dyn Agent = match side {
                Side::First => &mut *first,
                Side::Second => &mut *second,
            };
            agent.play_turn(self);

            if let Some((side, m)) = self.illegal_move.take() {
                bail!("{side} played illegal move {m}\n{}", self.board);
            }
            if self.board.history().len() == played {
                bail!("{side} did not play a move\n{}", self.board);
            }
        }

        let Some(outcome) = self.board.get_game_outcome() else {
            bail!("Game ended on an incomplete board\n{}", self.board);
        };

        Ok(GameRecord {
            outcome,
            scores: [self.board.score(Side::First), self.board.score(Side::Second)],
            moves: self.board.history().to_vec(),
        })
    }
}

impl Controller for Session {
    fn current_board(&self) -> &Board {
        &self.board
    }

    fn make_move(&mut self, m: &Move) -> bool {
        let side = self.to_move;

        if !self.board.is_valid(m) || self.board.is_drawn(m) {
            warn!("{side} tried to play illegal move {m}");
            self.illegal_move = Some((side, *m));
            return false;
        }

        let captured = self.board.make_move(m, side);
        debug!("{side} played {m}, capturing {}", captured.len());

        if !captured.is_empty() && !self.board.is_completed() {
            return true;
        }

        self.to_move = side.opponent();
        false
    }

    fn my_side(&self) -> Side {
        self.to_move
    }

    fn opponent_side(&self) -> Side {
        self.to_move.opponent()
    }
}
