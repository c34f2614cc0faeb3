use boxes_ai_core::{
    chains::{greedy_capture_chain, simulate_opponent_captures},
    controller::Controller,
    danger::{has_safe_move, is_dangerous},
    game::{Board, Move, Side},
    Agent,
};
use log::debug;

/// Chain length at which the agent gives back the last two boxes
pub const DOUBLE_CROSS_CHAIN: usize = 2;
/// A sacrifice conceding fewer boxes than this is played without looking further
pub const SACRIFICE_CUTOFF: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Capture,
    Safe,
    DoubleCross,
    Sacrifice { opponent_captures: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub phase: Phase,
}

/// Plays like `FirstAgent` while safe moves remain. In the endgame it sets up
/// double-crosses on two box chains and cuts its sacrifice search short.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossAgent;

impl CrossAgent {
    pub fn select(&self, board: &Board, my_side: Side, opponent_side: Side) -> Option<Decision> {
        let moves = board.valid_moves();
        let first_capture = moves.iter().copied().find(|m| board.is_capturing_move(m));

        if has_safe_move(board, &moves) {
            if let Some(mv) = first_capture {
                return Some(Decision {
                    mv,
                    phase: Phase::Capture,
                });
            }

            let mv = moves.iter().copied().find(|m| !is_dangerous(board, m))?;
            return Some(Decision {
                mv,
                phase: Phase::Safe,
            });
        }

        let total_score = board.score(Side::First) + board.score(Side::Second);
        let endgame = total_score > board.rows() * board.cols() / 10;

        if endgame && first_capture.is_some() && own_chain(board, my_side) == DOUBLE_CROSS_CHAIN {
            let second_capture = moves
                .iter()
                .filter(|m| board.is_capturing_move(m))
                .find_map(|m| {
                    let mut test = board.clone();
                    test.make_move(m, my_side);
                    test.first_capturing_move()
                });

            if let Some(mv) = second_capture {
                return Some(Decision {
                    mv,
                    phase: Phase::DoubleCross,
                });
            }
        }

        if let Some(mv) = first_capture {
            return Some(Decision {
                mv,
                phase: Phase::Capture,
            });
        }

        let mut best_move = *moves.first()?;
        let mut min_captures = usize::MAX;

        for mv in &moves {
            let captures = simulate_opponent_captures(board, mv, my_side, opponent_side);
            if captures < min_captures {
                min_captures = captures;
                best_move = *mv;
            }
            if captures < SACRIFICE_CUTOFF {
                break;
            }
        }

        Some(Decision {
            mv: best_move,
            phase: Phase::Sacrifice {
                opponent_captures: min_captures,
            },
        })
    }
}

fn own_chain(board: &Board, side: Side) -> usize {
    greedy_capture_chain(&mut board.clone(), side)
}

impl Agent for CrossAgent {
    fn make_move(&mut self, controller: &mut dyn Controller) -> (bool, Move) {
        let my_side = controller.my_side();
        let opponent_side = controller.opponent_side();

        let Some(decision) = self.select(controller.current_board(), my_side, opponent_side) else {
            return (false, Move::SENTINEL);
        };

        match decision.phase {
            Phase::Capture => debug!("Scoring move: {}", decision.mv),
            Phase::Safe => debug!("Safe move: {}", decision.mv),
            Phase::DoubleCross => debug!("Double-cross move: {}", decision.mv),
            Phase::Sacrifice { opponent_captures } => debug!(
                "Sacrifice move: {} (opponent captures: {opponent_captures})",
                decision.mv
            ),
        }

        (controller.make_move(&decision.mv), decision.mv)
    }
}
