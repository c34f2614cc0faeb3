pub use boxes_ai_core::chains::simulate_opponent_captures;
use boxes_ai_core::{
    controller::Controller,
    danger::is_dangerous,
    game::{Board, Move, Side},
    Agent,
};
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    /// Random picks tried while looking for a move that gives nothing away
    pub safe_move_attempts: usize,
}

impl ChainConfig {
    pub const DEFAULT_SAFE_MOVE_ATTEMPTS: usize = 120;
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            safe_move_attempts: Self::DEFAULT_SAFE_MOVE_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Capture,
    Safe,
    Sacrifice { opponent_captures: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    pub tier: Tier,
}

/// Takes free boxes, then avoids handing out boxes, then gives away the
/// shortest chain it can find.
pub struct ChainAgent<R = StdRng> {
    config: ChainConfig,
    rng: R,
}

impl ChainAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_config(ChainConfig::default())
    }

    pub fn with_config(config: ChainConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl Default for ChainAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ChainAgent<R> {
    pub fn with_rng(config: ChainConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Picks a move without playing it. `None` if the board is full.
    pub fn select(&mut self, board: &Board, my_side: Side, opponent_side: Side) -> Option<Decision> {
        let moves = board.valid_moves();
        if moves.is_empty() {
            return None;
        }

        if let Some(&mv) = moves.iter().find(|m| board.is_capturing_move(m)) {
            return Some(Decision {
                mv,
                tier: Tier::Capture,
            });
        }

        // Picks are independent, so a safe move can be missed when few exist
        for _ in 0..self.config.safe_move_attempts {
            let mv = moves[self.rng.gen_range(0..moves.len())];
            if !is_dangerous(board, &mv) {
                return Some(Decision {
                    mv,
                    tier: Tier::Safe,
                });
            }
        }
        trace!(
            "No safe move in {} attempts over {} moves",
            self.config.safe_move_attempts,
            moves.len()
        );

        let mut best_move = moves[0];
        let mut min_captures = usize::MAX;

        for mv in &moves {
            let captures = simulate_opponent_captures(board, mv, my_side, opponent_side);
            if captures < min_captures {
                min_captures = captures;
                best_move = *mv;
            }
        }

        Some(Decision {
            mv: best_move,
            tier: Tier::Sacrifice {
                opponent_captures: min_captures,
            },
        })
    }

    pub fn choose_move(&mut self, controller: &mut dyn Controller) -> (bool, Move) {
        let my_side = controller.my_side();
        let opponent_side = controller.opponent_side();

        let Some(decision) = self.select(controller.current_board(), my_side, opponent_side) else {
            return (false, Move::SENTINEL);
        };

        match decision.tier {
            Tier::Capture => debug!("Scoring move: {}", decision.mv),
            Tier::Safe => debug!("Safe move: {}", decision.mv),
            Tier::Sacrifice { opponent_captures } => debug!(
                "Sacrifice minimizing move: {} (opponent captures: {opponent_captures})",
                decision.mv
            ),
        }

        (controller.make_move(&decision.mv), decision.mv)
    }
}

impl<R: Rng> Agent for ChainAgent<R> {
    fn make_move(&mut self, controller: &mut dyn Controller) -> (bool, Move) {
        self.choose_move(controller)
    }
}
