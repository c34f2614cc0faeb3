use boxes_ai_core::{controller::Controller, danger::is_dangerous, game::Move, Agent};
use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Plays the first capture, else the first move that gives nothing away,
/// else anything.
pub struct FirstAgent<R = StdRng> {
    rng: R,
}

impl FirstAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for FirstAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FirstAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Agent for FirstAgent<R> {
    fn make_move(&mut self, controller: &mut dyn Controller) -> (bool, Move) {
        let board = controller.current_board();
        let moves = board.valid_moves();

        let m = if let Some(&m) = moves.iter().find(|m| board.is_capturing_move(m)) {
            debug!("Scoring move: {m}");
            m
        } else if let Some(&m) = moves.iter().find(|m| !is_dangerous(board, m)) {
            debug!("Safe move: {m}");
            m
        } else if let Some(&m) = moves.choose(&mut self.rng) {
            debug!("No safe move left, playing {m}");
            m
        } else {
            return (false, Move::SENTINEL);
        };

        (controller.make_move(&m), m)
    }
}
