use boxes_ai_core::{controller::Controller, game::Move, Agent};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

pub struct RandomAgent<R = StdRng> {
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn make_move(&mut self, controller: &mut dyn Controller) -> (bool, Move) {
        let moves = controller.current_board().valid_moves();
        match moves.choose(&mut self.rng) {
            Some(&m) => (controller.make_move(&m), m),
            None => (false, Move::SENTINEL),
        }
    }
}
