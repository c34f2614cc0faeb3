use controller::Controller;
use game::Move;

pub mod chains;
pub mod controller;
pub mod danger;
pub mod game;
pub mod notation;
pub mod renderer;

pub trait Agent {
    /// Plays one move through the controller.
    ///
    /// Returns whether the same side has to move again, along with the move played.
    /// With nothing left to play this is `(false, Move::SENTINEL)`.
    fn make_move(&mut self, controller: &mut dyn Controller) -> (bool, Move);

    /// Keeps moving until the turn passes or the board is full.
    fn play_turn(&mut self, controller: &mut dyn Controller) -> Vec<Move> {
        let mut moves = vec![];

        while !controller.current_board().is_completed() {
            let (continues, m) = self.make_move(controller);
            moves.push(m);

            if !continues {
                break;
            }
        }

        moves
    }
}
