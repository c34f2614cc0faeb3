#[cfg(test)]
mod session {
    use boxes_ai_core::{
        controller::{Controller, Session},
        game::{Board, GameOutcome, Move, Side},
        Agent,
    };

    /// Always plays the first legal move
    struct FirstLegal;

    impl Agent for FirstLegal {
        fn make_move(&mut self, controller: &mut dyn Controller) -> (bool, Move) {
            match controller.current_board().valid_moves().first() {
                Some(&m) => (controller.make_move(&m), m),
                None => (false, Move::SENTINEL),
            }
        }
    }

    /// Keeps drawing the same edge
    struct Stubborn(Move);

    impl Agent for Stubborn {
        fn make_move(&mut self, controller: &mut dyn Controller) -> (bool, Move) {
            (controller.make_move(&self.0), self.0)
        }
    }

    struct Idle;

    impl Agent for Idle {
        fn make_move(&mut self, _: &mut dyn Controller) -> (bool, Move) {
            (false, Move::SENTINEL)
        }
    }

    #[test]
    fn turn_passes_without_capture() {
        let mut session = Session::new(Board::new(2, 2));
        assert_eq!(session.my_side(), Side::First);
        assert_eq!(session.opponent_side(), Side::Second);

        assert!(!session.make_move(&Move::horizontal(0, 0)));
        assert_eq!(session.my_side(), Side::Second);
        assert_eq!(session.opponent_side(), Side::First);
    }

    #[test]
    fn capture_keeps_the_turn() {
        let mut session = Session::from_notation("2x1: h0,0 v0,0 v0,1").unwrap();
        assert_eq!(session.side_to_move(), Side::Second);

        assert!(session.make_move(&Move::horizontal(1, 0)));
        assert_eq!(session.side_to_move(), Side::Second);
        assert_eq!(session.board().score(Side::Second), 1);
    }

    #[test]
    fn last_capture_ends_the_game() {
        let mut session = Session::from_notation("1x1: h0,0 v0,0 h1,0").unwrap();
        assert!(!session.make_move(&Move::vertical(0, 1)));
        assert!(session.board().is_completed());
    }

    #[test]
    fn illegal_move_is_refused() {
        let mut session = Session::new(Board::new(1, 1));
        assert!(!session.make_move(&Move::horizontal(5, 5)));
        assert!(session.board().history().is_empty());
        assert_eq!(session.side_to_move(), Side::First);
    }

    #[test]
    fn play_turn_collects_a_capture_chain() {
        let mut session = Session::from_notation("1x3: h0,0 h1,0 v0,0 h0,1 h1,1 h0,2 h1,2 v0,3").unwrap();
        let side = session.side_to_move();

        let moves = FirstLegal.play_turn(&mut session);

        assert_eq!(moves, vec![Move::vertical(0, 1), Move::vertical(0, 2)]);
        assert_eq!(session.board().score(side), 3);
        assert!(session.board().is_completed());
    }

    #[test]
    fn full_game() {
        let mut session = Session::new(Board::new(1, 1));
        let record = session.play(&mut FirstLegal, &mut FirstLegal).unwrap();

        assert_eq!(record.outcome, GameOutcome::Win(Side::Second));
        assert_eq!(record.score(Side::First), 0);
        assert_eq!(record.score(Side::Second), 1);
        assert_eq!(
            record.moves,
            vec![
                (Move::horizontal(0, 0), Side::First),
                (Move::horizontal(1, 0), Side::Second),
                (Move::vertical(0, 0), Side::First),
                (Move::vertical(0, 1), Side::Second),
            ]
        );
    }

    #[test]
    fn illegal_agent_loses_the_game() {
        let mut session = Session::new(Board::new(2, 2));
        let err = session
            .play(&mut Stubborn(Move::horizontal(0, 0)), &mut Stubborn(Move::horizontal(0, 0)))
            .unwrap_err();

        assert!(err.to_string().contains("Second played illegal move h0,0"));
    }

    #[test]
    fn idle_agent_is_reported() {
        let mut session = Session::new(Board::new(2, 2));
        let err = session.play(&mut FirstLegal, &mut Idle).unwrap_err();

        assert!(err.to_string().contains("Second did not play a move"));
    }
}
