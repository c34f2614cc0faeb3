#[cfg(test)]
mod notation {
    use boxes_ai_core::{
        controller::Session,
        game::{Board, Move, Side},
        notation,
    };

    #[test]
    fn empty_board() {
        let board = Board::from_notation("3x2").unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 2);
        assert_eq!(board.valid_moves().len(), 4 * 2 + 3 * 3);
        assert_eq!(board.to_notation(), "3x2");
    }

    #[test]
    fn round_trip() {
        let position = "2x2: h0,0 v0,0 h1,0 v0,1 h2,1";
        let board = Board::from_notation(position).unwrap();
        assert_eq!(board.to_notation(), position);
        assert_eq!(Board::from_notation(&board.to_notation()).unwrap(), board);
    }

    #[test]
    fn whitespace_is_tolerated() {
        let board = Board::from_notation("  2x2 :  h0,0   v1,2 ").unwrap();
        assert_eq!(board.to_notation(), "2x2: h0,0 v1,2");
    }

    #[test]
    fn capture_keeps_the_side_to_move() {
        // First, Second, First, then Second completes the box and keeps moving
        let (board, side) = notation::parse_position("2x1: h0,0 v0,0 v0,1 h1,0").unwrap();
        assert_eq!(board.score(Side::Second), 1);
        assert_eq!(side, Side::Second);

        let session = Session::from_notation("2x1: h0,0 v0,0").unwrap();
        assert_eq!(session.side_to_move(), Side::First);
    }

    #[test]
    fn moves() {
        assert_eq!("h3,1".parse::<Move>().unwrap(), Move::horizontal(3, 1));
        assert_eq!("v0,12".parse::<Move>().unwrap(), Move::vertical(0, 12));
        assert_eq!(Move::vertical(4, 2).to_string(), "v4,2");
    }

    #[test]
    fn rejects_garbage() {
        assert!("x1,1".parse::<Move>().is_err());
        assert!("h1".parse::<Move>().is_err());
        assert!("h1,1 v0,0".parse::<Move>().is_err());
        assert!(Board::from_notation("3by3").is_err());
        assert!(Board::from_notation("0x3").is_err());
        assert!(Board::from_notation("2x2: h0,0 q1,1").is_err());
        assert!(Board::from_notation("18446744073709551615x1").is_err());
        assert!(Board::from_notation("1x18446744073709551615").is_err());
        assert!(Board::from_notation("100000000x100000000").is_err());
    }

    #[test]
    fn board_size_limits() {
        assert!(Board::try_new(Board::MAX_SIZE, Board::MAX_SIZE).is_ok());
        assert!(Board::try_new(Board::MAX_SIZE + 1, 1).is_err());
        assert!(Board::try_new(1, 0).is_err());

        let err = Board::from_notation("65x2").unwrap_err();
        assert!(err.to_string().contains("Invalid board size: 65x2"));
    }

    #[test]
    fn rejects_impossible_moves() {
        assert!(Board::from_notation("2x2: h3,0").is_err());
        assert!(Board::from_notation("2x2: v0,3").is_err());
        assert!(Board::from_notation("2x2: h0,0 h0,0").is_err());
    }
}
