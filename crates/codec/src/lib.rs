pub mod action;
pub mod constants;
pub mod error;
pub mod r#move;
pub mod space;
pub mod square;

#[cfg(test)]
mod tests {
    use super::action::{decode, decode_strict, encode};
    use super::constants::Promotion;
    use super::error::MoveError;
    use super::r#move::Move;
    use super::square::Square;

    #[test]
    fn test_action_zero_is_a1_north_one() {
        let mv = decode(0).unwrap();
        assert_eq!(mv.from, Square::new(0, 0));
        assert_eq!(mv.to, Square::new(0, 1));
        assert_eq!(mv.promotion, None);
        assert_eq!(encode(mv).unwrap(), 0);
    }

    #[test]
    fn test_queen_promotion_roundtrip() {
        let mv = Move::from_uci("a1a2Q").unwrap();
        let action = encode(mv).unwrap();
        assert_eq!(action, 65);
        let back = decode(action).unwrap();
        assert_eq!(back, mv);
        assert_eq!(back.promotion, Some(Promotion::Queen));
    }

    #[test]
    fn test_knight_move() {
        let mv = Move::from_uci("b1c3").unwrap();
        // dx = 1, dy = 2 is the first knight offset.
        let action = encode(mv).unwrap();
        assert_eq!(action, 8 * 73 + 56);
        assert_eq!(decode(action).unwrap().to_uci(), "b1c3");
    }

    #[test]
    fn test_horizontal_slide() {
        let mv = Move::from_uci("d1h1").unwrap();
        // East is direction 2, four steps.
        let action = encode(mv).unwrap();
        assert_eq!(action, 24 * 73 + 2 * 7 + 3);
        assert_eq!(decode(action).unwrap().to_uci(), "d1h1");
    }

    #[test]
    fn test_long_diagonal_slide() {
        let mv = Move::from_uci("a1h8").unwrap();
        let action = encode(mv).unwrap();
        assert_eq!(decode(action).unwrap().to_uci(), "a1h8");
    }

    #[test]
    fn test_square_notation() {
        let sq = Square::from_algebraic("e4").unwrap();
        assert_eq!((sq.file, sq.rank), (4, 3));
        assert_eq!(sq.to_algebraic(), "e4");
        assert!(Square::from_algebraic("i4").is_err());
        assert!(Square::from_algebraic("e9").is_err());
        assert!(Square::from_algebraic("e44").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Move::from_uci(""),
            Err(MoveError::MalformedNotation(_))
        ));
        assert!(matches!(
            Move::from_uci("z9z9"),
            Err(MoveError::MalformedNotation(_))
        ));
        // Promotion letters are case-sensitive.
        assert!(matches!(
            Move::from_uci("e7e8q"),
            Err(MoveError::MalformedNotation(_))
        ));
    }

    #[test]
    fn test_decode_out_of_range() {
        assert_eq!(decode(4672), Err(MoveError::OutOfRange(4672)));
        assert_eq!(decode(u16::MAX), Err(MoveError::OutOfRange(u16::MAX)));
    }

    #[test]
    fn test_rook_promotion_has_no_slot() {
        let mv = Move::from_uci("e7e8R").unwrap();
        assert!(matches!(encode(mv), Err(MoveError::InvalidMove(_))));
    }

    #[test]
    fn test_non_straight_delta_rejected() {
        let mv = Move::new(Square::new(0, 0), Square::new(2, 3));
        assert!(matches!(encode(mv), Err(MoveError::InvalidMove(_))));
    }

    #[test]
    fn test_null_move_rejected() {
        let sq = Square::new(3, 3);
        assert!(matches!(
            encode(Move::new(sq, sq)),
            Err(MoveError::InvalidMove(_))
        ));
    }

    #[test]
    fn test_strict_decode_flags_edge_runoff() {
        // h1 sliding East for one step leaves the board.
        let mv = Move::from_uci("g1h1").unwrap();
        let action = encode(mv).unwrap() + 1; // one more step East
        assert!(matches!(
            decode_strict(action),
            Err(MoveError::OutOfBoard { .. })
        ));
        assert!(!decode(action).unwrap().to.is_on_board());
    }
}
