use chess_rules::{
    Board, Move, Outcome, PlayError, Position, PositionErrorKinds, Role, Side, Square,
};

fn position(dump: &str, turn: Side) -> Position {
    let board = Board::from_ascii(dump, Side::First).expect("valid dump");
    Position::from_board(board, turn, Side::First)
}

fn sorted(mut moves: Vec<Move>) -> Vec<Move> {
    moves.sort();
    moves
}

#[test]
fn test_initial_position() {
    let pos = Position::new(Side::First);
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 20);

    let pawn_moves = moves
        .iter()
        .filter(|m| pos.board().piece_at(m.start).map(|p| p.role()) == Some(Role::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
    assert!(!pos.is_finished());
}

#[test]
fn test_castling_both_ways() {
    let pos = position(
        "
            K2






R1          K1       R1
",
        Side::First,
    );

    let moves = pos.legal_moves_for(Square::E1);
    assert!(moves.contains(&Move::from_squares(Square::E1, Square::C1)));
    assert!(moves.contains(&Move::from_squares(Square::E1, Square::G1)));
}

#[test]
fn test_castling_through_attacked_square() {
    let pos = position(
        "
         R2 K2






R1          K1       R1
",
        Side::First,
    );

    let queen_side = Move::from_squares(Square::E1, Square::C1);
    assert_eq!(
        pos.make_move(queen_side, None),
        Err(PlayError::InvalidMove { m: queen_side })
    );
    assert!(!pos.legal_moves_for(Square::E1).contains(&queen_side));

    let after = pos
        .make_move(Move::from_squares(Square::E1, Square::G1), None)
        .expect("king side castling");
    assert_eq!(
        after.board().piece_at(Square::F1).map(|p| p.role()),
        Some(Role::Rook)
    );
}

#[test]
fn test_promotion_to_queen() {
    let pos = position(
        "
K2
         P1





K1
",
        Side::First,
    );

    let m = Move::from_squares(Square::D7, Square::D8);
    assert!(pos.is_promotion(m));

    let after = pos.make_move(m, Some(Role::Queen)).expect("promotion");
    let queen = after.board().piece_at(Square::D8).expect("queen on d8");
    assert_eq!(queen.role(), Role::Queen);
    assert_eq!(queen.side, Side::First);
    assert_eq!(after.board().count(Role::Pawn).first, 0);
    assert!(after.board().piece_at(Square::D7).is_none());
}

#[test]
fn test_back_rank_mate() {
    let pos = position(
        "
R1          K2

            K1





",
        Side::Second,
    );

    assert!(pos.is_check());
    assert!(pos.is_finished());
    assert_eq!(pos.winner(), Some(Side::First));
    assert_eq!(
        pos.outcome().map(|o| o.to_string()).as_deref(),
        Some("first side wins")
    );
}

#[test]
fn test_stalemate() {
    let pos = position(
        "





            K2
            P2
            K1
",
        Side::First,
    );

    assert!(!pos.is_check());
    assert!(pos.is_finished());
    assert_eq!(pos.winner(), None);
    assert_eq!(pos.outcome(), Some(Outcome::Draw));

    let m = Move::from_squares(Square::E1, Square::F1);
    assert_eq!(pos.make_move(m, None), Err(PlayError::InvalidMove { m }));
}

#[test]
fn test_legal_moves_never_leave_king_attacked() {
    for pos in [
        Position::default(),
        position(include_str!("positions/kiwipete.txt"), Side::First),
        position(include_str!("positions/position3.txt"), Side::First),
    ] {
        for m in pos.legal_moves() {
            let child = pos.make_move(m, Some(Role::Queen)).expect("legal move");
            for reply in child.legal_moves() {
                let grandchild = child.make_move(reply, Some(Role::Queen)).expect("legal reply");
                let kinds = grandchild
                    .validate()
                    .err()
                    .map_or(PositionErrorKinds::empty(), |err| err.kinds());
                assert!(
                    !kinds.contains(PositionErrorKinds::OPPOSITE_CHECK),
                    "{m} then {reply}"
                );
            }
        }
    }
}

#[test]
fn test_symmetry_of_white_side() {
    let first = Position::new(Side::First);
    let second = Position::new(Side::Second);
    assert_eq!(
        sorted(first.legal_moves().to_vec()),
        sorted(second.legal_moves().to_vec())
    );
}

#[test]
fn test_queries_are_idempotent() {
    let pos = Position::default();
    let snapshot = pos.clone();
    assert_eq!(pos.legal_moves(), pos.legal_moves());

    for m in pos.legal_moves() {
        pos.make_move(m, None).expect("legal move");
    }
    assert_eq!(pos, snapshot);
    assert_eq!(pos.board().to_string(), Board::default().to_string());
}

#[test]
fn test_en_passant_flag_round_trip() {
    let pos = Position::default()
        .make_move(Move::from_squares(Square::D2, Square::D4), None)
        .expect("double step");
    let pawn = pos.board().piece_at(Square::D4).expect("pawn on d4");
    assert!(pawn.kind.is_en_passant_target());

    let pos = pos
        .make_move(Move::from_squares(Square::G8, Square::F6), None)
        .expect("knight move");
    let pawn = pos.board().piece_at(Square::D4).expect("pawn on d4");
    assert!(!pawn.kind.is_en_passant_target());
}

#[test]
fn test_en_passant_needs_flag() {
    // The pawn on d5 did not just double step.
    let pos = position(
        "
K2


         P2 P1



K1
",
        Side::First,
    );
    let m = Move::from_squares(Square::E5, Square::D6);
    assert_eq!(pos.make_move(m, None), Err(PlayError::InvalidMove { m }));
}
