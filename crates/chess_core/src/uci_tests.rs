use super::*;

#[test]
fn test_round_trip_every_startpos_move() {
    let pos = Position::startpos();
    for mv in pos.legal_moves() {
        let token = move_to_uci(&pos, mv);
        assert_eq!(token.len(), 4);
        assert_eq!(parse_uci_move(&pos, &token).unwrap(), mv);
    }
}

#[test]
fn test_castling_uses_king_step_notation() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let short = parse_uci_move(&pos, "e8g8").unwrap();
    assert_eq!(short.to, Square::H8);
    assert_eq!(move_to_uci(&pos, short), "e8g8");
}

#[test]
fn test_promotion_suffix() {
    let pos = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "a7a8n").unwrap();
    assert_eq!(mv.promotion, Some(PieceKind::Knight));
    assert_eq!(move_to_uci(&pos, mv), "a7a8n");
    // A bare pawn step to the last rank is not a legal move
    assert!(parse_uci_move(&pos, "a7a8").is_err());
}

#[test]
fn test_malformed_and_illegal_tokens() {
    let pos = Position::startpos();
    assert!(matches!(parse_uci_move(&pos, "e2"), Err(RulesError::MalformedMove(_))));
    assert!(matches!(parse_uci_move(&pos, "z9e4"), Err(RulesError::MalformedMove(_))));
    assert!(matches!(parse_uci_move(&pos, "e2e5"), Err(RulesError::IllegalMove { .. })));
}

#[test]
fn test_set_position_startpos_with_moves() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.fullmove_number(), 2);
    assert_eq!(pos.ply_count(), 3);
}

#[test]
fn test_set_position_from_fen() {
    let mut pos = Position::startpos();
    let fen = "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1";
    let args: Vec<&str> = std::iter::once("fen")
        .chain(fen.split_whitespace())
        .chain(["moves", "e1e2"])
        .collect();
    set_position_from_uci(&mut pos, &args).unwrap();
    assert_eq!(pos.piece_at(Square::E2).map(|p| p.kind), Some(PieceKind::Rook));
}

#[test]
fn test_set_position_stops_at_bad_move() {
    let mut pos = Position::startpos();
    let err = set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e2e4", "d7d5"]);
    assert!(err.is_err());
    // First move applied, the rest skipped
    assert_eq!(pos.ply_count(), 1);
    assert_eq!(pos.side_to_move(), Color::Black);
}

#[test]
fn test_set_position_bad_fen_keeps_position() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4"]).unwrap();
    let before = pos.clone();
    assert!(set_position_from_uci(&mut pos, &["fen", "garbage"]).is_err());
    assert_eq!(pos, before);
}
