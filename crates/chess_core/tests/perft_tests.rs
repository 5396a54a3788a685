//! Perft counts through the position facade.
//!
//! Any imbalance in push/pop would corrupt the position and show up as a
//! wrong node count, so these double as make/unmake integrity checks.

use chess_core::{perft, Position};

const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902)],
    ),
    (
        // Kiwipete: castling, en passant, promotions and pins
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812)],
    ),
];

#[test]
fn perft_known_counts() {
    for (fen, depths) in CASES {
        for &(depth, expected) in depths.iter() {
            let mut pos = Position::from_fen(fen).unwrap();
            let got = perft(&mut pos, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for FEN '{}' at depth {}",
                fen, depth
            );
        }
    }
}

#[test]
fn perft_leaves_position_untouched() {
    let mut pos = Position::from_fen(CASES[1].0).unwrap();
    let before = pos.clone();
    perft(&mut pos, 3);
    assert_eq!(pos, before);
    assert_eq!(pos.ply_count(), 0);
}
