//! Attacker queries on top of the `cozy-chess` attack tables.

use cozy_chess::{get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves};

use crate::types::{BitBoard, Board, Color, PieceKind, Square};

/// Every piece of colour `by` that attacks `target`.
///
/// Pins are ignored: a pinned piece still counts as an attacker, which is
/// what "is this square defended/hanging" heuristics want.
pub fn attackers_of(board: &Board, target: Square, by: Color) -> BitBoard {
    let occupied = board.occupied();
    let queens = board.pieces(PieceKind::Queen);

    // A pawn of `by` attacks `target` iff a pawn of the other colour standing
    // on `target` would attack the pawn's square.
    let pawns = get_pawn_attacks(target, !by) & board.pieces(PieceKind::Pawn);
    let knights = get_knight_moves(target) & board.pieces(PieceKind::Knight);
    let kings = get_king_moves(target) & board.pieces(PieceKind::King);
    let diagonal = get_bishop_moves(target, occupied) & (board.pieces(PieceKind::Bishop) | queens);
    let orthogonal = get_rook_moves(target, occupied) & (board.pieces(PieceKind::Rook) | queens);

    (pawns | knights | kings | diagonal | orthogonal) & board.colors(by)
}

#[inline]
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    !attackers_of(board, target, by).is_empty()
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
