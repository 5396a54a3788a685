//! Static evaluation in pawns from White's point of view.
//!
//! Beyond material the terms are chosen to make the engine play like a club
//! amateur: grab the centre, don't bring the queen out early, castle, and
//! don't leave pieces hanging. Evaluation is deterministic; all randomness
//! lives in the move selector.

use chess_core::{
    back_rank, castled_king_squares, color_sign, Color, PieceKind, Position, CENTER_SQUARES,
    MATE_SCORE,
};

use crate::config::{EvalWeights, ProfileTuning};

const SCORED_KINDS: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Evaluates the position from White's perspective.
///
/// Returns `+MATE_SCORE` when Black is checkmated, `-MATE_SCORE` when White
/// is, and exactly `0.0` for stalemate and every other drawn position
/// (fifty-move rule, insufficient material, threefold repetition).
pub fn evaluate(pos: &Position, weights: &EvalWeights, profile: &ProfileTuning) -> f64 {
    if !pos.has_legal_moves() {
        if !pos.in_check() {
            return 0.0;
        }
        return match pos.side_to_move() {
            Color::White => -MATE_SCORE,
            Color::Black => MATE_SCORE,
        };
    }
    if pos.is_fifty_move_draw() || pos.is_insufficient_material() || pos.is_threefold_repetition() {
        return 0.0;
    }

    let mut score = material(pos, weights) + center_control(pos, weights);
    if in_opening(pos, weights) {
        score += opening_conduct(pos, weights);
    }
    score + hanging_pieces(pos, profile.hanging_eval_penalty)
}

/// Whether the opening-phase terms and filters are active.
pub fn in_opening(pos: &Position, weights: &EvalWeights) -> bool {
    pos.fullmove_number() < weights.opening_moves
}

pub fn material(pos: &Position, weights: &EvalWeights) -> f64 {
    SCORED_KINDS
        .iter()
        .map(|&kind| {
            let white = f64::from(pos.count(Color::White, kind));
            let black = f64::from(pos.count(Color::Black, kind));
            weights.piece_values.value(kind) * (white - black)
        })
        .sum()
}

fn center_control(pos: &Position, weights: &EvalWeights) -> f64 {
    CENTER_SQUARES
        .iter()
        .filter_map(|&sq| pos.piece_at(sq))
        .map(|piece| color_sign(piece.color) * weights.center_bonus)
        .sum()
}

fn opening_conduct(pos: &Position, weights: &EvalWeights) -> f64 {
    let mut score = 0.0;
    for color in [Color::White, Color::Black] {
        let home = back_rank(color);
        let developed_queens = pos
            .pieces(color, PieceKind::Queen)
            .into_iter()
            .filter(|sq| sq.rank() != home)
            .count();
        let mut penalty = developed_queens as f64 * weights.early_queen_penalty;

        if !castled_king_squares(color).contains(&pos.king_square(color)) {
            penalty += weights.uncastled_king_penalty;
        }
        score -= color_sign(color) * penalty;
    }
    score
}

/// Penalise the side to move for each of its pieces the opponent attacks.
fn hanging_pieces(pos: &Position, penalty: f64) -> f64 {
    if penalty == 0.0 {
        return 0.0;
    }
    let us = pos.side_to_move();
    let attacked = pos
        .board()
        .colors(us)
        .into_iter()
        .filter(|&sq| pos.piece_at(sq).is_some_and(|p| p.kind != PieceKind::King))
        .filter(|&sq| pos.is_attacked(sq, !us))
        .count();
    -color_sign(us) * penalty * attacked as f64
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
