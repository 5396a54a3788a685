//! Fixed-depth minimax without pruning.
//!
//! Every legal move is explored at every node under the depth limit. The
//! only way out early is the budget's hard cutoff, polled at node entry:
//! past it a node returns its static evaluation, so the search degrades to
//! shallower information instead of overrunning the clock.

use chess_core::{Color, Move, PieceKind, Position, SearchBudget};

use crate::config::{EvalWeights, ProfileTuning};
use crate::eval::{evaluate, in_opening};

pub struct Searcher<'a> {
    weights: &'a EvalWeights,
    profile: &'a ProfileTuning,
    budget: &'a SearchBudget,
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Set once any node has hit the hard cutoff
    pub stopped: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(weights: &'a EvalWeights, profile: &'a ProfileTuning, budget: &'a SearchBudget) -> Self {
        Self {
            weights,
            profile,
            budget,
            nodes: 0,
            stopped: false,
        }
    }

    pub fn evaluate(&self, pos: &Position) -> f64 {
        evaluate(pos, self.weights, self.profile)
    }

    pub fn budget(&self) -> &SearchBudget {
        self.budget
    }

    /// Legal moves worth exploring here.
    ///
    /// In the opening, plain king moves are dropped when the profile asks
    /// for it; castling stays. If that would leave nothing, every legal
    /// move is kept.
    pub fn candidate_moves(&self, pos: &Position) -> Vec<Move> {
        let mut moves = pos.legal_moves();
        if self.profile.avoid_king_moves && in_opening(pos, self.weights) {
            let non_king: Vec<Move> = moves
                .iter()
                .copied()
                .filter(|&mv| {
                    pos.is_castle(mv) || pos.board().piece_on(mv.from) != Some(PieceKind::King)
                })
                .collect();
            if !non_king.is_empty() {
                moves = non_king;
            }
        }
        moves
    }

    /// Minimax value of `pos` searched `depth` plies deep, from White's
    /// point of view. `pos` is restored before returning.
    pub fn minimax(&mut self, pos: &mut Position, depth: u8) -> f64 {
        self.nodes += 1;

        if self.budget.is_expired() {
            self.stopped = true;
            return self.evaluate(pos);
        }
        if depth == 0 || pos.is_game_over() {
            return self.evaluate(pos);
        }

        let moves = self.candidate_moves(pos);
        if moves.is_empty() {
            return self.evaluate(pos);
        }

        let maximizing = pos.side_to_move() == Color::White;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            let score = {
                let mut child = pos.play(mv);
                self.minimax(&mut child, depth - 1)
            };
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
            if self.stopped {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
