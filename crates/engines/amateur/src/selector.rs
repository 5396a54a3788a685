//! Root move selection.
//!
//! Each root move is searched one ply shallower than the chosen depth, then
//! its score is adjusted against the mover: a penalty when the moved piece
//! lands en prise, a smaller one for moving the same piece again, and a bit
//! of uniform noise. The best adjusted score wins; exact ties are broken
//! uniformly at random.

use chess_core::{color_sign, Color, Move, Position, SearchBudget, SearchLimits, Square};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::config::EngineConfig;
use crate::history::MoveHistory;
use crate::search::Searcher;

/// Outcome of one [`choose_move`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub mv: Option<Move>,
    /// Square the moved piece ends up on (the king's square for castling)
    pub landing: Option<Square>,
    /// Adjusted score of the chosen move, White's point of view
    pub score: f64,
    /// Root depth; 0 when the move was picked without searching
    pub depth: u8,
    pub nodes: u64,
    pub stopped: bool,
}

impl Selection {
    fn none() -> Self {
        Self {
            mv: None,
            landing: None,
            score: 0.0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }

    fn unsearched(pos: &Position, mv: Option<Move>) -> Self {
        Self {
            mv,
            landing: mv.map(|mv| pos.landing_square(mv)),
            ..Self::none()
        }
    }
}

/// Pick a move for the side to move in `pos`.
///
/// `pos` is explored in place and restored before returning. `None` is only
/// returned when there are no legal moves.
pub fn choose_move<R: Rng + ?Sized>(
    pos: &mut Position,
    limits: &SearchLimits,
    budget: &SearchBudget,
    config: &EngineConfig,
    history: &MoveHistory,
    rng: &mut R,
) -> Selection {
    let legal = pos.legal_moves();
    if legal.is_empty() {
        return Selection::none();
    }

    if config.time.is_panic(limits.remaining) {
        trace!(remaining = ?limits.remaining, "panic move");
        return Selection::unsearched(pos, legal.choose(rng).copied());
    }
    if config.random_first_move && pos.fullmove_number() == 1 {
        return Selection::unsearched(pos, legal.choose(rng).copied());
    }

    let depth = pick_depth(limits, config, rng);
    let profile = config.profile();
    let mut searcher = Searcher::new(&config.eval, profile, budget);

    let mover = pos.side_to_move();
    let sign = color_sign(mover);
    let mut best_score = match mover {
        Color::White => f64::NEG_INFINITY,
        Color::Black => f64::INFINITY,
    };
    let mut best_moves: Vec<(Move, Square)> = Vec::new();

    for mv in searcher.candidate_moves(pos) {
        if searcher.budget().is_expired() {
            searcher.stopped = true;
            break;
        }

        let landing = pos.landing_square(mv);
        let (raw, hanging) = {
            let mut child = pos.play(mv);
            let raw = searcher.minimax(&mut child, depth - 1);
            let hanging = match child.piece_at(landing) {
                Some(piece) if child.is_attacked(landing, !mover) => {
                    profile.hanging_multiplier * config.eval.piece_values.value(piece.kind)
                }
                _ => 0.0,
            };
            (raw, hanging)
        };

        let mut penalty = hanging;
        if history.contains(mv.from) {
            penalty += profile.repetition_penalty;
        }
        let noise = if profile.noise > 0.0 {
            rng.gen_range(-profile.noise..=profile.noise)
        } else {
            0.0
        };
        let score = raw - sign * penalty + noise;

        let better = match mover {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if better {
            best_score = score;
            best_moves.clear();
            best_moves.push((mv, landing));
        } else if score == best_score {
            best_moves.push((mv, landing));
        }

        if searcher.stopped {
            break;
        }
    }

    let nodes = searcher.nodes;
    let stopped = searcher.stopped;
    match best_moves.choose(rng).copied() {
        Some((mv, landing)) => Selection {
            mv: Some(mv),
            landing: Some(landing),
            score: best_score,
            depth,
            nodes,
            stopped,
        },
        None => Selection {
            depth,
            nodes,
            stopped,
            ..Selection::unsearched(pos, legal.choose(rng).copied())
        },
    }
}

/// Root depth for this move, never below one.
pub fn pick_depth<R: Rng + ?Sized>(limits: &SearchLimits, config: &EngineConfig, rng: &mut R) -> u8 {
    if let Some(depth) = limits.depth.or(config.fixed_depth) {
        return depth.max(1);
    }

    let remaining_ms = u64::try_from(limits.remaining.as_millis()).unwrap_or(u64::MAX);
    let base = config
        .depth_steps
        .iter()
        .find(|step| step.covers(remaining_ms))
        .or(config.depth_steps.last())
        .and_then(|step| step.depths.choose(rng).copied())
        .unwrap_or(1);

    let adjusted = i16::from(base) + i16::from(config.profile().depth_offset);
    adjusted.clamp(1, i16::from(u8::MAX)) as u8
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
