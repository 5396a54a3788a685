//! UCI move tokens and `position` command replay.

use tracing::warn;

use crate::{board::Position, error::RulesError, types::*};

/// Token sent for "no move" when the game is already over.
pub const NULL_MOVE: &str = "0000";

/// Standard UCI coordinate notation for a move legal in `pos`.
///
/// Castling is written as the king's two-square step (`e1g1`), not in the
/// king-takes-rook form used internally.
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    let to = pos.landing_square(mv);
    let mut s = format!("{}{}", mv.from, to);
    if let Some(p) = mv.promotion {
        let ch = match p {
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

/// Resolve a UCI token against the legal moves of `pos`.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, RulesError> {
    let txt = txt.trim();
    let well_formed = matches!(txt.len(), 4 | 5)
        && txt.is_ascii()
        && txt[0..2].parse::<Square>().is_ok()
        && txt[2..4].parse::<Square>().is_ok();
    if !well_formed {
        return Err(RulesError::MalformedMove(txt.to_string()));
    }
    let token = txt.to_ascii_lowercase();

    // Match against legal moves so castling and promotions resolve correctly.
    pos.legal_moves()
        .into_iter()
        .find(|&mv| move_to_uci(pos, mv) == token)
        .ok_or_else(|| RulesError::IllegalMove {
            token: token.clone(),
            fen: pos.to_fen(),
        })
}

/// Apply the arguments of a UCI `position` command.
///
/// Supports `startpos [moves ...]` and `fen <fields...> [moves ...]`. On a
/// bad FEN the position is left untouched. On a bad move the moves before it
/// stay applied and the rest are skipped; the error is returned either way so
/// the caller can report it.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), RulesError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    let mut next = match setup.first() {
        None | Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&setup[1..].join(" "))?,
        Some(other) => {
            return Err(RulesError::InvalidFen {
                fen: (*other).to_string(),
            })
        }
    };

    let mut outcome = Ok(());
    for token in moves {
        let applied = parse_uci_move(&next, token).and_then(|mv| next.push(mv));
        if let Err(e) = applied {
            warn!(%e, "stopping move replay");
            outcome = Err(e);
            break;
        }
    }

    *pos = next;
    outcome
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
