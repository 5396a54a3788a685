use std::ops::{Deref, DerefMut};

use crate::attacks::attackers_of;
use crate::error::RulesError;
use crate::types::*;

/// A played move together with the board it was played from.
#[derive(Clone, Debug)]
struct Frame {
    board: Board,
    mv: Move,
}

/// The game position as seen by the engines.
///
/// Wraps a `cozy-chess` board with a LIFO stack of played moves so callers
/// can explore variations in place with [`Position::push`]/[`Position::pop`]
/// or the scoped [`Position::play`]. The stack also serves as game history
/// for repetition detection.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    stack: Vec<Frame>,
}

impl Position {
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            stack: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|_| RulesError::InvalidFen {
            fen: fen.to_string(),
        })?;
        Ok(Self {
            board,
            stack: Vec::new(),
        })
    }

    pub fn to_fen(&self) -> String {
        self.board.to_string()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn fullmove_number(&self) -> u32 {
        u32::from(self.board.fullmove_number())
    }

    pub fn halfmove_clock(&self) -> u32 {
        u32::from(self.board.halfmove_clock())
    }

    /// Number of moves currently on the push stack.
    pub fn ply_count(&self) -> usize {
        self.stack.len()
    }

    /// The most recently pushed move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.stack.last().map(|frame| frame.mv)
    }

    // =========================================================================
    // Move generation and make/unmake
    // =========================================================================

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    /// Generate all legal moves into the provided buffer, reusing it across calls.
    pub fn legal_moves_into(&self, out: &mut Vec<Move>) {
        out.clear();
        self.board.generate_moves(|moves| {
            out.extend(moves);
            false
        });
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|_| true)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.board.is_legal(mv)
    }

    /// Apply a move, rejecting it if it is not legal here.
    pub fn push(&mut self, mv: Move) -> Result<(), RulesError> {
        if !self.board.is_legal(mv) {
            return Err(RulesError::IllegalMove {
                token: mv.to_string(),
                fen: self.to_fen(),
            });
        }
        self.push_unchecked(mv);
        Ok(())
    }

    fn push_unchecked(&mut self, mv: Move) {
        debug_assert!(self.board.is_legal(mv), "pushed illegal move {mv}");
        self.stack.push(Frame {
            board: self.board.clone(),
            mv,
        });
        self.board.play_unchecked(mv);
    }

    /// Undo the most recent push. Returns the move that was undone.
    pub fn pop(&mut self) -> Option<Move> {
        let frame = self.stack.pop()?;
        self.board = frame.board;
        Some(frame.mv)
    }

    /// Play a legal move for the lifetime of the returned scope.
    ///
    /// The move is undone when the scope is dropped, whichever way the
    /// caller leaves it. `mv` must come from [`Position::legal_moves`].
    pub fn play(&mut self, mv: Move) -> MoveScope<'_> {
        self.push_unchecked(mv);
        MoveScope { pos: self }
    }

    // =========================================================================
    // Board queries
    // =========================================================================

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let kind = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some(Piece { color, kind })
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.board.king(color)
    }

    pub fn pieces(&self, color: Color, kind: PieceKind) -> BitBoard {
        self.board.colored_pieces(color, kind)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.pieces(color, kind).len()
    }

    pub fn attackers_of(&self, sq: Square, by: Color) -> BitBoard {
        attackers_of(&self.board, sq, by)
    }

    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        !self.attackers_of(sq, by).is_empty()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// True for castling moves, which `cozy-chess` encodes as the king
    /// capturing its own rook.
    pub fn is_castle(&self, mv: Move) -> bool {
        let mover = self.board.color_on(mv.from);
        mover.is_some()
            && self.board.piece_on(mv.from) == Some(PieceKind::King)
            && self.board.color_on(mv.to) == mover
    }

    /// The square the moving piece ends up on once `mv` is played.
    ///
    /// Only differs from `mv.to` for castling.
    pub fn landing_square(&self, mv: Move) -> Square {
        if self.is_castle(mv) {
            let file = if mv.to.file() as u8 > mv.from.file() as u8 {
                File::G
            } else {
                File::C
            };
            Square::new(file, mv.from.rank())
        } else {
            mv.to
        }
    }

    // =========================================================================
    // Terminal states
    // =========================================================================

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on squares of one colour.
    pub fn is_insufficient_material(&self) -> bool {
        let heavy = self.board.pieces(PieceKind::Pawn)
            | self.board.pieces(PieceKind::Rook)
            | self.board.pieces(PieceKind::Queen);
        if !heavy.is_empty() {
            return false;
        }
        let knights = self.board.pieces(PieceKind::Knight);
        let bishops = self.board.pieces(PieceKind::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }
        let shade = |sq: Square| (sq.file() as u8 + sq.rank() as u8) % 2;
        let mut shades = bishops.into_iter().map(shade);
        let first = shades.next();
        shades.all(|s| Some(s) == first)
    }

    /// The current position occurred at least twice before on the stack.
    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.board.hash();
        let earlier = self
            .stack
            .iter()
            .rev()
            .take(self.halfmove_clock() as usize)
            .filter(|frame| frame.board.hash() == key)
            .count();
        earlier >= 2
    }

    /// Drawn by rule: stalemate, fifty moves, dead material or repetition.
    pub fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_fifty_move_draw()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl PartialEq for Position {
    /// Two positions are equal when their boards match exactly, move
    /// counters included; move history is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.board.hash() == other.board.hash() && self.to_fen() == other.to_fen()
    }
}

/// A move played on a [`Position`] that is undone on drop.
pub struct MoveScope<'a> {
    pos: &'a mut Position,
}

impl Deref for MoveScope<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.pos
    }
}

impl DerefMut for MoveScope<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for MoveScope<'_> {
    fn drop(&mut self) {
        self.pos.pop();
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
