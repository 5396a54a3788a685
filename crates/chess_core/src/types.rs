//! Board vocabulary shared by every crate in the workspace.
//!
//! Squares, colours, piece kinds and moves come straight from `cozy-chess`;
//! this module only adds the coloured [`Piece`] pair and a few lookups the
//! engines need.

pub use cozy_chess::{BitBoard, Board, Color, File, Move, Rank, Square};

/// Piece kind without colour (pawn, knight, ...).
pub use cozy_chess::Piece as PieceKind;

/// The four central squares.
pub const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// The rank a side's pieces start on.
pub fn back_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::First,
        Color::Black => Rank::Eighth,
    }
}

/// Destination squares of the king after castling, for standard chess.
pub fn castled_king_squares(color: Color) -> [Square; 2] {
    let rank = back_rank(color);
    [Square::new(File::G, rank), Square::new(File::C, rank)]
}

/// +1 for White, -1 for Black. Scores are always kept from White's side.
pub fn color_sign(color: Color) -> f64 {
    match color {
        Color::White => 1.0,
        Color::Black => -1.0,
    }
}
