use thiserror::Error;

/// Failures reported by the rules-engine facade.
///
/// These only arise from input supplied by the host controller (a position
/// string or a move token); moves produced by [`crate::Position::legal_moves`] never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("invalid FEN `{fen}`")]
    InvalidFen { fen: String },

    #[error("malformed move token `{0}`")]
    MalformedMove(String),

    #[error("illegal move `{token}` in position {fen}")]
    IllegalMove { token: String, fen: String },
}
