pub mod attacks;
pub mod board;
pub mod error;
pub mod perft;
pub mod time_control;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::RulesError;
pub use perft::perft;
pub use time_control::*;
pub use types::*;
pub use uci::*;

/// Sentinel score for a mate recognised at a node, far outside material range.
pub const MATE_SCORE: f64 = 10_000.0;

// =============================================================================
// Engine trait, implemented by every engine the UCI session can drive
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move to play (None only if there are no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen move in pawns, from White's point of view
    pub score: f64,
    /// Search depth used (0 when the move was picked without searching)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early by the hard cutoff
    pub stopped: bool,
    /// Timing the move was chosen under; the caller waits out the rest
    pub budget: SearchBudget,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Choose a move for `pos`.
    ///
    /// The engine may explore variations on `pos` but must leave it exactly
    /// as it found it.
    fn search(&mut self, pos: &mut Position, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "DarkOn"
    }

    /// UCI `option ...` declaration lines advertised after `id`.
    fn options(&self) -> Vec<String> {
        Vec::new()
    }

    /// Reset internal state for a new game (move history and the like)
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
