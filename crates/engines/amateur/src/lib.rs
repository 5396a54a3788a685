//! DarkOn amateur engine
//!
//! Shallow fixed-depth minimax with a human touch: opening habits in the
//! evaluation, penalties for hanging and re-moving pieces at the root, and
//! random noise and tie-breaks so it doesn't play the same game twice.
//! All randomness comes from one seedable generator owned by the engine.

pub mod config;
pub mod eval;
pub mod history;
pub mod search;
pub mod selector;

use chess_core::{budget_for, Engine, Position, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

pub use config::{EngineConfig, Strength};
pub use eval::evaluate;
pub use history::MoveHistory;
pub use selector::{choose_move, Selection};

/// Deepest search the `Depth` option accepts.
pub const MAX_OPTION_DEPTH: u8 = 6;

#[derive(Debug, Clone)]
pub struct AmateurEngine {
    config: EngineConfig,
    rng: StdRng,
    history: MoveHistory,
}

impl AmateurEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let rng = seeded_rng(config.seed);
        let history = MoveHistory::new(config.history_len);
        Self {
            config,
            rng,
            history,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Restart the random source, from `seed` or from entropy.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.config.seed = seed;
        self.rng = seeded_rng(seed);
    }
}

impl Default for AmateurEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl Engine for AmateurEngine {
    fn search(&mut self, pos: &mut Position, limits: &SearchLimits) -> SearchResult {
        let budget = budget_for(limits, &self.config.time, &mut self.rng);
        let selection = choose_move(
            pos,
            limits,
            &budget,
            &self.config,
            &self.history,
            &mut self.rng,
        );

        if let Some(landing) = selection.landing {
            self.history.record(landing);
        }

        debug!(
            depth = selection.depth,
            nodes = selection.nodes,
            score = selection.score,
            stopped = selection.stopped,
            think_ms = budget.target_think_time.as_millis() as u64,
            "move chosen"
        );

        SearchResult {
            best_move: selection.mv,
            score: selection.score,
            depth: selection.depth,
            nodes: selection.nodes,
            stopped: selection.stopped,
            budget,
        }
    }

    fn name(&self) -> &str {
        "DarkOn 0.1"
    }

    fn author(&self) -> &str {
        "Dark and Classic"
    }

    fn options(&self) -> Vec<String> {
        vec![
            format!(
                "option name Strength type combo default {} var weak var normal",
                self.config.strength
            ),
            format!(
                "option name Depth type spin default {} min 0 max {MAX_OPTION_DEPTH}",
                self.config.fixed_depth.unwrap_or(0)
            ),
            "option name Seed type string default random".to_string(),
        ]
    }

    fn new_game(&mut self) {
        self.history.clear();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name.trim().to_ascii_lowercase().as_str() {
            "strength" => match value.parse::<Strength>() {
                Ok(strength) => {
                    self.config.strength = strength;
                    true
                }
                Err(err) => {
                    debug!(%err, "ignoring Strength option");
                    false
                }
            },
            "depth" => match value.trim().parse::<u8>() {
                Ok(0) => {
                    self.config.fixed_depth = None;
                    true
                }
                Ok(depth) => {
                    self.config.fixed_depth = Some(depth.min(MAX_OPTION_DEPTH));
                    true
                }
                Err(_) => false,
            },
            "seed" => {
                let value = value.trim();
                if value.is_empty() || value.eq_ignore_ascii_case("random") {
                    self.reseed(None);
                    return true;
                }
                match value.parse::<u64>() {
                    Ok(seed) => {
                        self.reseed(Some(seed));
                        true
                    }
                    Err(_) => false,
                }
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
