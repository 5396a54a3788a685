//! Tunable constants for the amateur engine.
//!
//! Everything has a default; a TOML file only needs the keys it changes.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chess_core::{PieceKind, TimeConfig};
use serde::{Deserialize, Serialize};

/// Named strength profile, selectable with `setoption name Strength`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    #[default]
    Normal,
}

impl FromStr for Strength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(Strength::Weak),
            "normal" => Ok(Strength::Normal),
            other => bail!("unknown strength `{other}` (expected weak or normal)"),
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => f.write_str("weak"),
            Strength::Normal => f.write_str("normal"),
        }
    }
}

/// Penalty and noise magnitudes for one strength profile.
///
/// Missing keys in a TOML table fall back to the normal profile's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileTuning {
    /// Evaluation penalty per piece of the side to move that is attacked
    pub hanging_eval_penalty: f64,
    /// Root penalty for a moved piece left attacked, in multiples of its value
    pub hanging_multiplier: f64,
    /// Root penalty for moving a piece moved in the last few own moves
    pub repetition_penalty: f64,
    /// Half-width of the uniform noise added to every root score
    pub noise: f64,
    /// Added to the clock-driven search depth
    pub depth_offset: i8,
    /// Drop plain king moves while in the opening phase
    pub avoid_king_moves: bool,
}

impl ProfileTuning {
    pub fn normal() -> Self {
        Self {
            hanging_eval_penalty: 0.3,
            hanging_multiplier: 5.0,
            repetition_penalty: 0.4,
            noise: 0.1,
            depth_offset: 0,
            avoid_king_moves: true,
        }
    }

    pub fn weak() -> Self {
        Self {
            hanging_eval_penalty: 0.1,
            hanging_multiplier: 3.0,
            repetition_penalty: 0.2,
            noise: 0.35,
            depth_offset: -1,
            avoid_king_moves: true,
        }
    }
}

impl Default for ProfileTuning {
    fn default() -> Self {
        Self::normal()
    }
}

/// Material values in pawns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: f64,
    pub knight: f64,
    pub bishop: f64,
    pub rook: f64,
    pub queen: f64,
}

impl PieceValues {
    pub fn value(&self, kind: PieceKind) -> f64 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => 0.0,
        }
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 1.0,
            knight: 3.0,
            bishop: 3.0,
            rook: 5.0,
            queen: 9.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub piece_values: PieceValues,
    /// Bonus for occupying each of d4, e4, d5, e5
    pub center_bonus: f64,
    /// Opening-phase terms apply while the fullmove number is below this
    pub opening_moves: u32,
    /// Per queen that has left its back rank during the opening
    pub early_queen_penalty: f64,
    /// For a king not standing on a castled square during the opening
    pub uncastled_king_penalty: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece_values: PieceValues::default(),
            center_bonus: 0.2,
            opening_moves: 10,
            early_queen_penalty: 0.5,
            uncastled_king_penalty: 0.3,
        }
    }
}

/// One row of the depth table: remaining clocks below `below_ms` search one
/// of `depths`, picked uniformly. A row without `below_ms` catches the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthStep {
    #[serde(default)]
    pub below_ms: Option<u64>,
    pub depths: Vec<u8>,
}

impl DepthStep {
    pub fn new(below_ms: Option<u64>, depths: &[u8]) -> Self {
        Self {
            below_ms,
            depths: depths.to_vec(),
        }
    }

    pub fn covers(&self, remaining_ms: u64) -> bool {
        self.below_ms.map_or(true, |below| remaining_ms < below)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strength: Strength,
    pub normal: ProfileTuning,
    pub weak: ProfileTuning,
    pub eval: EvalWeights,
    pub time: TimeConfig,
    /// Ascending depth table, first matching row wins
    pub depth_steps: Vec<DepthStep>,
    /// Search exactly this deep instead of consulting the depth table
    pub fixed_depth: Option<u8>,
    /// How many of the engine's own recent moves count as "just moved"
    pub history_len: usize,
    /// Play a random legal move on move one for opening variety
    pub random_first_move: bool,
    /// Seed for the engine's random source; entropy when unset
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strength: Strength::Normal,
            normal: ProfileTuning::normal(),
            weak: ProfileTuning::weak(),
            eval: EvalWeights::default(),
            time: TimeConfig::default(),
            depth_steps: vec![
                DepthStep::new(Some(10_000), &[2]),
                DepthStep::new(Some(60_000), &[2, 3]),
                DepthStep::new(Some(180_000), &[3]),
                DepthStep::new(None, &[3, 4]),
            ],
            fixed_depth: None,
            history_len: 3,
            random_first_move: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Tuning for the currently selected strength.
    pub fn profile(&self) -> &ProfileTuning {
        match self.strength {
            Strength::Weak => &self.weak,
            Strength::Normal => &self.normal,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text).context("invalid engine config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.depth_steps.iter().any(|step| step.depths.is_empty()) {
            bail!("every depth step needs at least one depth");
        }
        if self.time.think_steps.is_empty() {
            bail!("time.think_steps must not be empty");
        }
        for profile in [&self.normal, &self.weak] {
            if profile.noise < 0.0 {
                bail!("noise must be non-negative, got {}", profile.noise);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
