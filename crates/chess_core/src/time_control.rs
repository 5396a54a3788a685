//! Think-time budgeting from the remaining clock.
//!
//! A `go` command turns into a [`SearchBudget`]: how long the engine intends
//! to take before answering (drawn from a range so the rhythm is not
//! mechanical), and a hard cutoff instant after which search stops
//! expanding nodes. The cutoff only gets a fraction of the think time so
//! that bookkeeping and the final wait never overrun the intended response
//! time.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// What the host told us about the clock for one `go`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLimits {
    /// Remaining clock for the side to move
    pub remaining: Duration,
    /// Fixed think time requested by the host (`go movetime`)
    pub move_time: Option<Duration>,
    /// Fixed search depth requested by the host (`go depth`)
    pub depth: Option<u8>,
}

impl SearchLimits {
    /// Create limits from the remaining clock only.
    pub fn clock(remaining: Duration) -> Self {
        Self {
            remaining,
            move_time: None,
            depth: None,
        }
    }

    /// Same clock, but search exactly `depth` plies.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_move_time(mut self, move_time: Duration) -> Self {
        self.move_time = Some(move_time);
        self
    }
}

/// One row of the think-time table: remaining clocks below `below_ms` draw a
/// target uniformly from `[min_ms, max_ms]`. A row without `below_ms`
/// catches everything above the previous rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThinkStep {
    #[serde(default)]
    pub below_ms: Option<u64>,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl ThinkStep {
    pub const fn new(below_ms: Option<u64>, min_ms: u64, max_ms: u64) -> Self {
        Self {
            below_ms,
            min_ms,
            max_ms,
        }
    }

    fn covers(&self, remaining_ms: u64) -> bool {
        self.below_ms.map_or(true, |below| remaining_ms < below)
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let (lo, hi) = if self.min_ms <= self.max_ms {
            (self.min_ms, self.max_ms)
        } else {
            (self.max_ms, self.min_ms)
        };
        Duration::from_millis(rng.gen_range(lo..=hi))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Below this much remaining clock the engine stops searching altogether
    pub panic_threshold_ms: u64,
    /// Think time drawn in panic mode
    pub panic_think: ThinkStep,
    /// Ascending think-time table, first matching row wins
    pub think_steps: Vec<ThinkStep>,
    /// Share of the think time the search itself may use
    pub search_fraction: f64,
    /// Upper bound on the search share regardless of think time
    pub cutoff_cap_ms: u64,
    /// Clock assumed when the host never sent one
    pub default_clock_ms: u64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            panic_threshold_ms: 1_000,
            panic_think: ThinkStep::new(None, 20, 80),
            think_steps: vec![
                ThinkStep::new(Some(10_000), 200, 600),
                ThinkStep::new(Some(30_000), 500, 1_500),
                ThinkStep::new(Some(120_000), 1_000, 3_000),
                ThinkStep::new(None, 2_000, 5_000),
            ],
            search_fraction: 0.7,
            cutoff_cap_ms: 4_000,
            default_clock_ms: 60_000,
        }
    }
}

impl TimeConfig {
    pub fn is_panic(&self, remaining: Duration) -> bool {
        remaining < Duration::from_millis(self.panic_threshold_ms)
    }

    /// Draw the intended think time for a clock with `remaining` left.
    pub fn target_think_time<R: Rng + ?Sized>(&self, remaining: Duration, rng: &mut R) -> Duration {
        if self.is_panic(remaining) {
            return self.panic_think.draw(rng);
        }
        let remaining_ms = u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX);
        self.think_steps
            .iter()
            .find(|step| step.covers(remaining_ms))
            .or(self.think_steps.last())
            .map(|step| step.draw(rng))
            .unwrap_or_else(|| self.panic_think.draw(rng))
    }

    /// How long search may run for a given think time.
    pub fn search_allowance(&self, target: Duration) -> Duration {
        let fraction = self.search_fraction.clamp(0.0, 1.0);
        let allowed_ms = (target.as_millis() as f64 * fraction).round() as u64;
        Duration::from_millis(allowed_ms.min(self.cutoff_cap_ms))
    }
}

/// Timing for a single `go`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// When the budget was created
    pub started: Instant,
    /// How long the engine means to take before answering
    pub target_think_time: Duration,
    /// Search returns static evaluations from this instant on
    pub hard_cutoff: Instant,
}

impl SearchBudget {
    /// Budget starting now with the given think time.
    pub fn new(target_think_time: Duration, config: &TimeConfig) -> Self {
        let started = Instant::now();
        Self {
            started,
            target_think_time,
            hard_cutoff: started + config.search_allowance(target_think_time),
        }
    }

    /// A budget whose cutoff has already passed.
    pub fn expired() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            target_think_time: Duration::ZERO,
            hard_cutoff: now,
        }
    }

    /// Effectively unlimited search time, with no wait afterwards.
    pub fn unlimited() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            target_think_time: Duration::ZERO,
            hard_cutoff: now + Duration::from_secs(60 * 60 * 24),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.hard_cutoff
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Unused part of the think time; zero once it has been exceeded.
    pub fn wait_remaining(&self) -> Duration {
        self.target_think_time.saturating_sub(self.elapsed())
    }
}

/// Build the budget for one `go` from the host's limits.
pub fn budget_for<R: Rng + ?Sized>(
    limits: &SearchLimits,
    config: &TimeConfig,
    rng: &mut R,
) -> SearchBudget {
    let target = match limits.move_time {
        Some(fixed) => fixed,
        None => config.target_think_time(limits.remaining, rng),
    };
    SearchBudget::new(target, config)
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
