//! Session configuration.
//!
//! A session is `simulations` independent runs of at most `steps` steps
//! each.  Distance statistics are folded into the cross-run totals at step
//! `n_steps` (the statistics cutoff).

use crate::{RwError, RwResult};

/// Top-level simulation configuration.
///
/// Typically built from command-line flags by the application crate and
/// passed to the session builder, which calls [`validate`](Self::validate).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Step budget per run.
    pub steps: u64,

    /// Number of independent runs in the session.
    pub simulations: u32,

    /// 1-based step index at which a run's cumulative distance sums are
    /// folded into the session totals.  Must lie in `1..=steps`.
    pub n_steps: u64,

    /// Master RNG seed.  The same seed always produces identical walks.
    pub seed: u64,
}

impl SessionConfig {
    pub fn new(steps: u64, simulations: u32, n_steps: u64, seed: u64) -> Self {
        Self { steps, simulations, n_steps, seed }
    }

    /// Reject budgets that cannot produce a meaningful session.
    pub fn validate(&self) -> RwResult<()> {
        if self.steps == 0 {
            return Err(RwError::Config("step budget must be at least 1".into()));
        }
        if self.simulations == 0 {
            return Err(RwError::Config("at least one simulation is required".into()));
        }
        if !(1..=self.steps).contains(&self.n_steps) {
            return Err(RwError::Config(format!(
                "statistics cutoff {} must lie between 1 and the step budget {}",
                self.n_steps, self.steps
            )));
        }
        Ok(())
    }

    /// Total number of step slots across the session (`steps * simulations`),
    /// the denominator of the session-wide distance averages.
    #[inline]
    pub fn total_step_slots(&self) -> u64 {
        self.steps * self.simulations as u64
    }
}
