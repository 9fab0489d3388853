//! Statistics records produced by runs and sessions.
//!
//! Three granularities:
//!
//! | Type             | One per   | Contents                                     |
//! |------------------|-----------|----------------------------------------------|
//! | [`StepStats`]    | step      | running averages of the distance metrics     |
//! | [`RunStats`]     | run       | exit radius, crossings, collisions, cutoff sums, cross-run averages |
//! | [`SessionSummary`] | session | plain averages over all runs                 |

use std::ops::AddAssign;
use std::time::Duration;

use rw_core::{Point, RunId};

/// Distance from the origin beyond which a walker has "left" the start area.
pub const EXIT_RADIUS: f64 = 10.0;

// ── DistanceSums ──────────────────────────────────────────────────────────────

/// Cumulative distance metrics over the positions visited in a run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceSums {
    pub from_origin: f64,
    /// Σ |y|
    pub from_x_axis: f64,
    /// Σ |x|
    pub from_y_axis: f64,
}

impl DistanceSums {
    /// Add the distances of one visited position.
    #[inline]
    pub fn record(&mut self, p: Point) {
        self.from_origin += p.norm();
        self.from_x_axis += p.y.abs();
        self.from_y_axis += p.x.abs();
    }

    /// Each sum divided by `n`.
    #[inline]
    pub fn divided_by(&self, n: f64) -> DistanceSums {
        DistanceSums {
            from_origin: self.from_origin / n,
            from_x_axis: self.from_x_axis / n,
            from_y_axis: self.from_y_axis / n,
        }
    }
}

impl AddAssign for DistanceSums {
    fn add_assign(&mut self, rhs: DistanceSums) {
        self.from_origin += rhs.from_origin;
        self.from_x_axis += rhs.from_x_axis;
        self.from_y_axis += rhs.from_y_axis;
    }
}

// ── StepStats ─────────────────────────────────────────────────────────────────

/// Running averages after step `step` (1-based): the run's cumulative sums
/// divided by the step index.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepStats {
    pub step:                     u64,
    pub avg_distance_from_x_axis: f64,
    pub avg_distance_from_y_axis: f64,
    pub avg_distance_from_origin: f64,
}

impl StepStats {
    pub fn running(step: u64, sums: &DistanceSums) -> Self {
        let avg = sums.divided_by(step as f64);
        Self {
            step,
            avg_distance_from_x_axis: avg.from_x_axis,
            avg_distance_from_y_axis: avg.from_y_axis,
            avg_distance_from_origin: avg.from_origin,
        }
    }
}

// ── RunStats / RunRecord ──────────────────────────────────────────────────────

/// Terminal and aggregate facts about one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Walker step count when it first got further than [`EXIT_RADIUS`]
    /// from the origin; `None` if it never did.
    pub steps_to_exit: Option<u64>,
    /// Wall-clock time from run start to the exit event.
    pub time_to_exit: Option<Duration>,
    pub y_axis_crossings: u64,
    /// Moves rejected by an obstacle in this run.
    pub unsuccessful_moves: u64,
    /// Moves rejected by an obstacle in this and every earlier run.
    pub total_unsuccessful_moves: u64,
    pub teleports: u64,
    /// This run's cumulative sums at the statistics cutoff; `None` if the run
    /// stopped before reaching it.
    pub cutoff_sums: Option<DistanceSums>,
    /// Running cross-run averages of the cutoff sums (session totals so far
    /// divided by the run ordinal).
    pub avg_distance_from_origin: f64,
    pub avg_distance_from_x_axis: f64,
    pub avg_distance_from_y_axis: f64,
    /// Number of steps simulated (equals the step-record count).
    pub steps_simulated: u64,
    /// The run ended early because the walker had no unblocked move.
    pub stuck: bool,
}

/// Everything a run leaves behind for reporting and plotting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    pub run:   RunId,
    pub stats: RunStats,
    pub steps: Vec<StepStats>,
}

// ── SessionSummary / SessionReport ────────────────────────────────────────────

/// Plain aggregate averages over all runs of a session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    pub runs:       u32,
    pub stuck_runs: u32,
    /// Σ cutoff sums / (steps · simulations).
    pub avg_distance_from_origin: f64,
    pub avg_distance_from_x_axis: f64,
    pub avg_distance_from_y_axis: f64,
    /// Per-run averages; runs that never exited contribute zero.
    pub avg_unsuccessful_moves: f64,
    pub avg_steps_to_exit:      f64,
    pub avg_time_to_exit:       Duration,
    pub avg_y_axis_crossings:   f64,
}

/// Output of [`Session::run`][crate::Session::run].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionReport {
    pub records: Vec<RunRecord>,
    pub summary: SessionSummary,
}

impl SessionReport {
    /// Mean step curve across runs.
    ///
    /// Entry `i` averages step `i + 1` over the runs that reached it, so
    /// runs that stopped early do not drag later steps toward zero.
    pub fn mean_step_stats(&self) -> Vec<StepStats> {
        let longest = self.records.iter().map(|r| r.steps.len()).max().unwrap_or(0);
        (0..longest)
            .map(|i| {
                let mut n = 0usize;
                let mut sums = DistanceSums::default();
                for s in self.records.iter().filter_map(|r| r.steps.get(i)) {
                    n += 1;
                    sums += DistanceSums {
                        from_origin: s.avg_distance_from_origin,
                        from_x_axis: s.avg_distance_from_x_axis,
                        from_y_axis: s.avg_distance_from_y_axis,
                    };
                }
                let mean = sums.divided_by(n as f64);
                StepStats {
                    step:                     i as u64 + 1,
                    avg_distance_from_x_axis: mean.from_x_axis,
                    avg_distance_from_y_axis: mean.from_y_axis,
                    avg_distance_from_origin: mean.from_origin,
                }
            })
            .collect()
    }
}
