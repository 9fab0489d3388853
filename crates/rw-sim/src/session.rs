//! The multi-run `Session` and its cross-run totals.

use std::time::Duration;

use tracing::info;

use rw_core::{RunId, SessionConfig};
use rw_plane::Plane;
use rw_walker::WalkerSpec;

use crate::run::{simulate_run, RunTally};
use crate::{
    DistanceSums, RunRecord, RunStats, SessionObserver, SessionReport, SessionSummary, SimResult,
};

/// Running totals across the runs completed so far.
#[derive(Clone, Debug, Default)]
struct SessionTotals {
    /// Sum of every run's cutoff sums (runs that stopped early add nothing).
    distance:           DistanceSums,
    steps_to_exit:      u64,
    time_to_exit:       Duration,
    y_axis_crossings:   u64,
    unsuccessful_moves: u64,
    stuck_runs:         u32,
}

impl SessionTotals {
    fn fold(&mut self, tally: &RunTally) {
        self.distance += tally.cutoff_sums.unwrap_or_default();
        self.steps_to_exit += tally.steps_to_exit.unwrap_or(0);
        self.time_to_exit += tally.time_to_exit.unwrap_or_default();
        self.y_axis_crossings += tally.y_axis_crossings;
        self.unsuccessful_moves += tally.unsuccessful_moves;
        self.stuck_runs += tally.stuck as u32;
    }
}

/// A configured session: the shared plane plus the walker spec and budgets.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session {
    pub config: SessionConfig,
    pub walker: WalkerSpec,
    /// Obstacles and portals shared read-only by every run.
    pub plane:  Plane,
}

impl Session {
    /// Run `config.simulations` runs in order and aggregate their statistics.
    ///
    /// Each run gets a fresh walker; the plane persists.  Calls observer
    /// hooks at run boundaries and for every step.
    pub fn run<O: SessionObserver>(&mut self, observer: &mut O) -> SimResult<SessionReport> {
        let mut totals = SessionTotals::default();
        let mut records = Vec::with_capacity(self.config.simulations as usize);

        for i in 0..self.config.simulations {
            let run = RunId(i);
            let outcome = simulate_run(run, &self.walker, &mut self.plane, &self.config, observer)?;
            totals.fold(&outcome.tally);

            let averages = totals.distance.divided_by(run.ordinal() as f64);
            let tally = outcome.tally;
            let record = RunRecord {
                run,
                stats: RunStats {
                    steps_to_exit:            tally.steps_to_exit,
                    time_to_exit:             tally.time_to_exit,
                    y_axis_crossings:         tally.y_axis_crossings,
                    unsuccessful_moves:       tally.unsuccessful_moves,
                    total_unsuccessful_moves: totals.unsuccessful_moves,
                    teleports:                tally.teleports,
                    cutoff_sums:              tally.cutoff_sums,
                    avg_distance_from_origin: averages.from_origin,
                    avg_distance_from_x_axis: averages.from_x_axis,
                    avg_distance_from_y_axis: averages.from_y_axis,
                    steps_simulated:          outcome.steps.len() as u64,
                    stuck:                    tally.stuck,
                },
                steps: outcome.steps,
            };
            observer.on_run_end(&record);
            records.push(record);
        }

        let summary = self.summarize(&totals);
        info!(
            runs = summary.runs,
            stuck_runs = summary.stuck_runs,
            avg_distance_from_origin = summary.avg_distance_from_origin,
            avg_y_axis_crossings = summary.avg_y_axis_crossings,
            avg_unsuccessful_moves = summary.avg_unsuccessful_moves,
            "session complete",
        );
        observer.on_session_end(&summary);

        Ok(SessionReport { records, summary })
    }

    fn summarize(&self, totals: &SessionTotals) -> SessionSummary {
        let runs = self.config.simulations;
        let per_slot = totals.distance.divided_by(self.config.total_step_slots() as f64);
        let per_run = |v: u64| v as f64 / runs as f64;
        SessionSummary {
            runs,
            stuck_runs:               totals.stuck_runs,
            avg_distance_from_origin: per_slot.from_origin,
            avg_distance_from_x_axis: per_slot.from_x_axis,
            avg_distance_from_y_axis: per_slot.from_y_axis,
            avg_unsuccessful_moves:   per_run(totals.unsuccessful_moves),
            avg_steps_to_exit:        per_run(totals.steps_to_exit),
            avg_time_to_exit:         totals.time_to_exit / runs,
            avg_y_axis_crossings:     per_run(totals.y_axis_crossings),
        }
    }
}
