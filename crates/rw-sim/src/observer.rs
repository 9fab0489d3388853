//! Session observer trait for progress reporting and data collection.

use rw_core::RunId;

use crate::{RunRecord, SessionSummary, StepStats};

/// Callbacks invoked by [`Session::run`][crate::Session::run] at key points
/// of every run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SessionObserver for ProgressPrinter {
///     fn on_run_end(&mut self, record: &RunRecord) {
///         println!("{}: {} steps", record.run, record.stats.steps_simulated);
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called before the first step of a run, after the walker is attached.
    fn on_run_start(&mut self, _run: RunId) {}

    /// Called after every step's statistics record is computed.
    fn on_step(&mut self, _run: RunId, _stats: &StepStats) {}

    /// Called once per run with the finalized record (cross-run averages
    /// included).
    fn on_run_end(&mut self, _record: &RunRecord) {}

    /// Called once after the last run.
    fn on_session_end(&mut self, _summary: &SessionSummary) {}
}

/// A [`SessionObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
