//! The `OutputWriter` trait implemented by backend writers.

use rw_core::RunId;
use rw_sim::{RunRecord, StepStats};

use crate::OutputResult;

/// A sink for per-step and per-run session statistics.
///
/// Errors surface through the observer via
/// [`SessionOutputObserver::take_error`][crate::SessionOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the step records of one run, in step order.
    fn write_steps(&mut self, run: RunId, steps: &[StepStats]) -> OutputResult<()>;

    /// Write the terminal statistics of one run.
    fn write_run(&mut self, record: &RunRecord) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
