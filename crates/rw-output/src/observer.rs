//! `SessionOutputObserver<W>` — bridges `SessionObserver` to an `OutputWriter`.

use rw_core::RunId;
use rw_sim::{RunRecord, SessionObserver, SessionSummary, StepStats};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that writes step and run statistics to any
/// [`OutputWriter`] backend.
///
/// Step records are buffered per run and written together when the run
/// ends.  Errors from the writer are stored internally because observer
/// methods have no return value; check with [`take_error`][Self::take_error]
/// after `session.run()` returns.
pub struct SessionOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<StepStats>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SessionOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SessionObserver for SessionOutputObserver<W> {
    fn on_run_start(&mut self, _run: RunId) {
        self.pending.clear();
    }

    fn on_step(&mut self, _run: RunId, stats: &StepStats) {
        self.pending.push(*stats);
    }

    fn on_run_end(&mut self, record: &RunRecord) {
        let result = self.writer.write_steps(record.run, &self.pending);
        self.store_err(result);
        self.pending.clear();

        let result = self.writer.write_run(record);
        self.store_err(result);
    }

    fn on_session_end(&mut self, _summary: &SessionSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
