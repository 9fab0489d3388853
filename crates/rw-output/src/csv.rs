//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_stats.csv`
//! - `run_stats.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use rw_core::RunId;
use rw_sim::{RunRecord, StepStats};

use crate::row::{RunRow, StepRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

pub const STEP_HEADER: [&str; 5] = [
    "run",
    "step",
    "avg_distance_from_x_axis",
    "avg_distance_from_y_axis",
    "avg_distance_from_origin",
];

pub const RUN_HEADER: [&str; 12] = [
    "run",
    "steps_simulated",
    "steps_to_exit",
    "time_to_exit_secs",
    "y_axis_crossings",
    "unsuccessful_moves",
    "total_unsuccessful_moves",
    "teleports",
    "avg_distance_from_origin",
    "avg_distance_from_x_axis",
    "avg_distance_from_y_axis",
    "stuck",
];

/// Empty cell for absent values.
fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes session output to two CSV files.
pub struct CsvWriter {
    steps:    Writer<File>,
    runs:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (creating `dir` if needed) and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut steps = Writer::from_path(dir.join("step_stats.csv"))?;
        steps.write_record(STEP_HEADER)?;

        let mut runs = Writer::from_path(dir.join("run_stats.csv"))?;
        runs.write_record(RUN_HEADER)?;

        Ok(Self { steps, runs, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_steps(&mut self, run: RunId, steps: &[StepStats]) -> OutputResult<()> {
        for stats in steps {
            let row = StepRow::new(run, stats);
            self.steps.write_record(&[
                row.run.to_string(),
                row.step.to_string(),
                row.avg_distance_from_x_axis.to_string(),
                row.avg_distance_from_y_axis.to_string(),
                row.avg_distance_from_origin.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_run(&mut self, record: &RunRecord) -> OutputResult<()> {
        let row = RunRow::from(record);
        self.runs.write_record(&[
            row.run.to_string(),
            row.steps_simulated.to_string(),
            opt(row.steps_to_exit),
            opt(row.time_to_exit_secs),
            row.y_axis_crossings.to_string(),
            row.unsuccessful_moves.to_string(),
            row.total_unsuccessful_moves.to_string(),
            row.teleports.to_string(),
            row.avg_distance_from_origin.to_string(),
            row.avg_distance_from_x_axis.to_string(),
            row.avg_distance_from_y_axis.to_string(),
            (row.stuck as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.runs.flush()?;
        Ok(())
    }
}
