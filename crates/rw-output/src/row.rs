//! Flat row types written by output backends.

use rw_core::RunId;
use rw_sim::{RunRecord, StepStats};

/// One step of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRow {
    pub run:                      u32,
    pub step:                     u64,
    pub avg_distance_from_x_axis: f64,
    pub avg_distance_from_y_axis: f64,
    pub avg_distance_from_origin: f64,
}

impl StepRow {
    pub fn new(run: RunId, stats: &StepStats) -> Self {
        Self {
            run:                      run.0,
            step:                     stats.step,
            avg_distance_from_x_axis: stats.avg_distance_from_x_axis,
            avg_distance_from_y_axis: stats.avg_distance_from_y_axis,
            avg_distance_from_origin: stats.avg_distance_from_origin,
        }
    }
}

/// Terminal statistics of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRow {
    pub run:                      u32,
    pub steps_simulated:          u64,
    /// `None` if the walker never left the exit radius.
    pub steps_to_exit:            Option<u64>,
    pub time_to_exit_secs:        Option<f64>,
    pub y_axis_crossings:         u64,
    pub unsuccessful_moves:       u64,
    pub total_unsuccessful_moves: u64,
    pub teleports:                u64,
    pub avg_distance_from_origin: f64,
    pub avg_distance_from_x_axis: f64,
    pub avg_distance_from_y_axis: f64,
    pub stuck:                    bool,
}

impl From<&RunRecord> for RunRow {
    fn from(record: &RunRecord) -> Self {
        let s = &record.stats;
        Self {
            run:                      record.run.0,
            steps_simulated:          s.steps_simulated,
            steps_to_exit:            s.steps_to_exit,
            time_to_exit_secs:        s.time_to_exit.map(|d| d.as_secs_f64()),
            y_axis_crossings:         s.y_axis_crossings,
            unsuccessful_moves:       s.unsuccessful_moves,
            total_unsuccessful_moves: s.total_unsuccessful_moves,
            teleports:                s.teleports,
            avg_distance_from_origin: s.avg_distance_from_origin,
            avg_distance_from_x_axis: s.avg_distance_from_x_axis,
            avg_distance_from_y_axis: s.avg_distance_from_y_axis,
            stuck:                    s.stuck,
        }
    }
}
