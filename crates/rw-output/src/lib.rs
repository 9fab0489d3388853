//! `rw-output` — session output writers for the rust_walk simulator.
//!
//! | Backend     | Files created                        |
//! |-------------|--------------------------------------|
//! | CSV         | `step_stats.csv`, `run_stats.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SessionOutputObserver`], which implements `rw_sim::SessionObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rw_output::{CsvWriter, SessionOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SessionOutputObserver::new(writer);
//! session.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SessionOutputObserver;
pub use row::{RunRow, StepRow};
pub use writer::OutputWriter;
