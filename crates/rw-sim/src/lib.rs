//! `rw-sim` — step loop and multi-run aggregator for the rust_walk simulator.
//!
//! # Session structure
//!
//! ```text
//! for run in 0..config.simulations:
//!   fresh walker → attach to plane
//!   for step in 1..=config.steps:          (see [`run`] for the phases)
//!     stop if stuck; propose; resolve against plane; tally; record
//!   detach walker → fold run into session totals → RunRecord
//! SessionSummary from the totals
//! ```
//!
//! Everything is single-threaded and sequential: every random draw of a run
//! comes from one RNG seeded by `(seed, run)`, so a seed reproduces a
//! session exactly (wall-clock exit times aside).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rw_core::SessionConfig;
//! use rw_sim::{NoopObserver, SessionBuilder};
//! use rw_walker::{WalkerKind, WalkerSpec};
//!
//! let config = SessionConfig::new(1_000, 10, 1_000, 42);
//! let mut session = SessionBuilder::new(config, WalkerSpec::new(WalkerKind::Continuous))
//!     .build()?;
//! let report = session.run(&mut NoopObserver)?;
//! println!("{:.3}", report.summary.avg_distance_from_origin);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod run;
pub mod session;
pub mod stats;


pub use builder::SessionBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SessionObserver};
pub use run::{simulate_run, step_walker, MoveOutcome, RunOutcome, RunTally};
pub use session::Session;
pub use stats::{
    DistanceSums, RunRecord, RunStats, SessionReport, SessionSummary, StepStats, EXIT_RADIUS,
};
