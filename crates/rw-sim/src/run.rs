//! One run: a fresh walker stepping through the plane.
//!
//! # Step loop
//!
//! ```text
//! for step in 1..=config.steps:
//!   ① Liveness  — stop early if every probe hits an obstacle.
//!   ② Propose   — walker draws a displacement from the run RNG.
//!   ③ Resolve   — plane classifies previous → previous + displacement:
//!                   Obstacle → rejected, unsuccessful_moves += 1
//!                   Portal   → teleport to the portal destination
//!                   Clear    → commit the displacement
//!   ④ Tally     — if the position changed: distance sums, y-axis
//!                 crossing, first exit from the 10-unit radius.
//!   ⑤ Record    — StepStats = sums / step; snapshot sums at n_steps.
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use rw_core::{Point, RunId, SessionConfig, WalkRng};
use rw_plane::{has_possible_moves, Hit, Plane};
use rw_walker::{Walker, WalkerSpec};

use crate::{DistanceSums, SessionObserver, SimError, SimResult, StepStats, EXIT_RADIUS};

/// How [`step_walker`] resolved a proposed displacement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Teleported,
    Blocked,
}

/// Resolve displacement `d` against the plane and apply it to `walker`.
///
/// Obstacle hits leave the walker untouched; portal hits place it on the
/// portal destination without counting a step.
pub fn step_walker(walker: &mut Walker, plane: &Plane, d: Point) -> MoveOutcome {
    let current = walker.position();
    match plane.check_intersection(current, current + d) {
        Hit::Obstacle(_) => MoveOutcome::Blocked,
        Hit::Portal(portal) => {
            walker.teleport_to(portal.destination());
            MoveOutcome::Teleported
        }
        Hit::Clear(_) => {
            walker.move_by(d);
            MoveOutcome::Moved
        }
    }
}

/// `true` if moving `previous → current` crosses the y-axis.
///
/// Either x changes sign, or the walker had stopped exactly on the axis and
/// now leaves it on the side opposite to where it came from
/// (`before_previous`).  With no position before `previous` there is no
/// touch-crossing.
pub(crate) fn crossed_y_axis(before_previous: Option<Point>, previous: Point, current: Point) -> bool {
    previous.x * current.x < 0.0
        || (previous.x == 0.0 && before_previous.is_some_and(|b| b.x * current.x < 0.0))
}

/// Per-run counters, before cross-run aggregation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunTally {
    pub sums:               DistanceSums,
    pub cutoff_sums:        Option<DistanceSums>,
    pub y_axis_crossings:   u64,
    pub unsuccessful_moves: u64,
    pub teleports:          u64,
    pub steps_to_exit:      Option<u64>,
    pub time_to_exit:       Option<Duration>,
    pub stuck:              bool,
}

/// Result of [`simulate_run`].  The walker is already detached from the
/// plane; it is handed back only for inspection.
#[derive(Debug)]
pub struct RunOutcome {
    pub run:    RunId,
    pub tally:  RunTally,
    pub steps:  Vec<StepStats>,
    pub walker: Walker,
}

/// Drive one fresh walker through `plane` for at most `config.steps` steps.
///
/// The run RNG is seeded from `(config.seed, run)`, so a run replays
/// identically regardless of what ran before it.
pub fn simulate_run<O: SessionObserver>(
    run:      RunId,
    spec:     &WalkerSpec,
    plane:    &mut Plane,
    config:   &SessionConfig,
    observer: &mut O,
) -> SimResult<RunOutcome> {
    let mut walker = spec
        .spawn(run.walker())
        .map_err(|source| SimError::Walker { run, source })?;
    plane.attach(walker.id());
    observer.on_run_start(run);

    let mut rng = WalkRng::new(config.seed, run);
    let started = Instant::now();
    let mut tally = RunTally::default();
    let mut steps = Vec::with_capacity(config.steps.min(1 << 16) as usize);
    let mut before_previous: Option<Point> = None;

    for step in 1..=config.steps {
        if !has_possible_moves(&walker, plane, &mut rng) {
            trace!(%run, step, position = %walker.position(), "walker has no unblocked move");
            tally.stuck = true;
            break;
        }

        let previous = walker.position();
        let d = walker.get_next_move(&mut rng);
        match step_walker(&mut walker, plane, d) {
            MoveOutcome::Blocked => tally.unsuccessful_moves += 1,
            MoveOutcome::Teleported => tally.teleports += 1,
            MoveOutcome::Moved => {}
        }

        let current = walker.position();
        if current != previous {
            tally.sums.record(current);
            if crossed_y_axis(before_previous, previous, current) {
                tally.y_axis_crossings += 1;
            }
            if tally.steps_to_exit.is_none() && walker.distance_from_origin() > EXIT_RADIUS {
                tally.steps_to_exit = Some(walker.steps());
                tally.time_to_exit = Some(started.elapsed());
            }
            before_previous = Some(previous);
        }

        let stats = StepStats::running(step, &tally.sums);
        observer.on_step(run, &stats);
        steps.push(stats);

        if step == config.n_steps {
            tally.cutoff_sums = Some(tally.sums);
        }
    }

    plane.detach(walker.id());
    debug!(
        %run,
        steps = steps.len(),
        position = %walker.position(),
        crossings = tally.y_axis_crossings,
        blocked = tally.unsuccessful_moves,
        stuck = tally.stuck,
        "run finished",
    );

    Ok(RunOutcome { run, tally, steps, walker })
}
