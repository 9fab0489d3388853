//! Liveness check: can the walker still move at all?

use rw_core::{Point, WalkRng};
use rw_walker::{Walker, AXIS_MOVES};

use crate::Plane;

/// Random unit directions probed for continuous walkers once the fixed
/// candidate set is exhausted.
pub const CONTINUOUS_PROBES: usize = 100;

/// `true` if at least one move of `walker` is not blocked by an obstacle.
///
/// Probes the four axis unit moves and the return-to-origin move.  A
/// zero-length candidate (the origin move while standing on the origin) is
/// skipped; it is not a move.  Continuous walkers additionally probe
/// [`CONTINUOUS_PROBES`] random unit directions drawn from `rng`.  Portal
/// hits count as possible moves.
pub fn has_possible_moves(walker: &Walker, plane: &Plane, rng: &mut WalkRng) -> bool {
    let current = walker.position();
    let mut fixed = AXIS_MOVES.iter().copied().chain(std::iter::once(-current));

    let open = |d: Point| !d.is_zero() && !plane.check_intersection(current, current + d).is_blocked();

    if fixed.any(&open) {
        return true;
    }

    if walker.kind().is_continuous() {
        return (0..CONTINUOUS_PROBES).any(|_| open(Point::from_polar(1.0, rng.angle())));
    }

    false
}
