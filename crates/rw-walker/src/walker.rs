//! The `Walker` entity.
//!
//! # Invariants
//!
//! - `path.len() == steps + 1` at all times (the path starts at the origin).
//! - `position == *path.last()` at all times.
//!
//! Regular moves append to the path.  A portal jump ([`Walker::teleport_to`])
//! is not a step: it rewrites the last path entry in place, so both
//! invariants survive, and records the jump in the teleport log.  A jump
//! taken before the first regular move therefore replaces `path[0]`: the
//! path then starts at the portal destination, and the origin is only
//! recorded as the `from` of the first teleport.

use rand::distributions::{Distribution, WeightedIndex};

use rw_core::{Point, RwError, RwResult, WalkRng, WalkerId};

use crate::kind::{DirectionWeights, WalkerKind, AXIS_MOVES, MAX_VARIABLE_STEP, MIN_VARIABLE_STEP};

/// One portal jump, as recorded in [`Walker::teleports`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Teleport {
    /// Walker step count when the jump happened.
    pub step: u64,
    pub from: Point,
    pub to:   Point,
}

/// A single random walker.
#[derive(Clone, Debug)]
pub struct Walker {
    id:        WalkerId,
    kind:      WalkerKind,
    weights:   DirectionWeights,
    /// Pre-built sampler over the five weighted options; `None` unless
    /// `kind == WeightedDiscrete`.
    chooser:   Option<WeightedIndex<f64>>,
    position:  Point,
    steps:     u64,
    path:      Vec<Point>,
    teleports: Vec<Teleport>,
}

impl Walker {
    /// Create a walker at the origin.
    ///
    /// `weights` only matter for [`WalkerKind::WeightedDiscrete`]; `None`
    /// means uniform.
    pub fn new(id: WalkerId, kind: WalkerKind, weights: Option<DirectionWeights>) -> RwResult<Self> {
        let weights = weights.unwrap_or_default();
        let chooser = match kind {
            WalkerKind::WeightedDiscrete => Some(
                WeightedIndex::new(weights.as_array().iter().copied())
                    .map_err(|e| RwError::Config(format!("direction weights: {e}")))?,
            ),
            _ => None,
        };
        Ok(Self {
            id,
            kind,
            weights,
            chooser,
            position:  Point::ORIGIN,
            steps:     0,
            path:      vec![Point::ORIGIN],
            teleports: Vec::new(),
        })
    }

    // ── Move generation ───────────────────────────────────────────────────

    /// Propose a displacement according to this walker's kind.
    ///
    /// Does not mutate the walker; all randomness comes from `rng`.
    pub fn get_next_move(&self, rng: &mut WalkRng) -> Point {
        match self.kind {
            WalkerKind::Continuous => Point::from_polar(1.0, rng.angle()),
            WalkerKind::VariableStep => {
                let theta = rng.angle();
                let length = rng.gen_range(MIN_VARIABLE_STEP..=MAX_VARIABLE_STEP);
                Point::from_polar(length, theta)
            }
            WalkerKind::Discrete => *rng.choose(&AXIS_MOVES).unwrap_or(&AXIS_MOVES[0]),
            WalkerKind::WeightedDiscrete => {
                let choice = match &self.chooser {
                    Some(dist) => dist.sample(rng.inner()),
                    None => 0,
                };
                match AXIS_MOVES.get(choice) {
                    Some(&d) => d,
                    // Fifth option: straight back to the origin.
                    None => -self.position,
                }
            }
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Commit a displacement that the plane has already cleared.
    pub fn move_by(&mut self, d: Point) {
        self.position = self.position + d;
        self.steps += 1;
        self.path.push(self.position);
    }

    /// Place the walker at `to` without taking a step (portal jump).
    pub fn teleport_to(&mut self, to: Point) {
        self.teleports.push(Teleport { step: self.steps, from: self.position, to });
        self.position = to;
        if let Some(last) = self.path.last_mut() {
            *last = to;
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> WalkerId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> WalkerKind {
        self.kind
    }

    #[inline]
    pub fn weights(&self) -> &DirectionWeights {
        &self.weights
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Euclidean distance from the origin.
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.position.norm()
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn teleports(&self) -> &[Teleport] {
        &self.teleports
    }
}

impl std::fmt::Display for Walker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Walker at position {} after {} steps", self.position, self.steps)
    }
}
