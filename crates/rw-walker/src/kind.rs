//! Walker kinds and the direction weights of the weighted-discrete model.

use std::str::FromStr;

use rw_core::{Point, RwError, RwResult};

pub const UP:    Point = Point::new(0.0, 1.0);
pub const DOWN:  Point = Point::new(0.0, -1.0);
pub const RIGHT: Point = Point::new(1.0, 0.0);
pub const LEFT:  Point = Point::new(-1.0, 0.0);

/// The four axis-aligned unit moves, in weight order.
pub const AXIS_MOVES: [Point; 4] = [UP, DOWN, RIGHT, LEFT];

/// Step-length bounds of [`WalkerKind::VariableStep`] (inclusive).
pub const MIN_VARIABLE_STEP: f64 = 0.5;
pub const MAX_VARIABLE_STEP: f64 = 1.5;

// ── WalkerKind ────────────────────────────────────────────────────────────────

/// The stochastic move-generation model of a walker.
///
/// Codes 1–4 are the values accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkerKind {
    /// Unit step in a uniformly random direction.
    Continuous,
    /// Uniformly random direction, step length uniform in `[0.5, 1.5]`.
    VariableStep,
    /// Unit step along one of the four axis directions.
    Discrete,
    /// Axis step or jump back to the origin, chosen by [`DirectionWeights`].
    WeightedDiscrete,
}

impl WalkerKind {
    pub const ALL: [WalkerKind; 4] = [
        WalkerKind::Continuous,
        WalkerKind::VariableStep,
        WalkerKind::Discrete,
        WalkerKind::WeightedDiscrete,
    ];

    /// Map a command-line code (1–4) to a kind.
    pub fn from_code(code: u8) -> RwResult<Self> {
        match code {
            1 => Ok(WalkerKind::Continuous),
            2 => Ok(WalkerKind::VariableStep),
            3 => Ok(WalkerKind::Discrete),
            4 => Ok(WalkerKind::WeightedDiscrete),
            other => Err(RwError::Config(format!(
                "invalid walker type {other} (expected 1-4)"
            ))),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            WalkerKind::Continuous       => 1,
            WalkerKind::VariableStep     => 2,
            WalkerKind::Discrete         => 3,
            WalkerKind::WeightedDiscrete => 4,
        }
    }

    /// `true` for the two kinds whose move space is a continuum of directions.
    #[inline]
    pub fn is_continuous(self) -> bool {
        matches!(self, WalkerKind::Continuous | WalkerKind::VariableStep)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WalkerKind::Continuous       => "continuous",
            WalkerKind::VariableStep     => "variable-step",
            WalkerKind::Discrete         => "discrete",
            WalkerKind::WeightedDiscrete => "weighted-discrete",
        }
    }
}

impl std::fmt::Display for WalkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DirectionWeights ──────────────────────────────────────────────────────────

/// Selection weights for `[up, down, right, left, origin]`.
///
/// Always five strictly positive, finite values; construction validates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionWeights([f64; 5]);

impl DirectionWeights {
    pub const COUNT: usize = 5;

    pub fn new(weights: [f64; 5]) -> RwResult<Self> {
        if let Some(bad) = weights.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
            return Err(RwError::Config(format!(
                "direction weights must be positive, got {bad}"
            )));
        }
        if !weights.iter().sum::<f64>().is_finite() {
            return Err(RwError::Config("direction weights sum to a non-finite total".into()));
        }
        Ok(Self(weights))
    }

    pub fn from_slice(weights: &[f64]) -> RwResult<Self> {
        let array: [f64; 5] = weights.try_into().map_err(|_| {
            RwError::Config(format!(
                "expected {} direction weights, got {}",
                Self::COUNT,
                weights.len()
            ))
        })?;
        Self::new(array)
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 5] {
        &self.0
    }
}

impl Default for DirectionWeights {
    fn default() -> Self {
        Self([1.0; 5])
    }
}

impl FromStr for DirectionWeights {
    type Err = RwError;

    /// Parse `"w1,w2,w3,w4,w5"`.
    fn from_str(s: &str) -> RwResult<Self> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| RwError::Parse(format!("weight {part:?}: {e}")))
            })
            .collect::<RwResult<Vec<f64>>>()?;
        Self::from_slice(&values)
    }
}
