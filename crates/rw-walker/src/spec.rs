//! Reusable walker configuration.

use rw_core::{RwResult, WalkerId};

use crate::{DirectionWeights, Walker, WalkerKind};

/// Kind and weights of the walkers spawned for each run of a session.
///
/// A session creates a fresh [`Walker`] per run from the same spec; walker
/// state never carries over between runs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkerSpec {
    pub kind:    WalkerKind,
    pub weights: Option<DirectionWeights>,
}

impl WalkerSpec {
    pub fn new(kind: WalkerKind) -> Self {
        Self { kind, weights: None }
    }

    pub fn weighted(weights: DirectionWeights) -> Self {
        Self { kind: WalkerKind::WeightedDiscrete, weights: Some(weights) }
    }

    /// `true` when weights were supplied for a kind that does not use them.
    pub fn has_unused_weights(&self) -> bool {
        self.weights.is_some() && self.kind != WalkerKind::WeightedDiscrete
    }

    /// Construct a fresh walker at the origin.
    pub fn spawn(&self, id: WalkerId) -> RwResult<Walker> {
        let weights = match self.kind {
            WalkerKind::WeightedDiscrete => self.weights,
            _ => None,
        };
        Walker::new(id, self.kind, weights)
    }
}
