//! Fluent builder for constructing a [`Session`].

use tracing::warn;

use rw_core::{SessionConfig, WalkerId};
use rw_plane::{Obstacle, Plane, PlaneBuilder, Portal};
use rw_walker::WalkerSpec;

use crate::{Session, SimResult};

/// Fluent builder for [`Session`].
///
/// # Required inputs
///
/// - [`SessionConfig`]: step budget, run count, statistics cutoff, seed
/// - [`WalkerSpec`]: walker kind and optional direction weights
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default        |
/// |-------------------|----------------|
/// | `.obstacles(v)`   | no obstacles   |
/// | `.portals(v)`     | no portals     |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(config, WalkerSpec::new(WalkerKind::Discrete))
///     .obstacles(parse_obstacles("-1,2,1,2")?)
///     .build()?;
/// let report = session.run(&mut NoopObserver)?;
/// ```
pub struct SessionBuilder {
    config: SessionConfig,
    walker: WalkerSpec,
    plane:  PlaneBuilder,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig, walker: WalkerSpec) -> Self {
        Self { config, walker, plane: PlaneBuilder::new() }
    }

    /// Add obstacles (appended in order; order breaks equal-distance ties).
    pub fn obstacles(mut self, obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        self.plane = self.plane.obstacles(obstacles);
        self
    }

    /// Add portals (appended in order).
    pub fn portals(mut self, portals: impl IntoIterator<Item = Portal>) -> Self {
        self.plane = self.plane.portals(portals);
        self
    }

    /// Validate the configuration and walker spec and return a ready-to-run
    /// [`Session`].
    pub fn build(self) -> SimResult<Session> {
        self.config.validate()?;

        // Fail fast on a walker spec that cannot produce walkers.
        self.walker.spawn(WalkerId(0))?;
        if self.walker.has_unused_weights() {
            warn!(kind = %self.walker.kind, "direction weights are ignored for this walker kind");
        }

        let plane: Plane = self.plane.build();
        Ok(Session { config: self.config, walker: self.walker, plane })
    }
}
