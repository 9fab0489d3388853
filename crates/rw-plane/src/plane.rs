//! The plane: static obstacles and portals plus the walkers moving on it.
//!
//! Obstacles and portals are fixed when the plane is built and shared
//! read-only by every run of a session.  Only the attached-walker set
//! changes between runs.

use rw_core::{Point, WalkerId};

use crate::Segment;

// ── Obstacle / Portal ─────────────────────────────────────────────────────────

/// An impassable line segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    segment: Segment,
}

impl Obstacle {
    pub fn new(start: Point, end: Point) -> Self {
        Self { segment: Segment::new(start, end) }
    }

    #[inline]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.segment.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.segment.end
    }
}

/// A line segment that sends any walker crossing it to `destination`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portal {
    segment:     Segment,
    destination: Point,
}

impl Portal {
    pub fn new(start: Point, end: Point, destination: Point) -> Self {
        Self { segment: Segment::new(start, end), destination }
    }

    #[inline]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.segment.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.segment.end
    }

    #[inline]
    pub fn destination(&self) -> Point {
        self.destination
    }
}

// ── Hit ───────────────────────────────────────────────────────────────────────

/// Outcome of [`Plane::check_intersection`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Hit<'a> {
    /// Nothing in the way; carries the proposed position unchanged.
    Clear(Point),
    /// The nearest segment on the path is an obstacle.
    Obstacle(&'a Obstacle),
    /// The nearest segment on the path is a portal.
    Portal(&'a Portal),
}

impl Hit<'_> {
    /// `true` only for obstacle hits: the move cannot happen at all.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Hit::Obstacle(_))
    }
}

// ── Plane ─────────────────────────────────────────────────────────────────────

/// Obstacles, portals, and the set of walkers currently on the plane.
///
/// Do not construct directly; use [`PlaneBuilder`] (or [`Plane::empty`]).
#[derive(Clone, Debug, Default)]
pub struct Plane {
    obstacles: Vec<Obstacle>,
    portals:   Vec<Portal>,
    walkers:   Vec<WalkerId>,
}

impl Plane {
    /// A plane with no obstacles or portals.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }

    // ── Intersection ──────────────────────────────────────────────────────

    /// Test the straight path `current → proposed` against every obstacle
    /// and portal and report the one met first.
    ///
    /// "First" means the intersection point closest to `current`.  A
    /// candidate replaces the best so far only when strictly closer, so on
    /// exact ties the earliest segment wins: obstacles before portals, each
    /// in insertion order.
    pub fn check_intersection(&self, current: Point, proposed: Point) -> Hit<'_> {
        let path = Segment::new(current, proposed);
        let mut best: Option<(f64, Hit<'_>)> = None;

        let obstacle_hits = self
            .obstacles
            .iter()
            .filter_map(|o| path.intersection_nearest(o.segment(), current).map(|p| (p, Hit::Obstacle(o))));
        let portal_hits = self
            .portals
            .iter()
            .filter_map(|g| path.intersection_nearest(g.segment(), current).map(|p| (p, Hit::Portal(g))));

        for (point, hit) in obstacle_hits.chain(portal_hits) {
            let d = current.distance_sq(point);
            if best.as_ref().is_none_or(|(best_d, _)| d < *best_d) {
                best = Some((d, hit));
            }
        }

        match best {
            Some((_, hit)) => hit,
            None => Hit::Clear(proposed),
        }
    }

    // ── Walker attachment ─────────────────────────────────────────────────

    /// Put a walker on the plane.  Attaching the same walker twice is a no-op.
    pub fn attach(&mut self, walker: WalkerId) {
        if !self.walkers.contains(&walker) {
            self.walkers.push(walker);
        }
    }

    /// Take a walker off the plane.  Returns `false` if it was not attached.
    pub fn detach(&mut self, walker: WalkerId) -> bool {
        match self.walkers.iter().position(|&w| w == walker) {
            Some(i) => {
                self.walkers.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn attached(&self) -> &[WalkerId] {
        &self.walkers
    }
}

// ── PlaneBuilder ──────────────────────────────────────────────────────────────

/// Incremental builder for [`Plane`].
///
/// # Example
///
/// ```rust
/// use rw_core::Point;
/// use rw_plane::{Obstacle, PlaneBuilder, Portal};
///
/// let plane = PlaneBuilder::new()
///     .obstacle(Obstacle::new(Point::new(-1.0, 2.0), Point::new(1.0, 2.0)))
///     .portal(Portal::new(Point::new(2.0, 0.0), Point::new(2.0, 2.0), Point::new(10.0, 10.0)))
///     .build();
/// assert_eq!(plane.obstacles().len(), 1);
/// assert_eq!(plane.portals().len(), 1);
/// ```
#[derive(Default)]
pub struct PlaneBuilder {
    obstacles: Vec<Obstacle>,
    portals:   Vec<Portal>,
}

impl PlaneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn portal(mut self, portal: Portal) -> Self {
        self.portals.push(portal);
        self
    }

    pub fn obstacles(mut self, obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    pub fn portals(mut self, portals: impl IntoIterator<Item = Portal>) -> Self {
        self.portals.extend(portals);
        self
    }

    pub fn build(self) -> Plane {
        Plane {
            obstacles: self.obstacles,
            portals:   self.portals,
            walkers:   Vec::new(),
        }
    }
}
