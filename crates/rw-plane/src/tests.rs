//! Unit tests for rw-plane.

use rw_core::Point;

use crate::{Obstacle, Plane, PlaneBuilder, Portal};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Four obstacles forming a closed square of half-width 0.4 around the origin.
fn boxed_plane() -> Plane {
    let h = 0.4;
    PlaneBuilder::new()
        .obstacle(Obstacle::new(p(-h, -h), p(h, -h)))
        .obstacle(Obstacle::new(p(h, -h), p(h, h)))
        .obstacle(Obstacle::new(p(h, h), p(-h, h)))
        .obstacle(Obstacle::new(p(-h, h), p(-h, -h)))
        .build()
}

// ── Segment geometry ──────────────────────────────────────────────────────────

#[cfg(test)]
mod segment {
    use super::p;
    use crate::Segment;

    #[test]
    fn crossing_segments_meet_once() {
        let a = Segment::new(p(0.0, 0.0), p(4.0, 0.0));
        let b = Segment::new(p(2.0, -1.0), p(2.0, 1.0));
        assert_eq!(a.intersection_nearest(&b, a.start), Some(p(2.0, 0.0)));
    }

    #[test]
    fn disjoint_segments_do_not_meet() {
        let a = Segment::new(p(0.0, 0.0), p(1.0, 0.0));
        let b = Segment::new(p(2.0, -1.0), p(2.0, 1.0));
        assert_eq!(a.intersection_nearest(&b, a.start), None);
    }

    #[test]
    fn touching_endpoint_counts() {
        let a = Segment::new(p(0.0, 0.0), p(1.0, 0.0));
        let b = Segment::new(p(1.0, 0.0), p(1.0, 5.0));
        assert_eq!(a.intersection_nearest(&b, a.start), Some(p(1.0, 0.0)));
    }

    #[test]
    fn parallel_offset_segments_do_not_meet() {
        let a = Segment::new(p(0.0, 0.0), p(3.0, 0.0));
        let b = Segment::new(p(0.0, 1.0), p(3.0, 1.0));
        assert_eq!(a.intersection_nearest(&b, a.start), None);
    }

    #[test]
    fn collinear_overlap_returns_nearest_end() {
        let a = Segment::new(p(0.0, 0.0), p(4.0, 0.0));
        let b = Segment::new(p(3.0, 0.0), p(1.0, 0.0));
        assert_eq!(a.intersection_nearest(&b, a.start), Some(p(1.0, 0.0)));
        assert_eq!(a.intersection_nearest(&b, a.end), Some(p(3.0, 0.0)));
    }

    #[test]
    fn collinear_gap_does_not_meet() {
        let a = Segment::new(p(0.0, 0.0), p(1.0, 0.0));
        let b = Segment::new(p(2.0, 0.0), p(3.0, 0.0));
        assert_eq!(a.intersection_nearest(&b, a.start), None);
    }

    #[test]
    fn degenerate_segment_is_a_point_test() {
        let dot = Segment::new(p(1.0, 0.0), p(1.0, 0.0));
        let line = Segment::new(p(0.0, 0.0), p(2.0, 0.0));
        assert_eq!(dot.intersection_nearest(&line, dot.start), Some(p(1.0, 0.0)));
        let off = Segment::new(p(1.0, 0.5), p(1.0, 0.5));
        assert_eq!(off.intersection_nearest(&line, off.start), None);
    }

    #[test]
    fn contains() {
        let s = Segment::new(p(0.0, 0.0), p(2.0, 2.0));
        assert!(s.contains(p(1.0, 1.0)));
        assert!(s.contains(p(2.0, 2.0)));
        assert!(!s.contains(p(3.0, 3.0)));
        assert!(!s.contains(p(1.0, 0.0)));
    }
}

// ── check_intersection ────────────────────────────────────────────────────────

#[cfg(test)]
mod intersection {
    use super::{boxed_plane, p};
    use crate::{Hit, Obstacle, Plane, PlaneBuilder, Portal};

    #[test]
    fn empty_plane_returns_proposed() {
        let plane = Plane::empty();
        for (from, to) in [(p(0.0, 0.0), p(1.0, 0.0)), (p(-3.5, 2.0), p(-2.9, 2.7))] {
            assert_eq!(plane.check_intersection(from, to), Hit::Clear(to));
        }
    }

    #[test]
    fn obstacle_blocks_path() {
        let plane = PlaneBuilder::new()
            .obstacle(Obstacle::new(p(0.5, -1.0), p(0.5, 1.0)))
            .build();
        let hit = plane.check_intersection(p(0.0, 0.0), p(1.0, 0.0));
        assert_eq!(hit, Hit::Obstacle(&plane.obstacles()[0]));
        assert!(hit.is_blocked());
    }

    #[test]
    fn missed_obstacle_leaves_path_clear() {
        let plane = PlaneBuilder::new()
            .obstacle(Obstacle::new(p(0.5, 1.0), p(0.5, 2.0)))
            .build();
        assert_eq!(plane.check_intersection(p(0.0, 0.0), p(1.0, 0.0)), Hit::Clear(p(1.0, 0.0)));
    }

    #[test]
    fn portal_hit_is_tagged() {
        let plane = PlaneBuilder::new()
            .portal(Portal::new(p(2.0, 0.0), p(2.0, 2.0), p(10.0, 10.0)))
            .build();
        match plane.check_intersection(p(0.0, 0.0), p(4.0, 0.0)) {
            Hit::Portal(portal) => assert_eq!(portal.destination(), p(10.0, 10.0)),
            other => panic!("expected portal, got {other:?}"),
        }
    }

    #[test]
    fn nearest_segment_wins() {
        let plane = PlaneBuilder::new()
            .obstacle(Obstacle::new(p(3.0, -1.0), p(3.0, 1.0)))
            .portal(Portal::new(p(1.0, -1.0), p(1.0, 1.0), p(-5.0, -5.0)))
            .build();
        assert!(matches!(plane.check_intersection(p(0.0, 0.0), p(4.0, 0.0)), Hit::Portal(_)));
        // Walking the other way meets the obstacle first.
        assert!(matches!(plane.check_intersection(p(4.0, 0.0), p(0.0, 0.0)), Hit::Obstacle(_)));
    }

    #[test]
    fn equal_distance_prefers_obstacle() {
        let plane = PlaneBuilder::new()
            .portal(Portal::new(p(1.0, -1.0), p(1.0, 1.0), p(9.0, 9.0)))
            .obstacle(Obstacle::new(p(1.0, -2.0), p(1.0, 2.0)))
            .build();
        assert!(plane.check_intersection(p(0.0, 0.0), p(2.0, 0.0)).is_blocked());
    }

    #[test]
    fn equal_distance_keeps_insertion_order() {
        let plane = PlaneBuilder::new()
            .obstacle(Obstacle::new(p(1.0, -1.0), p(1.0, 1.0)))
            .obstacle(Obstacle::new(p(0.0, 0.0), p(2.0, 0.0)))
            .obstacle(Obstacle::new(p(1.0, -3.0), p(1.0, 3.0)))
            .build();
        // First and third cross at (1, 0); the second overlaps the path
        // starting at distance 0 and is therefore strictly nearest.
        assert_eq!(
            plane.check_intersection(p(0.0, 0.0), p(2.0, 0.0)),
            Hit::Obstacle(&plane.obstacles()[1])
        );
        let plane = PlaneBuilder::new()
            .obstacle(Obstacle::new(p(1.0, -1.0), p(1.0, 1.0)))
            .obstacle(Obstacle::new(p(1.0, -3.0), p(1.0, 3.0)))
            .build();
        assert_eq!(
            plane.check_intersection(p(0.0, 0.0), p(2.0, 0.0)),
            Hit::Obstacle(&plane.obstacles()[0])
        );
    }

    #[test]
    fn box_blocks_every_axis_move() {
        let plane = boxed_plane();
        for d in rw_walker::AXIS_MOVES {
            assert!(plane.check_intersection(p(0.0, 0.0), d).is_blocked());
        }
    }
}

// ── has_possible_moves ────────────────────────────────────────────────────────

#[cfg(test)]
mod liveness {
    use rw_core::{RunId, WalkRng, WalkerId};
    use rw_walker::{Walker, WalkerKind};

    use super::{boxed_plane, p};
    use crate::{has_possible_moves, Obstacle, Plane, PlaneBuilder, Portal};

    #[test]
    fn open_plane_always_has_moves() {
        let plane = Plane::empty();
        let mut rng = WalkRng::new(0, RunId(0));
        for kind in WalkerKind::ALL {
            let w = Walker::new(WalkerId(0), kind, None).unwrap();
            assert!(has_possible_moves(&w, &plane, &mut rng));
        }
    }

    #[test]
    fn enclosed_walker_is_stuck_for_every_kind() {
        let plane = boxed_plane();
        let mut rng = WalkRng::new(99, RunId(0));
        for kind in WalkerKind::ALL {
            let w = Walker::new(WalkerId(0), kind, None).unwrap();
            assert!(!has_possible_moves(&w, &plane, &mut rng), "{kind} should be stuck");
        }
    }

    #[test]
    fn portal_exit_is_a_possible_move() {
        let h = 0.4;
        let plane = PlaneBuilder::new()
            .obstacle(Obstacle::new(p(-h, -h), p(h, -h)))
            .obstacle(Obstacle::new(p(h, h), p(-h, h)))
            .obstacle(Obstacle::new(p(-h, h), p(-h, -h)))
            .portal(Portal::new(p(h, -h), p(h, h), p(20.0, 0.0)))
            .build();
        let mut rng = WalkRng::new(0, RunId(0));
        let w = Walker::new(WalkerId(0), WalkerKind::Discrete, None).unwrap();
        assert!(has_possible_moves(&w, &plane, &mut rng));
    }

    #[test]
    fn gap_in_box_leaves_walker_free() {
        // Walker boxed in at (5, 0) by a square of half-width 0.4 whose left
        // wall has a gap on the x-axis.
        let h = 0.4;
        let c = p(5.0, 0.0);
        let plane = PlaneBuilder::new()
            .obstacle(Obstacle::new(c + p(-h, 0.1), c + p(-h, h)))
            .obstacle(Obstacle::new(c + p(-h, -0.1), c + p(-h, -h)))
            .obstacle(Obstacle::new(c + p(-h, -h), c + p(h, -h)))
            .obstacle(Obstacle::new(c + p(h, -h), c + p(h, h)))
            .obstacle(Obstacle::new(c + p(h, h), c + p(-h, h)))
            .build();
        let mut w = Walker::new(WalkerId(0), WalkerKind::WeightedDiscrete, None).unwrap();
        w.move_by(c);
        let mut rng = WalkRng::new(0, RunId(0));
        // LEFT and the origin move both pass through the gap.
        assert!(has_possible_moves(&w, &plane, &mut rng));
    }
}

// ── Attachment ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod attachment {
    use rw_core::WalkerId;

    use crate::Plane;

    #[test]
    fn attach_and_detach() {
        let mut plane = Plane::empty();
        plane.attach(WalkerId(0));
        plane.attach(WalkerId(0));
        assert_eq!(plane.attached(), &[WalkerId(0)]);
        assert!(plane.detach(WalkerId(0)));
        assert!(!plane.detach(WalkerId(0)));
        assert!(plane.attached().is_empty());
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use rw_core::RwError;

    use super::p;
    use crate::{parse_obstacles, parse_portals, PlaneError};

    #[test]
    fn obstacles_in_groups_of_four() {
        let obs = parse_obstacles("-1,2,1,2, 3,-3,3,3").unwrap();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].start(), p(-1.0, 2.0));
        assert_eq!(obs[1].end(), p(3.0, 3.0));
    }

    #[test]
    fn portals_in_groups_of_six() {
        let portals = parse_portals("2,0,2,2,10,10").unwrap();
        assert_eq!(portals.len(), 1);
        assert_eq!(portals[0].destination(), p(10.0, 10.0));
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert!(parse_obstacles("").unwrap().is_empty());
        assert!(parse_portals("  ").unwrap().is_empty());
    }

    #[test]
    fn wrong_group_size_rejected() {
        let err = parse_obstacles("1,2,3").unwrap_err();
        assert_eq!(err, PlaneError::CoordinateCount { what: "obstacle", group: 4, got: 3 });
        assert!(parse_portals("1,2,3,4").is_err());
    }

    #[test]
    fn bad_number_rejected_as_parse_error() {
        let err = parse_obstacles("1,2,three,4").unwrap_err();
        assert!(matches!(err, PlaneError::InvalidNumber { .. }));
        assert!(matches!(RwError::from(err), RwError::Parse(_)));
        assert!(parse_obstacles("1,2,inf,4").is_err());
    }
}

#[test]
fn obstacles_and_portals_shared_by_plane() {
    let plane = PlaneBuilder::new()
        .obstacles(vec![Obstacle::new(p(0.0, 1.0), p(1.0, 1.0))])
        .portals(vec![Portal::new(p(2.0, 0.0), p(2.0, 2.0), p(10.0, 10.0))])
        .build();
    assert_eq!(plane.obstacles().len(), 1);
    assert_eq!(plane.portals().len(), 1);
    assert!(plane.attached().is_empty());
}
