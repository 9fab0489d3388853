//! Comma-separated coordinate lists for obstacles and portals.
//!
//! # Format
//!
//! Obstacles: four numbers per segment, `x1,y1,x2,y2`.
//!
//! ```text
//! -1,2,1,2,3,-3,3,3
//! ```
//!
//! Portals: six numbers per portal, `x1,y1,x2,y2,xd,yd` where `(xd, yd)` is
//! the destination.
//!
//! Whitespace around values is ignored.  An empty (or all-whitespace) string
//! yields an empty list.

use rw_core::Point;

use crate::{Obstacle, PlaneError, PlaneResult, Portal};

const OBSTACLE_GROUP: usize = 4;
const PORTAL_GROUP:   usize = 6;

/// Parse `x1,y1,x2,y2[,...]` into obstacles.
pub fn parse_obstacles(s: &str) -> PlaneResult<Vec<Obstacle>> {
    let coords = parse_coords(s, "obstacle", OBSTACLE_GROUP)?;
    Ok(coords
        .chunks_exact(OBSTACLE_GROUP)
        .map(|c| Obstacle::new(Point::new(c[0], c[1]), Point::new(c[2], c[3])))
        .collect())
}

/// Parse `x1,y1,x2,y2,xd,yd[,...]` into portals.
pub fn parse_portals(s: &str) -> PlaneResult<Vec<Portal>> {
    let coords = parse_coords(s, "portal", PORTAL_GROUP)?;
    Ok(coords
        .chunks_exact(PORTAL_GROUP)
        .map(|c| {
            Portal::new(
                Point::new(c[0], c[1]),
                Point::new(c[2], c[3]),
                Point::new(c[4], c[5]),
            )
        })
        .collect())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_coords(s: &str, what: &'static str, group: usize) -> PlaneResult<Vec<f64>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    let coords = s
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| PlaneError::InvalidNumber {
                    value:  part.to_string(),
                    reason: format!("not a finite {what} coordinate"),
                })
        })
        .collect::<PlaneResult<Vec<f64>>>()?;

    if coords.len() % group != 0 {
        return Err(PlaneError::CoordinateCount { what, group, got: coords.len() });
    }
    Ok(coords)
}
