//! `rw-plane` — obstacles, portals, and path intersection on an infinite plane.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`segment`] | `Segment`, closed segment–segment intersection              |
//! | [`plane`]   | `Obstacle`, `Portal`, `Hit`, `Plane`, `PlaneBuilder`        |
//! | [`moves`]   | `has_possible_moves` liveness check                         |
//! | [`parse`]   | `parse_obstacles`, `parse_portals`                          |
//! | [`error`]   | `PlaneError`, `PlaneResult<T>`                              |
//!
//! The plane only classifies a proposed move ([`Hit`]); applying the outcome
//! (reject, teleport, or commit) is the simulation loop's job.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod moves;
pub mod parse;
pub mod plane;
pub mod segment;

#[cfg(test)]
mod tests;

pub use error::{PlaneError, PlaneResult};
pub use moves::{has_possible_moves, CONTINUOUS_PROBES};
pub use parse::{parse_obstacles, parse_portals};
pub use plane::{Hit, Obstacle, Plane, PlaneBuilder, Portal};
pub use segment::Segment;
