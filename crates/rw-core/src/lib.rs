//! `rw-core` — foundational types for the `rust_walk` random-walker simulator.
//!
//! This crate is a dependency of every other `rw-*` crate.  It has no `rw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RunId`, `WalkerId`                                   |
//! | [`point`]       | `Point` (planar `f64` coordinate / displacement)      |
//! | [`config`]      | `SessionConfig`                                       |
//! | [`rng`]         | `WalkRng` (per-run deterministic RNG)                 |
//! | [`error`]       | `RwError`, `RwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod point;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SessionConfig;
pub use error::{RwError, RwResult};
pub use ids::{RunId, WalkerId};
pub use point::Point;
pub use rng::WalkRng;
