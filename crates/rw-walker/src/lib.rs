//! `rw-walker` — random walker state and move generation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`kind`]     | `WalkerKind`, `DirectionWeights`, direction constants      |
//! | [`walker`]   | `Walker`, `Teleport`                                       |
//! | [`spec`]     | `WalkerSpec` (reusable kind + weights configuration)      |
//!
//! A walker never moves itself: [`Walker::get_next_move`] only proposes a
//! displacement.  The simulation loop checks it against the plane and then
//! calls [`Walker::move_by`] or [`Walker::teleport_to`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.  |

pub mod kind;
pub mod spec;
pub mod walker;


pub use kind::{DirectionWeights, WalkerKind, AXIS_MOVES, DOWN, LEFT, RIGHT, UP};
pub use spec::WalkerSpec;
pub use walker::{Teleport, Walker};
