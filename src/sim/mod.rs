//! Per-frame simulation module
//!
//! All gameplay logic lives here:
//! - One step per rendered frame
//! - Stable iteration order (by block slot)
//! - No rendering or platform dependencies beyond the input trait

pub mod autopilot;
pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{BallProbe, BlockContact, Rect, probe_block};
pub use layout::{SLOT_CENTERS, TWO_HIT_SLOTS, standard_field};
pub use state::{Ball, BallState, Block, BlockState, GameEvent, GameState, Paddle};
pub use tick::{TickInput, tick};
