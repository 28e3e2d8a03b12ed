//! Box Breaker - frame-step core of a 16-block breakout game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (physics, collisions, scoring)
//! - `renderer`: Presentation relay toward an external mesh/draw backend
//! - `platform`: Input snapshots and frame clock
//! - `tuning`: Data-driven variant constants
//! - `game`: Explicit frame-loop context tying the above together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants shared by every tuning preset
pub mod consts {
    /// Number of fixed block slots in the field
    pub const SLOT_COUNT: usize = 16;

    /// Frame rate at which delta-time integration matches the fixed step
    pub const REFERENCE_HZ: f32 = 60.0;
    /// Clock gaps larger than this are clamped (window drags, breakpoints)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Lives at the start of a run
    pub const STARTING_LIVES: i32 = 3;

    /// Scoring unit that the progressive speedup formula divides by
    pub const SPEEDUP_SCORE_STEP: u32 = 100;
}
