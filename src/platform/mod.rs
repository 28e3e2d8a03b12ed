//! Platform abstraction layer
//!
//! Handles the two collaborators the frame loop polls:
//! - Input (key-down state per action, edge detection across frames)
//! - Time (frame deltas from a monotonic clock)

pub mod input;
pub mod time;

pub use input::{Action, InputSnapshot, InputSource, InputTracker};
pub use time::{Clock, FrameTimer, ManualClock, SystemClock};
