//! Attract-mode driver
//!
//! Plays the game through the same `InputSource` seam a keyboard uses, so a
//! demo run exercises exactly the code path a player does. Seeded, so two
//! runs with the same seed press the same keys.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameEvent, GameState};
use crate::platform::{Action, InputSnapshot, InputSource};

/// Frames to wait on the paddle before launching
const LAUNCH_DELAY_FRAMES: std::ops::Range<u32> = 20..90;
/// Largest deliberate miss-aim from paddle center
const MAX_AIM_OFFSET: f32 = 1.2;
/// Paddle stops chasing inside this distance
const DEADBAND: f32 = 0.05;
/// Ball this far from the origin has left the field for good
const ESCAPE_DISTANCE: f32 = 12.0;

pub struct Autopilot {
    rng: Pcg32,
    launch_delay: u32,
    aim_offset: f32,
    keys: InputSnapshot,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let launch_delay = rng.random_range(LAUNCH_DELAY_FRAMES);
        let aim_offset = rng.random_range(-MAX_AIM_OFFSET..MAX_AIM_OFFSET);
        Self {
            rng,
            launch_delay,
            aim_offset,
            keys: InputSnapshot::default(),
        }
    }

    /// Decide which keys are down for the coming frame
    pub fn observe(&mut self, state: &GameState) {
        let mut keys = InputSnapshot::default();
        let ball = &state.ball;

        if state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::PaddleHit { .. }))
        {
            self.aim_offset = self.rng.random_range(-MAX_AIM_OFFSET..MAX_AIM_OFFSET);
        }

        if ball.is_idle() {
            if self.launch_delay == 0 {
                keys = keys.with(Action::Launch);
                self.launch_delay = self.rng.random_range(LAUNCH_DELAY_FRAMES);
            } else {
                self.launch_delay -= 1;
            }
        } else if ball.pos.x.abs() > ESCAPE_DISTANCE || ball.pos.y.abs() > ESCAPE_DISTANCE {
            log::debug!("Ball escaped at {:?}, resetting", ball.pos);
            keys = keys.with(Action::DebugReset);
        } else {
            // Left moves the paddle toward +x
            let target = ball.pos.x + self.aim_offset;
            if target > state.paddle.x + DEADBAND {
                keys = keys.with(Action::Left);
            } else if target < state.paddle.x - DEADBAND {
                keys = keys.with(Action::Right);
            }
        }

        self.keys = keys;
    }
}

impl InputSource for Autopilot {
    fn is_action_down(&self, action: Action) -> bool {
        self.keys.is_down(action)
    }
}
