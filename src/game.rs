//! Frame-loop context
//!
//! Owns everything that persists between frames. The window loop calls
//! [`Game::frame`] once per iteration: input sampling, simulation and
//! presentation, always in that order.

use crate::platform::{Clock, FrameTimer, InputSource, InputTracker};
use crate::renderer::{MeshFactory, Renderer, Scene};
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

pub struct Game {
    pub state: GameState,
    pub tuning: Tuning,
    tracker: InputTracker,
    scene: Scene,
    timer: FrameTimer,
}

impl Game {
    /// Build the field and every drawable; `meshes` is not needed afterwards
    pub fn new(tuning: Tuning, meshes: &mut impl MeshFactory, clock: &impl Clock) -> Self {
        let state = GameState::new(&tuning);
        let scene = Scene::build(meshes, &state, &tuning);
        log::info!(
            "New game: {} blocks, {} lives, divisor {}",
            state.blocks.len(),
            state.lives,
            tuning.speed_divisor
        );
        Self {
            state,
            tuning,
            tracker: InputTracker::default(),
            scene,
            timer: FrameTimer::new(clock),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Run one frame and return its events
    pub fn frame(
        &mut self,
        input: &impl InputSource,
        clock: &impl Clock,
        renderer: &mut impl Renderer,
    ) -> &[GameEvent] {
        self.tracker.update(input);
        let dt = self.timer.delta(clock);

        let tick_input = self.tracker.tick_input();
        tick(&mut self.state, &tick_input, &self.tuning, dt);

        for event in &self.state.events {
            log::trace!("frame {}: {event:?}", self.state.frame);
        }

        self.scene.relay(&self.state, renderer);
        &self.state.events
    }

    pub fn is_cleared(&self) -> bool {
        self.state.remaining_blocks() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Action, InputSnapshot, ManualClock};
    use crate::renderer::{BoxRecorder, FrameRecorder};

    #[test]
    fn test_frame_runs_input_sim_and_relay() {
        let clock = ManualClock::new(0.0);
        let mut meshes = BoxRecorder::new();
        let mut game = Game::new(Tuning::midterm(), &mut meshes, &clock);
        let mut frame = FrameRecorder::new();

        clock.advance(1.0 / 60.0);
        let events = game
            .frame(&InputSnapshot::default().with(Action::Launch), &clock, &mut frame)
            .to_vec();
        assert_eq!(events, vec![GameEvent::Launched]);
        assert!(!game.state.ball.is_idle());
        assert_eq!(frame.count_of(game.scene().ball), 1);
        assert_eq!(frame.count_of(game.scene().paddle), 1);
    }
}
