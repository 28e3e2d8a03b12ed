//! Frame step
//!
//! One call per rendered frame. Order is fixed: paddle input, ball
//! integration, block collisions, then paddle, walls and the vertical bound.
//! Collision response reads the position integrated earlier in the same
//! frame, so the stages must not be reordered.

use super::collision::{BallProbe, beyond_bound, beyond_side_wall, paddle_contact, probe_block};
use super::state::{BlockState, GameEvent, GameState};
use crate::consts::MAX_FRAME_DT;
use crate::tuning::{BoundResponse, Integration, ReflectionMode, Tuning};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held this frame; moves the paddle toward +x
    pub move_left: bool,
    /// Held this frame; moves the paddle toward -x
    pub move_right: bool,
    /// Pressed this frame; leaves the paddle if idle
    pub launch: bool,
    /// Pressed this frame; returns the ball to the paddle without costing a life
    pub debug_reset: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    state.events.clear();
    state.frame += 1;

    update_paddle(state, input, tuning);

    if input.debug_reset && !state.ball.is_idle() {
        state.ball.pin(state.paddle.x, tuning.spawn_y);
        state.events.push(GameEvent::BallReset);
        log::debug!("Ball reset to paddle at frame {}", state.frame);
    }

    if input.launch && state.ball.is_idle() {
        state.ball.pin(state.paddle.x, tuning.spawn_y);
        state.ball.launch(tuning.launch_speed);
        state.events.push(GameEvent::Launched);
    }

    integrate(state, tuning, dt);

    if state.ball.is_idle() {
        return;
    }

    resolve_blocks(state, tuning);
    resolve_paddle(state, tuning);
    resolve_walls(state, tuning);
    resolve_bound(state, tuning);
}

fn update_paddle(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    // +x is screen left under the fixed camera
    if input.move_left {
        state.paddle.nudge(tuning.paddle_step);
    }
    if input.move_right {
        state.paddle.nudge(-tuning.paddle_step);
    }
    state.paddle.clamp(tuning.paddle_limit());
}

/// Position update. Velocity never decays; only collisions change it.
fn integrate(state: &mut GameState, tuning: &Tuning, dt: f32) {
    if state.ball.is_idle() {
        state.ball.pin(state.paddle.x, tuning.spawn_y);
        return;
    }

    let scale = match tuning.integration {
        Integration::FixedStep => 1.0,
        Integration::DeltaTime { reference_hz } => dt.clamp(0.0, MAX_FRAME_DT) * reference_hz,
    };
    let speedup = tuning.speedup(state.score);
    state.ball.pos -= state.ball.vel / tuning.speed_divisor * speedup * scale;
}

fn resolve_blocks(state: &mut GameState, tuning: &Tuning) {
    let probe = BallProbe::new(state.ball.pos, tuning);
    let mut destroyed_any = false;

    for block in state.blocks.iter_mut() {
        if block.is_destroyed() {
            continue;
        }
        let contact = probe_block(&probe, &block.rect());
        if !contact.hit {
            continue;
        }

        match block.strike() {
            Some(BlockState::Destroyed) => {
                state.score = state.score.saturating_add(tuning.score_unit);
                state.events.push(GameEvent::BlockDestroyed { slot: block.slot });
                destroyed_any = true;
                log::debug!("Block {} destroyed, score {}", block.slot, state.score);
            }
            Some(BlockState::Damaged) => {
                if tuning.score_on_damage {
                    state.score = state.score.saturating_add(tuning.score_unit);
                }
                state.events.push(GameEvent::BlockDamaged { slot: block.slot });
                log::debug!("Block {} damaged", block.slot);
            }
            _ => {}
        }

        match tuning.reflection {
            ReflectionMode::Exclusive => {
                if contact.side {
                    state.ball.vel.x = -state.ball.vel.x;
                } else if contact.vertical {
                    state.ball.vel.y = -state.ball.vel.y;
                }
            }
            ReflectionMode::Independent => {
                if contact.side {
                    state.ball.vel.x = -state.ball.vel.x;
                }
                if contact.vertical {
                    state.ball.vel.y = -state.ball.vel.y;
                }
            }
        }
    }

    if destroyed_any && state.remaining_blocks() == 0 {
        state.events.push(GameEvent::FieldCleared);
        log::info!("Field cleared at frame {} with score {}", state.frame, state.score);
    }
}

fn resolve_paddle(state: &mut GameState, tuning: &Tuning) {
    let ball = &mut state.ball;
    if !paddle_contact(ball.pos, state.paddle.x, tuning) {
        return;
    }
    // The field lies toward -y; a negative y velocity carries the ball to +y
    if tuning.paddle_one_way && ball.vel.y >= 0.0 {
        return;
    }

    let offset = ball.pos.x - state.paddle.x;
    ball.vel.y = -ball.vel.y;
    ball.vel.x = -offset;
    state.events.push(GameEvent::PaddleHit { offset });
}

fn resolve_walls(state: &mut GameState, tuning: &Tuning) {
    if beyond_side_wall(state.ball.pos.x, tuning.side_wall_x) {
        state.ball.vel.x = -state.ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }
}

fn resolve_bound(state: &mut GameState, tuning: &Tuning) {
    let bound = tuning.vertical_bound;
    if !beyond_bound(state.ball.pos.y, bound.y) {
        return;
    }
    match bound.response {
        BoundResponse::Bounce => {
            state.ball.vel.y = -state.ball.vel.y;
            state.events.push(GameEvent::BoundBounce);
        }
        BoundResponse::LoseBall => {
            state.lives -= 1;
            state.ball.pin(state.paddle.x, tuning.spawn_y);
            state.events.push(GameEvent::BallLost { lives: state.lives });
            log::info!("Ball lost, {} lives left", state.lives);
        }
    }
}
