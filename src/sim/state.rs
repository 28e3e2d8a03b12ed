//! Game state and core simulation types
//!
//! Everything the frame step reads or writes lives here.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::layout;
use crate::tuning::Tuning;

/// Ball state - following the paddle or in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Pinned above the paddle, waiting for launch input
    Idle,
    /// Moving under its own velocity
    InPlay,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    pub state: BallState,
}

impl Ball {
    pub fn new(paddle_x: f32, spawn_y: f32) -> Self {
        let mut ball = Self {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            state: BallState::Idle,
        };
        ball.pin(paddle_x, spawn_y);
        ball
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == BallState::Idle
    }

    /// Return to the paddle: idle, motionless, at the spawn point
    pub fn pin(&mut self, paddle_x: f32, spawn_y: f32) {
        self.state = BallState::Idle;
        self.vel = Vec3::ZERO;
        self.pos = Vec3::new(paddle_x, spawn_y, 0.0);
    }

    /// Leave the paddle straight along the launch axis
    pub fn launch(&mut self, speed: f32) {
        if self.is_idle() {
            self.vel = Vec3::new(0.0, speed, 0.0);
            self.state = BallState::InPlay;
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal offset of the paddle center
    pub x: f32,
    /// Flips on every processed move; gates the cached paddle transform
    pub moving: bool,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: 0.0,
            moving: true,
        }
    }
}

impl Paddle {
    pub fn nudge(&mut self, step: f32) {
        self.moving = !self.moving;
        self.x += step;
    }

    /// Keep |x| within `limit`
    pub fn clamp(&mut self, limit: f32) {
        self.x = self.x.clamp(-limit, limit);
    }
}

/// Damage progression of a block. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockState {
    Intact,
    Damaged,
    Destroyed,
}

/// A block in one of the fixed slots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub slot: usize,
    pub center: Vec3,
    pub half_extents: Vec2,
    pub hits_to_destroy: u8,
    pub hits_taken: u8,
    pub state: BlockState,
}

impl Block {
    pub fn new(slot: usize, center: Vec3, half_extents: Vec2, hits_to_destroy: u8) -> Self {
        Self {
            slot,
            center,
            half_extents,
            hits_to_destroy: hits_to_destroy.max(1),
            hits_taken: 0,
            state: BlockState::Intact,
        }
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.state == BlockState::Destroyed
    }

    /// Blocks that need more than one hit
    #[inline]
    pub fn is_multi_hit(&self) -> bool {
        self.hits_to_destroy > 1
    }

    /// Open collision rectangle in the x/y plane
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center.truncate(), self.half_extents)
    }

    /// Apply one hit. Returns the new state, or `None` if already destroyed.
    pub fn strike(&mut self) -> Option<BlockState> {
        if self.is_destroyed() {
            return None;
        }
        self.hits_taken += 1;
        self.state = if self.hits_taken >= self.hits_to_destroy {
            BlockState::Destroyed
        } else {
            BlockState::Damaged
        };
        Some(self.state)
    }
}

/// Something that happened during a tick (consumed by the relay and logs)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    BlockDamaged { slot: usize },
    BlockDestroyed { slot: usize },
    /// Ball x minus paddle x at contact
    PaddleHit { offset: f32 },
    WallBounce,
    BoundBounce,
    BallLost { lives: i32 },
    /// Debug reset returned the ball to the paddle
    BallReset,
    FieldCleared,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Never clamped; keeps counting down past zero
    pub lives: i32,
    pub score: u32,
    /// Tick counter
    pub frame: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Ordered by slot
    pub blocks: Vec<Block>,
    /// Events of the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        let paddle = Paddle::default();
        let ball = Ball::new(paddle.x, tuning.spawn_y);
        Self {
            lives: tuning.starting_lives,
            score: 0,
            frame: 0,
            paddle,
            ball,
            blocks: layout::standard_field(tuning),
            events: Vec::new(),
        }
    }

    pub fn remaining_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_destroyed()).count()
    }

    pub fn block(&self, slot: usize) -> Option<&Block> {
        self.blocks.iter().find(|b| b.slot == slot)
    }

    /// Was `slot` struck during the most recent tick
    pub fn hit_this_frame(&self, slot: usize) -> bool {
        self.events.iter().any(|e| {
            matches!(e, GameEvent::BlockDamaged { slot: s } | GameEvent::BlockDestroyed { slot: s } if *s == slot)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(hits: u8) -> Block {
        Block::new(0, Vec3::ZERO, Vec2::new(0.875, 0.25), hits)
    }

    #[test]
    fn test_one_hit_block() {
        let mut b = block(1);
        assert_eq!(b.strike(), Some(BlockState::Destroyed));
        assert_eq!(b.strike(), None);
        assert_eq!(b.hits_taken, 1);
    }

    #[test]
    fn test_two_hit_block() {
        let mut b = block(2);
        assert_eq!(b.strike(), Some(BlockState::Damaged));
        assert!(!b.is_destroyed());
        assert_eq!(b.strike(), Some(BlockState::Destroyed));
        assert_eq!(b.strike(), None);
    }

    #[test]
    fn test_zero_hits_treated_as_one() {
        let mut b = block(0);
        assert_eq!(b.strike(), Some(BlockState::Destroyed));
    }

    #[test]
    fn test_launch_only_from_idle() {
        let mut ball = Ball::new(1.0, 2.5);
        assert!(ball.is_idle());
        assert_eq!(ball.pos, Vec3::new(1.0, 2.5, 0.0));

        ball.launch(1.0);
        assert_eq!(ball.state, BallState::InPlay);
        assert_eq!(ball.vel, Vec3::new(0.0, 1.0, 0.0));

        ball.vel = Vec3::new(0.3, -1.0, 0.0);
        ball.launch(1.0);
        assert_eq!(ball.vel, Vec3::new(0.3, -1.0, 0.0));
    }

    #[test]
    fn test_paddle_nudge_toggles_moving() {
        let mut paddle = Paddle::default();
        assert!(paddle.moving);
        paddle.nudge(0.1);
        assert!(!paddle.moving);
        paddle.nudge(0.1);
        assert!(paddle.moving);
        assert!((paddle.x - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(&Tuning::midterm());
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.blocks.len(), crate::consts::SLOT_COUNT);
        assert_eq!(state.remaining_blocks(), crate::consts::SLOT_COUNT);
        assert!(state.ball.is_idle());
    }
}
