//! Collision tests for the block grid, paddle and play-field bounds
//!
//! The ball is not tested as a box. Four sample corners are checked against
//! each block's open rectangle, and the edge names are swapped relative to
//! screen left/right. Both quirks shape how the game plays, so they stay.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Axis-aligned rectangle in the x/y plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Open interval on x
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        self.min.x < x && x < self.max.x
    }

    /// Open interval on y
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        self.min.y < y && y < self.max.y
    }

    /// Strictly inside; points on an edge are outside
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.spans_x(p.x) && self.spans_y(p.y)
    }
}

/// The four edges sampled from a ball position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallProbe {
    /// `x + half_width`
    pub left: f32,
    /// `x - half_width`
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BallProbe {
    pub fn new(pos: Vec3, tuning: &Tuning) -> Self {
        Self {
            left: pos.x + tuning.ball_half_width,
            right: pos.x - tuning.ball_half_width,
            top: pos.y + tuning.ball_top_offset,
            bottom: pos.y + tuning.ball_bottom_offset,
        }
    }

    /// left×top, left×bottom, right×top, right×bottom
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.left, self.bottom),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
        ]
    }
}

/// Result of probing one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockContact {
    /// Some corner is inside the block
    pub hit: bool,
    /// The horizontal edges are not both inside the block's x-span
    pub side: bool,
    /// The vertical edges are not both inside the block's y-span
    pub vertical: bool,
}

impl BlockContact {
    pub fn miss() -> Self {
        Self {
            hit: false,
            side: false,
            vertical: false,
        }
    }
}

/// Four-corner overlap test against a block rectangle
pub fn probe_block(probe: &BallProbe, rect: &Rect) -> BlockContact {
    let hit = probe.corners().iter().any(|&c| rect.contains(c));
    if !hit {
        return BlockContact::miss();
    }
    BlockContact {
        hit,
        side: !(rect.spans_x(probe.left) && rect.spans_x(probe.right)),
        vertical: !(rect.spans_y(probe.top) && rect.spans_y(probe.bottom)),
    }
}

/// Ball over the paddle (closed x-interval) with its band straddling the paddle line
pub fn paddle_contact(ball_pos: Vec3, paddle_x: f32, tuning: &Tuning) -> bool {
    let over_paddle = (ball_pos.x - paddle_x).abs() <= tuning.paddle_half_width;
    let straddles = ball_pos.y - tuning.ball_band < tuning.paddle_y
        && tuning.paddle_y < ball_pos.y + tuning.ball_band;
    over_paddle && straddles
}

/// Past either side wall
#[inline]
pub fn beyond_side_wall(x: f32, wall_x: f32) -> bool {
    x > wall_x || x < -wall_x
}

/// Past a vertical bound; the sign of `bound` picks the direction
#[inline]
pub fn beyond_bound(y: f32, bound: f32) -> bool {
    if bound >= 0.0 { y > bound } else { y < bound }
}
