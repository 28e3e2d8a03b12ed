//! Scene handles and the per-frame relay

use glam::{Mat4, Vec3};

use super::digits::{GLYPH_ADVANCE, glyph_masks, lit_segments, segment_boxes};
use super::{DrawableHandle, MeshFactory, Renderer};
use crate::sim::{BlockState, GameState};
use crate::tuning::{BoundResponse, Tuning};

/// Depth half extent of block meshes
const BLOCK_DEPTH: f32 = 0.05;
/// Damage overlay sits just in front of the block face
const OVERLAY_Z: f32 = BLOCK_DEPTH + 0.01;
const PADDLE_HALF_HEIGHT: f32 = 0.25;
const WALL_HALF_THICKNESS: f32 = 0.25;
const WALL_HALF_LENGTH: f32 = 7.5;

/// HUD glyph origins
const SCORE_ORIGIN: Vec3 = Vec3::new(-6.0, -7.5, 0.0);
const LIVES_ORIGIN: Vec3 = Vec3::new(5.0, -7.5, 0.0);

#[derive(Debug, Clone)]
struct BlockDrawables {
    slot: usize,
    body: DrawableHandle,
    /// Damage overlay, multi-hit blocks only
    overlay: Option<DrawableHandle>,
}

/// Every drawable the game uses, created once before the loop
#[derive(Debug, Clone)]
pub struct Scene {
    blocks: Vec<BlockDrawables>,
    pub paddle: DrawableHandle,
    pub ball: DrawableHandle,
    pub walls: Vec<DrawableHandle>,
    /// a..g
    pub segments: [DrawableHandle; 7],
    /// Recomputed only on frames where `paddle.moving` is set
    paddle_transform: Mat4,
}

impl Scene {
    pub fn build(meshes: &mut impl MeshFactory, state: &GameState, tuning: &Tuning) -> Self {
        let blocks = state
            .blocks
            .iter()
            .map(|block| {
                let half = block.half_extents.extend(BLOCK_DEPTH);
                let body = meshes.make_box(block.center, half);
                let overlay = block.is_multi_hit().then(|| {
                    let face = block.center + Vec3::Z * OVERLAY_Z;
                    meshes.make_box(face, block.half_extents.extend(0.0))
                });
                BlockDrawables {
                    slot: block.slot,
                    body,
                    overlay,
                }
            })
            .collect();

        let paddle = meshes.make_box(
            Vec3::new(0.0, tuning.paddle_y, 0.0),
            Vec3::new(tuning.paddle_half_width, PADDLE_HALF_HEIGHT, PADDLE_HALF_HEIGHT),
        );

        // Ball mesh covers the probed band so what is drawn is what collides
        let ball_mid = (tuning.ball_top_offset + tuning.ball_bottom_offset) / 2.0;
        let ball_half_height = (tuning.ball_top_offset - tuning.ball_bottom_offset).abs() / 2.0;
        let ball = meshes.make_box(
            Vec3::new(0.0, ball_mid, 0.0),
            Vec3::new(tuning.ball_half_width, ball_half_height, tuning.ball_half_width),
        );

        let wall_x = tuning.side_wall_x + WALL_HALF_THICKNESS;
        let side_half = Vec3::new(WALL_HALF_THICKNESS, WALL_HALF_LENGTH, WALL_HALF_THICKNESS);
        let mut walls = vec![
            meshes.make_box(Vec3::new(wall_x, 0.0, 0.0), side_half),
            meshes.make_box(Vec3::new(-wall_x, 0.0, 0.0), side_half),
        ];
        let bound = tuning.vertical_bound;
        if bound.response == BoundResponse::Bounce {
            let y = bound.y + bound.y.signum() * WALL_HALF_THICKNESS;
            walls.push(meshes.make_box(
                Vec3::new(0.0, y, 0.0),
                Vec3::new(WALL_HALF_LENGTH, WALL_HALF_THICKNESS, WALL_HALF_THICKNESS),
            ));
        }

        let segments = segment_boxes().map(|(center, half)| meshes.make_box(center, half));

        Self {
            blocks,
            paddle,
            ball,
            walls,
            segments,
            paddle_transform: Mat4::from_translation(Vec3::new(state.paddle.x, 0.0, 0.0)),
        }
    }

    pub fn block_body(&self, slot: usize) -> Option<DrawableHandle> {
        self.blocks.iter().find(|b| b.slot == slot).map(|b| b.body)
    }

    pub fn block_overlay(&self, slot: usize) -> Option<DrawableHandle> {
        self.blocks.iter().find(|b| b.slot == slot).and_then(|b| b.overlay)
    }

    /// Submit this frame's draws: blocks, paddle, ball, walls, HUD
    pub fn relay(&mut self, state: &GameState, renderer: &mut impl Renderer) {
        for (drawables, block) in self.blocks.iter().zip(&state.blocks) {
            // A block struck this frame skips one draw, even if it survives
            if block.is_destroyed() || state.hit_this_frame(block.slot) {
                continue;
            }
            renderer.submit(Mat4::IDENTITY, drawables.body);
            if block.state == BlockState::Damaged {
                if let Some(overlay) = drawables.overlay {
                    renderer.submit(Mat4::IDENTITY, overlay);
                }
            }
        }

        if state.paddle.moving {
            self.paddle_transform = Mat4::from_translation(Vec3::new(state.paddle.x, 0.0, 0.0));
        }
        renderer.submit(self.paddle_transform, self.paddle);

        renderer.submit(Mat4::from_translation(state.ball.pos), self.ball);

        for &wall in &self.walls {
            renderer.submit(Mat4::IDENTITY, wall);
        }

        self.relay_number(state.score as i64, SCORE_ORIGIN, renderer);
        self.relay_number(state.lives as i64, LIVES_ORIGIN, renderer);
    }

    fn relay_number(&self, value: i64, origin: Vec3, renderer: &mut impl Renderer) {
        for (i, mask) in glyph_masks(value).into_iter().enumerate() {
            let at = Mat4::from_translation(origin + Vec3::X * (i as f32 * GLYPH_ADVANCE));
            for segment in lit_segments(mask) {
                renderer.submit(at, self.segments[segment]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{BoxRecorder, FrameRecorder};
    use crate::sim::GameEvent;

    fn setup(tuning: &Tuning) -> (GameState, Scene, BoxRecorder) {
        let state = GameState::new(tuning);
        let mut meshes = BoxRecorder::new();
        let scene = Scene::build(&mut meshes, &state, tuning);
        (state, scene, meshes)
    }

    #[test]
    fn test_handles_built_once() {
        let tuning = Tuning::midterm();
        let (_, scene, meshes) = setup(&tuning);
        // 16 bodies + 7 overlays + paddle + ball + 2 walls + 7 segments
        assert_eq!(meshes.boxes.len(), 16 + 7 + 1 + 1 + 2 + 7);
        assert!(scene.block_overlay(0).is_some());
        assert!(scene.block_overlay(1).is_none());

        let (center, half) = meshes.get(scene.block_body(1).unwrap()).unwrap();
        assert_eq!(center, Vec3::new(2.0, -5.0, 0.0));
        assert_eq!(half, Vec3::new(0.875, 0.25, BLOCK_DEPTH));
    }

    #[test]
    fn test_classic_adds_ceiling() {
        let tuning = Tuning::classic();
        let (_, scene, meshes) = setup(&tuning);
        assert_eq!(scene.walls.len(), 3);
        let (center, _) = meshes.get(scene.walls[2]).unwrap();
        assert!(center.y < -8.0);
    }

    #[test]
    fn test_relay_skips_destroyed_and_struck() {
        let tuning = Tuning::midterm();
        let (mut state, mut scene, _) = setup(&tuning);
        let mut frame = FrameRecorder::new();

        state.blocks[3].strike();
        state.blocks[0].strike();
        state.events.push(GameEvent::BlockDamaged { slot: 0 });

        scene.relay(&state, &mut frame);
        assert_eq!(frame.count_of(scene.block_body(3).unwrap()), 0);
        assert_eq!(frame.count_of(scene.block_body(0).unwrap()), 0);
        assert_eq!(frame.count_of(scene.block_body(1).unwrap()), 1);

        // Next frame the damaged block returns with its overlay
        state.events.clear();
        frame.begin_frame();
        scene.relay(&state, &mut frame);
        assert_eq!(frame.count_of(scene.block_body(0).unwrap()), 1);
        assert_eq!(frame.count_of(scene.block_overlay(0).unwrap()), 1);
        assert_eq!(frame.count_of(scene.block_overlay(2).unwrap()), 0);
    }

    #[test]
    fn test_paddle_transform_gated_by_moving() {
        let tuning = Tuning::midterm();
        let (mut state, mut scene, _) = setup(&tuning);
        let mut frame = FrameRecorder::new();

        state.paddle.x = 1.0;
        state.paddle.moving = false;
        scene.relay(&state, &mut frame);
        assert_eq!(frame.transform_of(scene.paddle), Some(Mat4::IDENTITY));

        state.paddle.moving = true;
        frame.begin_frame();
        scene.relay(&state, &mut frame);
        assert_eq!(
            frame.transform_of(scene.paddle),
            Some(Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)))
        );
    }

    #[test]
    fn test_hud_segments() {
        let tuning = Tuning::midterm();
        let (mut state, mut scene, _) = setup(&tuning);
        let mut frame = FrameRecorder::new();

        // score 0 -> six segments, lives 3 -> five segments
        scene.relay(&state, &mut frame);
        let hud: usize = scene.segments.iter().map(|&s| frame.count_of(s)).sum();
        assert_eq!(hud, 6 + 5);

        // score 100 -> 2 + 6 + 6, lives -1 -> minus + 2
        state.score = 100;
        state.lives = -1;
        frame.begin_frame();
        scene.relay(&state, &mut frame);
        let hud: usize = scene.segments.iter().map(|&s| frame.count_of(s)).sum();
        assert_eq!(hud, 14 + 3);
    }
}
