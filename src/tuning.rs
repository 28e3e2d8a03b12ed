//! Data-driven game balance
//!
//! Every constant that differed between released builds of the game lives in
//! [`Tuning`]. Two presets reproduce those builds; JSON files can override
//! any subset of fields.

use std::path::Path;

use anyhow::{Context, bail};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{REFERENCE_HZ, SPEEDUP_SCORE_STEP, STARTING_LIVES};

/// How ball position advances each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Integration {
    /// One divisor-scaled step per frame, regardless of frame time
    #[default]
    FixedStep,
    /// The fixed step scaled by `dt * reference_hz`
    DeltaTime { reference_hz: f32 },
}

impl Integration {
    /// Frame-time scaling that matches `FixedStep` at 60 Hz
    pub fn delta_time() -> Self {
        Self::DeltaTime {
            reference_hz: REFERENCE_HZ,
        }
    }
}

/// How a block hit flips the ball velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReflectionMode {
    /// Side hit flips x, otherwise a vertical hit flips y
    Exclusive,
    /// Side and vertical flips are tested separately and may both fire
    #[default]
    Independent,
}

/// What happens when the ball passes the vertical bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundResponse {
    /// Flip vertical velocity (ceiling)
    Bounce,
    /// Lose a life and return the ball to the paddle (floor)
    LoseBall,
}

/// Single horizontal line the ball may not cross
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalBound {
    /// Threshold; positive values trigger above, negative values below
    pub y: f32,
    pub response: BoundResponse,
}

/// Variant constants for the frame step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ball integration ===
    pub integration: Integration,
    /// Empirical velocity divisor
    pub speed_divisor: f32,
    /// Speed grows with score
    pub progressive_speed: bool,
    /// Vertical launch velocity
    pub launch_speed: f32,
    /// Idle ball height above the paddle line
    pub spawn_y: f32,

    // === Scoring ===
    /// Points per destroyed block
    pub score_unit: u32,
    /// Also credit `score_unit` when a two-hit block is first damaged
    pub score_on_damage: bool,
    pub starting_lives: i32,

    // === Ball probe ===
    pub ball_half_width: f32,
    pub ball_top_offset: f32,
    pub ball_bottom_offset: f32,
    /// Half-height of the band tested against the paddle line
    pub ball_band: f32,

    // === Blocks ===
    pub block_half_extents: Vec2,
    pub reflection: ReflectionMode,

    // === Paddle ===
    pub paddle_y: f32,
    pub paddle_half_width: f32,
    /// Distance moved per frame while a move key is held
    pub paddle_step: f32,
    /// Only reflect a ball that is travelling toward the paddle. Off by
    /// default; a ball entering the band side-on otherwise flips every frame.
    pub paddle_one_way: bool,

    // === Play field ===
    pub play_half_width: f32,
    pub side_wall_x: f32,
    pub vertical_bound: VerticalBound,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::midterm()
    }
}

impl Tuning {
    /// Final build: faster ball, 100-point blocks, floor loss
    pub fn midterm() -> Self {
        Self {
            integration: Integration::FixedStep,
            speed_divisor: 25.0,
            progressive_speed: true,
            launch_speed: 1.0,
            spawn_y: 2.5,

            score_unit: 100,
            score_on_damage: false,
            starting_lives: STARTING_LIVES,

            ball_half_width: 0.25,
            ball_top_offset: 2.25,
            ball_bottom_offset: 1.75,
            ball_band: 0.25,

            block_half_extents: Vec2::new(0.875, 0.25),
            reflection: ReflectionMode::Independent,

            paddle_y: 3.0,
            paddle_half_width: 1.5,
            paddle_step: 0.1,
            paddle_one_way: false,

            play_half_width: 6.25,
            side_wall_x: 6.75,
            vertical_bound: VerticalBound {
                y: 8.0,
                response: BoundResponse::LoseBall,
            },
        }
    }

    /// Earlier build: slower ball, single-point blocks, ceiling bounce
    pub fn classic() -> Self {
        Self {
            speed_divisor: 50.0,
            progressive_speed: false,
            score_unit: 1,
            ball_top_offset: 1.75,
            ball_bottom_offset: 1.5,
            reflection: ReflectionMode::Exclusive,
            vertical_bound: VerticalBound {
                y: -8.0,
                response: BoundResponse::Bounce,
            },
            ..Self::midterm()
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "midterm" | "default" => Some(Self::midterm()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    /// Parse a (possibly partial) JSON document; missing fields come from `midterm`
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tuning: Self = serde_json::from_str(json).context("malformed tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = Self::from_json(&json)
            .with_context(|| format!("loading tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.speed_divisor <= 0.0 {
            bail!("speed_divisor must be positive, got {}", self.speed_divisor);
        }
        if let Integration::DeltaTime { reference_hz } = self.integration {
            if reference_hz <= 0.0 {
                bail!("reference_hz must be positive, got {reference_hz}");
            }
        }
        if self.block_half_extents.min_element() < 0.0
            || self.ball_half_width < 0.0
            || self.ball_band < 0.0
            || self.paddle_half_width < 0.0
        {
            bail!("extents must not be negative");
        }
        if self.paddle_limit() < 0.0 {
            bail!(
                "paddle half width {} exceeds play half width {}",
                self.paddle_half_width,
                self.play_half_width
            );
        }
        Ok(())
    }

    /// Largest |paddle x| that keeps the paddle between the walls
    #[inline]
    pub fn paddle_limit(&self) -> f32 {
        self.play_half_width - self.paddle_half_width
    }

    /// Progressive difficulty multiplier. Integer arithmetic: the speed steps
    /// up by a whole factor for every four blocks' worth of score.
    pub fn speedup(&self, score: u32) -> f32 {
        if self.progressive_speed {
            ((score / SPEEDUP_SCORE_STEP + 4) / 4) as f32
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_limit() {
        assert!((Tuning::midterm().paddle_limit() - 4.75).abs() < 1e-6);
    }

    #[test]
    fn test_speedup_steps() {
        let tuning = Tuning::midterm();
        assert_eq!(tuning.speedup(0), 1.0);
        assert_eq!(tuning.speedup(300), 1.0);
        assert_eq!(tuning.speedup(400), 2.0);
        assert_eq!(tuning.speedup(799), 2.0);
        assert_eq!(tuning.speedup(800), 3.0);

        assert_eq!(Tuning::classic().speedup(10_000), 1.0);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(Tuning::preset("Classic"), Some(Tuning::classic()));
        assert_eq!(Tuning::preset("MIDTERM"), Some(Tuning::midterm()));
        assert!(Tuning::preset("expert").is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "speed_divisor": 40.0, "score_unit": 5 }"#).unwrap();
        assert_eq!(tuning.speed_divisor, 40.0);
        assert_eq!(tuning.score_unit, 5);
        assert_eq!(tuning.paddle_y, Tuning::midterm().paddle_y);
    }

    #[test]
    fn test_json_round_trip_of_preset() {
        let json = serde_json::to_string(&Tuning::classic()).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::classic());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(Tuning::from_json(r#"{ "speed_divisor": 0.0 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "paddle_half_width": 7.0 }"#).is_err());
        assert!(
            Tuning::from_json(r#"{ "integration": { "DeltaTime": { "reference_hz": 0.0 } } }"#)
                .is_err()
        );
        assert!(Tuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = Tuning::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
