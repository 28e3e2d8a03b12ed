//! Seven-segment numerals built from boxes
//!
//! ```text
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd
//! ```
//!
//! Bit 0 is segment `a`, bit 6 is segment `g`.

use glam::Vec3;

/// Segment masks for 0-9
pub const DIGIT_MASKS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];
/// Middle bar only
pub const MINUS_MASK: u8 = 0x40;

/// Glyph cell size
pub const GLYPH_WIDTH: f32 = 0.4;
pub const GLYPH_HEIGHT: f32 = 0.8;
pub const SEGMENT_THICKNESS: f32 = 0.08;
/// Horizontal distance between glyph origins
pub const GLYPH_ADVANCE: f32 = 0.6;

/// Decimal digits, most significant first. Zero renders as a single 0.
pub fn decimal_digits(mut value: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    loop {
        digits.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Segment masks for a signed number, one per glyph
pub fn glyph_masks(value: i64) -> Vec<u8> {
    let mut masks = Vec::new();
    if value < 0 {
        masks.push(MINUS_MASK);
    }
    masks.extend(
        decimal_digits(value.unsigned_abs())
            .into_iter()
            .map(|d| DIGIT_MASKS[d as usize]),
    );
    masks
}

/// Center and half extents of each segment relative to the glyph center,
/// indexed a..g
pub fn segment_boxes() -> [(Vec3, Vec3); 7] {
    let hw = GLYPH_WIDTH / 2.0;
    let hh = GLYPH_HEIGHT / 2.0;
    let t = SEGMENT_THICKNESS / 2.0;
    let horizontal = Vec3::new(hw, t, t);
    let vertical = Vec3::new(t, hh / 2.0, t);
    [
        (Vec3::new(0.0, hh, 0.0), horizontal),
        (Vec3::new(hw, hh / 2.0, 0.0), vertical),
        (Vec3::new(hw, -hh / 2.0, 0.0), vertical),
        (Vec3::new(0.0, -hh, 0.0), horizontal),
        (Vec3::new(-hw, -hh / 2.0, 0.0), vertical),
        (Vec3::new(-hw, hh / 2.0, 0.0), vertical),
        (Vec3::new(0.0, 0.0, 0.0), horizontal),
    ]
}

/// Iterate the lit segment indices of a mask
pub fn lit_segments(mask: u8) -> impl Iterator<Item = usize> {
    (0..7).filter(move |bit| mask & (1 << bit) != 0)
}
