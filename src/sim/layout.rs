//! Fixed block field
//!
//! ```text
//!   [0(2)]   [1(1)]   [2(2)]   [3(1)]   [4(2)]      y = -5
//!       [5(1)]   [6(1)]   [7(1)]   [8(1)]           y = -4
//!   [9(1)]  [10(2)]  [11(1)]  [12(2)]  [13(1)]      y = -3
//!               [14(2)]  [15(2)]                    y = -2
//! ```
//!
//! Slot numbers grow toward negative x; the number in parentheses is the hit
//! count needed to destroy the block.

use glam::Vec3;

use super::state::Block;
use crate::consts::SLOT_COUNT;
use crate::tuning::Tuning;

/// Block centers, indexed by slot
pub const SLOT_CENTERS: [Vec3; SLOT_COUNT] = [
    Vec3::new(4.0, -5.0, 0.0),
    Vec3::new(2.0, -5.0, 0.0),
    Vec3::new(0.0, -5.0, 0.0),
    Vec3::new(-2.0, -5.0, 0.0),
    Vec3::new(-4.0, -5.0, 0.0),
    Vec3::new(3.0, -4.0, 0.0),
    Vec3::new(1.0, -4.0, 0.0),
    Vec3::new(-1.0, -4.0, 0.0),
    Vec3::new(-3.0, -4.0, 0.0),
    Vec3::new(4.0, -3.0, 0.0),
    Vec3::new(2.0, -3.0, 0.0),
    Vec3::new(0.0, -3.0, 0.0),
    Vec3::new(-2.0, -3.0, 0.0),
    Vec3::new(-4.0, -3.0, 0.0),
    Vec3::new(1.0, -2.0, 0.0),
    Vec3::new(-1.0, -2.0, 0.0),
];

/// Slots holding two-hit blocks
pub const TWO_HIT_SLOTS: [usize; 7] = [0, 2, 4, 10, 12, 14, 15];

pub fn hits_for_slot(slot: usize) -> u8 {
    if TWO_HIT_SLOTS.contains(&slot) { 2 } else { 1 }
}

/// Build all blocks in ascending slot order
pub fn standard_field(tuning: &Tuning) -> Vec<Block> {
    SLOT_CENTERS
        .iter()
        .enumerate()
        .map(|(slot, &center)| {
            Block::new(slot, center, tuning.block_half_extents, hits_for_slot(slot))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_hits() {
        let blocks = standard_field(&Tuning::midterm());
        assert_eq!(blocks.len(), SLOT_COUNT);
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.slot, i);
        }

        let two_hit: Vec<usize> = blocks
            .iter()
            .filter(|b| b.hits_to_destroy == 2)
            .map(|b| b.slot)
            .collect();
        assert_eq!(two_hit, TWO_HIT_SLOTS);

        let one_hit: Vec<usize> = blocks
            .iter()
            .filter(|b| b.hits_to_destroy == 1)
            .map(|b| b.slot)
            .collect();
        assert_eq!(one_hit, vec![1, 3, 5, 6, 7, 8, 9, 11, 13]);
    }

    #[test]
    fn test_slot_one_position() {
        let blocks = standard_field(&Tuning::midterm());
        assert_eq!(blocks[1].center, Vec3::new(2.0, -5.0, 0.0));
    }

    #[test]
    fn test_blocks_do_not_overlap() {
        let blocks = standard_field(&Tuning::midterm());
        for a in &blocks {
            for b in &blocks {
                if a.slot >= b.slot {
                    continue;
                }
                let ra = a.rect();
                let rb = b.rect();
                let overlap = ra.min.x < rb.max.x
                    && rb.min.x < ra.max.x
                    && ra.min.y < rb.max.y
                    && rb.min.y < ra.max.y;
                assert!(!overlap, "slots {} and {} overlap", a.slot, b.slot);
            }
        }
    }
}
