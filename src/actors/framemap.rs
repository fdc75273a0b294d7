//! Virtual to real frame resolution.
//!
//! Callers address frames by pose ("virtual" index). Two per-actor tables
//! turn that into a position in the assembled frame sequence:
//!
//! - the orientation offset is the stride between the left-facing and the
//!   right-facing block of frames;
//! - the frame map is an explicit lookup table for actors whose poses are
//!   laid out irregularly.
//!
//! When an actor has both, the orientation offset selects the block inside
//! the virtual space first and the frame map is applied afterwards.

use std::sync::LazyLock;

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ids::ActorId;
use super::parts::index_table;

/// Facing direction of a mirrored actor.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Left,
    Right,
}

impl Orientation {
    /// Block index of this orientation in a mirrored frame layout.
    pub fn block(self) -> usize {
        match self {
            Orientation::Left => 0,
            Orientation::Right => 1,
        }
    }
}

const DUKES_SHIPS: &[ActorId] = &[
    ActorId::DUKES_SHIP_LEFT,
    ActorId::DUKES_SHIP_RIGHT,
    ActorId::DUKES_SHIP_AFTER_EXITING_LEFT,
    ActorId::DUKES_SHIP_AFTER_EXITING_RIGHT,
];

/// Frame-count stride between orientation blocks.
pub const ORIENTATION_OFFSET_TABLE: &[(&[ActorId], usize)] = &[
    (&[ActorId::DUKE_LEFT, ActorId::DUKE_RIGHT], 39),
    (&[ActorId::SNAKE], 9),
    (&[ActorId::EYEBALL_THROWER_LEFT], 10),
    (&[ActorId::SKELETON], 4),
    (&[ActorId::SPIDER], 13),
    (&[ActorId::RED_BOX_TURKEY], 2),
    (&[ActorId::RIGELATIN_SOLDIER], 4),
    (&[ActorId::UGLY_GREEN_BIRD], 3),
    (&[ActorId::BIG_GREEN_CAT_LEFT, ActorId::BIG_GREEN_CAT_RIGHT], 3),
    (
        &[
            ActorId::SPIKED_GREEN_CREATURE_LEFT,
            ActorId::SPIKED_GREEN_CREATURE_RIGHT,
        ],
        6,
    ),
    (&[ActorId::UNICYCLE_BOT], 4),
    (DUKES_SHIPS, 6),
];

#[rustfmt::skip]
const SPIDER_FRAME_MAP: &[usize] = &[
    3, 4, 5, 9, 10, 11, 6, 8, 9, 14, 15, 12, 13, // left
    0, 1, 2, 6, 7, 8, 6, 8, 9, 12, 13, 14, 15, // right
];

#[rustfmt::skip]
const UNICYCLE_FRAME_MAP: &[usize] = &[
    0, 5, 1, 2, // left
    0, 5, 3, 4, // right
];

#[rustfmt::skip]
const DUKES_SHIP_FRAME_MAP: &[usize] = &[
    0, 1, 10, 11, 8, 9, // left
    2, 3, 6, 7, 4, 5, // right
];

/// Explicit virtual to real frame tables.
pub const FRAME_MAP_TABLE: &[(&[ActorId], &[usize])] = &[
    (&[ActorId::SPIDER], SPIDER_FRAME_MAP),
    (&[ActorId::UNICYCLE_BOT], UNICYCLE_FRAME_MAP),
    (DUKES_SHIPS, DUKES_SHIP_FRAME_MAP),
];

static ORIENTATION_OFFSETS: LazyLock<FxHashMap<ActorId, usize>> =
    LazyLock::new(|| index_table(ORIENTATION_OFFSET_TABLE));

static FRAME_MAPS: LazyLock<FxHashMap<ActorId, &'static [usize]>> =
    LazyLock::new(|| index_table(FRAME_MAP_TABLE));

/// Orientation stride for `id`, if it is a mirrored actor.
pub fn orientation_offset_for(id: ActorId) -> Option<usize> {
    ORIENTATION_OFFSETS.get(&id).copied()
}

/// Frame map for `id`; empty when frames are addressed directly.
pub fn frame_map_for(id: ActorId) -> &'static [usize] {
    FRAME_MAPS.get(&id).copied().unwrap_or(&[])
}

/// Resolve a virtual frame index to a real one.
///
/// `frame_count` is the length of the assembled sequence. Returns `None`
/// when any step would leave the table or the sequence.
pub fn virtual_to_real(
    virtual_frame: usize,
    orientation: Option<Orientation>,
    orientation_offset: Option<usize>,
    frame_map: &[usize],
    frame_count: usize,
) -> Option<usize> {
    let mut frame = virtual_frame;
    if let (Some(orientation), Some(offset)) = (orientation, orientation_offset) {
        frame = frame.checked_add(orientation.block().checked_mul(offset)?)?;
    }

    if !frame_map.is_empty() {
        frame = *frame_map.get(frame)?;
    }

    (frame < frame_count).then_some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_without_tables() {
        assert_eq!(virtual_to_real(3, None, None, &[], 5), Some(3));
        assert_eq!(virtual_to_real(3, Some(Orientation::Right), None, &[], 5), Some(3));
    }

    #[test]
    fn test_orientation_offset_selects_block() {
        assert_eq!(virtual_to_real(2, Some(Orientation::Left), Some(39), &[], 78), Some(2));
        assert_eq!(virtual_to_real(2, Some(Orientation::Right), Some(39), &[], 78), Some(41));
        assert_eq!(virtual_to_real(2, None, Some(39), &[], 78), Some(2));
    }

    #[test]
    fn test_frame_map_applies_after_orientation() {
        // Right-facing pose 2 of Duke's ship: 2 + 6 = 8 -> map[8] = 6
        let frame = virtual_to_real(
            2,
            Some(Orientation::Right),
            orientation_offset_for(ActorId::DUKES_SHIP_LEFT),
            frame_map_for(ActorId::DUKES_SHIP_LEFT),
            12,
        );
        assert_eq!(frame, Some(6));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(virtual_to_real(5, None, None, &[], 5), None);
        assert_eq!(virtual_to_real(8, None, None, UNICYCLE_FRAME_MAP, 6), None);
        // map entry 15 beyond a 10-frame sequence
        assert_eq!(virtual_to_real(9, None, None, SPIDER_FRAME_MAP, 10), None);
        assert_eq!(virtual_to_real(0, Some(Orientation::Right), Some(usize::MAX), &[], 5), None);
    }

    #[test]
    fn test_mirrored_maps_cover_both_blocks() {
        for (actors, map) in FRAME_MAP_TABLE {
            for actor in *actors {
                if let Some(offset) = orientation_offset_for(*actor) {
                    assert_eq!(map.len(), 2 * offset, "{actor}");
                }
            }
        }
    }

    #[test]
    fn test_lookups_for_unlisted_actor() {
        assert_eq!(orientation_offset_for(ActorId::HOVERBOT), None);
        assert!(frame_map_for(ActorId::HOVERBOT).is_empty());
    }

    #[test]
    fn test_orientation_block() {
        assert_eq!(Orientation::Left.block(), 0);
        assert_eq!(Orientation::Right.block(), 1);
    }
}
