//! Frames a new sprite shows before any game logic touches it.
//!
//! Order matters: later slots are drawn on top of earlier ones.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::ids::ActorId;
use super::parts::index_table;
use crate::components::sprite::RenderSlot;

/// Initial frames-to-render configuration of an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultFrames {
    /// Draw these slots in order.
    Slots(&'static [RenderSlot]),
    /// Nothing is drawn through the sprite; a custom renderer takes over.
    CustomRendered,
}

use RenderSlot::{Dynamic, Frame};

const FIRST_FRAME: DefaultFrames = DefaultFrames::Slots(&[Frame(0)]);

pub const DEFAULT_FRAMES_TABLE: &[(&[ActorId], DefaultFrames)] = &[
    (
        &[
            ActorId::HOVERBOT,
            ActorId::GREEN_SLIME_BLOB,
            ActorId::EYEBALL_THROWER_LEFT,
            ActorId::MISSILE_INTACT,
        ],
        FIRST_FRAME,
    ),
    (
        &[ActorId::BOMB_DROPPING_SPACESHIP],
        DefaultFrames::Slots(&[Frame(3), Frame(0), Frame(1)]),
    ),
    (
        &[ActorId::SENTRY_ROBOT_GENERATOR],
        DefaultFrames::Slots(&[Frame(0), Frame(4)]),
    ),
    (&[ActorId::METAL_GRABBER_CLAW], DefaultFrames::Slots(&[Frame(1)])),
    (
        &[ActorId::SPIDER, ActorId::BLUE_GUARD_LEFT],
        DefaultFrames::Slots(&[Frame(6)]),
    ),
    (&[ActorId::BOSS_EPISODE_1], DefaultFrames::Slots(&[Frame(0), Frame(2)])),
    // slot 0 is filled in by the boss logic
    (
        &[ActorId::BOSS_EPISODE_3],
        DefaultFrames::Slots(&[Dynamic, Frame(1), Frame(0)]),
    ),
    (&[ActorId::BOSS_EPISODE_4], DefaultFrames::Slots(&[Frame(0), Frame(1)])),
    (&[ActorId::ROCKET_ELEVATOR], DefaultFrames::Slots(&[Frame(5), Frame(0)])),
    (
        &[ActorId::BLUE_GUARD_USING_A_TERMINAL],
        DefaultFrames::Slots(&[Frame(12)]),
    ),
    (&[ActorId::LAVA_FOUNTAIN], DefaultFrames::CustomRendered),
    (
        &[ActorId::RADAR_COMPUTER_TERMINAL],
        DefaultFrames::Slots(&[Frame(0), Frame(1), Frame(2), Frame(3)]),
    ),
    (&[ActorId::WATCHBOT_CONTAINER], DefaultFrames::Slots(&[Frame(0), Frame(1)])),
    (
        &[ActorId::WATCHBOT_CONTAINER_CARRIER],
        DefaultFrames::Slots(&[Frame(0), Frame(2)]),
    ),
    (
        &[ActorId::SUPER_FORCE_FIELD_LEFT],
        DefaultFrames::Slots(&[Frame(0), Frame(3)]),
    ),
    (
        &[
            ActorId::BIG_GREEN_CAT_LEFT,
            ActorId::BIG_GREEN_CAT_RIGHT,
            ActorId::SPIKED_GREEN_CREATURE_LEFT,
            ActorId::SPIKED_GREEN_CREATURE_RIGHT,
            ActorId::DUKE_LEFT,
            ActorId::DUKE_RIGHT,
            ActorId::DUKES_SHIP_LEFT,
            ActorId::DUKES_SHIP_RIGHT,
            ActorId::DUKES_SHIP_AFTER_EXITING_LEFT,
            ActorId::DUKES_SHIP_AFTER_EXITING_RIGHT,
        ],
        FIRST_FRAME,
    ),
];

static DEFAULT_FRAMES: LazyLock<FxHashMap<ActorId, DefaultFrames>> =
    LazyLock::new(|| index_table(DEFAULT_FRAMES_TABLE));

/// Explicit default frames for `id`. `None` means "first frame of every
/// part", which the assembler derives from the part boundaries.
pub fn default_frames_for(id: ActorId) -> Option<DefaultFrames> {
    DEFAULT_FRAMES.get(&id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_actor() {
        assert_eq!(
            default_frames_for(ActorId::BOSS_EPISODE_1),
            Some(DefaultFrames::Slots(&[Frame(0), Frame(2)]))
        );
    }

    #[test]
    fn test_dynamic_slot_is_kept_in_place() {
        let Some(DefaultFrames::Slots(slots)) = default_frames_for(ActorId::BOSS_EPISODE_3) else {
            panic!("Expected slots for boss 3");
        };
        assert_eq!(slots, &[Dynamic, Frame(1), Frame(0)]);
    }

    #[test]
    fn test_custom_rendered() {
        assert_eq!(
            default_frames_for(ActorId::LAVA_FOUNTAIN),
            Some(DefaultFrames::CustomRendered)
        );
    }

    #[test]
    fn test_unlisted_actor_has_no_entry() {
        assert_eq!(default_frames_for(ActorId::SNAKE), None);
    }
}
