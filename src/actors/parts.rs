//! Part resolution for composite actors.
//!
//! Some actors are drawn from several independently stored sub-actors. Their
//! frames are concatenated in the order listed here and every other rule
//! table addresses the concatenated sequence by absolute position, so the
//! order of each part list must not change.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::ids::ActorId;

/// Ordered list of parts making up one actor.
pub type PartList = SmallVec<[ActorId; 8]>;

/// One entry of a part list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartRef {
    /// The actor being resolved.
    Own,
    /// A fixed actor.
    Actor(ActorId),
}

use PartRef::{Actor, Own};

const DUKE: &[PartRef] = &[Actor(ActorId::DUKE_LEFT), Actor(ActorId::DUKE_RIGHT)];

const DUKES_SHIP: &[PartRef] = &[
    Actor(ActorId::DUKES_SHIP_LEFT),
    Actor(ActorId::DUKES_SHIP_RIGHT),
    Actor(ActorId::DUKES_SHIP_EXHAUST_FLAMES),
];

const MESSENGER_DRONE: &[PartRef] = &[
    Actor(ActorId::MESSENGER_DRONE_BODY),
    Actor(ActorId::MESSENGER_DRONE_PART_1),
    Actor(ActorId::MESSENGER_DRONE_PART_2),
    Actor(ActorId::MESSENGER_DRONE_PART_3),
    Actor(ActorId::MESSENGER_DRONE_EXHAUST_FLAME_1),
    Actor(ActorId::MESSENGER_DRONE_EXHAUST_FLAME_2),
    Actor(ActorId::MESSENGER_DRONE_EXHAUST_FLAME_3),
    Own,
];

/// Composite actors and their parts. Actors not listed resolve to themselves.
pub const PART_TABLE: &[(&[ActorId], &[PartRef])] = &[
    (
        &[ActorId::HOVERBOT],
        &[Actor(ActorId::HOVERBOT), Actor(ActorId::HOVERBOT_TELEPORT_FX)],
    ),
    (&[ActorId::DUKE_LEFT, ActorId::DUKE_RIGHT], DUKE),
    (
        &[
            ActorId::BLUE_BONUS_GLOBE_1,
            ActorId::BLUE_BONUS_GLOBE_2,
            ActorId::BLUE_BONUS_GLOBE_3,
            ActorId::BLUE_BONUS_GLOBE_4,
        ],
        &[Own, Actor(ActorId::BONUS_GLOBE_SHELL)],
    ),
    (&[ActorId::TELEPORTER_1], &[Actor(ActorId::TELEPORTER_2)]),
    (
        &[ActorId::GREEN_SLIME_BLOB],
        &[
            Actor(ActorId::GREEN_SLIME_BLOB),
            Actor(ActorId::GREEN_SLIME_BLOB_FLYING_ON_CEILING),
        ],
    ),
    (
        &[ActorId::EYEBALL_THROWER_LEFT],
        &[
            Actor(ActorId::EYEBALL_THROWER_LEFT),
            Actor(ActorId::EYEBALL_THROWER_RIGHT),
        ],
    ),
    (
        &[ActorId::BOMB_DROPPING_SPACESHIP],
        &[
            Actor(ActorId::BOMB_DROPPING_SPACESHIP),
            Actor(ActorId::NAPALM_BOMB),
        ],
    ),
    (
        &[ActorId::BLOWING_FAN],
        &[
            Actor(ActorId::BLOWING_FAN),
            Actor(ActorId::BLOWING_FAN_THREADS_ON_TOP),
        ],
    ),
    (
        &[ActorId::MISSILE_INTACT],
        &[
            Actor(ActorId::MISSILE_INTACT),
            Actor(ActorId::MISSILE_EXHAUST_FLAME),
        ],
    ),
    (
        &[ActorId::BLUE_GUARD_LEFT, ActorId::BLUE_GUARD_USING_A_TERMINAL],
        &[Actor(ActorId::BLUE_GUARD_RIGHT)],
    ),
    (
        &[ActorId::ENEMY_LASER_SHOT_LEFT, ActorId::ENEMY_LASER_SHOT_RIGHT],
        &[Actor(ActorId::ENEMY_LASER_SHOT_RIGHT)],
    ),
    (&[ActorId::RED_BOX_TURKEY], &[Actor(ActorId::TURKEY)]),
    (
        &[
            ActorId::MESSENGER_DRONE_1,
            ActorId::MESSENGER_DRONE_2,
            ActorId::MESSENGER_DRONE_3,
            ActorId::MESSENGER_DRONE_4,
            ActorId::MESSENGER_DRONE_5,
        ],
        MESSENGER_DRONE,
    ),
    (
        &[ActorId::BIG_GREEN_CAT_LEFT, ActorId::BIG_GREEN_CAT_RIGHT],
        &[
            Actor(ActorId::BIG_GREEN_CAT_LEFT),
            Actor(ActorId::BIG_GREEN_CAT_RIGHT),
        ],
    ),
    (
        &[
            ActorId::SPIKED_GREEN_CREATURE_LEFT,
            ActorId::SPIKED_GREEN_CREATURE_RIGHT,
        ],
        &[
            Actor(ActorId::SPIKED_GREEN_CREATURE_LEFT),
            Actor(ActorId::SPIKED_GREEN_CREATURE_RIGHT),
        ],
    ),
    (
        &[
            ActorId::DUKES_SHIP_LEFT,
            ActorId::DUKES_SHIP_RIGHT,
            ActorId::DUKES_SHIP_AFTER_EXITING_LEFT,
            ActorId::DUKES_SHIP_AFTER_EXITING_RIGHT,
        ],
        DUKES_SHIP,
    ),
    (
        &[ActorId::WATCHBOT_CONTAINER_CARRIER],
        &[
            Actor(ActorId::WATCHBOT_CONTAINER_CARRIER),
            Actor(ActorId::WATCHBOT_CONTAINER),
        ],
    ),
];

static PARTS_BY_ACTOR: LazyLock<FxHashMap<ActorId, &'static [PartRef]>> =
    LazyLock::new(|| index_table(PART_TABLE));

/// Expand a grouped `(actors, value)` table into a per-actor map.
pub(crate) fn index_table<T: Copy>(table: &[(&[ActorId], T)]) -> FxHashMap<ActorId, T> {
    let mut map = FxHashMap::default();
    for (actors, value) in table {
        for actor in *actors {
            map.insert(*actor, *value);
        }
    }
    map
}

/// True when `id` has its own entry in [`PART_TABLE`], even one that
/// resolves to a single part.
pub fn has_part_entry(id: ActorId) -> bool {
    PARTS_BY_ACTOR.contains_key(&id)
}

/// Resolve the ordered list of parts to load for `id`.
///
/// Never empty: actors without an entry resolve to `[id]`.
pub fn resolve_parts(id: ActorId) -> PartList {
    match PARTS_BY_ACTOR.get(&id) {
        Some(parts) => parts
            .iter()
            .map(|part| match part {
                Own => id,
                Actor(actor) => *actor,
            })
            .collect(),
        None => smallvec::smallvec![id],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::ids::KNOWN_ACTORS;

    #[test]
    fn test_unlisted_actor_resolves_to_itself() {
        assert_eq!(resolve_parts(ActorId::SNAKE).as_slice(), &[ActorId::SNAKE]);
        assert_eq!(resolve_parts(ActorId(4321)).as_slice(), &[ActorId(4321)]);
    }

    #[test]
    fn test_dukes_ship_parts_in_order() {
        let expected = [
            ActorId::DUKES_SHIP_LEFT,
            ActorId::DUKES_SHIP_RIGHT,
            ActorId::DUKES_SHIP_EXHAUST_FLAMES,
        ];
        for id in [
            ActorId::DUKES_SHIP_LEFT,
            ActorId::DUKES_SHIP_RIGHT,
            ActorId::DUKES_SHIP_AFTER_EXITING_LEFT,
            ActorId::DUKES_SHIP_AFTER_EXITING_RIGHT,
        ] {
            assert_eq!(resolve_parts(id).as_slice(), &expected);
        }
    }

    #[test]
    fn test_own_part_is_substituted() {
        let parts = resolve_parts(ActorId::BLUE_BONUS_GLOBE_3);
        assert_eq!(
            parts.as_slice(),
            &[ActorId::BLUE_BONUS_GLOBE_3, ActorId::BONUS_GLOBE_SHELL]
        );

        let drone = resolve_parts(ActorId::MESSENGER_DRONE_4);
        assert_eq!(drone.len(), 8);
        assert_eq!(drone[0], ActorId::MESSENGER_DRONE_BODY);
        assert_eq!(drone[7], ActorId::MESSENGER_DRONE_4);
    }

    #[test]
    fn test_alias_resolves_to_other_actor_only() {
        assert_eq!(
            resolve_parts(ActorId::BLUE_GUARD_USING_A_TERMINAL).as_slice(),
            &[ActorId::BLUE_GUARD_RIGHT]
        );
        assert_eq!(resolve_parts(ActorId::TELEPORTER_1).as_slice(), &[ActorId::TELEPORTER_2]);
    }

    #[test]
    fn test_every_actor_resolves_to_at_least_one_part() {
        for (id, name) in KNOWN_ACTORS {
            assert!(!resolve_parts(*id).is_empty(), "{name} has no parts");
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for (id, _) in KNOWN_ACTORS {
            assert_eq!(resolve_parts(*id), resolve_parts(*id));
        }
    }

    #[test]
    fn test_no_actor_listed_twice() {
        let mut count = 0;
        for (actors, _) in PART_TABLE {
            count += actors.len();
        }
        assert_eq!(count, index_table(PART_TABLE).len());
    }
}
