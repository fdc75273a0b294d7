//! Actor identifiers.
//!
//! An [`ActorId`] is the index of an actor's entry in the actor image
//! package. The named constants cover every actor the rule tables mention;
//! any other value is still a valid id and simply gets the default rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier for one kind of renderable actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u16);

macro_rules! actor_ids {
    ($($name:ident = $value:literal),* $(,)?) => {
        impl ActorId {
            $(pub const $name: ActorId = ActorId($value);)*
        }

        /// Every named actor, in declaration order.
        pub const KNOWN_ACTORS: &[(ActorId, &str)] = &[$((ActorId::$name, stringify!($name)),)*];
    };
}

actor_ids! {
    HOVERBOT = 0,
    DUKE_ROCKET_UP = 1,
    DUKE_ROCKET_DOWN = 2,
    DUKE_ROCKET_LEFT = 3,
    DUKE_ROCKET_RIGHT = 4,
    DUKE_LASER_SHOT_HORIZONTAL = 5,
    DUKE_LASER_SHOT_VERTICAL = 6,
    DUKE_REGULAR_SHOT_HORIZONTAL = 7,
    DUKE_REGULAR_SHOT_VERTICAL = 8,
    DUKE_FLAME_SHOT_UP = 9,
    DUKE_FLAME_SHOT_DOWN = 10,
    DUKE_FLAME_SHOT_LEFT = 11,
    DUKE_FLAME_SHOT_RIGHT = 12,
    EXPLOSION_FX_1 = 13,
    EXPLOSION_FX_2 = 14,
    SHOT_IMPACT_FX = 15,
    SMOKE_PUFF_FX = 16,
    HOVERBOT_DEBRIS_1 = 17,
    HOVERBOT_DEBRIS_2 = 18,
    HOVERBOT_TELEPORT_FX = 19,
    NUCLEAR_WASTE_CAN_DEBRIS_1 = 20,
    NUCLEAR_WASTE_CAN_DEBRIS_2 = 21,
    NUCLEAR_WASTE_CAN_DEBRIS_3 = 22,
    NUCLEAR_WASTE_CAN_DEBRIS_4 = 23,
    NUCLEAR_WASTE_CAN_GREEN_SLIME_INSIDE = 24,
    MUZZLE_FLASH_UP = 25,
    MUZZLE_FLASH_DOWN = 26,
    MUZZLE_FLASH_LEFT = 27,
    MUZZLE_FLASH_RIGHT = 28,
    BLUE_BONUS_GLOBE_1 = 29,
    BLUE_BONUS_GLOBE_2 = 30,
    BLUE_BONUS_GLOBE_3 = 31,
    BLUE_BONUS_GLOBE_4 = 32,
    BONUS_GLOBE_SHELL = 33,
    BONUS_GLOBE_DEBRIS_1 = 34,
    BONUS_GLOBE_DEBRIS_2 = 35,
    TELEPORTER_1 = 36,
    TELEPORTER_2 = 37,
    GREEN_SLIME_BLOB = 38,
    GREEN_SLIME_BLOB_FLYING_ON_CEILING = 39,
    EYEBALL_THROWER_LEFT = 40,
    EYEBALL_THROWER_RIGHT = 41,
    EYEBALL_PROJECTILE = 42,
    BOMB_DROPPING_SPACESHIP = 43,
    NAPALM_BOMB = 44,
    FIRE_BOMB_FIRE = 45,
    BLOWING_FAN = 46,
    BLOWING_FAN_THREADS_ON_TOP = 47,
    MISSILE_INTACT = 48,
    MISSILE_EXHAUST_FLAME = 49,
    MISSILE_DEBRIS = 50,
    BLUE_GUARD_RIGHT = 51,
    BLUE_GUARD_LEFT = 52,
    BLUE_GUARD_USING_A_TERMINAL = 53,
    ENEMY_LASER_SHOT_LEFT = 54,
    ENEMY_LASER_SHOT_RIGHT = 55,
    ENEMY_LASER_MUZZLE_FLASH_1 = 56,
    ENEMY_LASER_MUZZLE_FLASH_2 = 57,
    TURKEY = 58,
    RED_BOX_TURKEY = 59,
    MESSENGER_DRONE_BODY = 60,
    MESSENGER_DRONE_PART_1 = 61,
    MESSENGER_DRONE_PART_2 = 62,
    MESSENGER_DRONE_PART_3 = 63,
    MESSENGER_DRONE_EXHAUST_FLAME_1 = 64,
    MESSENGER_DRONE_EXHAUST_FLAME_2 = 65,
    MESSENGER_DRONE_EXHAUST_FLAME_3 = 66,
    MESSENGER_DRONE_1 = 67,
    MESSENGER_DRONE_2 = 68,
    MESSENGER_DRONE_3 = 69,
    MESSENGER_DRONE_4 = 70,
    MESSENGER_DRONE_5 = 71,
    BIG_GREEN_CAT_LEFT = 72,
    BIG_GREEN_CAT_RIGHT = 73,
    SPIKED_GREEN_CREATURE_LEFT = 74,
    SPIKED_GREEN_CREATURE_RIGHT = 75,
    SPIKED_GREEN_CREATURE_EYE_FX_LEFT = 76,
    SPIKED_GREEN_CREATURE_EYE_FX_RIGHT = 77,
    SPIKED_GREEN_CREATURE_STONE_DEBRIS_1_LEFT = 78,
    SPIKED_GREEN_CREATURE_STONE_DEBRIS_2_LEFT = 79,
    SPIKED_GREEN_CREATURE_STONE_DEBRIS_3_LEFT = 80,
    SPIKED_GREEN_CREATURE_STONE_DEBRIS_4_LEFT = 81,
    SPIKED_GREEN_CREATURE_STONE_DEBRIS_1_RIGHT = 82,
    SPIKED_GREEN_CREATURE_STONE_DEBRIS_2_RIGHT = 83,
    SPIKED_GREEN_CREATURE_STONE_DEBRIS_3_RIGHT = 84,
    SPIKED_GREEN_CREATURE_STONE_DEBRIS_4_RIGHT = 85,
    SNAKE = 86,
    DUKES_SHIP_LEFT = 87,
    DUKES_SHIP_RIGHT = 88,
    DUKES_SHIP_AFTER_EXITING_LEFT = 89,
    DUKES_SHIP_AFTER_EXITING_RIGHT = 90,
    SKELETON = 91,
    DUKES_SHIP_EXHAUST_FLAMES = 92,
    WATCHBOT_CONTAINER_CARRIER = 93,
    WATCHBOT_CONTAINER = 94,
    WATCHBOT_CONTAINER_DEBRIS_1 = 95,
    WATCHBOT_CONTAINER_DEBRIS_2 = 96,
    SPIDER = 97,
    SPIDER_SHAKEN_OFF = 98,
    WINDBLOWN_SPIDER_GENERATOR = 99,
    DUKE_LEFT = 100,
    DUKE_RIGHT = 101,
    DUKE_DEATH_PARTICLES = 102,
    SPIDER_DEBRIS_2 = 103,
    SPIDER_BLOWING_IN_WIND = 104,
    RIGELATIN_SOLDIER = 105,
    RIGELATIN_SOLDIER_PROJECTILE = 106,
    UGLY_GREEN_BIRD = 107,
    UNICYCLE_BOT = 108,
    REACTOR_FIRE_LEFT = 109,
    REACTOR_FIRE_RIGHT = 110,
    RADAR_COMPUTER_TERMINAL = 111,
    SENTRY_ROBOT_GENERATOR = 112,
    METAL_GRABBER_CLAW = 113,
    METAL_GRABBER_CLAW_DEBRIS_1 = 114,
    METAL_GRABBER_CLAW_DEBRIS_2 = 115,
    BOSS_EPISODE_1 = 116,
    BOSS_EPISODE_3 = 117,
    BOSS_EPISODE_4 = 118,
    ROCKET_ELEVATOR = 119,
    LAVA_FOUNTAIN = 120,
    SUPER_FORCE_FIELD_LEFT = 121,
    FLAME_THROWER_FIRE_RIGHT = 122,
    FLAME_THROWER_FIRE_LEFT = 123,
    NUCLEAR_EXPLOSION = 124,
    WHITE_CIRCLE_FLASH_FX = 125,
    SMOKE_CLOUD_FX = 126,
    BIOLOGICAL_ENEMY_DEBRIS = 127,
    YELLOW_FIREBALL_FX = 128,
    GREEN_FIREBALL_FX = 129,
    BLUE_FIREBALL_FX = 130,
    COKE_CAN_DEBRIS_1 = 131,
    COKE_CAN_DEBRIS_2 = 132,
    PRISONER_HAND_DEBRIS = 133,
    SCORE_NUMBER_FX_100 = 134,
    SCORE_NUMBER_FX_500 = 135,
    SCORE_NUMBER_FX_2000 = 136,
    SCORE_NUMBER_FX_5000 = 137,
    SCORE_NUMBER_FX_10000 = 138,
}

impl ActorId {
    /// Constant name of a known actor, `None` for unnamed ids.
    pub fn name(self) -> Option<&'static str> {
        KNOWN_ACTORS
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// Parses either a numeric id (`87`) or a constant name (`DUKES_SHIP_LEFT`,
/// case-insensitive).
impl FromStr for ActorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(raw) = s.parse::<u16>() {
            return Ok(ActorId(raw));
        }
        KNOWN_ACTORS
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(id, _)| *id)
            .ok_or_else(|| format!("unknown actor '{}'", s))
    }
}
