//! Draw order classification.
//!
//! The package stores a small draw index per actor. It is scaled by
//! [`DRAW_ORDER_SCALE`] so there is room to place an actor right behind or in
//! front of another one. Projectiles, muzzle flashes and effects ignore their
//! stored index and are drawn in fixed layers above regular actors.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::ids::ActorId;
use super::parts::index_table;

/// Multiplier applied to every draw index.
pub const DRAW_ORDER_SCALE: i32 = 10;

pub const PLAYER_PROJECTILE_DRAW_ORDER: i32 = 8;
pub const MUZZLE_FLASH_DRAW_ORDER: i32 = 9;
pub const EFFECT_DRAW_ORDER: i32 = 10;

/// How an actor's layering key is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawLayer {
    /// Scaled package draw index.
    Base,
    /// Fixed category, package index ignored.
    Fixed(i32),
    /// Scaled package draw index moved one step back.
    BehindCarrier,
}

const PLAYER_PROJECTILES: &[ActorId] = &[
    ActorId::DUKE_ROCKET_UP,
    ActorId::DUKE_ROCKET_DOWN,
    ActorId::DUKE_ROCKET_LEFT,
    ActorId::DUKE_ROCKET_RIGHT,
    ActorId::DUKE_LASER_SHOT_HORIZONTAL,
    ActorId::DUKE_LASER_SHOT_VERTICAL,
    ActorId::DUKE_REGULAR_SHOT_HORIZONTAL,
    ActorId::DUKE_REGULAR_SHOT_VERTICAL,
    ActorId::DUKE_FLAME_SHOT_UP,
    ActorId::DUKE_FLAME_SHOT_DOWN,
    ActorId::DUKE_FLAME_SHOT_LEFT,
    ActorId::DUKE_FLAME_SHOT_RIGHT,
    ActorId::REACTOR_FIRE_LEFT,
    ActorId::REACTOR_FIRE_RIGHT,
];

const MUZZLE_FLASHES: &[ActorId] = &[
    ActorId::MUZZLE_FLASH_UP,
    ActorId::MUZZLE_FLASH_DOWN,
    ActorId::MUZZLE_FLASH_LEFT,
    ActorId::MUZZLE_FLASH_RIGHT,
];

const EFFECTS: &[ActorId] = &[
    ActorId::EXPLOSION_FX_1,
    ActorId::EXPLOSION_FX_2,
    ActorId::SHOT_IMPACT_FX,
    ActorId::SMOKE_PUFF_FX,
    ActorId::HOVERBOT_DEBRIS_1,
    ActorId::HOVERBOT_DEBRIS_2,
    ActorId::NUCLEAR_WASTE_CAN_DEBRIS_1,
    ActorId::NUCLEAR_WASTE_CAN_DEBRIS_2,
    ActorId::NUCLEAR_WASTE_CAN_DEBRIS_3,
    ActorId::NUCLEAR_WASTE_CAN_DEBRIS_4,
    ActorId::FLAME_THROWER_FIRE_RIGHT,
    ActorId::FLAME_THROWER_FIRE_LEFT,
    ActorId::NUCLEAR_EXPLOSION,
    ActorId::WATCHBOT_CONTAINER_DEBRIS_1,
    ActorId::WATCHBOT_CONTAINER_DEBRIS_2,
    ActorId::FIRE_BOMB_FIRE,
    ActorId::DUKE_DEATH_PARTICLES,
    ActorId::BONUS_GLOBE_DEBRIS_1,
    ActorId::BONUS_GLOBE_DEBRIS_2,
    ActorId::WHITE_CIRCLE_FLASH_FX,
    ActorId::NUCLEAR_WASTE_CAN_GREEN_SLIME_INSIDE,
    ActorId::SMOKE_CLOUD_FX,
    ActorId::BIOLOGICAL_ENEMY_DEBRIS,
    ActorId::MISSILE_DEBRIS,
    ActorId::EYEBALL_PROJECTILE,
    ActorId::ENEMY_LASER_MUZZLE_FLASH_1,
    ActorId::ENEMY_LASER_MUZZLE_FLASH_2,
    ActorId::METAL_GRABBER_CLAW_DEBRIS_1,
    ActorId::METAL_GRABBER_CLAW_DEBRIS_2,
    ActorId::YELLOW_FIREBALL_FX,
    ActorId::GREEN_FIREBALL_FX,
    ActorId::BLUE_FIREBALL_FX,
    ActorId::COKE_CAN_DEBRIS_1,
    ActorId::COKE_CAN_DEBRIS_2,
    ActorId::SPIKED_GREEN_CREATURE_EYE_FX_LEFT,
    ActorId::SPIKED_GREEN_CREATURE_EYE_FX_RIGHT,
    ActorId::SPIKED_GREEN_CREATURE_STONE_DEBRIS_1_LEFT,
    ActorId::SPIKED_GREEN_CREATURE_STONE_DEBRIS_2_LEFT,
    ActorId::SPIKED_GREEN_CREATURE_STONE_DEBRIS_3_LEFT,
    ActorId::SPIKED_GREEN_CREATURE_STONE_DEBRIS_4_LEFT,
    ActorId::SPIKED_GREEN_CREATURE_STONE_DEBRIS_1_RIGHT,
    ActorId::SPIKED_GREEN_CREATURE_STONE_DEBRIS_2_RIGHT,
    ActorId::SPIKED_GREEN_CREATURE_STONE_DEBRIS_3_RIGHT,
    ActorId::SPIKED_GREEN_CREATURE_STONE_DEBRIS_4_RIGHT,
    ActorId::SPIDER_SHAKEN_OFF,
    ActorId::WINDBLOWN_SPIDER_GENERATOR,
    ActorId::SPIDER_DEBRIS_2,
    ActorId::SPIDER_BLOWING_IN_WIND,
    ActorId::PRISONER_HAND_DEBRIS,
    ActorId::RIGELATIN_SOLDIER_PROJECTILE,
    // floating score numbers
    ActorId::SCORE_NUMBER_FX_100,
    ActorId::SCORE_NUMBER_FX_500,
    ActorId::SCORE_NUMBER_FX_2000,
    ActorId::SCORE_NUMBER_FX_5000,
    ActorId::SCORE_NUMBER_FX_10000,
];

/// Actors whose layering key does not follow the package draw index.
pub const DRAW_LAYER_TABLE: &[(&[ActorId], DrawLayer)] = &[
    (PLAYER_PROJECTILES, DrawLayer::Fixed(PLAYER_PROJECTILE_DRAW_ORDER)),
    (MUZZLE_FLASHES, DrawLayer::Fixed(MUZZLE_FLASH_DRAW_ORDER)),
    (EFFECTS, DrawLayer::Fixed(EFFECT_DRAW_ORDER)),
    // keeps the bomb behind the plane dropping it
    (&[ActorId::NAPALM_BOMB], DrawLayer::BehindCarrier),
];

static DRAW_LAYERS: LazyLock<FxHashMap<ActorId, DrawLayer>> =
    LazyLock::new(|| index_table(DRAW_LAYER_TABLE));

/// Layer rule for `id`.
pub fn draw_layer_for(id: ActorId) -> DrawLayer {
    DRAW_LAYERS.get(&id).copied().unwrap_or(DrawLayer::Base)
}

/// Final layering key for `id` given its package draw index.
///
/// Saturates at the `i32` bounds for out-of-range package indices.
pub fn classify(id: ActorId, base_draw_order: i32) -> i32 {
    match draw_layer_for(id) {
        DrawLayer::Base => base_draw_order.saturating_mul(DRAW_ORDER_SCALE),
        DrawLayer::Fixed(order) => order.saturating_mul(DRAW_ORDER_SCALE),
        DrawLayer::BehindCarrier => base_draw_order
            .saturating_mul(DRAW_ORDER_SCALE)
            .saturating_sub(1),
    }
}
