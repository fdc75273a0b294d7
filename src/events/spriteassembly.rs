//! Sprite assembly failures.
//!
//! When [`spawn_actor_sprites`](crate::systems::spritespawn::spawn_actor_sprites)
//! cannot assemble the sprite requested by an
//! [`ActorSprite`](crate::components::actorsprite::ActorSprite), it triggers a
//! [`SpriteAssemblyFailed`] event. The entity keeps living without a sprite.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<SpriteAssemblyFailed>, mut commands: Commands| {
//!     commands.entity(trigger.entity).despawn();
//! });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::warn;

use crate::actors::ids::ActorId;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SpriteAssemblyFailed {
    /// Entity that asked for the sprite.
    pub entity: Entity,
    pub actor: ActorId,
    /// Rendered [`SpriteError`](crate::error::SpriteError).
    pub reason: String,
}

/// Observer that reports failed assemblies.
pub fn sprite_assembly_failed_observer(trigger: On<SpriteAssemblyFailed>) {
    let event = trigger.event();
    warn!(
        "Entity {:?} has no sprite for {}: {}",
        event.entity, event.actor, event.reason
    );
}
