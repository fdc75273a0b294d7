//! Request for an actor sprite.
//!
//! Spawning an entity with [`ActorSprite`] asks
//! [`spawn_actor_sprites`](crate::systems::spritespawn::spawn_actor_sprites)
//! to attach the assembled [`Sprite`](super::sprite::Sprite) and its
//! [`ZIndex`](super::zindex::ZIndex). The marker is removed once handled,
//! whether assembly succeeded or not.

use bevy_ecs::prelude::Component;

use crate::actors::ids::ActorId;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorSprite(pub ActorId);
