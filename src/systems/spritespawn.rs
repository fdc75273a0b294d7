//! Attach assembled sprites to entities that ask for one.
//!
//! The texture factory is a non-send resource so that renderer-owned
//! factories (raylib) can be used from the main thread. Register the system
//! with the factory type in use, e.g.
//! `schedule.add_systems(spawn_actor_sprites::<HeadlessTextures>)`.

use bevy_ecs::prelude::*;
use log::{debug, error};

use crate::components::actorsprite::ActorSprite;
use crate::components::zindex::ZIndex;
use crate::events::spriteassembly::SpriteAssemblyFailed;
use crate::resources::spritefactory::SpriteFactory;
use crate::resources::texturestore::TextureFactory;

/// Replace every [`ActorSprite`] request with a [`Sprite`](crate::components::sprite::Sprite)
/// and its [`ZIndex`].
///
/// On failure the request is dropped and a [`SpriteAssemblyFailed`] event is
/// triggered for the entity.
pub fn spawn_actor_sprites<T: TextureFactory + 'static>(
    mut commands: Commands,
    mut factory: ResMut<SpriteFactory>,
    mut textures: NonSendMut<T>,
    query: Query<(Entity, &ActorSprite)>,
) {
    for (entity, request) in query.iter() {
        let actor = request.0;
        match factory.create_sprite(actor, &mut *textures) {
            Ok(sprite) => {
                debug!("Attaching {} sprite to {:?}", actor, entity);
                let z = ZIndex::from(sprite.draw_data());
                commands
                    .entity(entity)
                    .insert((sprite, z))
                    .remove::<ActorSprite>();
            }
            Err(err) => {
                error!("Could not assemble sprite for {}: {}", actor, err);
                commands.entity(entity).remove::<ActorSprite>();
                commands.trigger(SpriteAssemblyFailed {
                    entity,
                    actor,
                    reason: err.to_string(),
                });
            }
        }
    }
}
