use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::texturestore::TextureStore;

/// Draw every visible sprite, lowest [`ZIndex`] first.
///
/// Within one sprite the frames-to-render are drawn in list order. `zoom`
/// scales the whole picture; frame pixels stay square.
pub fn render_sprites(world: &mut World, d: &mut RaylibDrawHandle, zoom: f32) {
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world)
            .filter(|(s, _, _)| s.show)
            .map(|(s, p, z)| (s.clone(), *p, *z))
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.non_send_resource::<TextureStore>();
    for (sprite, pos, _z) in to_draw.iter() {
        let draw_data = sprite.draw_data();
        for real in sprite.visible_frames() {
            let Some(frame) = draw_data.frames.get(real) else {
                continue;
            };
            let Some(tex) = textures.get(frame.texture) else {
                continue;
            };
            let origin = pos.frame_origin_px(frame.draw_offset);
            d.draw_texture_ex(
                tex,
                Vector2 {
                    x: origin.x as f32 * zoom,
                    y: origin.y as f32 * zoom,
                },
                0.0,
                zoom,
                Color::WHITE,
            );
        }
    }
}
