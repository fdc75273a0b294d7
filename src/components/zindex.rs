//! Z-index component for render ordering.
//!
//! The [`ZIndex`] of an actor entity is the draw order its sprite was
//! assembled with. Entities with higher values are drawn on top of those
//! with lower values; ties keep no particular order.

use bevy_ecs::prelude::Component;

use crate::resources::spritefactory::SpriteDrawData;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The renderer sorts by `ZIndex`
/// to achieve a painter's algorithm.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl From<&SpriteDrawData> for ZIndex {
    fn from(draw_data: &SpriteDrawData) -> Self {
        ZIndex(draw_data.draw_order)
    }
}
