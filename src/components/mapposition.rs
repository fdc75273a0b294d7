use bevy_ecs::prelude::Component;

use crate::geometry::{Point, TILE_SIZE};

/// Position of an actor on the map, in tiles.
///
/// Frame draw offsets are added to this before drawing.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPosition {
    pub x: i32,
    pub y: i32,
}

impl MapPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Top-left pixel of a frame drawn at `draw_offset` from this position.
    pub fn frame_origin_px(&self, draw_offset: Point) -> Point {
        let tile = TILE_SIZE as i32;
        Point::new((self.x + draw_offset.x) * tile, (self.y + draw_offset.y) * tile)
    }
}
