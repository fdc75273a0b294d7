use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

use crate::error::{SpriteError, SpriteResult};
use crate::resources::spritefactory::SpriteDrawData;

/// One entry of a sprite's frames-to-render list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderSlot {
    /// Draw this real frame.
    Frame(usize),
    /// Reserved slot that is never drawn.
    Empty,
    /// Reserved slot that game logic fills in later; skipped until then.
    Dynamic,
}

impl RenderSlot {
    /// Real frame drawn by this slot, if any.
    pub fn frame(self) -> Option<usize> {
        match self {
            RenderSlot::Frame(frame) => Some(frame),
            RenderSlot::Empty | RenderSlot::Dynamic => None,
        }
    }
}

/// Frames-to-render list of a sprite.
pub type RenderSlots = SmallVec<[RenderSlot; 4]>;

/// Per-entity view of an actor's shared draw data.
///
/// The draw data lives for the whole process and is never changed; each
/// sprite only owns its list of slots, drawn in order (later on top).
/// An empty list means the actor is drawn by a custom renderer.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    draw_data: &'static SpriteDrawData,
    pub frames_to_render: RenderSlots,
    pub show: bool,
}

impl Sprite {
    pub fn new(draw_data: &'static SpriteDrawData, frames_to_render: RenderSlots) -> Self {
        Self {
            draw_data,
            frames_to_render,
            show: true,
        }
    }

    /// Shared draw data backing this sprite.
    pub fn draw_data(&self) -> &'static SpriteDrawData {
        self.draw_data
    }

    /// Replace slot `slot` with `value`.
    ///
    /// The slot must exist and a frame must be part of the draw data.
    pub fn set_slot(&mut self, slot: usize, value: RenderSlot) -> SpriteResult<()> {
        if let RenderSlot::Frame(frame) = value {
            let len = self.draw_data.frames.len();
            if frame >= len {
                return Err(SpriteError::FrameOutOfRange {
                    actor: self.draw_data.actor,
                    frame,
                    len,
                });
            }
        }
        let len = self.frames_to_render.len();
        let target = self
            .frames_to_render
            .get_mut(slot)
            .ok_or_else(|| SpriteError::rule(self.draw_data.actor, "render slot", slot, len))?;
        *target = value;
        Ok(())
    }

    /// Real frames to draw this tick, in order. Empty when hidden.
    pub fn visible_frames(&self) -> impl Iterator<Item = usize> + '_ {
        self.frames_to_render
            .iter()
            .filter(|_| self.show)
            .filter_map(|slot| slot.frame())
    }

    /// True when the sprite draws nothing by itself.
    pub fn is_custom_rendered(&self) -> bool {
        self.frames_to_render.is_empty()
    }
}
