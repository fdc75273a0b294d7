//! Sprite assembly and cache.
//!
//! [`SpriteFactory`] turns an [`ActorId`] into shared, immutable draw data:
//! it loads every part of the actor from the package, applies the load-time
//! tweaks, checks the frame tables against the result and only then creates
//! one texture per frame and caches the entry. Each id is assembled at most once; cache
//! entries live until the process exits.
//!
//! Sprites handed out by [`SpriteFactory::create_sprite`] point into that
//! cache and only own their frames-to-render list.

use bevy_ecs::prelude::Resource;
use log::{debug, info};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::actors::defaults::{self, DefaultFrames};
use crate::actors::draworder;
use crate::actors::framemap::{self, Orientation};
use crate::actors::ids::ActorId;
use crate::actors::parts;
use crate::actors::tweaks::{self, StagedFrame};
use crate::components::sprite::{RenderSlot, RenderSlots, Sprite};
use crate::error::{SpriteError, SpriteResult};
use crate::geometry::{Extents, Point, Rect};
use crate::resources::actorpackage::{ActorData, ActorImagePackage};
use crate::resources::texturestore::{TextureFactory, TextureHandle};

/// A frame ready to be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameDrawData {
    pub texture: TextureHandle,
    /// Draw offset in tiles.
    pub draw_offset: Point,
    /// Image size in pixels.
    pub extents: Extents,
}

impl FrameDrawData {
    /// Create the texture for a staged frame, keeping its corrected offset.
    pub fn from_staged(frame: &StagedFrame<'_>, textures: &mut dyn TextureFactory) -> Self {
        Self {
            texture: textures.create_owned_texture(&frame.source.image),
            draw_offset: frame.draw_offset,
            extents: frame.source.image.extents,
        }
    }
}

/// Immutable draw data of one actor.
#[derive(Debug, PartialEq)]
pub struct SpriteDrawData {
    pub actor: ActorId,
    /// Frames of all parts, concatenated in part order, after tweaks.
    pub frames: Vec<FrameDrawData>,
    pub orientation_offset: Option<usize>,
    /// Virtual to real frame table; empty for direct addressing.
    pub frame_map: &'static [usize],
    pub draw_order: i32,
}

impl SpriteDrawData {
    /// Resolve a virtual frame the same way rendering does.
    pub fn real_frame(
        &self,
        virtual_frame: usize,
        orientation: Option<Orientation>,
    ) -> SpriteResult<usize> {
        framemap::virtual_to_real(
            virtual_frame,
            orientation,
            self.orientation_offset,
            self.frame_map,
            self.frames.len(),
        )
        .ok_or(SpriteError::FrameOutOfRange {
            actor: self.actor,
            frame: virtual_frame,
            len: self.frames.len(),
        })
    }
}

/// Cache entry for one actor.
#[derive(Debug)]
pub struct SpriteData {
    pub draw_data: SpriteDrawData,
    /// Index of the first frame of each part, before tweaks.
    pub part_boundaries: SmallVec<[usize; 8]>,
    /// Frames-to-render every new sprite starts with.
    pub initial_frames: RenderSlots,
}

/// Builds and caches sprite draw data.
///
/// Inserted as a resource; systems that need sprites take it through `ResMut`.
#[derive(Resource)]
pub struct SpriteFactory {
    package: Box<dyn ActorImagePackage>,
    cache: FxHashMap<ActorId, &'static SpriteData>,
}

impl SpriteFactory {
    pub fn new(package: impl ActorImagePackage + 'static) -> Self {
        Self {
            package: Box::new(package),
            cache: FxHashMap::default(),
        }
    }

    /// Cached entry for `id`, building it on first use.
    pub fn get_or_build(
        &mut self,
        id: ActorId,
        textures: &mut dyn TextureFactory,
    ) -> SpriteResult<&'static SpriteData> {
        if let Some(data) = self.cache.get(&id) {
            return Ok(data);
        }

        let data = assemble(id, self.package.as_ref(), textures)?;
        info!(
            "Assembled sprite for {}: {} frames, draw order {}",
            id,
            data.draw_data.frames.len(),
            data.draw_data.draw_order
        );
        let data: &'static SpriteData = Box::leak(Box::new(data));
        self.cache.insert(id, data);
        Ok(data)
    }

    /// New sprite for `id` showing the actor's default frames.
    pub fn create_sprite(
        &mut self,
        id: ActorId,
        textures: &mut dyn TextureFactory,
    ) -> SpriteResult<Sprite> {
        let data = self.get_or_build(id, textures)?;
        Ok(Sprite::new(&data.draw_data, data.initial_frames.clone()))
    }

    /// Draw offset and tile size of virtual frame `frame` of `id`.
    pub fn actor_frame_rect(
        &mut self,
        id: ActorId,
        frame: usize,
        textures: &mut dyn TextureFactory,
    ) -> SpriteResult<Rect> {
        let data = self.get_or_build(id, textures)?;
        let real = data.draw_data.real_frame(frame, None)?;
        let frame_data = &data.draw_data.frames[real];
        Ok(Rect {
            top_left: frame_data.draw_offset,
            size: frame_data.extents.pixels_to_tiles(),
        })
    }

    /// Entry for `id` if it was already built.
    pub fn cached(&self, id: ActorId) -> Option<&'static SpriteData> {
        self.cache.get(&id).copied()
    }

    /// Number of assembled actors.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Load, concatenate, annotate and tweak the frames of `id`.
///
/// Every rule is checked on staged frames; textures are only created once the
/// actor is known to assemble.
fn assemble(
    id: ActorId,
    package: &dyn ActorImagePackage,
    textures: &mut dyn TextureFactory,
) -> SpriteResult<SpriteData> {
    let part_ids = parts::resolve_parts(id);
    debug!("Assembling {} from parts {:?}", id, part_ids);

    let loaded = part_ids
        .iter()
        .map(|part| package.load_actor(*part))
        .collect::<SpriteResult<Vec<ActorData>>>()?;

    let mut staged = Vec::new();
    let mut part_boundaries = SmallVec::new();
    let mut last_draw_index = 0;
    for part in &loaded {
        part_boundaries.push(staged.len());
        last_draw_index = part.draw_index;
        staged.extend(part.frames.iter().map(StagedFrame::new));
    }
    if staged.is_empty() {
        return Err(SpriteError::missing(id, "package has no frames for any part"));
    }

    let draw_order = draworder::classify(id, last_draw_index);
    tweaks::apply_tweaks(&mut staged, id, &loaded)?;

    let orientation_offset = framemap::orientation_offset_for(id);
    let frame_map = framemap::frame_map_for(id);
    validate_frame_tables(id, staged.len(), orientation_offset, frame_map)?;
    let initial_frames = initial_frames(id, staged.len(), &part_boundaries)?;

    let frames = staged
        .iter()
        .map(|frame| FrameDrawData::from_staged(frame, textures))
        .collect();
    Ok(SpriteData {
        draw_data: SpriteDrawData {
            actor: id,
            frames,
            orientation_offset,
            frame_map,
            draw_order,
        },
        part_boundaries,
        initial_frames,
    })
}

/// Every remap entry must be a real frame and the orientation stride must
/// land inside the virtual frame space.
fn validate_frame_tables(
    id: ActorId,
    len: usize,
    orientation_offset: Option<usize>,
    frame_map: &[usize],
) -> SpriteResult<()> {
    if let Some(&bad) = frame_map.iter().find(|&&real| real >= len) {
        return Err(SpriteError::rule(id, "frame map", bad, len));
    }

    if let Some(offset) = orientation_offset {
        let space = if frame_map.is_empty() { len } else { frame_map.len() };
        if offset >= space {
            return Err(SpriteError::rule(id, "orientation offset", offset, space));
        }
    }
    Ok(())
}

/// Default frames-to-render for a freshly created sprite of `len` frames.
///
/// Without a table entry every part that contributed frames shows its first
/// one.
fn initial_frames(id: ActorId, len: usize, part_boundaries: &[usize]) -> SpriteResult<RenderSlots> {
    let slots: RenderSlots = match defaults::default_frames_for(id) {
        Some(DefaultFrames::Slots(slots)) => slots.iter().copied().collect(),
        Some(DefaultFrames::CustomRendered) => RenderSlots::new(),
        None => {
            let mut slots = RenderSlots::new();
            for (index, start) in part_boundaries.iter().enumerate() {
                let end = part_boundaries.get(index + 1).copied().unwrap_or(len);
                if *start < end {
                    slots.push(RenderSlot::Frame(*start));
                }
            }
            slots
        }
    };

    if let Some(bad) = slots
        .iter()
        .filter_map(|slot| slot.frame())
        .find(|&frame| frame >= len)
    {
        return Err(SpriteError::rule(id, "default frames", bad, len));
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Extents;
    use crate::resources::actorpackage::{ActorFrame, Image, ManifestPackage};
    use crate::resources::texturestore::HeadlessTextures;

    fn actor(frame_count: usize, draw_index: i32, shade: u8) -> ActorData {
        ActorData {
            draw_index,
            frames: (0..frame_count)
                .map(|i| ActorFrame {
                    image: Image::filled(Extents::new(16, 8), [shade, i as u8, 0, 255]),
                    draw_offset: Point::new(i as i32, 0),
                })
                .collect(),
        }
    }

    fn factory_with(actors: &[(ActorId, ActorData)]) -> SpriteFactory {
        let mut package = ManifestPackage::default();
        for (id, data) in actors {
            package.insert(*id, data.clone());
        }
        SpriteFactory::new(package)
    }

    #[test]
    fn test_single_part_actor() {
        let mut factory = factory_with(&[(ActorId::SNAKE, actor(18, 3, 1))]);
        let mut textures = HeadlessTextures::new();
        let data = factory.get_or_build(ActorId::SNAKE, &mut textures).unwrap();

        assert_eq!(data.draw_data.frames.len(), 18);
        assert_eq!(data.draw_data.draw_order, 30);
        assert_eq!(data.draw_data.orientation_offset, Some(9));
        assert!(data.draw_data.frame_map.is_empty());
        assert_eq!(data.part_boundaries.as_slice(), &[0]);
        assert_eq!(data.initial_frames.as_slice(), &[RenderSlot::Frame(0)]);
        assert_eq!(textures.len(), 18);
    }

    #[test]
    fn test_cache_hit_does_not_rebuild() {
        let mut factory = factory_with(&[(ActorId::SNAKE, actor(18, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        let first = factory.get_or_build(ActorId::SNAKE, &mut textures).unwrap();
        let second = factory.get_or_build(ActorId::SNAKE, &mut textures).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(textures.len(), 18);
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_boundaries_are_cumulative() {
        let mut factory = factory_with(&[
            (ActorId::MISSILE_INTACT, actor(3, 1, 1)),
            (ActorId::MISSILE_EXHAUST_FLAME, actor(2, 4, 2)),
        ]);
        let mut textures = HeadlessTextures::new();
        let data = factory.get_or_build(ActorId::MISSILE_INTACT, &mut textures).unwrap();
        assert_eq!(data.part_boundaries.as_slice(), &[0, 3]);
        assert_eq!(data.draw_data.frames.len(), 5);
        // last part's draw index is the base
        assert_eq!(data.draw_data.draw_order, 40);
        // second part starts with its own authored offsets
        assert_eq!(data.draw_data.frames[3].draw_offset, Point::new(0, 0));
    }

    #[test]
    fn test_dukes_ship_gets_shifted_exhaust_copies() {
        let mut factory = factory_with(&[
            (ActorId::DUKES_SHIP_LEFT, actor(2, 2, 1)),
            (ActorId::DUKES_SHIP_RIGHT, actor(2, 2, 2)),
            (ActorId::DUKES_SHIP_EXHAUST_FLAMES, actor(6, 2, 3)),
        ]);
        let mut textures = HeadlessTextures::new();
        let data = factory
            .get_or_build(ActorId::DUKES_SHIP_RIGHT, &mut textures)
            .unwrap();
        let frames = &data.draw_data.frames;

        assert_eq!(frames.len(), 12);
        assert_eq!(data.part_boundaries.as_slice(), &[0, 2, 4]);
        assert_eq!(frames[8].draw_offset, Point::new(1, 0));
        assert_eq!(frames[9].draw_offset, Point::new(2, 0));
        assert_eq!(textures.image(frames[8].texture), textures.image(frames[4].texture));
        assert_ne!(frames[8].texture, frames[4].texture);
        // the frames after the copies moved up by two
        assert_eq!(frames[10].draw_offset, Point::new(4, 0));
        assert_eq!(textures.len(), 12);

        assert_eq!(data.draw_data.real_frame(0, Some(Orientation::Left)).unwrap(), 0);
        assert_eq!(data.draw_data.real_frame(4, Some(Orientation::Right)).unwrap(), 4);
    }

    #[test]
    fn test_bomb_ship_is_truncated() {
        let mut factory = factory_with(&[
            (ActorId::BOMB_DROPPING_SPACESHIP, actor(5, 1, 1)),
            (ActorId::NAPALM_BOMB, actor(2, 3, 2)),
        ]);
        let mut textures = HeadlessTextures::new();
        let sprite = factory
            .create_sprite(ActorId::BOMB_DROPPING_SPACESHIP, &mut textures)
            .unwrap();
        let draw_data = sprite.draw_data();

        assert_eq!(draw_data.frames.len(), 4);
        assert_eq!(draw_data.frames[3].draw_offset, Point::new(5, 0));
        assert_eq!(draw_data.draw_order, 30);
        assert_eq!(
            sprite.frames_to_render.as_slice(),
            &[RenderSlot::Frame(3), RenderSlot::Frame(0), RenderSlot::Frame(1)]
        );
    }

    #[test]
    fn test_bomb_ship_truncation_ignores_source_length() {
        for ship_frames in [4, 6, 10] {
            let mut factory = factory_with(&[
                (ActorId::BOMB_DROPPING_SPACESHIP, actor(ship_frames, 1, 1)),
                (ActorId::NAPALM_BOMB, actor(2, 3, 2)),
            ]);
            let mut textures = HeadlessTextures::new();
            let data = factory
                .get_or_build(ActorId::BOMB_DROPPING_SPACESHIP, &mut textures)
                .unwrap();
            let frames = &data.draw_data.frames;
            assert_eq!(frames.len(), 4, "{ship_frames} ship frames");
            assert_eq!(frames[3].draw_offset, Point::new(5, 0), "{ship_frames} ship frames");
            assert_eq!(textures.len(), 4);
        }
    }

    #[test]
    fn test_watchbot_carrier_is_truncated() {
        for (carrier_frames, container_frames) in [(3, 2), (1, 4), (5, 1)] {
            let mut factory = factory_with(&[
                (ActorId::WATCHBOT_CONTAINER_CARRIER, actor(carrier_frames, 1, 1)),
                (ActorId::WATCHBOT_CONTAINER, actor(container_frames, 1, 2)),
            ]);
            let mut textures = HeadlessTextures::new();
            let sprite = factory
                .create_sprite(ActorId::WATCHBOT_CONTAINER_CARRIER, &mut textures)
                .unwrap();
            let frames = &sprite.draw_data().frames;
            assert_eq!(frames.len(), 3, "{carrier_frames}+{container_frames} frames");
            assert_eq!(frames[2].draw_offset.y, -2);
            assert_eq!(
                sprite.frames_to_render.as_slice(),
                &[RenderSlot::Frame(0), RenderSlot::Frame(2)]
            );
        }
    }

    #[test]
    fn test_dynamic_default_slot() {
        let mut factory = factory_with(&[(ActorId::BOSS_EPISODE_3, actor(2, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        let sprite = factory
            .create_sprite(ActorId::BOSS_EPISODE_3, &mut textures)
            .unwrap();
        assert_eq!(sprite.frames_to_render[0], RenderSlot::Dynamic);
        assert_eq!(sprite.visible_frames().collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_custom_rendered_actor() {
        let mut factory = factory_with(&[(ActorId::LAVA_FOUNTAIN, actor(3, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        let sprite = factory
            .create_sprite(ActorId::LAVA_FOUNTAIN, &mut textures)
            .unwrap();
        assert!(sprite.is_custom_rendered());
        assert_eq!(sprite.draw_data().frames.len(), 3);
    }

    #[test]
    fn test_bundled_manifest_assembles() {
        let package = ManifestPackage::load(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/assets/actors.json"
        ))
        .unwrap();
        let ids = package.actor_ids();
        let mut factory = SpriteFactory::new(package);
        let mut textures = HeadlessTextures::new();
        for id in ids {
            let sprite = factory.create_sprite(id, &mut textures).unwrap();
            assert!(!sprite.is_custom_rendered(), "{id}");
        }
    }

    #[test]
    fn test_default_frames_without_entry_show_each_part() {
        let mut factory = factory_with(&[
            (ActorId::BLOWING_FAN, actor(4, 1, 1)),
            (ActorId::BLOWING_FAN_THREADS_ON_TOP, actor(2, 1, 2)),
        ]);
        let mut textures = HeadlessTextures::new();
        let sprite = factory.create_sprite(ActorId::BLOWING_FAN, &mut textures).unwrap();
        assert_eq!(
            sprite.frames_to_render.as_slice(),
            &[RenderSlot::Frame(0), RenderSlot::Frame(4)]
        );
    }

    #[test]
    fn test_missing_part_fails_without_caching() {
        let mut factory = factory_with(&[(ActorId::MISSILE_INTACT, actor(3, 1, 1))]);
        let mut textures = HeadlessTextures::new();
        let err = factory
            .create_sprite(ActorId::MISSILE_INTACT, &mut textures)
            .unwrap_err();
        assert!(
            matches!(err, SpriteError::MissingAsset { actor, .. } if actor == ActorId::MISSILE_EXHAUST_FLAME)
        );
        assert!(factory.cached(ActorId::MISSILE_INTACT).is_none());
        assert!(textures.is_empty());
    }

    #[test]
    fn test_actor_without_frames_is_missing() {
        let mut factory = factory_with(&[(ActorId(700), actor(0, 0, 0))]);
        let mut textures = HeadlessTextures::new();
        assert!(matches!(
            factory.get_or_build(ActorId(700), &mut textures),
            Err(SpriteError::MissingAsset { .. })
        ));
    }

    #[test]
    fn test_bad_default_frames_are_rejected() {
        // Sentry robot generator shows frame 4 by default
        let mut factory = factory_with(&[(ActorId::SENTRY_ROBOT_GENERATOR, actor(3, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        let err = factory
            .create_sprite(ActorId::SENTRY_ROBOT_GENERATOR, &mut textures)
            .unwrap_err();
        assert!(matches!(
            err,
            SpriteError::RuleInconsistency { rule: "default frames", index: 4, len: 3, .. }
        ));
        assert!(factory.is_empty());
        assert!(textures.is_empty());
    }

    #[test]
    fn test_short_frame_map_target_is_rejected() {
        // Unicycle map points at frame 5
        let mut factory = factory_with(&[(ActorId::UNICYCLE_BOT, actor(5, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        let err = factory
            .get_or_build(ActorId::UNICYCLE_BOT, &mut textures)
            .unwrap_err();
        assert!(matches!(
            err,
            SpriteError::RuleInconsistency { rule: "frame map", index: 5, len: 5, .. }
        ));
        assert!(textures.is_empty());
    }

    #[test]
    fn test_repeated_failures_create_no_textures() {
        // too short for the truncation tweak
        let mut factory = factory_with(&[
            (ActorId::BOMB_DROPPING_SPACESHIP, actor(1, 1, 1)),
            (ActorId::NAPALM_BOMB, actor(2, 3, 2)),
        ]);
        let mut textures = HeadlessTextures::new();
        for _ in 0..3 {
            let err = factory
                .create_sprite(ActorId::BOMB_DROPPING_SPACESHIP, &mut textures)
                .unwrap_err();
            assert!(matches!(err, SpriteError::RuleInconsistency { .. }));
        }
        assert!(textures.is_empty());
        assert!(factory.cached(ActorId::BOMB_DROPPING_SPACESHIP).is_none());
    }

    #[test]
    fn test_radar_terminal_with_eight_frames_assembles() {
        let mut factory = factory_with(&[(ActorId::RADAR_COMPUTER_TERMINAL, actor(8, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        let data = factory
            .get_or_build(ActorId::RADAR_COMPUTER_TERMINAL, &mut textures)
            .unwrap();
        assert_eq!(data.draw_data.frames.len(), 8);
        assert_eq!(data.draw_data.frames[7].draw_offset, Point::new(7, 0));
        assert_eq!(textures.len(), 8);
    }

    #[test]
    fn test_orientation_offset_outside_frames_is_rejected() {
        let mut factory = factory_with(&[(ActorId::SKELETON, actor(4, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        assert!(matches!(
            factory.get_or_build(ActorId::SKELETON, &mut textures),
            Err(SpriteError::RuleInconsistency { rule: "orientation offset", .. })
        ));
    }

    #[test]
    fn test_frame_rect_uses_virtual_frame() {
        let mut factory = factory_with(&[(ActorId::SNAKE, actor(18, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        let rect = factory.actor_frame_rect(ActorId::SNAKE, 5, &mut textures).unwrap();
        assert_eq!(rect.top_left, Point::new(5, 0));
        assert_eq!(rect.size, Extents::new(2, 1));

        let err = factory
            .actor_frame_rect(ActorId::SNAKE, 18, &mut textures)
            .unwrap_err();
        assert!(matches!(err, SpriteError::FrameOutOfRange { frame: 18, len: 18, .. }));
    }

    #[test]
    fn test_real_frame_with_orientation() {
        let mut factory = factory_with(&[(ActorId::SNAKE, actor(18, 0, 1))]);
        let mut textures = HeadlessTextures::new();
        let data = factory.get_or_build(ActorId::SNAKE, &mut textures).unwrap();
        assert_eq!(data.draw_data.real_frame(2, Some(Orientation::Right)).unwrap(), 11);
        assert_eq!(data.draw_data.real_frame(2, Some(Orientation::Left)).unwrap(), 2);
        assert!(data.draw_data.real_frame(9, Some(Orientation::Right)).is_err());
    }
}
