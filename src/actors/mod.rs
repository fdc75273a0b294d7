//! Per-actor rule tables.
//!
//! Every special case of sprite assembly lives here as static data keyed by
//! [`ActorId`](ids::ActorId). Each table is indexed once on first use.
//!
//! Submodules overview:
//! - [`ids`] – actor identifiers and their names
//! - [`parts`] – which sub-actors make up a composite actor, in order
//! - [`framemap`] – orientation offsets and virtual to real frame tables
//! - [`tweaks`] – load-time corrections of offsets and frame lists
//! - [`draworder`] – layering key classification
//! - [`defaults`] – initial frames to render

pub mod defaults;
pub mod draworder;
pub mod framemap;
pub mod ids;
pub mod parts;
pub mod tweaks;

use std::collections::BTreeSet;

use defaults::DefaultFrames;
use draworder::DrawLayer;
use ids::ActorId;
use parts::PartList;
use tweaks::TweakOp;

/// All rules that apply to one actor.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorRules {
    pub parts: PartList,
    /// The part list comes from a table entry rather than the `[id]` fallback.
    pub explicit_parts: bool,
    pub orientation_offset: Option<usize>,
    pub frame_map: &'static [usize],
    pub tweaks: &'static [TweakOp],
    pub draw_layer: DrawLayer,
    pub default_frames: Option<DefaultFrames>,
}

impl ActorRules {
    /// True when nothing about the actor differs from the defaults.
    pub fn is_default(&self) -> bool {
        !self.explicit_parts
            && self.orientation_offset.is_none()
            && self.frame_map.is_empty()
            && self.tweaks.is_empty()
            && self.draw_layer == DrawLayer::Base
            && self.default_frames.is_none()
    }
}

/// Collect every rule for `id`.
pub fn rules_for(id: ActorId) -> ActorRules {
    ActorRules {
        parts: parts::resolve_parts(id),
        explicit_parts: parts::has_part_entry(id),
        orientation_offset: framemap::orientation_offset_for(id),
        frame_map: framemap::frame_map_for(id),
        tweaks: tweaks::tweaks_for(id),
        draw_layer: draworder::draw_layer_for(id),
        default_frames: defaults::default_frames_for(id),
    }
}

fn keys<T>(table: &'static [(&'static [ActorId], T)]) -> impl Iterator<Item = ActorId> {
    table.iter().flat_map(|(ids, _)| ids.iter().copied())
}

/// Every actor mentioned by at least one rule table, sorted.
pub fn actors_with_rules() -> Vec<ActorId> {
    let actors: BTreeSet<ActorId> = keys(parts::PART_TABLE)
        .chain(keys(framemap::ORIENTATION_OFFSET_TABLE))
        .chain(keys(framemap::FRAME_MAP_TABLE))
        .chain(keys(tweaks::TWEAK_TABLE))
        .chain(keys(draworder::DRAW_LAYER_TABLE))
        .chain(keys(defaults::DEFAULT_FRAMES_TABLE))
        .collect();
    actors.into_iter().collect()
}
