//! Actor image package interface.
//!
//! The package owns decoded actor frames and hands them out per actor id.
//! Sprite assembly only reads from it. [`ManifestPackage`] is a small
//! JSON-backed implementation used by the `spriteview` tool and by tests;
//! a game would plug in its own decoder behind [`ActorImagePackage`].
//!
//! # Manifest format
//!
//! ```json
//! {
//!   "actors": [
//!     {
//!       "id": 87,
//!       "draw_index": 2,
//!       "frames": [
//!         { "width": 32, "height": 16, "offset": { "x": 0, "y": 0 }, "color": [200, 200, 210, 255] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::actors::ids::ActorId;
use crate::error::{SpriteError, SpriteResult};
use crate::geometry::{Extents, Point};

/// Decoded RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub extents: Extents,
    /// Row-major RGBA8 pixels.
    pub pixels: Arc<[u8]>,
}

impl Image {
    /// Image of the given size filled with one color.
    pub fn filled(extents: Extents, rgba: [u8; 4]) -> Self {
        let count = extents.width as usize * extents.height as usize;
        let pixels: Vec<u8> = rgba.iter().copied().cycle().take(count * 4).collect();
        Self {
            extents,
            pixels: pixels.into(),
        }
    }
}

/// One authored frame of an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorFrame {
    pub image: Image,
    /// Draw offset in tiles, relative to the actor position.
    pub draw_offset: Point,
}

/// Everything the package knows about one actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorData {
    pub draw_index: i32,
    pub frames: Vec<ActorFrame>,
}

/// Source of actor frames.
pub trait ActorImagePackage: Send + Sync {
    /// Load all frames of `id`. Fails when the actor is absent or unreadable.
    fn load_actor(&self, id: ActorId) -> SpriteResult<ActorData>;
}

#[derive(Debug, Deserialize, Serialize)]
struct ManifestFrame {
    width: u32,
    height: u32,
    #[serde(default)]
    offset: Point,
    #[serde(default = "default_color")]
    color: [u8; 4],
}

fn default_color() -> [u8; 4] {
    [255, 255, 255, 255]
}

#[derive(Debug, Deserialize, Serialize)]
struct ManifestActor {
    id: ActorId,
    #[serde(default)]
    draw_index: i32,
    frames: Vec<ManifestFrame>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Manifest {
    actors: Vec<ManifestActor>,
}

/// Actor package described by a JSON manifest of solid-color frames.
#[derive(Debug, Default)]
pub struct ManifestPackage {
    actors: FxHashMap<ActorId, ActorData>,
}

impl ManifestPackage {
    /// Parse a manifest from a JSON string.
    pub fn from_json_str(json: &str) -> SpriteResult<Self> {
        let manifest: Manifest = serde_json::from_str(json)?;
        let mut actors = FxHashMap::default();
        for actor in manifest.actors {
            let frames = actor
                .frames
                .into_iter()
                .map(|frame| ActorFrame {
                    image: Image::filled(Extents::new(frame.width, frame.height), frame.color),
                    draw_offset: frame.offset,
                })
                .collect();
            if actors
                .insert(
                    actor.id,
                    ActorData {
                        draw_index: actor.draw_index,
                        frames,
                    },
                )
                .is_some()
            {
                warn!("Actor {} listed twice in manifest, keeping the last entry", actor.id);
            }
        }
        Ok(Self { actors })
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> SpriteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let package = Self::from_json_str(&json)?;
        info!("Loaded {} actors from {:?}", package.len(), path);
        Ok(package)
    }

    /// Add or replace an actor.
    pub fn insert(&mut self, id: ActorId, data: ActorData) {
        self.actors.insert(id, data);
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Ids present in the package, sorted.
    pub fn actor_ids(&self) -> Vec<ActorId> {
        let mut ids: Vec<ActorId> = self.actors.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl ActorImagePackage for ManifestPackage {
    fn load_actor(&self, id: ActorId) -> SpriteResult<ActorData> {
        self.actors
            .get(&id)
            .cloned()
            .ok_or_else(|| SpriteError::missing(id, "actor not present in package"))
    }
}
