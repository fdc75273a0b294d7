//! Load-time corrections for quirks in the original actor art.
//!
//! Some frames carry offsets that are right for gameplay but wrong for
//! drawing, some actors need an extra copy of a frame with a different
//! offset, and some composites carry frames that are never used. These are
//! fixed once after assembly so rendering needs no special cases.
//!
//! Frame indices in [`TWEAK_TABLE`] are absolute positions in the
//! concatenated sequence produced by [`resolve_parts`](super::parts::resolve_parts),
//! not per-part indices. Every op checks its indices against the current
//! sequence before it touches anything.
//!
//! Tweaks run on [`StagedFrame`]s, before any texture exists, so a rule that
//! does not fit the package's frames fails without leaving textures behind.

use std::sync::LazyLock;

use log::debug;
use rustc_hash::FxHashMap;

use super::ids::ActorId;
use super::parts::index_table;
use crate::error::{SpriteError, SpriteResult};
use crate::geometry::Point;
use crate::resources::actorpackage::{ActorData, ActorFrame};

/// A frame of an actor being assembled: the source frame it will be drawn
/// from and its (possibly corrected) draw offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagedFrame<'a> {
    pub source: &'a ActorFrame,
    pub draw_offset: Point,
}

impl<'a> StagedFrame<'a> {
    /// Stage `source` with its authored offset.
    pub fn new(source: &'a ActorFrame) -> Self {
        Self {
            source,
            draw_offset: source.draw_offset,
        }
    }
}

/// A set of frame positions: a range, optionally open-ended, strided, or
/// with holes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSelection {
    pub start: usize,
    /// Exclusive end; `None` runs to the end of the sequence.
    pub end: Option<usize>,
    pub step: usize,
    pub except: &'static [usize],
}

impl FrameSelection {
    pub const fn single(index: usize) -> Self {
        Self::range(index, index + 1)
    }

    pub const fn range(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
            step: 1,
            except: &[],
        }
    }

    /// From `start` to the last frame.
    pub const fn from(start: usize) -> Self {
        Self {
            start,
            end: None,
            step: 1,
            except: &[],
        }
    }

    pub const fn except(self, except: &'static [usize]) -> Self {
        Self { except, ..self }
    }

    pub const fn step_by(self, step: usize) -> Self {
        Self { step, ..self }
    }

    /// Positions selected within a sequence of `len` frames.
    ///
    /// Returns the first offending index when a bounded selection reaches
    /// past the sequence or selects nothing at all. An open-ended selection
    /// starting at or past the end selects nothing.
    fn indices(&self, len: usize) -> Result<Vec<usize>, usize> {
        let end = match self.end {
            Some(end) if end > len => return Err(end - 1),
            Some(end) => end,
            None if self.start >= len => return Ok(Vec::new()),
            None => len,
        };
        if self.start >= end {
            return Err(self.start);
        }
        Ok((self.start..end)
            .step_by(self.step.max(1))
            .filter(|index| !self.except.contains(index))
            .collect())
    }
}

/// One structural edit on an assembled frame sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweakOp {
    /// Add `delta` to the draw offset of the selected frames.
    ShiftOffset { frames: FrameSelection, delta: Point },
    /// Overwrite the X draw offset of one frame.
    SetOffsetX { frame: usize, x: i32 },
    /// Copy `count` frames of part `part`, starting at that part's frame
    /// `first`, and insert the copies at absolute position `insert_at`.
    DuplicateFromPart {
        part: usize,
        first: usize,
        count: usize,
        insert_at: usize,
    },
    /// Drop every frame after `last_kept`.
    TruncateAfter { last_kept: usize },
}

impl TweakOp {
    pub fn name(&self) -> &'static str {
        match self {
            TweakOp::ShiftOffset { .. } => "offset shift",
            TweakOp::SetOffsetX { .. } => "offset override",
            TweakOp::DuplicateFromPart { .. } => "frame duplication",
            TweakOp::TruncateAfter { .. } => "truncation",
        }
    }
}

const DUKE_TWEAKS: &[TweakOp] = &[TweakOp::ShiftOffset {
    frames: FrameSelection::range(0, 39).except(&[35, 36]),
    delta: Point::new(-1, 0),
}];

// Parts: ship left (0, 1), ship right (2, 3), exhaust flames (4..10).
// The down-facing flames (4, 5) sit one tile off under the left-facing
// ship, so a shifted copy goes in at 8, 9 for the left half of the frame
// map to use.
const DUKES_SHIP_TWEAKS: &[TweakOp] = &[
    TweakOp::DuplicateFromPart {
        part: 2,
        first: 0,
        count: 2,
        insert_at: 8,
    },
    TweakOp::ShiftOffset {
        frames: FrameSelection::range(8, 10),
        delta: Point::new(1, 0),
    },
];

/// Per-actor corrections, applied in order.
pub const TWEAK_TABLE: &[(&[ActorId], &[TweakOp])] = &[
    (&[ActorId::DUKE_LEFT, ActorId::DUKE_RIGHT], DUKE_TWEAKS),
    (
        &[ActorId::REACTOR_FIRE_LEFT, ActorId::REACTOR_FIRE_RIGHT],
        &[TweakOp::SetOffsetX { frame: 0, x: 0 }],
    ),
    (
        &[ActorId::RADAR_COMPUTER_TERMINAL],
        &[TweakOp::ShiftOffset {
            frames: FrameSelection::from(8),
            delta: Point::new(-1, 0),
        }],
    ),
    (
        &[
            ActorId::DUKES_SHIP_LEFT,
            ActorId::DUKES_SHIP_RIGHT,
            ActorId::DUKES_SHIP_AFTER_EXITING_LEFT,
            ActorId::DUKES_SHIP_AFTER_EXITING_RIGHT,
        ],
        DUKES_SHIP_TWEAKS,
    ),
    (
        &[ActorId::BOMB_DROPPING_SPACESHIP],
        &[
            TweakOp::ShiftOffset {
                frames: FrameSelection::single(3),
                delta: Point::new(2, 0),
            },
            TweakOp::TruncateAfter { last_kept: 3 },
        ],
    ),
    (
        &[ActorId::WATCHBOT_CONTAINER_CARRIER],
        &[
            TweakOp::ShiftOffset {
                frames: FrameSelection::single(2),
                delta: Point::new(0, -2),
            },
            TweakOp::TruncateAfter { last_kept: 2 },
        ],
    ),
];

static TWEAKS: LazyLock<FxHashMap<ActorId, &'static [TweakOp]>> =
    LazyLock::new(|| index_table(TWEAK_TABLE));

/// Corrections registered for `id`.
pub fn tweaks_for(id: ActorId) -> &'static [TweakOp] {
    TWEAKS.get(&id).copied().unwrap_or(&[])
}

/// Apply every correction registered for `id` to `frames`.
///
/// `parts` are the loaded parts in resolver order; duplication ops stage
/// further frames from them.
pub fn apply_tweaks<'a>(
    frames: &mut Vec<StagedFrame<'a>>,
    id: ActorId,
    parts: &'a [ActorData],
) -> SpriteResult<()> {
    for op in tweaks_for(id) {
        apply_op(frames, id, op, parts)?;
    }
    Ok(())
}

/// Apply a single op. Nothing is modified if the op's indices are invalid.
pub fn apply_op<'a>(
    frames: &mut Vec<StagedFrame<'a>>,
    id: ActorId,
    op: &TweakOp,
    parts: &'a [ActorData],
) -> SpriteResult<()> {
    let len = frames.len();
    let inconsistent = |index: usize, len: usize| SpriteError::rule(id, op.name(), index, len);

    match *op {
        TweakOp::ShiftOffset {
            frames: selection,
            delta,
        } => {
            let indices = selection.indices(len).map_err(|i| inconsistent(i, len))?;
            for index in indices {
                frames[index].draw_offset += delta;
            }
        }
        TweakOp::SetOffsetX { frame, x } => {
            let target = frames.get_mut(frame).ok_or_else(|| inconsistent(frame, len))?;
            target.draw_offset.x = x;
        }
        TweakOp::DuplicateFromPart {
            part,
            first,
            count,
            insert_at,
        } => {
            let source = parts.get(part).ok_or_else(|| inconsistent(part, parts.len()))?;
            let source_frames = source
                .frames
                .get(first..first + count)
                .ok_or_else(|| inconsistent((first + count).saturating_sub(1), source.frames.len()))?;
            if insert_at > len {
                return Err(inconsistent(insert_at, len));
            }
            frames.splice(
                insert_at..insert_at,
                source_frames.iter().map(StagedFrame::new),
            );
        }
        TweakOp::TruncateAfter { last_kept } => {
            if last_kept >= len {
                return Err(inconsistent(last_kept, len));
            }
            frames.truncate(last_kept + 1);
        }
    }

    debug!("Applied {} to {} ({} -> {} frames)", op.name(), id, len, frames.len());
    Ok(())
}
