//! Error taxonomy for sprite assembly.
//!
//! Assembly either completes or fails as a whole. A failure never leaves a
//! partial entry in the [`SpriteFactory`](crate::resources::spritefactory::SpriteFactory)
//! cache, so callers can tell "this actor cannot be built" apart from "this
//! actor has nothing to draw".

use crate::actors::ids::ActorId;

/// Convenience result type used across the crate.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Everything that can go wrong while assembling or querying a sprite.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// The package could not supply frames for a part.
    #[error("missing asset data for actor {actor}: {reason}")]
    MissingAsset { actor: ActorId, reason: String },

    /// A tweak, remap or default-frame rule points outside the assembled
    /// frame sequence. This is a defect in the rule tables, not bad input.
    #[error("inconsistent {rule} rule for actor {actor}: index {index} but only {len} frames")]
    RuleInconsistency {
        actor: ActorId,
        rule: &'static str,
        index: usize,
        len: usize,
    },

    /// A virtual frame resolved to an index outside the frame sequence.
    #[error("frame {frame} out of range for actor {actor} ({len} available)")]
    FrameOutOfRange {
        actor: ActorId,
        frame: usize,
        len: usize,
    },

    /// The actor manifest could not be parsed.
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// The actor manifest could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::MissingAsset`] value.
    pub fn missing(actor: ActorId, reason: impl Into<String>) -> Self {
        Self::MissingAsset {
            actor,
            reason: reason.into(),
        }
    }

    /// Build a [`SpriteError::RuleInconsistency`] value.
    pub fn rule(actor: ActorId, rule: &'static str, index: usize, len: usize) -> Self {
        Self::RuleInconsistency {
            actor,
            rule,
            index,
            len,
        }
    }
}
