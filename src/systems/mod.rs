//! ECS systems.
//!
//! Submodules overview
//! - [`spritespawn`] – assemble sprites for entities carrying an `ActorSprite`
//! - [`render`] – draw sprites with raylib (feature `preview`)

#[cfg(feature = "preview")]
pub mod render;
pub mod spritespawn;
