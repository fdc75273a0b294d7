//! ECS components for actor entities.
//!
//! Submodules overview:
//! - [`actorsprite`] – request to assemble and attach an actor's sprite
//! - [`mapposition`] – tile position of an actor on the map
//! - [`sprite`] – per-entity frames-to-render over shared draw data
//! - [`zindex`] – rendering order hint for 2D drawing
//!
//! [`Orientation`](crate::actors::framemap::Orientation) is also a component;
//! it lives next to the frame tables it selects from.

pub mod actorsprite;
pub mod mapposition;
pub mod sprite;
pub mod zindex;
