//! Actor sprite assembly library.
//!
//! Builds renderable sprites for game actors out of their image parts,
//! per-actor frame tables, load-time tweaks and draw-order rules, and caches
//! the result for the rest of the process. ECS components, resources,
//! systems and events expose the same machinery to a `bevy_ecs` world.

pub mod actors;
pub mod components;
pub mod error;
pub mod events;
pub mod geometry;
pub mod resources;
pub mod systems;
