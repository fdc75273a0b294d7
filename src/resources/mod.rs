//! ECS resources and the collaborators behind sprite assembly.
//!
//! Overview
//! - `actorpackage` – source of actor images, offsets and draw indices
//! - `spritefactory` – assembles and caches per-actor draw data
//! - `texturestore` – texture factories (in-memory and raylib)
//! - `viewerconfig` – INI settings for the `spriteview` tool
pub mod actorpackage;
pub mod spritefactory;
pub mod texturestore;
pub mod viewerconfig;
