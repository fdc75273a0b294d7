//! Event types and observers.
//!
//! Submodules:
//! - [`spriteassembly`] – notification that an actor sprite could not be assembled
pub mod spriteassembly;
