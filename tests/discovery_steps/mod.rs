//! Step definitions for discovery registry behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
