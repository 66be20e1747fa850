//! Platform-agnostic scene core - shared between the WASM widget and the CLI

pub mod animator;
pub mod data;
pub mod geometry;

pub use animator::{advance, AnimationContext, HOVER_ROTATION_SPEED, IDLE_ROTATION_SPEED};
pub use data::{DataPoint, GlowShell, Scene, WireMesh};
