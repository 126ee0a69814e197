//! Rendering module
//!
//! `scene` turns game state into a flat list of draw commands; backends only
//! replay that list.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

pub use scene::{Color, DrawCommand, Scene, TextAlign, colors};
