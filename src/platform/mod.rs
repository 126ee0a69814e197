//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keys, pointer, confirm debounce)
//! - Demo autopilot for headless runs

pub mod autopilot;
pub mod input;

pub use autopilot::autopilot_input;
pub use input::{Debounce, InputState, Key};
