//! Raw input collection
//!
//! Event handlers write into [`InputState`] as events arrive; the loop driver
//! turns it into one [`TickInput`] per physics step.

use crate::sim::TickInput;

/// Direction keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Confirm,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Left" | "ArrowLeft" => Some(Key::Left),
            "Right" | "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// Accepts a press only if enough time has passed since the last accepted one
#[derive(Debug, Clone)]
pub struct Debounce {
    interval_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl Debounce {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Returns true if the press at `now_ms` is accepted
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

/// Accumulated input between physics steps
#[derive(Debug, Clone)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    confirm_pending: bool,
    pointer_x: Option<f32>,
    debounce: Debounce,
}

impl InputState {
    pub fn new(confirm_debounce_ms: f64) -> Self {
        Self {
            left_held: false,
            right_held: false,
            confirm_pending: false,
            pointer_x: None,
            debounce: Debounce::new(confirm_debounce_ms),
        }
    }

    pub fn key_down(&mut self, key: Key, now_ms: f64) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
            Key::Confirm => {
                if self.debounce.accept(now_ms) {
                    self.confirm_pending = true;
                } else {
                    log::debug!("Confirm ignored (debounce)");
                }
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Confirm => {}
        }
    }

    /// Pointer moved to `x` in field coordinates
    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    /// Input for the next step. One-shot inputs (confirm, pointer) are
    /// consumed; held keys persist.
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            left: self.left_held,
            right: self.right_held,
            confirm: std::mem::take(&mut self.confirm_pending),
            pointer_x: self.pointer_x.take(),
        }
    }
}
