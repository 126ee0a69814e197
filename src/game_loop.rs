//! Loop driver
//!
//! Owns the session and pending input, and converts measured frame time into
//! whole fixed steps. Both the browser and the native demo drive the game
//! through this.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::platform::InputState;
use crate::renderer::Scene;
use crate::settings::GameConfig;
use crate::sim::{GameEvent, GameState, tick};

/// Largest frame delta honored; longer stalls (tab switch, debugger) are cut
const MAX_FRAME_DT: f32 = 0.1;

pub struct GameLoop {
    pub state: GameState,
    pub input: InputState,
    accumulator: f32,
}

impl GameLoop {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let input = InputState::new(config.confirm_debounce_ms);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(config, seed),
            input,
            accumulator: 0.0,
        }
    }

    /// Run as many fixed steps as `frame_dt` seconds cover. Returns the step count.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.take_tick_input();
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Events since the last call, logged as they are handed out
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        let events = self.state.drain_events();
        for event in &events {
            match event {
                GameEvent::LevelCleared { .. } | GameEvent::GameOver { .. } => {
                    log::info!("{:?}", event)
                }
                _ => log::trace!("{:?}", event),
            }
        }
        events
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.state)
    }
}
