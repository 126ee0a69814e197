//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::platform::Key;
    use brick_breaker::renderer::canvas;
    use brick_breaker::{GameConfig, GameLoop};

    /// Game instance plus the surface it draws on
    struct Game {
        game: GameLoop,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            self.game.advance(dt);
            self.game.drain_events();

            if let Err(e) = canvas::draw(&self.ctx, &self.game.scene()) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let config = GameConfig::default();
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            game: GameLoop::new(config, seed),
            ctx,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone())?;
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    if key == Key::Confirm {
                        event.prevent_default();
                    }
                    game.borrow_mut().game.input.key_down(key, js_sys::Date::now());
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().game.input.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - convert client position to field coordinates
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                if rect.width() <= 0.0 {
                    return;
                }
                let mut g = game.borrow_mut();
                let scale = g.game.state.config.width as f64 / rect.width();
                let x = (event.client_x() as f64 - rect.left()) * scale;
                g.game.input.pointer_moved(x as f32);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo length: five minutes of simulated play
#[cfg(not(target_arch = "wasm32"))]
const DEMO_STEPS: u64 = 5 * 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::{GameConfig, GameLoop};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut game = GameLoop::new(config, seed);
    run_demo(&mut game, DEMO_STEPS);

    let summary = demo::RunSummary::from_state(&game.state);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize summary: {e}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(game: &mut brick_breaker::GameLoop, steps: u64) {
    use brick_breaker::consts::SIM_DT;
    use brick_breaker::platform::autopilot_input;
    use brick_breaker::sim::{GamePhase, tick};

    for _ in 0..steps {
        let input = autopilot_input(&game.state);
        tick(&mut game.state, &input, SIM_DT);
        game.drain_events();
        if game.state.phase == GamePhase::GameOver {
            break;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use brick_breaker::sim::{GamePhase, GameState};
    use serde::Serialize;

    /// End-of-run report printed as JSON
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub phase: GamePhase,
        pub score: u64,
        pub level: u32,
        pub lives: u8,
        pub steps: u64,
        pub bricks_left: usize,
    }

    impl RunSummary {
        pub fn from_state(state: &GameState) -> Self {
            Self {
                seed: state.seed,
                phase: state.phase,
                score: state.score,
                level: state.level,
                lives: state.lives,
                steps: state.time_ticks,
                bricks_left: state.bricks.alive_count(),
            }
        }
    }
}
