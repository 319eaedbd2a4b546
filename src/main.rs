//! Heist Slice entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use heist_slice::audio::{MusicPlayer, music_change};
    use heist_slice::renderer::CanvasRenderer;
    use heist_slice::sim::{FrameDriver, GameEvent, GameMode, GameState, PointerEvent, TickInput};
    use heist_slice::{Settings, Tuning, client_to_play_area};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        driver: FrameDriver,
        input: TickInput,
        renderer: CanvasRenderer,
        music: MusicPlayer,
        settings: Settings,
        canvas: HtmlCanvasElement,
        pointer_held: bool,
    }

    impl Game {
        /// Convert a client position into play-area space
        fn to_play_area(&self, client_x: f32, client_y: f32) -> Option<Vec2> {
            let rect = self.canvas.get_bounding_client_rect();
            client_to_play_area(
                Vec2::new(client_x, client_y),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
                self.state.play_size(),
            )
        }

        fn pointer_down(&mut self, p: Vec2) {
            match self.state.mode {
                GameMode::Intro => self.input.advance_dialogue = true,
                GameMode::GameOver => self.input.replay = true,
                GameMode::Playing | GameMode::Bonus => {
                    self.input.pointer.push(PointerEvent::Down(p));
                }
            }
            self.input.pointer_down = Some(p);
            self.pointer_held = true;
        }

        fn pointer_move(&mut self, p: Vec2) {
            if !self.pointer_held {
                return;
            }
            self.input.pointer.push(PointerEvent::Move(p));
            self.input.pointer_down = Some(p);
        }

        fn pointer_up(&mut self) {
            self.pointer_held = false;
            self.input.pointer.push(PointerEvent::Up);
            self.input.pointer_down = None;
        }

        fn handle_events(&mut self) {
            let events = self.state.drain_events();
            if let Some(track) = music_change(&events) {
                self.music.switch_to(track);
            }
            if events.contains(&GameEvent::BonusComplete) {
                log::info!("Bonus complete, leaving the vault");
                if let Some(window) = web_sys::window()
                    && let Err(e) = window.location().set_href("reward.html")
                {
                    log::error!("Failed to open the reward page: {:?}", e);
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Heist Slice starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas element");
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let tuning = Tuning::default();
        let settings = Settings::default();
        canvas.set_width(tuning.play_width as u32);
        canvas.set_height(tuning.play_height as u32);

        let mut renderer = CanvasRenderer::new(ctx);
        renderer.resize(canvas.width() as f64, tuning.play_width);
        let music = MusicPlayer::new(settings.effective_music_volume());

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, tuning),
            driver: FrameDriver::new(),
            input: TickInput::default(),
            renderer,
            music,
            settings,
            canvas: canvas.clone(),
            pointer_held: false,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down - tap, start swipe, advance dialogue
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if let Some(p) = g.to_play_area(event.client_x() as f32, event.client_y() as f32) {
                    g.pointer_down(p);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - swipe samples
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                if let Some(p) = g.to_play_area(event.client_x() as f32, event.client_y() as f32) {
                    g.pointer_move(p);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up / leave - end swipe
        for name in ["mouseup", "mouseleave"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer_up();
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    if let Some(p) = g.to_play_area(touch.client_x() as f32, touch.client_y() as f32) {
                        g.pointer_down(p);
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    if let Some(p) = g.to_play_area(touch.client_x() as f32, touch.client_y() as f32) {
                        g.pointer_move(p);
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().pointer_up();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
        let keep_running = {
            let mut g = game.borrow_mut();
            let g = &mut *g;

            let report = g.driver.frame(&mut g.state, &mut g.input, time);
            g.handle_events();
            g.renderer.render(&g.state, &g.settings, time);
            report.keep_running
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Heist Slice (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(json) => heist_slice::Tuning::from_json_or_default(&json),
        None => heist_slice::Tuning::default(),
    };
    autopilot::run(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: slices the lowest collectible each frame and avoids bombs
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use glam::Vec2;

    use heist_slice::consts::SIM_DT_MS;
    use heist_slice::sim::{FrameDriver, GameEvent, GameMode, GameState, PointerEvent, TickInput};
    use heist_slice::Tuning;

    /// Sim time budget for the demo
    const RUN_MS: f64 = 120_000.0;

    fn pick_target(state: &GameState) -> Option<Vec2> {
        let h = state.tuning.play_height;
        state
            .objects
            .iter()
            .filter(|o| !o.category().is_hazard() && o.pos.y < h - o.radius())
            .filter(|o| {
                // Keep clear of bombs near the target
                !state
                    .objects
                    .iter()
                    .any(|b| b.category().is_hazard() && b.pos.distance(o.pos) < b.radius() * 3.0)
            })
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|o| o.pos)
    }

    pub fn run(tuning: Tuning) {
        let mut state = GameState::new(0x5EED, tuning);
        let mut driver = FrameDriver::new();
        let mut input = TickInput::default();
        let mut frames = 0u64;

        let mut time = 0.0;
        while time < RUN_MS {
            match state.mode {
                GameMode::Intro => input.advance_dialogue = true,
                GameMode::Playing => {
                    if let Some(p) = pick_target(&state) {
                        input.pointer.push(PointerEvent::Down(p));
                        input.pointer.push(PointerEvent::Up);
                    }
                }
                GameMode::Bonus => {
                    // Raster across the card
                    let size = state.play_size();
                    let phase = (frames % 400) as f32 / 400.0;
                    let row = (frames / 40 % 10) as f32 / 10.0;
                    input.pointer_down = Some(Vec2::new(
                        size.x * (0.1 + 0.8 * (phase * 10.0).fract()),
                        size.y * (0.25 + 0.5 * row),
                    ));
                }
                GameMode::GameOver => break,
            }

            driver.frame(&mut state, &mut input, time);
            frames += 1;

            let events = state.drain_events();
            for event in &events {
                match event {
                    GameEvent::ModeEntered(mode) => log::info!("Entered {:?}", mode),
                    GameEvent::BonusComplete => log::info!("Vault cracked"),
                    _ => {}
                }
            }
            if events.contains(&GameEvent::BonusComplete) {
                break;
            }
            time += SIM_DT_MS;
        }

        log::info!(
            "Finished after {} frames: mode={:?} score={} lives={}",
            frames,
            state.mode,
            state.score,
            state.lives
        );
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize final state: {}", e),
        }
    }
}
