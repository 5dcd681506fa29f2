//! Arena Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use arena_shooter::Tuning;
    use arena_shooter::platform::{FrameClock, InputState, Key, Viewport};
    use arena_shooter::renderer::{RenderState, scene_vertices};
    use arena_shooter::sim::{GameEvent, GameSession, tick};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        render_state: Option<RenderState>,
        clock: FrameClock,
        input: InputState,
        /// Canvas in CSS pixels, for pointer mapping
        css_viewport: Viewport,
        /// Set once the player dismisses the leveled end screen
        exited: bool,
    }

    impl Game {
        fn new(tuning: Tuning, seed: u64, css_width: f32, css_height: f32) -> Self {
            let css_viewport =
                Viewport::new(css_width, css_height, tuning.arena_width, tuning.arena_height);
            Self {
                session: GameSession::new(tuning, seed),
                render_state: None,
                clock: FrameClock::new(),
                input: InputState::new(),
                css_viewport,
                exited: false,
            }
        }

        /// Run one simulation step
        fn update(&mut self, time: f64) {
            let frame = self.clock.advance(time);
            let input = self.input.frame_input(&self.css_viewport);
            let events = tick(&mut self.session, &input, frame);
            self.input.end_frame();

            for event in events {
                match event {
                    GameEvent::Won | GameEvent::Lost => {
                        log::info!("{:?} with score {}", event, self.session.score)
                    }
                    GameEvent::LevelAdvanced { level } => log::info!("Level {}", level),
                    GameEvent::Restarted => log::info!("Restarted"),
                    GameEvent::ExitRequested => self.exited = true,
                    _ => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let tuning = &self.session.tuning;
            let vertices = scene_vertices(
                &self.session.snapshot(),
                tuning.arena_width,
                tuning.arena_height,
            );
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = (render_state.config.width, render_state.config.height);
                        render_state.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Re-read the canvas CSS size so pointer mapping follows layout changes
        fn sync_css_size(&mut self, canvas: &HtmlCanvasElement) {
            self.css_viewport
                .resize(canvas.client_width() as f32, canvas.client_height() as f32);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud") {
                el.set_text_content(Some(&self.session.hud().lines().join("\n")));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                match self.session.end_screen() {
                    Some(end) => {
                        let class = if end.won { "won" } else { "lost" };
                        let _ = el.set_attribute("class", class);
                        if let Some(title) = document.get_element_by_id("end-title") {
                            title.set_text_content(Some(&end.title));
                        }
                        if let Some(subtitle) = document.get_element_by_id("end-subtitle") {
                            subtitle.set_text_content(Some(&end.subtitle));
                        }
                        if let Some(prompt) = document.get_element_by_id("end-prompt") {
                            prompt.set_text_content(Some(&end.prompt));
                            // Label sits on the drawn restart button
                            let style = match self.session.restart_button() {
                                Some(button) => {
                                    let at = self.css_viewport.world_to_screen(button.center());
                                    format!(
                                        "position: absolute; left: {}px; top: {}px;",
                                        at.x, at.y
                                    )
                                }
                                None => String::new(),
                            };
                            let _ = prompt.set_attribute("style", &style);
                        }
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }

        /// Replace the canvas with a farewell message
        fn show_exit(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("game") {
                let _ = el.set_attribute("class", "hidden");
            }
            if let Some(el) = document.get_element_by_id("goodbye") {
                let _ = el.set_attribute("class", "");
            }
        }
    }

    /// `?mode=leveled` selects the leveled ruleset
    fn tuning_from_location() -> Tuning {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if search.contains("mode=leveled") {
            log::info!("Leveled ruleset selected");
            Tuning::leveled()
        } else {
            Tuning::default()
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Arena Shooter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let tuning = tuning_from_location();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            tuning.clone(),
            seed,
            client_w as f32,
            client_h as f32,
        )));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let viewport = Viewport::new(
            width as f32,
            height as f32,
            tuning.arena_width,
            tuning.arena_height,
        );
        match RenderState::new(surface, &adapter, viewport).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Arena Shooter running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Window resize - keep the backing store and both viewports in step
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
                let width = (canvas_clone.client_width() as f64 * dpr) as u32;
                let height = (canvas_clone.client_height() as f64 * dpr) as u32;
                canvas_clone.set_width(width);
                canvas_clone.set_height(height);

                let mut g = game.borrow_mut();
                g.sync_css_size(&canvas_clone);
                if let Some(ref mut render_state) = g.render_state {
                    render_state.resize(width, height);
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - absolute position in CSS pixels
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.sync_css_size(&canvas_clone);
                g.input
                    .pointer_moved(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - fire / end screen press
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let mut g = game.borrow_mut();
                g.sync_css_size(&canvas_clone);
                g.input
                    .pointer_moved(event.offset_x() as f32, event.offset_y() as f32);
                g.input.button_down();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up anywhere releases fire
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() == 0 {
                    game.borrow_mut().input.button_up();
                }
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                if let Some(key) = Key::from_key_name(&event.key()) {
                    game.borrow_mut().input.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_name(&event.key()) {
                    game.borrow_mut().input.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - keys released while unfocused never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            if g.exited {
                log::info!("Exiting");
                g.show_exit();
                return;
            }
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use arena_shooter::Tuning;
    use arena_shooter::platform::FrameClock;
    use arena_shooter::sim::{GameEvent, GamePhase, GameSession, TickInput, tick};

    /// Simulated frame length (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after this much simulated time
    const TIME_LIMIT_MS: f64 = 10.0 * 60.0 * 1000.0;

    /// Play one session with the autopilot until it ends or time runs out
    pub fn run(tuning: Tuning, seed: u64) -> GameSession {
        let mut session = GameSession::new(tuning, seed);
        let mut clock = FrameClock::new();
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        log::info!(
            "Headless {} session, seed {}",
            session.tuning.ruleset.as_str(),
            seed
        );

        let mut time = 0.0;
        while session.phase == GamePhase::Playing && time < TIME_LIMIT_MS {
            let frame = clock.advance(time);
            for event in tick(&mut session, &input, frame) {
                match event {
                    GameEvent::EnemySpawned { pos } => log::trace!("spawn at {:?}", pos),
                    GameEvent::ShotFired => log::trace!("shot"),
                    GameEvent::EnemyKilled { score } => log::debug!("kill, score {}", score),
                    other => log::info!("{:?}", other),
                }
            }
            time += FRAME_MS;
        }

        if session.phase == GamePhase::Playing {
            log::warn!("Time limit reached before the session ended");
        }
        session
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use arena_shooter::Tuning;

    env_logger::init();
    log::info!("Arena Shooter (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` to play");

    // Usage: arena-shooter [--leveled | <tuning.json>]
    let tuning = match std::env::args().nth(1).as_deref() {
        None => Tuning::default(),
        Some("--leveled") => Tuning::leveled(),
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}: {}", path, e);
                return std::process::ExitCode::FAILURE;
            }
        },
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let session = headless::run(tuning, seed);

    if let Some(end) = session.end_screen() {
        println!("{} - {}", end.title, end.subtitle);
    }
    for line in session.hud().lines() {
        println!("{}", line);
    }

    std::process::ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
