//! Sky Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use sky_runner::sim::keys;
    use sky_runner::{Engine, LoopControl, Settings};

    /// Game instance holding the engine and its drawing context
    struct Game {
        engine: Engine,
        ctx: CanvasRenderingContext2d,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::with_screen(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let engine = Engine::new(settings, seed).expect("invalid settings");

        let game = Rc::new(RefCell::new(Game { engine, ctx }));

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Sky Runner running!");
    }

    /// Keys whose browser default (page scroll) should be suppressed
    fn is_game_key(code: u32) -> bool {
        matches!(
            code,
            keys::SPACE | keys::LEFT | keys::UP | keys::RIGHT | keys::DOWN
        )
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.key_code();
                if is_game_key(code) {
                    event.prevent_default();
                }
                game.borrow_mut().engine.key_event(code, true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().engine.key_event(event.key_code(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events never arrive, so drop everything held
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().engine.release_keys();
                log::info!("Released keys (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let control = {
            let mut g = game.borrow_mut();
            let Game { engine, ctx } = &mut *g;
            engine.frame(ctx)
        };

        // Once the run is over we simply stop rescheduling
        if control == LoopControl::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use clap::Parser;

    use sky_runner::renderer::CommandBuffer;
    use sky_runner::{ConfigError, Engine, Settings};

    /// Sky Runner headless mode - simulates a run without a window
    #[derive(Parser, Debug)]
    #[command(name = "sky-runner")]
    #[command(version)]
    pub struct Args {
        /// JSON settings file (defaults are used when omitted)
        pub settings: Option<PathBuf>,

        /// Stop after this many frames if the run has not ended
        #[arg(default_value_t = 100_000)]
        pub max_frames: u64,
    }

    pub fn run(args: Args) -> Result<(), ConfigError> {
        let settings = match &args.settings {
            Some(path) => Settings::load(path)?,
            None => {
                log::warn!("No settings file given, using defaults");
                Settings::default()
            }
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        let mut engine = Engine::new(settings, seed)?;
        let mut surface = CommandBuffer::new();
        let frames = engine.run_headless(&mut surface, args.max_frames);

        let world = engine.world();
        log::info!(
            "Headless run finished: {} frames, over={}, {} bodies on screen, {} draw calls in last frame",
            frames,
            world.is_over(),
            world.bodies().len(),
            surface.fills().len()
        );
        println!(
            "{} after {} ticks",
            if world.is_over() { "Crashed" } else { "Survived" },
            world.ticks()
        );
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Runner (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let args = <headless::Args as clap::Parser>::parse();
    if let Err(e) = headless::run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
