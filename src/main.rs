//! Bouncing Balls entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use bouncing_balls::SceneConfig;
    use bouncing_balls::platform::web::{ElementText, WindowKeyboard};
    use bouncing_balls::renderer::CanvasSurface;
    use bouncing_balls::sim::{Bounds, Scene, StopFlag, tick};

    /// Everything the animation frame callback needs
    struct App {
        scene: Scene,
        surface: CanvasSurface,
        counter: Option<ElementText>,
        stop: StopFlag,
    }

    impl App {
        fn frame(&mut self) {
            let display = self
                .counter
                .as_mut()
                .map(|c| c as &mut dyn bouncing_balls::platform::TextDisplay);
            tick(&mut self.scene, &mut self.surface, display);
            if self.scene.is_cleared() {
                self.stop.stop();
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Bouncing Balls starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas> element found");
            return;
        };

        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => {
                    log::error!("Context is not a CanvasRenderingContext2d");
                    return;
                }
            },
            _ => {
                log::error!("Canvas 2D context unavailable");
                return;
            }
        };

        // Canvas fills the window once; later resizes are ignored
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let bounds = Bounds::new(f64::from(canvas.width()), f64::from(canvas.height()));

        let mut config = SceneConfig::load();
        if let Err(e) = config.check_arena(bounds.width, bounds.height) {
            log::warn!("{}; using defaults", e);
            config = SceneConfig::default();
            if let Err(e) = config.check_arena(bounds.width, bounds.height) {
                log::error!("{}", e);
                return;
            }
        }

        let mut counter = document
            .query_selector("p")
            .ok()
            .flatten()
            .map(ElementText::new);
        if counter.is_none() {
            log::warn!("No <p> element for the ball counter");
        }

        let seed = js_sys::Date::now() as u64;
        let mut keyboard = WindowKeyboard::new(window.clone());
        let scene = Scene::bootstrap(
            config,
            bounds,
            seed,
            &mut keyboard,
            counter
                .as_mut()
                .map(|c| c as &mut dyn bouncing_balls::platform::TextDisplay),
        );

        let app = Rc::new(RefCell::new(App {
            scene,
            surface: CanvasSurface::new(ctx),
            counter,
            stop: StopFlag::new(),
        }));

        request_animation_frame(app);

        log::info!("Bouncing Balls running!");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            animation_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animation_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            if a.stop.is_stopped() {
                log::info!("Animation stopped at frame {}", a.scene.frame);
                return;
            }
            a.frame();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;

    use bouncing_balls::SceneConfig;
    use bouncing_balls::platform::{
        Autopilot, FixedRate, FrameBudget, FrameScheduler, KeyboardInput, LogDisplay, NoKeyboard,
    };
    use bouncing_balls::renderer::Recorder;
    use bouncing_balls::sim::{Bounds, Scene, StopFlag, run};

    /// Run the bouncing balls simulation headless
    #[derive(Parser, Debug)]
    #[command(version, about)]
    pub struct Args {
        /// Canvas width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        /// Canvas height in pixels
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Frames to simulate
        #[arg(long, default_value_t = 3_600)]
        frames: u64,
        /// JSON scene config
        #[arg(long)]
        config: Option<PathBuf>,
        /// Let the evil circle chase balls on its own
        #[arg(long)]
        autopilot: bool,
        /// Pace frames at 60 Hz instead of running flat out
        #[arg(long)]
        realtime: bool,
    }

    /// Frame budget plus optional pacing and autopilot steering
    struct Driver {
        budget: FrameBudget,
        pacing: Option<FixedRate>,
        pilot: Option<Autopilot>,
        stop: StopFlag,
    }

    impl FrameScheduler for Driver {
        fn next_frame(&mut self, scene: &Scene) {
            self.budget.next_frame(scene);
            if scene.is_cleared() {
                self.stop.stop();
            }
            if let Some(pacing) = self.pacing.as_mut() {
                pacing.next_frame(scene);
            }
            if let Some(pilot) = self.pilot.as_ref() {
                pilot.steer(scene);
            }
        }
    }

    pub fn main() {
        env_logger::init();
        let args = Args::parse();

        let bounds = Bounds::new(args.width, args.height);
        let mut config = SceneConfig::load(args.config.as_deref());
        if let Err(e) = config.check_arena(bounds.width, bounds.height) {
            log::warn!("{}; using defaults", e);
            config = SceneConfig::default();
            if let Err(e) = config.check_arena(bounds.width, bounds.height) {
                log::error!("{}", e);
                std::process::exit(2);
            }
        }

        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let mut display = LogDisplay;
        let mut pilot = args.autopilot.then(Autopilot::new);
        let mut no_keyboard = NoKeyboard;
        let keyboard: &mut dyn KeyboardInput = match pilot.as_mut() {
            Some(pilot) => pilot,
            None => &mut no_keyboard,
        };
        let mut scene = Scene::bootstrap(config, bounds, seed, keyboard, Some(&mut display));

        let stop = StopFlag::new();
        let mut driver = Driver {
            budget: FrameBudget::new(args.frames, stop.clone()),
            pacing: args.realtime.then(|| FixedRate::new(60)),
            pilot,
            stop: stop.clone(),
        };
        if let Some(pilot) = driver.pilot.as_ref() {
            pilot.steer(&scene);
        }

        let mut surface = Recorder::last_frame_only();
        let frames = run(&mut scene, &mut surface, Some(&mut display), &mut driver, &stop);

        println!(
            "{} frames, {} of {} balls left (seed {})",
            frames,
            scene.counter.count(),
            scene.balls.len(),
            seed
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}
