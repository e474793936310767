//! Archipelago entry point
//!
//! On wasm32 this wires keyboard events into tick input and drives the
//! frame loop; the hosting page renders from the resulting state. The
//! native build runs a short headless voyage for smoke-testing the core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use archipelago::project::launch_island;
    use archipelago::settings::Tuning;
    use archipelago::sim::{TickInput, WorldState, tick};

    /// App instance holding all state
    struct App {
        state: WorldState,
        input: TickInput,
        tuning: Tuning,
        last_target: Option<u32>,
    }

    impl App {
        fn new(seed: u64, width: f32, height: f32) -> Self {
            Self {
                state: WorldState::new(seed, width, height),
                input: TickInput::default(),
                tuning: Tuning::load(),
                last_target: None,
            }
        }

        /// Translate a raw key name into the held-input snapshot
        fn set_key(&mut self, key: &str, held: bool) {
            match key.to_lowercase().as_str() {
                "w" | "arrowup" => self.input.forward = held,
                "s" | "arrowdown" => self.input.backward = held,
                "a" | "arrowleft" => self.input.left = held,
                "d" | "arrowright" => self.input.right = held,
                _ => {}
            }
        }

        /// Dock action: compose the preview for the current target
        fn dock(&self) {
            let Some(island) = self.state.dock_island() else {
                log::info!("Nothing to dock at");
                return;
            };
            match launch_island(island) {
                Ok(doc) => log::info!(
                    "Launching '{}' preview ({} bytes)",
                    island.name,
                    doc.len()
                ),
                Err(notice) => log::info!("{notice}"),
            }
        }

        /// One animation frame
        fn frame(&mut self) {
            tick(&mut self.state, &self.input, &self.tuning);
            if self.state.dock_target != self.last_target {
                self.last_target = self.state.dock_target;
                if let Some(island) = self.state.dock_island() {
                    log::info!("Press E to dock at {}", island.name);
                }
            }
        }
    }

    fn request_animation_frame(window: &web_sys::Window, f: &Closure<dyn FnMut()>) {
        let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(archipelago::consts::WORLD_WIDTH as f64) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(archipelago::consts::WORLD_HEIGHT as f64) as f32;

        let seed = js_sys::Date::now() as u64;
        log::info!("Archipelago starting with seed {seed}");
        let app = Rc::new(RefCell::new(App::new(seed, width, height)));

        // Keyboard → input snapshot
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                if key.to_lowercase() == "e" {
                    app.borrow().dock();
                }
                app.borrow_mut().set_key(&key, true);
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                app.borrow_mut().set_key(&event.key(), false);
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Frame loop
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let first = frame.clone();
        let loop_window = window.clone();
        *first.borrow_mut() = Some(Closure::new(move || {
            app.borrow_mut().frame();
            if let Some(f) = frame.borrow().as_ref() {
                request_animation_frame(&loop_window, f);
            }
        }));
        if let Some(f) = first.borrow().as_ref() {
            request_animation_frame(&window, f);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use archipelago::consts::{WORLD_HEIGHT, WORLD_WIDTH};
    use archipelago::project::{decode_batch, launch_island};
    use archipelago::settings::Tuning;
    use archipelago::sim::{TickInput, WorldState, tick};

    env_logger::init();
    log::info!("Archipelago (native) casting off...");

    let tuning = Tuning::load();
    let mut state = WorldState::new(42, WORLD_WIDTH, WORLD_HEIGHT);

    // A short scripted voyage: throttle up, carve a turn, coast
    let legs: [(TickInput, u32); 3] = [
        (
            TickInput {
                forward: true,
                ..Default::default()
            },
            180,
        ),
        (
            TickInput {
                forward: true,
                right: true,
                ..Default::default()
            },
            120,
        ),
        (TickInput::default(), 120),
    ];
    for (input, ticks) in legs {
        for _ in 0..ticks {
            tick(&mut state, &input, &tuning);
        }
        let t = &state.telemetry;
        println!(
            "tick {:4}  pos {:5}°N {:5}°E  speed {:.1}kn  depth {:.0}m",
            state.time_ticks, t.lat, t.lon, t.speed_knots, t.depth
        );
    }

    // Upload a small sample bundle and raise its island
    let raw: Vec<(&str, &[u8])> = vec![
        ("app.py", b"from flask import Flask\napp = Flask(__name__)\n"),
        ("utils.py", b"def helper():\n    pass\n"),
        ("readme.md", b"# Sample project\n"),
    ];
    let files = decode_batch(raw);
    let id = state.deploy_upload("Sample Project", files);

    let island = state.island(id).expect("just deployed");
    if let Some(deployment) = &island.deployment {
        if let Ok(json) = serde_json::to_string_pretty(&deployment.project) {
            println!("classified as:\n{json}");
        }
        match launch_island(island) {
            Ok(doc) => println!("preview document ready ({} bytes)", doc.len()),
            Err(notice) => println!("{notice}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
