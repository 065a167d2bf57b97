//! Fruit Slash entry point
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
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Document, HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamConstraints,
        Window,
    };

    use fruit_slash::assets::SpriteAtlas;
    use fruit_slash::audio::AudioManager;
    use fruit_slash::consts::*;
    use fruit_slash::feedback::{SliceFeedback, SoundFeedback, WordFeedback};
    use fruit_slash::gesture::HandTracker;
    use fruit_slash::renderer::CanvasRenderer;
    use fruit_slash::settings::Config;
    use fruit_slash::sim::{GameState, TickInput, tick};
    use fruit_slash::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        tuning: Tuning,
        settings: Settings,
        renderer: CanvasRenderer,
        tracker: HandTracker,
        video: HtmlVideoElement,
        feedback: Vec<Box<dyn SliceFeedback>>,
        /// Latched once the reveal word finishes
        word_completed: bool,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks for the elapsed wall-clock time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let input = TickInput {
                pointer: self.tracker.latest().map(|s| s.fingertip),
            };

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &input, &self.tuning);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            // Fan slice events out to every installed handler
            for event in self.state.drain_events() {
                for handler in &mut self.feedback {
                    handler.on_slice(&event);
                }
            }

            if !self.word_completed {
                let complete = self
                    .feedback
                    .iter()
                    .any(|h| h.overlay().is_some_and(|o| o.complete));
                if complete {
                    self.word_completed = true;
                    log::info!("word revealed after {} frames", self.state.frame);
                    for handler in &mut self.feedback {
                        handler.on_word_complete();
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let overlay = self.feedback.iter().find_map(|h| h.overlay());
            let sample = self.tracker.latest();
            self.renderer.render(
                &self.state,
                &self.video,
                &self.tuning,
                &self.settings,
                sample,
                overlay.as_ref(),
            );
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Fruit Slash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = read_embed_config(&window);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        // External collaborators: webcam, artwork, hand-pose estimator.
        // Any of these failing to come up is fatal.
        let video = init_camera(&window, &document)
            .await
            .expect("camera unavailable");
        let sprites = SpriteAtlas::load()
            .await
            .expect("failed to load fruit artwork");
        let mut tracker = HandTracker::new();
        tracker
            .init()
            .await
            .expect("hand-pose estimator failed to load");

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, Vec2::new(width as f32, height as f32));
        log::info!("Game initialized with seed: {seed}");

        let renderer =
            CanvasRenderer::new(canvas, sprites, seed).expect("failed to create renderer");

        let mut feedback: Vec<Box<dyn SliceFeedback>> = Vec::new();
        if config.settings.feedback.sound_enabled() {
            let mut audio = AudioManager::new();
            audio.set_master_volume(config.settings.master_volume);
            audio.set_sfx_volume(config.settings.sfx_volume);
            audio.set_muted(config.settings.muted);
            feedback.push(Box::new(SoundFeedback::new(audio)));
        }
        if config.settings.feedback.word_enabled() {
            feedback.push(Box::new(WordFeedback::new(&config.settings.target_word)));
        }

        let word_completed = feedback
            .iter()
            .any(|h| h.overlay().is_some_and(|o| o.complete));

        let game = Rc::new(RefCell::new(Game {
            state,
            tuning: config.tuning,
            settings: config.settings,
            renderer,
            tracker,
            video,
            feedback,
            word_completed,
            accumulator: 0.0,
            last_time: 0.0,
        }));

        setup_resize_handler(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Fruit Slash running!");
    }

    /// Read the optional `window.FRUIT_SLASH_CONFIG` embed configuration
    fn read_embed_config(window: &Window) -> Config {
        let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("FRUIT_SLASH_CONFIG"))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Config::default();
        }

        let json: String = js_sys::JSON::stringify(&value)
            .expect("FRUIT_SLASH_CONFIG is not serializable")
            .into();
        Config::from_json(&json).expect("invalid FRUIT_SLASH_CONFIG")
    }

    fn window_size(window: &Window) -> (u32, u32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1280.0) as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(720.0) as u32;
        (width, height)
    }

    /// Create a hidden, muted video element fed by the webcam
    async fn init_camera(
        window: &Window,
        document: &Document,
    ) -> Result<HtmlVideoElement, JsValue> {
        let video: HtmlVideoElement = document.create_element("video")?.dyn_into()?;
        video.set_autoplay(true);
        video.set_muted(true);
        video.set_plays_inline(true);
        video.style().set_property("display", "none")?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&video)?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        constraints.set_audio(&JsValue::FALSE);

        let devices = window.navigator().media_devices()?;
        let stream: MediaStream =
            JsFuture::from(devices.get_user_media_with_constraints(&constraints)?)
                .await?
                .dyn_into()?;
        video.set_src_object(Some(&stream));
        JsFuture::from(video.play()?).await?;

        log::info!("camera capture running");
        Ok(video)
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let (width, height) = window_size(&window);
            if width == 0 || height == 0 {
                return;
            }
            let mut g = game.borrow_mut();
            g.renderer.resize(width, height);
            g.state.resize(Vec2::new(width as f32, height as f32));
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
            let mut game = game.borrow_mut();
            let g = &mut *game;

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            // fire-and-forget; the result is adopted on a later frame
            g.tracker.request(&g.video, g.state.bounds.x);

            g.update(dt);
            g.render();
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
fn main() {
    env_logger::init();
    log::info!("Fruit Slash (native) starting...");
    log::info!("The game targets the browser - build with trunk for the web version");

    println!("\nRunning headless simulation check...");
    headless_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_check() {
    use fruit_slash::Tuning;
    use fruit_slash::sim::{GameState, TickInput, tick};
    use glam::Vec2;

    let tuning = Tuning::default();
    let mut state = GameState::new(7, Vec2::new(1280.0, 720.0));
    let input = TickInput::default();
    for _ in 0..300 {
        tick(&mut state, &input, &tuning);
    }
    assert!(
        !state.fruits.is_empty(),
        "spawner should have produced fruits"
    );
    println!(
        "✓ {} frames simulated, {} live fruits",
        state.frame,
        state.fruits.len()
    );
}
