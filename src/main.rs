//! Cupcake Catcher entry point
//!
//! The browser build draws to the page's `#canvas` and runs the game from
//! `requestAnimationFrame`. The native build runs a scripted headless
//! session, useful for watching the systems in the log.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use cupcake_catcher::consts::{GAME_WINDOW_HEIGHT, GAME_WINDOW_WIDTH, IDEAL_TICK_MS};
    use cupcake_catcher::persistence::LocalStorage;
    use cupcake_catcher::platform::Key;
    use cupcake_catcher::platform::web::{
        BrowserPrompt, CanvasRenderer, DomAudio, DomSceneLoader, SharedMedia,
    };
    use cupcake_catcher::sim::{Game, Services, World};
    use cupcake_catcher::{HighScores, Settings};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    /// Browser collaborators lent to the game each call
    struct Host {
        renderer: CanvasRenderer,
        audio: DomAudio,
        scenes: DomSceneLoader,
        prompt: BrowserPrompt,
        store: LocalStorage,
    }

    impl Host {
        fn services(&mut self) -> Services<'_> {
            Services {
                renderer: &mut self.renderer,
                audio: &mut self.audio,
                scenes: &mut self.scenes,
                prompt: &mut self.prompt,
                store: &mut self.store,
            }
        }
    }

    struct WebGame {
        game: Game,
        host: Host,
        /// Timestamp of the previous animation frame
        last_time: f64,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {err}").into());
        }

        log::info!("Cupcake Catcher starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(GAME_WINDOW_WIDTH as u32);
        canvas.set_height(GAME_WINDOW_HEIGHT as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let store = LocalStorage;
        let settings = Settings::load(&store);
        let highscores = HighScores::load(&store);
        let seed = settings.seed();
        log::info!("Game initialized with seed: {seed}");

        let media = SharedMedia::default();
        let host = Host {
            renderer: CanvasRenderer::new(ctx, media.clone()),
            audio: DomAudio::new(media.clone(), settings.sfx_enabled, settings.music_enabled),
            scenes: DomSceneLoader::new(media),
            prompt: BrowserPrompt,
            store,
        };
        let world = World::new(settings, highscores, seed)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let mut web_game = WebGame {
            game: Game::new(world),
            host,
            last_time: 0.0,
        };
        web_game.game.start(&mut web_game.host.services());
        let web_game = Rc::new(RefCell::new(web_game));

        setup_input_handlers(&window, web_game.clone())?;

        // Start game loop
        request_animation_frame(web_game);

        log::info!("Cupcake Catcher running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        web_game: Rc<RefCell<WebGame>>,
    ) -> Result<(), JsValue> {
        {
            let web_game = web_game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_code(&event.code());
                if key != Key::Other {
                    // Arrows and space would scroll the page
                    event.prevent_default();
                }
                let Ok(mut g) = web_game.try_borrow_mut() else {
                    return;
                };
                let WebGame { game, host, .. } = &mut *g;
                game.key_down(key, &mut host.services());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_code(&event.code());
                if let Ok(mut g) = web_game.try_borrow_mut() {
                    g.game.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(web_game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(web_game, time);
        });
        if let Err(err) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {err:?}");
        }
        closure.forget();
    }

    fn game_loop(web_game: Rc<RefCell<WebGame>>, time: f64) {
        {
            let mut g = web_game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                IDEAL_TICK_MS
            };
            g.last_time = time;

            let WebGame { game, host, .. } = &mut *g;
            if let Err(err) = game.frame(dt, &mut host.services()) {
                log::error!("Game stopped: {err}");
                return;
            }
        }

        request_animation_frame(web_game);
    }
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cupcake Catcher (native) starting...");
    log::info!("Native mode runs a scripted headless session");

    if let Err(err) = demo::run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use cupcake_catcher::audio::HeadlessAudio;
    use cupcake_catcher::consts::IDEAL_TICK_MS;
    use cupcake_catcher::persistence::MemoryStore;
    use cupcake_catcher::platform::{FixedName, Key, PreloadedScenes};
    use cupcake_catcher::renderer::HeadlessRenderer;
    use cupcake_catcher::sim::{Game, Services, World};
    use cupcake_catcher::{GameError, HighScores, Settings};

    /// Frames in the scripted session (about 30 seconds)
    const DEMO_FRAMES: u32 = 1800;

    /// Headless collaborators standing in for the page
    struct Host {
        renderer: HeadlessRenderer,
        audio: HeadlessAudio,
        scenes: PreloadedScenes,
        prompt: FixedName,
        store: MemoryStore,
    }

    impl Host {
        fn services(&mut self) -> Services<'_> {
            Services {
                renderer: &mut self.renderer,
                audio: &mut self.audio,
                scenes: &mut self.scenes,
                prompt: &mut self.prompt,
                store: &mut self.store,
            }
        }
    }

    pub fn run() -> Result<(), GameError> {
        let store = MemoryStore::default();
        let settings = Settings::load(&store);
        let highscores = HighScores::load(&store);
        let mut host = Host {
            renderer: HeadlessRenderer::default(),
            audio: HeadlessAudio::new(settings.sfx_enabled, settings.music_enabled),
            scenes: PreloadedScenes::new(2),
            prompt: FixedName::new("demo"),
            store,
        };

        let seed = settings.seed();
        log::info!("RNG seed {seed}");
        let mut game = Game::new(World::new(settings, highscores, seed)?);
        game.start(&mut host.services());

        for frame in 0..DEMO_FRAMES {
            // Sweep the ground: two seconds each way, with a hop now and then
            if frame % 120 == 0 {
                let key = if (frame / 120) % 2 == 0 { Key::Right } else { Key::Left };
                game.key_up(Key::Left);
                game.key_up(Key::Right);
                game.key_down(key, &mut host.services());
            }
            if frame % 90 == 45 {
                game.key_down(Key::Jump, &mut host.services());
            } else if frame % 90 == 50 {
                game.key_up(Key::Jump);
            }

            game.frame(IDEAL_TICK_MS, &mut host.services())?;
            host.renderer.take();
        }

        let state = &game.world.state;
        log::info!(
            "Demo finished in {}: score {}, lives {}, {} sounds played",
            game.world.scene.name(),
            state.score,
            state.lives,
            host.audio.played.len()
        );
        println!(
            "score {} | lives {} | world {} | entities {}",
            state.score,
            state.lives,
            game.world.scene.name(),
            game.world.entities.len()
        );
        Ok(())
    }
}
