//! Order Rush entry point
//!
//! Handles platform-specific initialization and drives the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use order_rush::audio::WebAudio;
    use order_rush::consts::*;
    use order_rush::game::{Hud, HudSnapshot};
    use order_rush::highscores::LocalStorageScoreStore;
    use order_rush::physics::Bounds;
    use order_rush::{ClickEvent, Game, PointerKind};

    /// HUD backed by DOM elements in index.html
    struct DomHud;

    impl DomHud {
        fn set_value(selector: &str, text: &str) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.query_selector(selector).ok().flatten() {
                el.set_text_content(Some(text));
            }
        }
    }

    impl Hud for DomHud {
        fn refresh(&mut self, snapshot: &HudSnapshot) {
            Self::set_value("#hud-score .hud-value", &snapshot.score.to_string());
            Self::set_value("#hud-best .hud-value", &snapshot.high_score.to_string());
            Self::set_value("#hud-lives .hud-value", &snapshot.lives.to_string());
            Self::set_value("#hud-level .hud-value", &snapshot.level.to_string());
            Self::set_value("#hud-fps .hud-value", &snapshot.fps.to_string());

            // Combo badge only shows once a streak is going
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("hud-combo") {
                if snapshot.combo > 1 {
                    let _ = el.set_attribute("class", "hud-item");
                    Self::set_value("#hud-combo .hud-value", &format!("x{}", snapshot.combo));
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // Active power-up indicators
            if let Some(el) = document.get_element_by_id("hud-power-ups") {
                let text: Vec<String> = snapshot
                    .power_ups
                    .iter()
                    .map(|(kind, ms)| format!("{} {:.0}s", kind.key(), ms / 1000.0))
                    .collect();
                el.set_text_content(Some(&text.join("  ")));
            }
        }
    }

    struct App {
        game: Game,
        last_time: f64,
        canvas_size: (f32, f32),
    }

    impl App {
        fn new() -> Self {
            Self {
                game: new_game(),
                last_time: 0.0,
                canvas_size: (CANVAS_WIDTH, CANVAS_HEIGHT),
            }
        }

        /// Map client-space coordinates onto the logical playfield
        fn to_canvas(&self, x: f32, y: f32) -> (f32, f32) {
            let (w, h) = self.canvas_size;
            (x * CANVAS_WIDTH / w.max(1.0), y * CANVAS_HEIGHT / h.max(1.0))
        }
    }

    fn new_game() -> Game {
        let seed = js_sys::Date::now() as u64;
        let bounds = Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let mut game = Game::new(seed, bounds, Box::new(LocalStorageScoreStore));
        game.set_audio(Box::new(WebAudio::new()));
        game.set_hud(Box::new(DomHud));
        game.start();
        game
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Order Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        canvas.set_width((client_w as f64 * dpr) as u32);
        canvas.set_height((client_h as f64 * dpr) as u32);

        let app = Rc::new(RefCell::new(App::new()));
        app.borrow_mut().canvas_size = (client_w as f32, client_h as f32);

        setup_input_handlers(&canvas, app.clone());
        setup_restart_button(app.clone());
        setup_auto_pause(app.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(app);

        log::info!("Order Rush running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let (x, y) = a.to_canvas(event.offset_x() as f32, event.offset_y() as f32);
                a.game.queue_click(ClickEvent {
                    x,
                    y,
                    pointer: PointerKind::Mouse,
                });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let mut a = app.borrow_mut();
                    let (x, y) = a.to_canvas(
                        touch.client_x() as f32 - rect.left() as f32,
                        touch.client_y() as f32 - rect.top() as f32,
                    );
                    a.game.queue_click(ClickEvent {
                        x,
                        y,
                        pointer: PointerKind::Touch,
                    });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let app = app.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    "Escape" | "p" | "P" => {
                        a.game.toggle_pause();
                        log::info!("paused: {}", a.game.is_paused());
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.game.stop();
                a.game = new_game();
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let app = app.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut a = app.borrow_mut();
                    if a.game.is_running() && !a.game.is_paused() {
                        a.game.pause();
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut a = app.borrow_mut();
                if a.game.is_running() && !a.game.is_paused() {
                    a.game.pause();
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let elapsed = if a.last_time > 0.0 {
                (time - a.last_time) as f32
            } else {
                0.0
            };
            a.last_time = time;
            a.game.frame(elapsed);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo session: fixed seed, scripted clicks on whatever the spawn
/// logic drops, final score on stdout.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use order_rush::consts::*;
    use order_rush::highscores::MemoryScoreStore;
    use order_rush::physics::Bounds;
    use order_rush::{ClickEvent, Game, PointerKind};

    env_logger::init();
    log::info!("Order Rush (native) starting...");
    log::info!("Headless demo - run with `trunk serve` for the web version");

    let bounds = Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut game = Game::new(42, bounds, Box::<MemoryScoreStore>::default());
    game.start();

    // Two simulated minutes at 60 Hz, clicking the ingredient the first
    // order wants whenever one is on screen
    for _ in 0..7200 {
        let wanted = game.orders().first().and_then(|o| o.next_required());
        let target = wanted.and_then(|kind| {
            game.ingredients()
                .iter()
                .find(|i| i.kind == kind && i.pos.y > 0.0)
                .map(|i| i.pos)
        });
        if let Some(pos) = target {
            game.queue_click(ClickEvent {
                x: pos.x,
                y: pos.y,
                pointer: PointerKind::Mouse,
            });
        }
        game.frame(FRAME_MS);
        if !game.is_running() {
            break;
        }
    }

    println!(
        "demo over: score {} (best {}), level {}",
        game.state().score(),
        game.state().high_score(),
        game.state().level()
    );
}
