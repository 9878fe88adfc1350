//! Classic Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::{Clamped, JsCast};
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData, MouseEvent, TouchEvent,
    };

    use classic_pong::platform::{FrameClock, pointer_fraction};
    use classic_pong::renderer::{Color, Glyph, RenderSurface};
    use classic_pong::sim::Rect;
    use classic_pong::{Pong, Settings};

    /// Canvas 2D drawing surface
    struct CanvasSurface {
        document: Document,
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
        /// Offscreen canvases holding each digit's bitmap
        glyphs: HashMap<u8, HtmlCanvasElement>,
    }

    impl CanvasSurface {
        fn new(document: Document, canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
            let context = context_2d(&canvas)?;
            Ok(Self {
                document,
                canvas,
                context,
                glyphs: HashMap::new(),
            })
        }

        /// Upload a glyph bitmap to its own offscreen canvas
        fn glyph_canvas(&self, glyph: &Glyph) -> Result<HtmlCanvasElement, JsValue> {
            let canvas: HtmlCanvasElement = self.document.create_element("canvas")?.dyn_into()?;
            canvas.set_width(glyph.width());
            canvas.set_height(glyph.height());
            let data = ImageData::new_with_u8_clamped_array_and_sh(
                Clamped(glyph.as_bytes()),
                glyph.width(),
                glyph.height(),
            )?;
            context_2d(&canvas)?.put_image_data(&data, 0.0, 0.0)?;
            Ok(canvas)
        }
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    impl RenderSurface for CanvasSurface {
        fn width(&self) -> f32 {
            self.canvas.width() as f32
        }

        fn height(&self) -> f32 {
            self.canvas.height() as f32
        }

        fn clear(&mut self, color: Color) {
            self.context.set_fill_style_str(&color.to_css());
            self.context
                .fill_rect(0.0, 0.0, self.width() as f64, self.height() as f64);
        }

        fn fill_rect(&mut self, rect: &Rect, color: Color) {
            self.context.set_fill_style_str(&color.to_css());
            self.context.fill_rect(
                rect.left() as f64,
                rect.top() as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
        }

        fn blit_glyph(&mut self, glyph: &Glyph, x: f32, y: f32) {
            let digit = glyph.digit();
            if !self.glyphs.contains_key(&digit) {
                match self.glyph_canvas(glyph) {
                    Ok(canvas) => {
                        self.glyphs.insert(digit, canvas);
                    }
                    Err(e) => {
                        log::warn!("Failed to build glyph {}: {:?}", digit, e);
                        return;
                    }
                }
            }
            if let Some(image) = self.glyphs.get(&digit) {
                let _ = self
                    .context
                    .draw_image_with_html_canvas_element(image, x as f64, y as f64);
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        pong: Pong,
        surface: CanvasSurface,
        clock: FrameClock,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Classic Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        // Write back so the stored copy always lists every field for editing
        settings.save();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let surface = match CanvasSurface::new(document.clone(), canvas.clone()) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Canvas setup failed: {:?}", e);
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game {
            pong: Pong::new(width, height, seed, &settings),
            surface,
            clock: FrameClock::new(),
        }));

        setup_input_handlers(&document, &canvas, game.clone());

        request_animation_frame(game);

        log::info!("Classic Pong running!");
    }

    fn setup_input_handlers(
        document: &Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        // Tab hidden: rAF stops, so the next frame must not see the whole gap as dt
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().clock.reset();
                    log::info!("Frame clock reset (tab hidden)");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Mouse move - paddle follows the pointer's vertical position
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let height = canvas_clone.get_bounding_client_rect().height() as f32;
                if let Some(fraction) = pointer_fraction(event.offset_y() as f32, height) {
                    game.borrow_mut().pong.pointer_moved(fraction);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - serve
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pong.serve();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move / touch start - same as mouse, and a tap also serves
        for (name, serve) in [("touchmove", false), ("touchstart", true)] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if serve {
                    g.pong.serve();
                }
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    if let Some(fraction) = pointer_fraction(y, rect.height() as f32) {
                        g.pong.pointer_moved(fraction);
                    }
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
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
            let Game {
                pong,
                surface,
                clock,
            } = &mut *g;

            // First frame only records the timestamp
            if let Some(dt) = clock.tick(time) {
                pong.frame(dt, surface);
            }
        }

        request_animation_frame(game);
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

/// Headless native run: simulated frames, a scripted pointer, and an optional
/// PPM snapshot of the last frame.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Classic Pong (native) starting...");

    let snapshot = std::env::args().nth(1);
    if let Err(e) = native::run(snapshot.as_deref()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{SystemTime, UNIX_EPOCH};

    use classic_pong::platform::FrameClock;
    use classic_pong::renderer::Framebuffer;
    use classic_pong::sim::{BallState, GameEvent};
    use classic_pong::{Pong, Settings};

    /// Simulated display refresh interval
    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn run(snapshot: Option<&str>) -> std::io::Result<()> {
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let mut surface = Framebuffer::new(settings.width, settings.height);
        let mut pong = Pong::new(settings.width as f32, settings.height as f32, seed, &settings);
        let mut clock = FrameClock::new();

        let frames = (settings.demo_seconds.max(0.0) as f64 * 1000.0 / FRAME_MS) as u64;
        for frame in 0..=frames {
            let now = frame as f64 * FRAME_MS;

            // Sweep the pointer slowly up and down the court
            let sweep = (now / 1000.0 * 0.8).sin() as f32;
            pong.pointer_moved(0.5 + 0.45 * sweep);

            if pong.state().ball.state() == BallState::AtRest {
                pong.serve();
            }

            let Some(dt) = clock.tick(now) else {
                continue;
            };
            for event in pong.frame(dt, &mut surface) {
                if let GameEvent::Scored { player, .. } = event {
                    let [left, right] = pong.state().scores();
                    println!("{:>6.2}s  player {} scores  {} - {}", now / 1000.0, player, left, right);
                }
            }
        }

        let [left, right] = pong.state().scores();
        log::info!("Final score {} - {} after {} frames", left, right, frames);

        if let Some(path) = snapshot {
            std::fs::write(path, surface.to_ppm())?;
            log::info!("Wrote last frame to {}", path);
        }
        Ok(())
    }
}
