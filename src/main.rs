//! Duel Shooter entry point
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

    use duel_shooter::platform::Control;
    use duel_shooter::platform::web::WebPlatform;
    use duel_shooter::renderer::canvas::CanvasSurface;
    use duel_shooter::{LoopTicket, Session, Settings};

    /// Game instance: session plus the surface it draws to
    struct Game {
        session: Session<WebPlatform>,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Duel Shooter starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas")?
            .dyn_into()?;
        let size = glam::Vec2::new(canvas.width() as f32, canvas.height() as f32);

        let settings = Settings::load();
        let surface = CanvasSurface::new(&canvas)?;
        let platform = WebPlatform::new(document, canvas, &settings);
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(size, &settings, platform),
            surface,
        }));

        log::info!("Canvas {}x{}", size.x, size.y);

        setup_keyboard(game.clone())?;
        setup_buttons(game)?;

        log::info!("Duel Shooter ready");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().session.handle_key(&event.key());
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Wire a control's buttons to a session action. Actions that start a
    /// loop return its first ticket.
    fn on_click(
        game: &Rc<RefCell<Game>>,
        control: Control,
        action: fn(&mut Game) -> Option<LoopTicket>,
    ) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        for id in control.element_ids() {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{} for {:?}", id, control);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let ticket = action(&mut game.borrow_mut());
                if let Some(ticket) = ticket {
                    request_animation_frame(game.clone(), ticket);
                }
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn action_for(control: Control) -> fn(&mut Game) -> Option<LoopTicket> {
        match control {
            Control::Start => |g: &mut Game| g.session.start(),
            Control::Restart => |g: &mut Game| {
                g.session.restart();
                None
            },
            Control::PlayAgain => |g: &mut Game| g.session.play_again(),
            Control::Fullscreen => |g: &mut Game| {
                g.session.toggle_fullscreen();
                None
            },
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for control in Control::ALL {
            on_click(&game, control, action_for(control))?;
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, ticket: LoopTicket) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, ticket, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, ticket: LoopTicket, time: f64) {
        let again = {
            let mut g = game.borrow_mut();
            let Game { session, surface } = &mut *g;
            session.on_animation_frame(ticket, time, surface)
        };

        if again {
            request_animation_frame(game, ticket);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Duel Shooter (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session against the headless platform
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use duel_shooter::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use duel_shooter::platform::HeadlessPlatform;
    use duel_shooter::renderer::DrawList;
    use duel_shooter::{Session, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let settings = Settings::load();
    let canvas = glam::Vec2::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
    let mut session = Session::new(canvas, &settings, HeadlessPlatform::new());
    let mut surface = DrawList::default();

    let Some(ticket) = session.start() else {
        log::error!("Session refused to start");
        return;
    };

    let mut time = 0.0;
    let mut frame = |session: &mut Session<HeadlessPlatform>, surface: &mut DrawList| {
        let again = session.on_animation_frame(ticket, time, surface);
        time += FRAME_MS;
        again
    };

    session.handle_key(&settings.keys.player_one);
    session.handle_key(&settings.keys.player_two);
    for _ in 0..60 {
        frame(&mut session, &mut surface);
    }
    log::info!(
        "After 60 frames: {} bullets in flight",
        session.state().bullet_count()
    );

    session.handle_key(&settings.keys.pause);
    for _ in 0..30 {
        frame(&mut session, &mut surface);
    }
    session.handle_key(&settings.keys.pause);
    for _ in 0..120 {
        frame(&mut session, &mut surface);
    }
    log::info!(
        "After leaving the canvas: {} bullets, {} frames drawn, {} fps",
        session.state().bullet_count(),
        surface.frames,
        session.fps()
    );

    session.restart();
    let again = frame(&mut session, &mut surface);
    log::info!(
        "Restarted: phase {:?}, loop continues: {}",
        session.phase(),
        again
    );
}
