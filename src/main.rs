//! Snowhop entry point
//!
//! Adapts host-specific input/scheduling to the session: browser touch and
//! mouse events become canonical `InputEvent`s, requestAnimationFrame drives
//! `Session::frame`. Drawing is the host page's job; it reads the session's
//! state snapshot.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use snowhop::audio::WebAudioSink;
    use snowhop::platform::InputEvent;
    use snowhop::platform::web::LocalStorageStore;
    use snowhop::{Session, Settings};

    fn request_animation_frame(f: &Closure<dyn FnMut()>) {
        web_sys::window()
            .expect("no window")
            .request_animation_frame(f.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;

        let width = window.inner_width()?.as_f64().unwrap_or(400.0) as f32;
        let height = window.inner_height()?.as_f64().unwrap_or(800.0) as f32;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let session = Rc::new(RefCell::new(Session::new(
            seed,
            width,
            height,
            Box::new(LocalStorageStore::new()),
            Box::new(WebAudioSink::new(settings.volume)),
        )));

        // --- Touch input ---
        {
            let session = session.clone();
            let on_touch_start = Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
                e.prevent_default();
                // A touch event without touches is dropped, not propagated
                if let Some(touch) = e.touches().get(0) {
                    session.borrow_mut().handle_input(InputEvent::Start {
                        x: touch.client_x() as f32,
                    });
                }
            });
            canvas.add_event_listener_with_callback(
                "touchstart",
                on_touch_start.as_ref().unchecked_ref(),
            )?;
            on_touch_start.forget();
        }
        {
            let session = session.clone();
            let on_touch_move = Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
                e.prevent_default();
                if let Some(touch) = e.touches().get(0) {
                    session.borrow_mut().handle_input(InputEvent::Move {
                        x: touch.client_x() as f32,
                    });
                }
            });
            canvas.add_event_listener_with_callback(
                "touchmove",
                on_touch_move.as_ref().unchecked_ref(),
            )?;
            on_touch_move.forget();
        }

        // --- Mouse input (desktop debugging) ---
        let mouse_down = Rc::new(RefCell::new(false));
        {
            let session = session.clone();
            let mouse_down = mouse_down.clone();
            let on_mouse_down = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                *mouse_down.borrow_mut() = true;
                session.borrow_mut().handle_input(InputEvent::Start {
                    x: e.client_x() as f32,
                });
            });
            canvas.add_event_listener_with_callback(
                "mousedown",
                on_mouse_down.as_ref().unchecked_ref(),
            )?;
            on_mouse_down.forget();
        }
        {
            let session = session.clone();
            let mouse_down = mouse_down.clone();
            let on_mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                if *mouse_down.borrow() {
                    session.borrow_mut().handle_input(InputEvent::Move {
                        x: e.client_x() as f32,
                    });
                }
            });
            canvas.add_event_listener_with_callback(
                "mousemove",
                on_mouse_move.as_ref().unchecked_ref(),
            )?;
            on_mouse_move.forget();
        }
        {
            let on_mouse_up = Closure::<dyn FnMut(MouseEvent)>::new(move |_e: MouseEvent| {
                *mouse_down.borrow_mut() = false;
            });
            window
                .add_event_listener_with_callback("mouseup", on_mouse_up.as_ref().unchecked_ref())?;
            on_mouse_up.forget();
        }

        // --- Frame loop ---
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::new(move || {
            session.borrow_mut().frame();
            request_animation_frame(f.borrow().as_ref().unwrap());
        }));
        request_animation_frame(g.borrow().as_ref().unwrap());

        log::info!("snowhop started");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

/// Native build: run a short headless scripted session and report the result.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use snowhop::Session;
    use snowhop::audio::NullAudio;
    use snowhop::platform::{InputEvent, MemoryStore};
    use snowhop::sim::GameMode;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = Session::new(
        seed,
        400.0,
        800.0,
        Box::new(MemoryStore::new()),
        Box::new(NullAudio),
    );

    session.handle_input(InputEvent::Start { x: 200.0 });
    session.frame();

    let mut frames = 1u32;
    while session.state().mode == GameMode::Playing && frames < 36_000 {
        // Drift toward the nearest live bell to keep the demo climbing
        let target = session
            .state()
            .bells
            .iter()
            .filter(|b| b.active && b.pos.y < session.state().character.pos.y)
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|b| b.pos.x);
        if let Some(x) = target {
            session.handle_input(InputEvent::Move { x });
        }
        session.frame();
        frames += 1;
    }

    let state = session.state();
    log::info!(
        "demo run over after {} frames: score {}, camera {:.0}px, difficulty {:.2}",
        frames,
        state.score,
        state.camera_y,
        state.difficulty
    );
}
