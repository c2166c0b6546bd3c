use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::canvas::CanvasPainter;
use super::log;
use crate::paint::Bounds;
use crate::particles::ParticleKind;
use crate::scene::Scene;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Size the canvas to the window, start the redraw loop and return the scene it
/// draws so navigation can switch its motif.
pub fn start(win: &Window, canvas: HtmlCanvasElement) -> Result<Rc<RefCell<Scene>>, JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2D canvas not supported")?
        .dyn_into()?;

    let bounds = fit_to_window(win, &canvas);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let scene = Rc::new(RefCell::new(Scene::new(ParticleKind::Network, bounds, seed)));

    // Resize canvas to fit window; the next frame reseeds for the new size.
    let resize_closure = {
        let canvas = canvas.clone();
        let scene = scene.clone();
        Closure::wrap(Box::new(move || {
            let Some(win) = window() else {
                return;
            };
            let bounds = fit_to_window(&win, &canvas);
            scene.borrow_mut().resize(bounds);
            log::info(&format!("resize: {}x{}", bounds.width, bounds.height));
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so it can re-request itself; the
    // `Option` lets us create the closure first and reference it from inside.
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let mut painter = CanvasPainter::new(ctx);
    {
        let scene = scene.clone();
        let handle = handle.clone();
        let f = f.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            scene.borrow_mut().frame(&mut painter);

            // schedule next
            let next = f.borrow().as_ref().map(request_frame);
            match next {
                Some(Ok(id)) => handle.set(Some(id)),
                Some(Err(err)) => {
                    log::warn("requestAnimationFrame failed; animation stopped", &err);
                    handle.set(None);
                }
                None => handle.set(None),
            }
        }) as Box<dyn FnMut()>));
    }

    let first = g.borrow().as_ref().map(request_frame).transpose()?;
    handle.set(first);

    let teardown = Closure::wrap(Box::new(move || {
        if let (Some(id), Some(win)) = (handle.take(), window()) {
            if let Err(err) = win.cancel_animation_frame(id) {
                log::warn("cancelAnimationFrame failed", &err);
            }
        }
        // Drops the frame closure and breaks its self-reference.
        f.borrow_mut().take();
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("beforeunload", teardown.as_ref().unchecked_ref())?;
    teardown.forget();

    Ok(scene)
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

fn fit_to_window(win: &Window, canvas: &HtmlCanvasElement) -> Bounds {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let w = dimension(win.inner_width());
    let h = dimension(win.inner_height());
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Bounds::new(w, h)
}
