//! Animated canvas backgrounds and single-page navigation for a portfolio site.
//!
//! The simulation ([`scene`], [`particles`]) and the navigation state machine
//! ([`nav`]) are plain Rust and run anywhere. The browser glue lives in
//! [`wasm`] and only compiles for `wasm32`.

pub mod config;
pub mod nav;
pub mod page;
pub mod paint;
pub mod particles;
pub mod scene;

pub use config::SiteConfig;
pub use nav::{HistoryOp, HistoryPort, NavEvent, NavigationState, Navigator, PageView, Transition};
pub use page::PageId;
pub use paint::{Bounds, Painter, Rgba};
pub use particles::{init_particles, step_and_draw, Particle, ParticleKind};
pub use scene::Scene;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::{Bounds, Navigator, ParticleKind, Scene, SiteConfig};

    pub mod canvas;
    pub mod dom;
    pub mod events;
    pub mod history;
    pub mod log;
    mod render;

    pub use canvas::CanvasPainter;
    pub use dom::DomView;
    pub use history::BrowserHistory;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = SiteConfig::default();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        // Without a canvas the page still navigates; the scene is just never drawn.
        let scene = match document.get_element_by_id(config.canvas_id) {
            Some(canvas) => render::start(&window, canvas.dyn_into()?)?,
            None => {
                log::info("portfolio: no background canvas, animation disabled");
                Rc::new(RefCell::new(Scene::new(
                    ParticleKind::Network,
                    Bounds::default(),
                    0,
                )))
            }
        };
        let view = DomView::new(window.clone(), document.clone(), config.clone(), scene);
        let history = BrowserHistory::new(window.clone())?;
        let navigator = Rc::new(RefCell::new(Navigator::new(view, history)));

        events::install(&window, &document, &config, navigator)?;
        log::info("portfolio: background and navigation ready");
        Ok(())
    }
}
