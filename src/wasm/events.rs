//! Wires browser events to the navigator: control clicks, back/forward and
//! the initial load.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, PopStateEvent, Window};

use super::dom::DomView;
use super::history::{self, BrowserHistory};
use super::log;
use crate::config::SiteConfig;
use crate::nav::{NavEvent, Navigator, Transition};

pub type SharedNavigator = Rc<RefCell<Navigator<DomView, BrowserHistory>>>;

pub fn install(
    win: &Window,
    document: &Document,
    config: &SiteConfig,
    navigator: SharedNavigator,
) -> Result<(), JsValue> {
    let popstate = {
        let navigator = navigator.clone();
        let win = win.clone();
        Closure::wrap(Box::new(move |event: PopStateEvent| {
            let event = NavEvent::PopState {
                state_page: history::page_of(&event.state()),
                hash: win.location().hash().unwrap_or_default(),
            };
            let transition = navigator.borrow_mut().dispatch(event);
            log_transition("popstate", transition);
        }) as Box<dyn FnMut(PopStateEvent)>)
    };
    win.add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())?;
    popstate.forget();

    if document.ready_state() == "loading" {
        let document = document.clone();
        let win = win.clone();
        let config = config.clone();
        let on_ready = Closure::wrap(Box::new(move || {
            if let Err(err) = ready(&win, &document, &config, &navigator) {
                log::warn("initial navigation failed", &err);
            }
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        Ok(())
    } else {
        ready(win, document, config, &navigator)
    }
}

/// Show the page named by the fragment, pin it into the current history entry
/// and hook up every `[data-page]` control.
fn ready(
    win: &Window,
    document: &Document,
    config: &SiteConfig,
    navigator: &SharedNavigator,
) -> Result<(), JsValue> {
    let hash = win.location().hash().unwrap_or_default();
    let transition = navigator.borrow_mut().dispatch(NavEvent::Load { hash });
    log_transition("load", transition);

    let controls = document.query_selector_all(&config.control_selector())?;
    for i in 0..controls.length() {
        let Some(control) = controls.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let navigator = navigator.clone();
        let target = control.clone();
        let attr = config.control_attr;
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let raw = target.get_attribute(attr).unwrap_or_default();
            let transition = navigator.borrow_mut().show_page(&raw);
            log_transition("click", transition);
        }) as Box<dyn FnMut(Event)>);
        control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn log_transition(source: &str, transition: Transition) {
    log::info(&format!(
        "navigate ({source}): {} [{:?}]",
        transition.page, transition.history
    ));
}
