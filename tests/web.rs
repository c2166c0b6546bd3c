#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_wasm::wasm::{events, history, BrowserHistory, DomView};
use portfolio_wasm::{Bounds, Navigator, PageId, ParticleKind, Scene, SiteConfig};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, PopStateEvent, PopStateEventInit, Window};

wasm_bindgen_test_configure!(run_in_browser);

const PAGES: [&str; 4] = ["home", "education", "skills", "experience"];

fn fixture(document: &Document) -> Element {
    let root = document.create_element("div").unwrap();
    for page in PAGES {
        let section = document.create_element("section").unwrap();
        section.set_id(page);
        section.set_class_name("page");
        root.append_child(&section).unwrap();

        let button = document.create_element("button").unwrap();
        button.set_attribute("data-page", page).unwrap();
        button.set_text_content(Some(page));
        root.append_child(&button).unwrap();
    }
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn active_ids(document: &Document, selector: &str, attr: Option<&str>) -> Vec<String> {
    let list = document.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.unchecked_into::<Element>())
        .map(|el| match attr {
            Some(attr) => el.get_attribute(attr).unwrap_or_default(),
            None => el.id(),
        })
        .collect()
}

/// Navigator wired to the live window the way the start function wires it.
fn install(window: &Window, document: &Document) -> Rc<RefCell<Scene>> {
    let scene = Rc::new(RefCell::new(Scene::new(
        ParticleKind::Network,
        Bounds::new(320.0, 240.0),
        5,
    )));
    let config = SiteConfig::default();
    let view = DomView::new(window.clone(), document.clone(), config.clone(), scene.clone());
    let history = BrowserHistory::new(window.clone()).unwrap();
    let navigator = Rc::new(RefCell::new(Navigator::new(view, history)));
    events::install(window, document, &config, navigator).unwrap();
    scene
}

fn current_page(window: &Window) -> Option<String> {
    history::page_of(&window.history().unwrap().state().unwrap())
}

#[wasm_bindgen_test]
fn show_page_syncs_dom_and_history() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let root = fixture(&document);

    let scene = Rc::new(RefCell::new(Scene::new(
        ParticleKind::Network,
        Bounds::new(320.0, 240.0),
        3,
    )));
    let view = DomView::new(window.clone(), document.clone(), SiteConfig::default(), scene.clone());
    let mut nav = Navigator::new(view, BrowserHistory::new(window.clone()).unwrap());

    nav.show_page("skills");
    assert_eq!(active_ids(&document, ".page.active", None), vec!["skills"]);
    assert_eq!(
        active_ids(&document, "[data-page].active", Some("data-page")),
        vec!["skills"]
    );
    assert_eq!(scene.borrow().kind(), ParticleKind::Rain);

    let browser = window.history().unwrap();
    assert_eq!(history::page_of(&browser.state().unwrap()).as_deref(), Some("skills"));
    assert_eq!(window.location().hash().unwrap(), "#skills");

    let depth = browser.length().unwrap();
    nav.show_page("skills");
    assert_eq!(browser.length().unwrap(), depth);

    nav.update_view_only("not-a-page");
    assert_eq!(active_ids(&document, ".page.active", None), vec!["home"]);
    assert_eq!(window.location().hash().unwrap(), "#skills");

    root.remove();
}

#[wasm_bindgen_test]
fn payload_round_trips_page() {
    let payload = history::payload(PageId::Experience);
    assert_eq!(history::page_of(&payload).as_deref(), Some("experience"));
    assert_eq!(history::page_of(&JsValue::NULL), None);
}

#[wasm_bindgen_test]
fn install_on_loaded_document_replaces_current_entry() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let root = fixture(&document);
    let browser = window.history().unwrap();
    browser
        .replace_state_with_url(&JsValue::NULL, "", Some("#education"))
        .unwrap();
    let depth = browser.length().unwrap();

    let scene = install(&window, &document);

    assert_eq!(current_page(&window).as_deref(), Some("education"));
    assert_eq!(window.location().hash().unwrap(), "#education");
    assert_eq!(browser.length().unwrap(), depth);
    assert_eq!(active_ids(&document, ".page.active", None), vec!["education"]);
    assert_eq!(scene.borrow().kind(), ParticleKind::RisingSquares);

    root.remove();
}

#[wasm_bindgen_test]
fn click_on_control_navigates_and_cancels_default() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let root = fixture(&document);
    install(&window, &document);

    let button = document
        .query_selector("button[data-page=\"skills\"]")
        .unwrap()
        .unwrap();
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = Event::new_with_event_init_dict("click", &init).unwrap();
    button.dispatch_event(&click).unwrap();

    assert!(click.default_prevented());
    assert_eq!(active_ids(&document, ".page.active", None), vec!["skills"]);
    assert_eq!(
        active_ids(&document, "[data-page].active", Some("data-page")),
        vec!["skills"]
    );
    assert_eq!(current_page(&window).as_deref(), Some("skills"));
    assert_eq!(window.location().hash().unwrap(), "#skills");

    root.remove();
}

#[wasm_bindgen_test]
fn popstate_follows_entry_payload() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let root = fixture(&document);
    let scene = install(&window, &document);

    let browser = window.history().unwrap();
    let payload = history::payload(PageId::Experience);
    browser
        .replace_state_with_url(&payload, "", Some("#experience"))
        .unwrap();
    let depth = browser.length().unwrap();

    let init = PopStateEventInit::new();
    init.set_state(&payload);
    let event = PopStateEvent::new_with_event_init_dict("popstate", &init).unwrap();
    window.dispatch_event(&event).unwrap();

    assert_eq!(active_ids(&document, ".page.active", None), vec!["experience"]);
    assert_eq!(scene.borrow().kind(), ParticleKind::Starfield);
    assert_eq!(browser.length().unwrap(), depth);
    assert_eq!(current_page(&window).as_deref(), Some("experience"));

    root.remove();
}
