use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{History, Window};

use super::log;
use crate::nav::HistoryPort;
use crate::page::PageId;

const PAGE_KEY: &str = "page";

/// [`HistoryPort`] over `window.history`; entries carry `{ page: "<id>" }`.
pub struct BrowserHistory {
    window: Window,
    history: History,
}

impl BrowserHistory {
    pub fn new(window: Window) -> Result<Self, JsValue> {
        let history = window.history()?;
        Ok(Self { window, history })
    }

    fn url_for(&self, page: PageId) -> String {
        let path = self.window.location().pathname().unwrap_or_default();
        format!("{path}{}", page.fragment())
    }
}

/// The payload object stored with each history entry.
pub fn payload(page: PageId) -> JsValue {
    let obj = Object::new();
    // Setting a plain data property on a fresh object cannot fail.
    Reflect::set(&obj, &JsValue::from_str(PAGE_KEY), &JsValue::from_str(page.as_str())).ok();
    obj.into()
}

/// `state.page` if `state` is an object carrying a string `page`.
pub fn page_of(state: &JsValue) -> Option<String> {
    if !state.is_object() {
        return None;
    }
    Reflect::get(state, &JsValue::from_str(PAGE_KEY))
        .ok()?
        .as_string()
}

impl HistoryPort for BrowserHistory {
    fn current_entry(&self) -> Option<String> {
        self.history.state().ok().and_then(|state| page_of(&state))
    }

    fn push(&mut self, page: PageId) {
        let url = self.url_for(page);
        if let Err(err) = self.history.push_state_with_url(&payload(page), "", Some(&url)) {
            log::warn("history.pushState skipped", &err);
        }
    }

    fn replace(&mut self, page: PageId) {
        let url = self.url_for(page);
        if let Err(err) = self
            .history
            .replace_state_with_url(&payload(page), "", Some(&url))
        {
            log::warn("history.replaceState skipped", &err);
        }
    }
}
