use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use super::log;
use crate::config::SiteConfig;
use crate::nav::PageView;
use crate::page::PageId;
use crate::particles::ParticleKind;
use crate::scene::Scene;

/// Shows a page by toggling the active class on sections and controls, and
/// switches the background motif to match.
pub struct DomView {
    window: Window,
    document: Document,
    config: SiteConfig,
    scene: Rc<RefCell<Scene>>,
}

impl DomView {
    pub fn new(
        window: Window,
        document: Document,
        config: SiteConfig,
        scene: Rc<RefCell<Scene>>,
    ) -> Self {
        Self {
            window,
            document,
            config,
            scene,
        }
    }

    /// Every element matching `selector`; an invalid selector yields nothing.
    pub fn elements(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn(&format!("bad selector {selector}"), &err);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_active(&self, element: &Element, active: bool) {
        if let Err(err) = element
            .class_list()
            .toggle_with_force(self.config.active_class, active)
        {
            log::warn("class toggle skipped", &err);
        }
    }
}

impl PageView for DomView {
    fn render(&mut self, page: PageId) {
        self.scene.borrow_mut().set_kind(ParticleKind::for_page(page));

        for section in self.elements(&self.config.section_selector()) {
            self.set_active(&section, section.id() == page.as_str());
        }
        for control in self.elements(&self.config.control_selector()) {
            let target = control.get_attribute(self.config.control_attr);
            self.set_active(&control, target.as_deref() == Some(page.as_str()));
        }

        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
