use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::dom::{self, Handler};

const OPEN_CLASS: &str = "active";

/// Handle on the mobile navigation menu and its toggle button. Cloneable so
/// the anchor-scroll handlers can close the menu too.
#[derive(Clone)]
pub(crate) struct NavMenu {
    menu: Element,
    toggle: Element,
}

impl NavMenu {
    fn locate(document: &Document) -> Option<Self> {
        let toggle = document.get_element_by_id("navToggle")?;
        let menu = document.get_element_by_id("navMenu")?;
        Some(Self { menu, toggle })
    }

    fn is_open(&self) -> bool {
        self.menu.class_list().contains(OPEN_CLASS)
    }

    pub(crate) fn set_open(&self, open: bool) {
        let _ = self.menu.class_list().toggle_with_force(OPEN_CLASS, open);
        let _ = self.toggle.class_list().toggle_with_force(OPEN_CLASS, open);
        let _ = self
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
    }

    fn flip(&self) {
        self.set_open(!self.is_open());
    }
}

pub(crate) fn install(document: &Document, handlers: &mut Vec<Handler>) -> Option<NavMenu> {
    let Some(nav) = NavMenu::locate(document) else {
        debug!("nav toggle or menu missing, menu toggle not installed");
        return None;
    };

    {
        let nav = nav.clone();
        let toggle = nav.toggle.clone();
        handlers.push(dom::listen(&toggle, "click", move |_event| {
            nav.flip();
        }));
    }
    {
        let nav = nav.clone();
        let toggle = nav.toggle.clone();
        handlers.push(dom::listen(&toggle, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if dom::is_activation_key(&key_event.key()) {
                    key_event.prevent_default();
                    nav.flip();
                }
            }
        }));
    }

    // Close the mobile menu when any nav link is followed.
    for link in dom::query_all(document, ".nav-item a") {
        let nav = nav.clone();
        handlers.push(dom::listen(&link, "click", move |_event| {
            nav.set_open(false);
        }));
    }

    Some(nav)
}
