//! Client-side interactivity for the static marketing site: mobile nav
//! toggle, clickable cards, smooth anchor scrolling, a scrolled-state class
//! on the nav bar, entrance animations and the FAQ accordion. The markup is
//! rendered by the page itself; this module only wires behavior onto it.
//! Any feature whose elements are missing is simply not installed.

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

mod anchors;
mod cards;
mod dom;
mod faq;
mod nav;
mod reveal;
mod scroll;

/// Owns every installed event handler and the intersection observer.
/// Constructed once on document load and leaked, since the listeners live as
/// long as the page does.
pub struct PageInteractions {
    _handlers: Vec<dom::Handler>,
    _reveal: Option<reveal::Reveal>,
}

impl PageInteractions {
    pub fn install(window: &Window, document: &Document) -> Self {
        let mut handlers = Vec::new();
        let nav = nav::install(document, &mut handlers);
        cards::install(window, document, &mut handlers);
        anchors::install(document, nav, &mut handlers);
        scroll::install(window, document, &mut handlers);
        let reveal = reveal::install(document);
        faq::install(document, &mut handlers);
        Self {
            _handlers: handlers,
            _reveal: reveal,
        }
    }

    /// Leaks the controller so its handlers stay registered for the rest of
    /// the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

fn install_all() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    PageInteractions::install(&window, &document).forget();
    info!("page interactions installed");
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let deferred = Closure::wrap(Box::new(move |_: web_sys::Event| install_all())
            as Box<dyn FnMut(web_sys::Event)>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", deferred.as_ref().unchecked_ref());
        deferred.forget();
    } else {
        install_all();
    }
}
