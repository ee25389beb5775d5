use js_sys::Array;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::cards::CARD_SELECTOR;
use crate::dom;

const ANIMATE_CLASS: &str = "animate";
const VISIBILITY_THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Keeps the observer and its callback alive for the page's lifetime.
/// Elements keep being observed after they animate; the class is one-way.
pub(crate) struct Reveal {
    _observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

pub(crate) fn install(document: &Document) -> Option<Reveal> {
    let cards = dom::query_all(document, CARD_SELECTOR);
    if cards.is_empty() {
        debug!("no cards to observe, entrance animation not installed");
        return None;
    }

    let callback = Closure::wrap(Box::new(move |entries: Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(ANIMATE_CLASS);
            }
        }
    }) as Box<dyn FnMut(Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for card in &cards {
        observer.observe(card);
    }
    debug!("observing {} cards for entrance animation", cards.len());

    Some(Reveal {
        _observer: observer,
        _callback: callback,
    })
}
