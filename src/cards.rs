use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Window};

use crate::dom::{self, Handler};

pub(crate) const CARD_SELECTOR: &str = ".service-card, .project-card";

/// Navigation target carried in a card's `data-href` attribute. Cards without
/// one (or with an empty one) are not clickable.
pub(crate) fn link_target(card: &Element) -> Option<String> {
    let card = card.dyn_ref::<HtmlElement>()?;
    card.dataset().get("href").filter(|href| !href.is_empty())
}

pub(crate) fn install(window: &Window, document: &Document, handlers: &mut Vec<Handler>) {
    let mut wired = 0usize;
    for card in dom::query_all(document, CARD_SELECTOR) {
        let Some(href) = link_target(&card) else {
            continue;
        };
        let location = window.location();
        {
            let location = location.clone();
            let href = href.clone();
            handlers.push(dom::listen(&card, "click", move |_event| {
                let _ = location.set_href(&href);
            }));
        }
        handlers.push(dom::listen(&card, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if dom::is_activation_key(&key_event.key()) {
                    key_event.prevent_default();
                    let _ = location.set_href(&href);
                }
            }
        }));
        wired += 1;
    }
    debug!("card navigation wired for {wired} cards");
}
