use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget};

/// Retained event callback. Dropping it detaches the underlying JS closure,
/// so installed handlers are kept alive by `PageInteractions`.
pub(crate) type Handler = Closure<dyn FnMut(Event)>;

pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    callback: impl FnMut(Event) + 'static,
) -> Handler {
    let handler = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    handler
}

/// Same as `listen` but registers a passive listener, for handlers that never
/// cancel the event's default action (the scroll sampler).
pub(crate) fn listen_passive(
    target: &EventTarget,
    event: &str,
    callback: impl FnMut(Event) + 'static,
) -> Handler {
    let handler = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        handler.as_ref().unchecked_ref(),
        &options,
    );
    handler
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                found.push(element);
            }
        }
    }
    found
}

/// Keys that activate button-like elements (nav toggle, cards, FAQ questions).
pub(crate) fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::is_activation_key;

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
    }

    #[test]
    fn other_keys_do_not_activate() {
        for key in ["Escape", "Tab", "ArrowDown", "a", "Spacebar", ""] {
            assert!(!is_activation_key(key), "{key:?} should not activate");
        }
    }
}
