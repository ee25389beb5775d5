use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Document, Window};

use crate::dom::{self, Handler};

const SCROLL_THRESHOLD_PX: f64 = 50.0;
const THROTTLE_WINDOW_MS: u32 = 50;
const SCROLLED_CLASS: &str = "scrolled";

pub(crate) fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Toggles the "scrolled" class on the navigation bar, sampling the scroll
/// offset at most once per throttle window. Leading edge: the first event
/// arms the timer, events while it is pending are dropped.
pub(crate) fn install(window: &Window, document: &Document, handlers: &mut Vec<Handler>) {
    let Some(bar) = document.query_selector(".navigation").ok().flatten() else {
        debug!("no .navigation element, scroll state tracking not installed");
        return;
    };

    let pending = Rc::new(Cell::new(false));
    let target = window.clone();
    let window = window.clone();
    handlers.push(dom::listen_passive(&target, "scroll", move |_event| {
        if pending.get() {
            return;
        }
        pending.set(true);
        let pending = Rc::clone(&pending);
        let window = window.clone();
        let bar = bar.clone();
        Timeout::new(THROTTLE_WINDOW_MS, move || {
            let offset = window.scroll_y().unwrap_or(0.0);
            let _ = bar
                .class_list()
                .toggle_with_force(SCROLLED_CLASS, is_past_threshold(offset));
            pending.set(false);
        })
        .forget();
    }));
}

#[cfg(test)]
mod tests {
    use super::is_past_threshold;

    #[test]
    fn threshold_is_exclusive_at_50() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(10.0));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(50.5));
        assert!(is_past_threshold(51.0));
    }
}
