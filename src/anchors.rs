use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Handler};
use crate::nav::NavMenu;

/// Smooth scrolling for same-page fragment links. The default jump is always
/// suppressed; when the fragment matches nothing the click is a silent no-op.
pub(crate) fn install(document: &Document, nav: Option<NavMenu>, handlers: &mut Vec<Handler>) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let nav = nav.clone();
        let link = anchor.clone();
        handlers.push(dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(fragment) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = document.query_selector(&fragment).ok().flatten() else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            if let Some(nav) = &nav {
                nav.set_open(false);
            }
        }));
    }
}
