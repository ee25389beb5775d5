use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::dom::{self, Handler};

const OPEN_CLASS: &str = "active";
const GLYPH_OPEN: &str = "\u{2212}";
const GLYPH_CLOSED: &str = "+";

struct FaqItem {
    root: Element,
    question: Element,
    answer: Element,
    glyph: Option<Element>,
}

impl FaqItem {
    fn is_open(&self) -> bool {
        self.root.class_list().contains(OPEN_CLASS)
    }

    fn set_open(&self, open: bool) {
        let _ = self.root.class_list().toggle_with_force(OPEN_CLASS, open);
        let _ = self.question.set_attribute("aria-expanded", bool_attr(open));
        let _ = self.answer.set_attribute("aria-hidden", bool_attr(!open));
        if let Some(glyph) = &self.glyph {
            glyph.set_text_content(Some(if open { GLYPH_OPEN } else { GLYPH_CLOSED }));
        }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn answer_dom_id(counter: usize) -> String {
    format!("faq-answer-{counter}")
}

/// Which item is open after activating `clicked`: activating the open item
/// collapses the accordion entirely, anything else becomes the open one.
fn next_open(open: &[bool], clicked: usize) -> Option<usize> {
    if open.get(clicked).copied().unwrap_or(false) {
        None
    } else {
        Some(clicked)
    }
}

/// Items missing a question or answer are skipped entirely.
fn collect(document: &Document) -> Vec<FaqItem> {
    let mut items = Vec::new();
    for root in dom::query_all(document, ".faq-item") {
        let Some(question) = root.query_selector(".faq-question").ok().flatten() else {
            continue;
        };
        let Some(answer) = root.query_selector(".faq-answer").ok().flatten() else {
            continue;
        };
        let glyph = root.query_selector(".faq-toggle").ok().flatten();
        items.push(FaqItem {
            root,
            question,
            answer,
            glyph,
        });
    }
    items
}

fn init_aria(items: &[FaqItem]) {
    let mut generated = 0usize;
    for item in items {
        // aria-controls needs a target id; generate one if the markup has none
        if item.answer.id().is_empty() {
            item.answer.set_id(&answer_dom_id(generated));
            generated += 1;
        }
        let _ = item.question.set_attribute("aria-expanded", "false");
        let _ = item.question.set_attribute("aria-controls", &item.answer.id());
        let _ = item.question.set_attribute("role", "button");
        let _ = item.question.set_attribute("tabindex", "0");
        let _ = item.answer.set_attribute("aria-hidden", "true");
    }
}

/// Closes every other item first, then toggles the activated one, so the
/// attribute transitions land in that observable order.
fn activate(items: &[FaqItem], index: usize) {
    let open: Vec<bool> = items.iter().map(FaqItem::is_open).collect();
    let next = next_open(&open, index);
    for (i, item) in items.iter().enumerate() {
        if i != index {
            item.set_open(false);
        }
    }
    items[index].set_open(next == Some(index));
}

pub(crate) fn install(document: &Document, handlers: &mut Vec<Handler>) {
    let items = collect(document);
    if items.is_empty() {
        debug!("no FAQ items found");
        return;
    }
    init_aria(&items);

    let items = Rc::new(items);
    for index in 0..items.len() {
        let question = items[index].question.clone();
        {
            let items = Rc::clone(&items);
            handlers.push(dom::listen(&question, "click", move |_event| {
                activate(&items, index);
            }));
        }
        let items = Rc::clone(&items);
        handlers.push(dom::listen(&question, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if dom::is_activation_key(&key_event.key()) {
                    key_event.prevent_default();
                    activate(&items, index);
                }
            }
        }));
    }
    debug!("FAQ accordion initialized with {} items", items.len());
}
