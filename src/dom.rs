//! Shared browser-DOM plumbing for the behavior modules.
//!
//! ERROR HANDLING
//! ==============
//! Every helper absorbs DOM fallibility: a missing window/document, an
//! invalid selector, or a rejected DOM call degrades to a no-op instead of
//! propagating an error to the caller.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Current viewport width in CSS pixels, `0.0` outside a browser.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// All elements matching `selector` under the document. Invalid selectors
/// match nothing.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    doc.query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

/// All elements matching `selector` under `root`.
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &NodeList) -> Vec<Element> {
    let mut out = Vec::new();
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

/// Register `handler` for `event` on `target` for the page lifetime.
///
/// The closure is leaked intentionally: listeners registered here are never
/// unregistered before page teardown.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Inject a one-time `<style>` block guarded by `marker_id`.
///
/// Returns `true` if a new block was inserted, `false` if the marker was
/// already present (repeat initialization) or the document refused.
pub fn inject_style_once(doc: &Document, marker_id: &str, css: &str) -> bool {
    if doc.get_element_by_id(marker_id).is_some() {
        return false;
    }
    let Ok(style) = doc.create_element("style") else {
        return false;
    };
    style.set_id(marker_id);
    style.set_text_content(Some(css));
    let Some(head) = doc.head() else {
        return false;
    };
    head.append_child(&style).is_ok()
}
