//! Overlay (modal) dismissal.
//!
//! A click that lands on an overlay root itself (the backdrop, not its
//! content) hides that overlay; Escape hides every overlay currently shown
//! with an inline flex display. Clicks inside `.modal-content` stop
//! propagating so they never reach the outside-click handler. All visible
//! overlays are treated uniformly; there is no stacking order.

#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;
#[cfg(feature = "browser")]
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

#[cfg(feature = "browser")]
pub fn attach(doc: &Document) {
    // Outside click: the event target is the overlay root only when the
    // click missed the content.
    dom::listen(doc, "click", |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if target.class_list().contains("modal") {
            hide(&target);
        }
    });

    // Escape closes every open overlay.
    let doc_for_keys = doc.clone();
    dom::listen(doc, "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if key == "Escape" {
            for overlay in dom::query_all(&doc_for_keys, r#".modal[style*="flex"]"#) {
                hide(&overlay);
            }
        }
    });

    // Keep content clicks inside the overlay.
    for content in dom::query_all(doc, ".modal-content") {
        dom::listen(&content, "click", |ev| ev.stop_propagation());
    }
}

#[cfg(feature = "browser")]
fn hide(overlay: &Element) {
    if let Some(el) = overlay.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("display", "none");
    }
}
