//! Motion enhancements: smooth scrolling for fragment anchors and
//! fade-in reveals driven by an `IntersectionObserver`.

#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "browser")]
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Content elements that fade in as they enter the viewport.
pub const REVEAL_TARGETS: &str = ".class-card, .stat-card, .material-card, .section";

/// Visible fraction at which a tracked element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the trigger line 50px up from the viewport bottom so elements
/// reveal slightly before they would naturally scroll into view.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Marker id guarding the injected fade styles.
pub const FADE_STYLE_ID: &str = "fade-in-styles";

#[cfg(feature = "browser")]
const FADE_CSS: &str = "\
    .class-card, .stat-card, .material-card, .section {\n\
        opacity: 0;\n\
        transform: translateY(20px);\n\
        transition: opacity 0.6s ease, transform 0.6s ease;\n\
    }\n\
    .fade-in {\n\
        opacity: 1 !important;\n\
        transform: translateY(0) !important;\n\
    }\n";

/// Whether an anchor href points at an in-page fragment.
pub fn is_fragment_href(href: &str) -> bool {
    href.starts_with('#')
}

#[cfg(feature = "browser")]
pub fn attach(doc: &Document) {
    dom::inject_style_once(doc, FADE_STYLE_ID, FADE_CSS);
    smooth_scroll_anchors(doc);
    observe_reveals(doc);
}

/// Replace the default fragment jump with a smooth scroll to the target,
/// aligned to the top. A fragment that matches nothing scrolls nowhere.
#[cfg(feature = "browser")]
fn smooth_scroll_anchors(doc: &Document) {
    for anchor in dom::query_all(doc, r##"a[href^="#"]"##) {
        let doc = doc.clone();
        let anchor_el = anchor.clone();
        dom::listen(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; the Err falls out here.
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

/// Reveal tracked elements once their visible fraction crosses the
/// threshold. A revealed element is unobserved and never transitions back.
#[cfg(feature = "browser")]
fn observe_reveals(doc: &Document) {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("fade-in");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let Ok(observer) = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    cb.forget();

    for el in dom::query_all(doc, REVEAL_TARGETS) {
        observer.observe(&el);
    }
}
