//! Crate entry point: attach every sub-behavior to the rendered page.
//!
//! Runs once when the WASM module loads. Each sub-behavior probes for its
//! anchor elements and silently stays inactive when the page does not
//! carry them; no behavior depends on another's state.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::ErrorEvent;

use crate::behavior::{form, motion, nav, notify, overlay, theme};
use crate::dom;
use crate::pages::{dashboard, live_class, materials};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(doc) = dom::document() else {
        return;
    };

    theme::attach(&doc);
    overlay::attach(&doc);
    nav::attach(&doc);
    motion::attach(&doc);
    form::attach(&doc);
    notify::attach_flash_autodismiss(&doc);

    if let Some(live) = live_class::LiveClass::probe(&doc) {
        live.attach(&doc);
    }
    if let Some(zone) = materials::UploadZone::probe(&doc) {
        zone.attach(&doc);
    }
    if let Some(dash) = dashboard::Dashboard::probe(&doc) {
        dash.attach();
    }

    attach_error_handler();
    log::debug!("page behaviors attached");
}

/// Surface any uncaught page error as a generic notification without
/// halting the other behaviors.
fn attach_error_handler() {
    let Some(win) = dom::window() else {
        return;
    };
    dom::listen(&win, "error", |ev| {
        let message = ev
            .dyn_ref::<ErrorEvent>()
            .map(ErrorEvent::message)
            .unwrap_or_default();
        log::error!("uncaught page error: {message}");
        notify::notify(
            "An unexpected error occurred. Please try again.",
            notify::Severity::Error,
        );
    });
}
