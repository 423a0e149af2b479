//! Client-created notifications and server-rendered flash messages.
//!
//! Two mechanisms with the same intent: [`notify`] builds a dismissible
//! banner that expires on its own, while [`attach_flash_autodismiss`] fades
//! out the flash messages the server rendered into the page. Multiple
//! notifications stack independently; there is no queue or dedup.

#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;
#[cfg(feature = "browser")]
use web_sys::{Document, HtmlElement};

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// How long a notification (or flash message) stays before auto-dismissal.
pub const LINGER_MS: u64 = 5000;

/// Flash messages get this long to fade before removal.
pub const FLASH_FADE_MS: u64 = 300;

/// Visual severity of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// CSS class suffix on the banner element.
    pub fn as_class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Show a dismissible banner that removes itself after [`LINGER_MS`].
///
/// The dismiss button removes it immediately; otherwise a timer does, after
/// checking the banner was not already dismissed.
#[cfg(feature = "browser")]
pub fn notify(message: &str, severity: Severity) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(banner) = doc.create_element("div") else {
        return;
    };
    banner.set_class_name(&format!("notification {}", severity.as_class()));

    if let Ok(icon) = doc.create_element("i") {
        icon.set_class_name("fas fa-info-circle");
        let _ = banner.append_child(&icon);
    }
    if let Ok(text) = doc.create_element("span") {
        text.set_text_content(Some(message));
        let _ = banner.append_child(&text);
    }
    if let Ok(dismiss) = doc.create_element("button") {
        if let Ok(icon) = doc.create_element("i") {
            icon.set_class_name("fas fa-times");
            let _ = dismiss.append_child(&icon);
        }
        let banner_for_click = banner.clone();
        dom::listen(&dismiss, "click", move |_| banner_for_click.remove());
        let _ = banner.append_child(&dismiss);
    }

    let _ = body.append_child(&banner);

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(LINGER_MS)).await;
        if banner.is_connected() {
            banner.remove();
        }
    });
}

/// Fade out and remove every server-rendered `.flash-message` on the page.
#[cfg(feature = "browser")]
pub fn attach_flash_autodismiss(doc: &Document) {
    for flash in dom::query_all(doc, ".flash-message") {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(LINGER_MS)).await;
            if let Some(el) = flash.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property("opacity", "0");
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(FLASH_FADE_MS)).await;
            flash.remove();
        });
    }
}
