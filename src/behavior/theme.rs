//! Theme persistence and toggling.
//!
//! Reads the saved preference from `localStorage`, applies it as the
//! `data-theme` attribute on the `<html>` element, and wires the header
//! toggle button. Storage failures are silent: the attribute still applies
//! for the session even when the preference cannot be persisted.

#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use web_sys::Document;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the saved preference.
pub const STORAGE_KEY: &str = "lectern-theme";

/// Duration of the body color transition applied around a toggle.
pub const TRANSITION_MS: u64 = 300;

/// The two supported color themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in `localStorage` and mirrored into `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored or applied value. Anything other than `"dark"`
    /// (missing, corrupt, `"light"`) resolves to the light default.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button: the moon offers dark mode while
    /// light is active, the sun offers the way back.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Read the saved preference, defaulting to light when storage is
/// unavailable or holds an unknown value.
#[cfg(feature = "browser")]
pub fn read_preference() -> Theme {
    let stored = dom::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Apply `theme` to the document and persist it. A blocked or full storage
/// is ignored; the attribute still holds for the session.
#[cfg(feature = "browser")]
pub fn set_preference(doc: &Document, theme: Theme) {
    apply(doc, theme);
    if let Some(storage) = dom::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Theme currently applied to the document.
#[cfg(feature = "browser")]
pub fn applied(doc: &Document) -> Theme {
    let value = doc
        .document_element()
        .and_then(|el| el.get_attribute("data-theme"));
    Theme::from_stored(value.as_deref())
}

/// Apply `theme` as the document-level `data-theme` attribute.
#[cfg(feature = "browser")]
pub fn apply(doc: &Document, theme: Theme) {
    if let Some(el) = doc.document_element() {
        let _ = el.set_attribute("data-theme", theme.as_str());
    }
}

/// Flip the applied theme, persist it, update the toggle icon, and run a
/// short body color transition that clears itself.
#[cfg(feature = "browser")]
pub fn toggle(doc: &Document) {
    let next = applied(doc).flipped();
    set_preference(doc, next);
    update_icon(doc, next);
    run_transition_window(doc);
}

/// Apply the saved theme and wire the toggle button when the page has one.
#[cfg(feature = "browser")]
pub fn attach(doc: &Document) {
    let theme = read_preference();
    apply(doc, theme);

    let Ok(Some(button)) = doc.query_selector(".theme-toggle") else {
        return;
    };
    update_icon(doc, theme);

    let doc = doc.clone();
    dom::listen(&button, "click", move |_| toggle(&doc));
}

#[cfg(feature = "browser")]
fn update_icon(doc: &Document, theme: Theme) {
    if let Ok(Some(icon)) = doc.query_selector(".theme-toggle i") {
        icon.set_class_name(theme.icon_class());
    }
}

#[cfg(feature = "browser")]
fn run_transition_window(doc: &Document) {
    let Some(body) = doc.body() else {
        return;
    };
    let _ = body
        .style()
        .set_property("transition", "background-color 0.3s ease, color 0.3s ease");
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TRANSITION_MS)).await;
        let _ = body.style().remove_property("transition");
    });
}
