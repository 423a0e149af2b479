//! Live-class view: stream control toggles and the rotating stream label.

#[cfg(feature = "browser")]
use crate::behavior::notify::{self, Severity};
#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use web_sys::{Document, Element};

#[cfg(test)]
#[path = "live_class_test.rs"]
mod live_class_test;

/// Stream label phases, cycled in order.
pub const STREAM_PHASES: [&str; 3] = ["Broadcasting...", "Live Stream...", "Streaming HD..."];

/// Period of the label rotation.
pub const ROTATE_INTERVAL_MS: u64 = 3000;

/// Next label in the cycle, wrapping at the end. An unrecognized current
/// label restarts the cycle at the first phase.
pub fn next_phase(current: &str) -> &'static str {
    let next = STREAM_PHASES
        .iter()
        .position(|phase| *phase == current)
        .map_or(0, |i| (i + 1) % STREAM_PHASES.len());
    STREAM_PHASES[next]
}

/// Icon swap for a control button's state toggle. `None` for buttons whose
/// icon has no on/off pair (e.g. end-call).
pub fn toggled_icon(icon_classes: &str, active: bool) -> Option<&'static str> {
    let has = |token: &str| icon_classes.split_whitespace().any(|c| c == token);
    if has("fa-microphone") || has("fa-microphone-slash") {
        Some(if active {
            "fas fa-microphone"
        } else {
            "fas fa-microphone-slash"
        })
    } else if has("fa-video") || has("fa-video-slash") {
        Some(if active { "fas fa-video" } else { "fas fa-video-slash" })
    } else {
        None
    }
}

/// Capability handle for the live-class view.
#[cfg(feature = "browser")]
pub struct LiveClass {
    root: Element,
}

#[cfg(feature = "browser")]
impl LiveClass {
    pub fn probe(doc: &Document) -> Option<Self> {
        let root = doc.query_selector(".live-class").ok().flatten()?;
        Some(Self { root })
    }

    pub fn attach(self, doc: &Document) {
        for button in dom::query_all(doc, ".control-btn") {
            let button_el = button.clone();
            dom::listen(&button, "click", move |ev| {
                ev.prevent_default();
                handle_control_click(&button_el);
            });
        }
        self.rotate_stream_label(doc);
    }

    /// Cycle the stream label while the live-class view stays mounted.
    fn rotate_stream_label(self, doc: &Document) {
        let doc = doc.clone();
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(ROTATE_INTERVAL_MS))
                    .await;
                if !self.root.is_connected() {
                    break;
                }
                if let Ok(Some(label)) = doc.query_selector(".stream-indicator span") {
                    let current = label.text_content().unwrap_or_default();
                    label.set_text_content(Some(next_phase(&current)));
                }
            }
        });
    }
}

#[cfg(feature = "browser")]
fn handle_control_click(button: &Element) {
    if button.class_list().contains("end-call") {
        let confirmed = dom::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to end the class?").ok())
            .unwrap_or(false);
        if confirmed {
            // Real session teardown belongs to the server; this only
            // acknowledges the intent.
            notify::notify("Class ended successfully", Severity::Success);
        }
        return;
    }

    let active = button.class_list().toggle("active").unwrap_or(false);
    if let Ok(Some(icon)) = button.query_selector("i") {
        if let Some(next) = toggled_icon(&icon.class_name(), active) {
            icon.set_class_name(next);
        }
    }
}
