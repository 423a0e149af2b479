//! Dashboard page: a staggered pulse over the stat cards shortly after
//! load, as tactile feedback that the numbers are fresh.

#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;
#[cfg(feature = "browser")]
use web_sys::{Document, Element, HtmlElement};

/// Delay between load and the first pulse.
pub const PULSE_START_MS: u64 = 500;

/// Stagger between consecutive cards.
pub const PULSE_STAGGER_MS: u64 = 100;

/// How long each card holds the pulse scale.
pub const PULSE_HOLD_MS: u64 = 200;

/// Capability handle for the dashboard page.
#[cfg(feature = "browser")]
pub struct Dashboard {
    root: Element,
}

#[cfg(feature = "browser")]
impl Dashboard {
    pub fn probe(doc: &Document) -> Option<Self> {
        let root = doc.query_selector(".dashboard").ok().flatten()?;
        Some(Self { root })
    }

    pub fn attach(self) {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(PULSE_START_MS)).await;
            for (index, card) in dom::query_all_within(&self.root, ".stat-card")
                .into_iter()
                .enumerate()
            {
                let delay = PULSE_STAGGER_MS * index as u64;
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
                    pulse(&card).await;
                });
            }
        });
    }
}

#[cfg(feature = "browser")]
async fn pulse(card: &Element) {
    let Some(el) = card.dyn_ref::<HtmlElement>() else {
        return;
    };
    let _ = el.style().set_property("transform", "scale(1.02)");
    gloo_timers::future::sleep(std::time::Duration::from_millis(PULSE_HOLD_MS)).await;
    let _ = el.style().remove_property("transform");
}
