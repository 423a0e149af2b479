//! Navigation enhancements: active-link marking and the responsive menu
//! toggle.

#[cfg(feature = "browser")]
use crate::dom;
#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;
#[cfg(feature = "browser")]
use web_sys::{Document, Element, HtmlElement};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Below this viewport width the menu collapses behind the toggle.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// A link is active only on an exact path match, so at most one link ever
/// carries the marker.
pub fn is_active_link(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}

/// Whether the synthesized menu toggle should be visible at `width`.
pub fn toggle_visible(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}

/// Menu anchors for the responsive toggle, present only on pages that
/// render the full navigation bar.
#[cfg(feature = "browser")]
pub struct NavMenu {
    container: Element,
    menu: Element,
}

#[cfg(feature = "browser")]
impl NavMenu {
    pub fn probe(doc: &Document) -> Option<Self> {
        let container = doc.query_selector(".nav-container").ok().flatten()?;
        let menu = doc.query_selector(".nav-menu").ok().flatten()?;
        Some(Self { container, menu })
    }

    /// Insert the toggle button before the menu and keep its visibility in
    /// step with the viewport width.
    fn attach(self, doc: &Document) {
        let Some(toggle) = create_toggle(doc) else {
            return;
        };
        let menu_node: &web_sys::Node = self.menu.as_ref();
        let _ = self.container.insert_before(&toggle, Some(menu_node));

        let menu_for_click = self.menu.clone();
        dom::listen(&toggle, "click", move |_| {
            let _ = menu_for_click.class_list().toggle("mobile-open");
        });

        apply_layout(&toggle, &self.menu, dom::viewport_width());

        let Some(win) = dom::window() else {
            return;
        };
        let menu = self.menu;
        dom::listen(&win, "resize", move |_| {
            apply_layout(&toggle, &menu, dom::viewport_width());
        });
    }
}

#[cfg(feature = "browser")]
pub fn attach(doc: &Document) {
    mark_active_link(doc);
    if let Some(nav) = NavMenu::probe(doc) {
        nav.attach(doc);
    }
}

#[cfg(feature = "browser")]
fn mark_active_link(doc: &Document) {
    let Some(path) = dom::window().and_then(|w| w.location().pathname().ok()) else {
        return;
    };
    for link in dom::query_all(doc, ".nav-link") {
        if is_active_link(link.get_attribute("href").as_deref(), &path) {
            let _ = link.class_list().add_1("active");
        }
    }
}

#[cfg(feature = "browser")]
fn create_toggle(doc: &Document) -> Option<HtmlElement> {
    let toggle = doc
        .create_element("button")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    toggle.set_class_name("nav-toggle");
    toggle.set_inner_html(r#"<i class="fas fa-bars"></i>"#);
    let _ = toggle.style().set_property("display", "none");
    Some(toggle)
}

/// Show the toggle below the breakpoint; above it, hide the toggle and
/// collapse any open mobile menu.
#[cfg(feature = "browser")]
fn apply_layout(toggle: &HtmlElement, menu: &Element, width: f64) {
    if toggle_visible(width) {
        let _ = toggle.style().set_property("display", "block");
    } else {
        let _ = toggle.style().set_property("display", "none");
        let _ = menu.class_list().remove_1("mobile-open");
    }
}
