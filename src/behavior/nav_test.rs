use super::*;

#[test]
fn active_link_requires_exact_match() {
    assert!(is_active_link(Some("/dashboard"), "/dashboard"));
    assert!(!is_active_link(Some("/materials"), "/dashboard"));
}

#[test]
fn active_link_rejects_prefix_and_suffix_matches() {
    assert!(!is_active_link(Some("/dash"), "/dashboard"));
    assert!(!is_active_link(Some("/dashboard/settings"), "/dashboard"));
    assert!(!is_active_link(Some("/dashboard"), "/dashboard/"));
}

#[test]
fn link_without_href_is_never_active() {
    assert!(!is_active_link(None, "/dashboard"));
}

#[test]
fn toggle_shows_at_and_below_the_breakpoint() {
    assert!(toggle_visible(320.0));
    assert!(toggle_visible(MOBILE_BREAKPOINT));
    assert!(!toggle_visible(MOBILE_BREAKPOINT + 1.0));
    assert!(!toggle_visible(1920.0));
}
