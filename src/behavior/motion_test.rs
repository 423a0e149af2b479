use super::*;

#[test]
fn fragment_hrefs_are_detected() {
    assert!(is_fragment_href("#features"));
    assert!(is_fragment_href("#"));
    assert!(!is_fragment_href("/dashboard"));
    assert!(!is_fragment_href("https://example.com/#features"));
}

#[test]
fn reveal_threshold_is_a_fraction() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
}

#[test]
fn reveal_targets_cover_the_content_cards() {
    for class in [".class-card", ".stat-card", ".material-card", ".section"] {
        assert!(REVEAL_TARGETS.contains(class), "missing {class}");
    }
}
