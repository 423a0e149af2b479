use super::*;

// =============================================================
// Stream label rotation
// =============================================================

#[test]
fn phases_cycle_in_order_and_wrap() {
    assert_eq!(next_phase("Broadcasting..."), "Live Stream...");
    assert_eq!(next_phase("Live Stream..."), "Streaming HD...");
    assert_eq!(next_phase("Streaming HD..."), "Broadcasting...");
}

#[test]
fn unknown_label_restarts_the_cycle() {
    assert_eq!(next_phase(""), "Broadcasting...");
    assert_eq!(next_phase("Connecting..."), "Broadcasting...");
}

// =============================================================
// Control icon toggling
// =============================================================

#[test]
fn microphone_icon_follows_the_active_state() {
    assert_eq!(
        toggled_icon("fas fa-microphone", true),
        Some("fas fa-microphone")
    );
    assert_eq!(
        toggled_icon("fas fa-microphone", false),
        Some("fas fa-microphone-slash")
    );
    // The slashed icon still identifies a microphone control.
    assert_eq!(
        toggled_icon("fas fa-microphone-slash", true),
        Some("fas fa-microphone")
    );
}

#[test]
fn video_icon_follows_the_active_state() {
    assert_eq!(toggled_icon("fas fa-video", false), Some("fas fa-video-slash"));
    assert_eq!(toggled_icon("fas fa-video-slash", true), Some("fas fa-video"));
}

#[test]
fn token_matching_does_not_fall_for_prefixes() {
    // fa-video-slash must not be mistaken for fa-video by substring match;
    // an unrelated icon maps to no swap at all.
    assert_eq!(toggled_icon("fas fa-phone-slash", true), None);
    assert_eq!(toggled_icon("fas fa-expand", false), None);
    assert_eq!(toggled_icon("", true), None);
}
