use super::*;

const NOW_MS: f64 = 1_700_000_000_000.0;

fn field(kind: FieldKind, value: &str) -> FieldSnapshot {
    FieldSnapshot {
        kind,
        value: value.to_owned(),
        ..FieldSnapshot::default()
    }
}

// =============================================================
// Required
// =============================================================

#[test]
fn required_empty_field_fails_with_required_message() {
    let snap = FieldSnapshot {
        required: true,
        ..FieldSnapshot::default()
    };
    assert_eq!(validate(&snap, NOW_MS), Some("This field is required"));
}

#[test]
fn optional_empty_field_passes_regardless_of_kind() {
    for kind in [
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::DateTimeLocal,
        FieldKind::File,
        FieldKind::Other,
    ] {
        assert_eq!(validate(&field(kind, ""), NOW_MS), None);
    }
}

#[test]
fn required_wins_over_the_kind_rule_when_empty() {
    let snap = FieldSnapshot {
        kind: FieldKind::Email,
        required: true,
        ..FieldSnapshot::default()
    };
    assert_eq!(validate(&snap, NOW_MS), Some("This field is required"));
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_without_tld_fails() {
    assert_eq!(
        validate(&field(FieldKind::Email, "a@b"), NOW_MS),
        Some("Please enter a valid email address")
    );
}

#[test]
fn conventional_email_passes() {
    assert_eq!(validate(&field(FieldKind::Email, "a@b.com"), NOW_MS), None);
}

#[test]
fn email_edge_shapes() {
    let invalid = ["@b.com", "a@", "a@b.", "a@.com", "a b@c.com", "a@b@c.com", "plain"];
    for value in invalid {
        assert!(
            validate(&field(FieldKind::Email, value), NOW_MS).is_some(),
            "{value} should be invalid"
        );
    }
    let valid = ["a.b@c.de", "a@b.c.d", "a@b..c"];
    for value in valid {
        assert!(
            validate(&field(FieldKind::Email, value), NOW_MS).is_none(),
            "{value} should be valid"
        );
    }
}

// =============================================================
// Password
// =============================================================

#[test]
fn five_character_password_fails_six_passes() {
    assert_eq!(
        validate(&field(FieldKind::Password, "abcde"), NOW_MS),
        Some("Password must be at least 6 characters long")
    );
    assert_eq!(validate(&field(FieldKind::Password, "abcdef"), NOW_MS), None);
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // Six characters, more than six bytes.
    assert_eq!(validate(&field(FieldKind::Password, "pässwö"), NOW_MS), None);
}

// =============================================================
// Date-time
// =============================================================

fn datetime(picked_ms: Option<f64>) -> FieldSnapshot {
    FieldSnapshot {
        kind: FieldKind::DateTimeLocal,
        value: "2026-01-01T10:00".to_owned(),
        picked_ms,
        ..FieldSnapshot::default()
    }
}

#[test]
fn datetime_equal_to_now_fails_strict_future_required() {
    assert_eq!(
        validate(&datetime(Some(NOW_MS)), NOW_MS),
        Some("Please select a future date and time")
    );
}

#[test]
fn datetime_in_the_past_fails_and_future_passes() {
    assert!(validate(&datetime(Some(NOW_MS - 1.0)), NOW_MS).is_some());
    assert_eq!(validate(&datetime(Some(NOW_MS + 1.0)), NOW_MS), None);
}

#[test]
fn unparseable_datetime_passes() {
    assert_eq!(validate(&datetime(Some(f64::NAN)), NOW_MS), None);
}

// =============================================================
// File
// =============================================================

fn file_of(size: u64) -> FieldSnapshot {
    FieldSnapshot {
        kind: FieldKind::File,
        value: "C:\\fakepath\\upload.bin".to_owned(),
        file_size: Some(size),
        ..FieldSnapshot::default()
    }
}

#[test]
fn file_at_exactly_the_limit_passes() {
    assert_eq!(validate(&file_of(MAX_UPLOAD_BYTES), NOW_MS), None);
}

#[test]
fn file_one_byte_over_the_limit_fails() {
    assert_eq!(
        validate(&file_of(MAX_UPLOAD_BYTES + 1), NOW_MS),
        Some("File size must be less than 16MB")
    );
}

#[test]
fn selected_file_is_checked_even_without_a_value() {
    // Some browsers leave `value` empty when files are set from a drop.
    let snap = FieldSnapshot {
        kind: FieldKind::File,
        file_size: Some(MAX_UPLOAD_BYTES + 1),
        ..FieldSnapshot::default()
    };
    assert!(validate(&snap, NOW_MS).is_some());
}

// =============================================================
// Kind mapping
// =============================================================

#[test]
fn field_kind_maps_known_type_attributes() {
    assert_eq!(FieldKind::from_type_attr("email"), FieldKind::Email);
    assert_eq!(FieldKind::from_type_attr("password"), FieldKind::Password);
    assert_eq!(
        FieldKind::from_type_attr("datetime-local"),
        FieldKind::DateTimeLocal
    );
    assert_eq!(FieldKind::from_type_attr("file"), FieldKind::File);
    assert_eq!(FieldKind::from_type_attr("text"), FieldKind::Other);
    assert_eq!(FieldKind::from_type_attr("checkbox"), FieldKind::Other);
}
