use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn from_stored_reads_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn from_stored_defaults_missing_and_corrupt_values_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("midnight")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn stored_value_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn flipping_twice_restores_the_original() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.flipped().flipped(), theme);
    }
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
}

#[test]
fn toggle_icon_offers_the_other_theme() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
}
