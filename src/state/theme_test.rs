use super::*;

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_names_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_name(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_from_name_rejects_unknown_values() {
    assert_eq!(Theme::from_name("system"), None);
    assert_eq!(Theme::from_name(""), None);
}

#[test]
fn theme_from_name_ignores_surrounding_whitespace() {
    assert_eq!(Theme::from_name(" dark\n"), Some(Theme::Dark));
}

#[test]
fn theme_toggled_flips_between_variants() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_display_matches_name() {
    assert_eq!(Theme::Dark.to_string(), "dark");
}
