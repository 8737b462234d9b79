use super::*;

#[test]
fn text_logo_class_without_extra_has_base_tokens_only() {
    assert_eq!(text_logo_class(""), "text-logo font-pacifico");
}

#[test]
fn text_logo_class_ignores_blank_extra() {
    assert_eq!(text_logo_class("   "), "text-logo font-pacifico");
}

#[test]
fn text_logo_class_appends_extra_tokens() {
    assert_eq!(text_logo_class("side-navigation__logo"), "text-logo font-pacifico side-navigation__logo");
}
