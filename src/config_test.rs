use super::*;

#[test]
fn default_config_uses_documented_values() {
    let config = ClientConfig::default();
    assert_eq!(config.auth_endpoint, "/api/auth/login");
    assert_eq!(config.theme_storage_key, "portal_ui_theme");
}

#[test]
fn from_values_falls_back_when_missing() {
    assert_eq!(ClientConfig::from_values(None, None), ClientConfig::default());
}

#[test]
fn from_values_falls_back_when_blank() {
    assert_eq!(ClientConfig::from_values(Some("   "), Some("")), ClientConfig::default());
}

#[test]
fn from_values_trims_whitespace_and_trailing_slash() {
    let config = ClientConfig::from_values(Some(" https://auth.example.com/login/ "), Some(" theme_key "));
    assert_eq!(config.auth_endpoint, "https://auth.example.com/login");
    assert_eq!(config.theme_storage_key, "theme_key");
}

#[test]
fn from_values_keeps_root_endpoint() {
    let config = ClientConfig::from_values(Some("/"), None);
    assert_eq!(config.auth_endpoint, "/");
}

#[test]
fn from_values_strips_only_one_trailing_slash() {
    let config = ClientConfig::from_values(Some("/api/auth/login//"), None);
    assert_eq!(config.auth_endpoint, "/api/auth/login/");
}
