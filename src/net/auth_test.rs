use super::*;

#[test]
fn http_authenticator_keeps_endpoint() {
    let auth = HttpAuthenticator::new("/api/auth/login");
    assert_eq!(auth.endpoint(), "/api/auth/login");
}

#[test]
fn auth_error_messages_include_detail() {
    assert_eq!(AuthError::Request("offline".to_owned()).to_string(), "authentication request failed: offline");
    assert_eq!(AuthError::Rejected { status: 401 }.to_string(), "authentication rejected: status 401");
    assert_eq!(
        AuthError::Decode("expected value".to_owned()).to_string(),
        "authentication response parse failed: expected value"
    );
    assert_eq!(AuthError::Unavailable.to_string(), "authentication not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_authenticator_is_unavailable_outside_browser() {
    let auth = HttpAuthenticator::new("/api/auth/login");
    let result = futures::executor::block_on(auth.authenticate(&Credentials::default()));
    assert_eq!(result, Err(AuthError::Unavailable));
}

#[test]
fn shared_authenticator_accepts_http_adapter() {
    let shared: SharedAuthenticator = Arc::new(HttpAuthenticator::new("/login"));
    let cloned = Arc::clone(&shared);
    assert_eq!(Arc::strong_count(&shared), 2);
    drop(cloned);
}
