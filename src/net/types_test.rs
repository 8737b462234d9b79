use super::*;

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials::new("a@b.com", "hunter2");
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "hunter2" })
    );
}

#[test]
fn credentials_default_to_empty_strings() {
    let creds = Credentials::default();
    assert_eq!(creds.email, "");
    assert_eq!(creds.password, "");
}

#[test]
fn authentication_deserializes_any_payload_unchanged() {
    let auth: Authentication = serde_json::from_str(r#"{"sessionId":"abc","expires":3600}"#).unwrap();
    assert_eq!(auth.as_value(), &serde_json::json!({ "sessionId": "abc", "expires": 3600 }));
}

#[test]
fn authentication_serializes_transparently() {
    let auth = Authentication::from(serde_json::json!({ "sessionId": "abc" }));
    assert_eq!(serde_json::to_string(&auth).unwrap(), r#"{"sessionId":"abc"}"#);
    assert_eq!(auth.into_value(), serde_json::json!({ "sessionId": "abc" }));
}

#[test]
fn credentials_debug_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("a@b.com", "hunter2"));
    assert!(rendered.contains("a@b.com"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("hunter2"));
}
