// src/tests/router_tests/auth_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, post_form, set_cookies, state_with, Call, FakeApi};

#[test]
fn login_page_loads_successfully() {
    let api = FakeApi::new();
    let resp = handle(get("/auth/login", None), &state_with(&api)).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"action="/auth/login""#));
    assert!(body.contains(r#"name="password""#));
}

#[test]
fn login_stores_token_and_redirects_to_listing() {
    let api = FakeApi::new();
    let resp = handle(
        post_form("/auth/login", "username=ayse&password=secret1", None),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/properties/listing");

    let cookies = set_cookies(&resp);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("access_token=tok-ayse;"));
    assert!(cookies[0].contains("HttpOnly"));
    assert_eq!(api.calls(), vec![Call::Login("ayse".into())]);
}

#[test]
fn failed_login_shows_server_message() {
    let api = FakeApi::new().failing("login", 401, Some("Invalid credentials"));
    let resp = handle(
        post_form("/auth/login", "username=ayse&password=wrong", None),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 401);
    assert!(set_cookies(&resp).is_empty());
    let body = body_string(resp);
    assert!(body.contains("Invalid credentials"));
    assert!(body.contains(r#"value="ayse""#));
}

#[test]
fn failed_login_without_message_uses_fallback() {
    let api = FakeApi::new().failing("login", 500, None);
    let resp = handle(
        post_form("/auth/login", "username=ayse&password=wrong", None),
        &state_with(&api),
    )
    .unwrap();

    assert!(body_string(resp).contains("Login failed."));
}

#[test]
fn empty_login_is_rejected_before_any_call() {
    let api = FakeApi::new();
    let resp = handle(post_form("/auth/login", "username=&password=", None), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Username is required"));
    assert!(body.contains("Password is required"));
    assert!(api.calls().is_empty());
}

#[test]
fn register_validation_errors_are_shown_per_field() {
    let api = FakeApi::new();
    let resp = handle(
        post_form("/auth/register", "username=ab&email=nope&password=123", None),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Username must be at least 3 characters"));
    assert!(body.contains("Enter a valid email address"));
    assert!(body.contains("Password must be at least 6 characters"));
    assert!(api.calls().is_empty());
}

#[test]
fn successful_registration_shows_success_message() {
    let api = FakeApi::new();
    let resp = handle(
        post_form("/auth/register", "username=ayse&email=ayse%40example.com&password=secret1", None),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Registration successful"));
    assert_eq!(api.calls(), vec![Call::Register("ayse".into())]);
}

#[test]
fn failed_registration_shows_server_message() {
    let api = FakeApi::new().failing("register", 409, Some("Username already taken"));
    let resp = handle(
        post_form("/auth/register", "username=ayse&email=ayse%40example.com&password=secret1", None),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 409);
    assert!(body_string(resp).contains("Username already taken"));
}

#[test]
fn logout_clears_cookie_and_redirects_to_login() {
    let api = FakeApi::new();
    let resp = handle(post_form("/auth/logout", "", Some("tok-ayse")), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/auth/login");
    let cookies = set_cookies(&resp);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("access_token=;"));
    assert!(cookies[0].contains("Max-Age=0"));
}

#[test]
fn navbar_follows_session() {
    let api = FakeApi::new();

    let anon = body_string(handle(get("/properties/listing", None), &state_with(&api)).unwrap());
    assert!(anon.contains(r#"href="/auth/login""#));
    assert!(!anon.contains(r#"action="/auth/logout""#));

    let signed_in = body_string(handle(get("/properties/listing", Some("tok")), &state_with(&api)).unwrap());
    assert!(signed_in.contains(r#"href="/properties/create""#));
    assert!(signed_in.contains(r#"action="/auth/logout""#));
}
