// src/tests/router_tests/create_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, post_multipart, state_with, Call, FakeApi};

const VALID: &[(&str, &str)] = &[
    ("title", "Sunny flat"),
    ("description", "Two bedrooms near the beach"),
    ("price", "2500000.50"),
    ("location", "Antalya"),
    ("district", "Konyaaltı"),
    ("type", "sale"),
    ("propertyType", "apartment"),
];

#[test]
fn create_form_requires_a_session() {
    let api = FakeApi::new();
    let resp = handle(get("/properties/create", None), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/login");
}

#[test]
fn create_form_renders_for_signed_in_users() {
    let api = FakeApi::new();
    let resp = handle(get("/properties/create", Some("tok")), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"enctype="multipart/form-data""#));
    assert!(body.contains(r#"type="file""#));
}

#[test]
fn upload_happens_before_create_and_feeds_its_url() {
    let api = FakeApi::new();
    let resp = handle(
        post_multipart("/properties/create", VALID, Some(("photo", "front.jpg", &b"jpegbytes"[..])), Some("tok")),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/properties/listing");
    assert_eq!(
        api.calls(),
        vec![
            Call::Upload {
                token: "tok".into(),
                file_name: "front.jpg".into()
            },
            Call::Create {
                token: "tok".into(),
                photos: vec!["https://cdn.test/front.jpg".into()]
            },
        ]
    );
}

#[test]
fn without_photo_create_sends_empty_photo_list() {
    let api = FakeApi::new();
    let resp = handle(post_multipart("/properties/create", VALID, None, Some("tok")), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(
        api.calls(),
        vec![Call::Create {
            token: "tok".into(),
            photos: vec![]
        }]
    );
}

#[test]
fn failed_upload_stops_before_create() {
    let api = FakeApi::new().failing("upload", 413, Some("File too large"));
    let resp = handle(
        post_multipart("/properties/create", VALID, Some(("photo", "huge.jpg", &b"x"[..])), Some("tok")),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 502);
    let body = body_string(resp);
    assert!(body.contains("File too large"));
    assert!(body.contains(r#"value="Sunny flat""#));

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], Call::Upload { .. }));
}

#[test]
fn failed_create_shows_fallback_message() {
    let api = FakeApi::new().failing("create", 500, None);
    let resp = handle(post_multipart("/properties/create", VALID, None, Some("tok")), &state_with(&api)).unwrap();

    assert!(body_string(resp).contains("Something went wrong while adding the property."));
}

#[test]
fn missing_session_redirects_without_any_call() {
    let api = FakeApi::new();
    let resp = handle(
        post_multipart("/properties/create", VALID, Some(("photo", "front.jpg", &b"jpegbytes"[..])), None),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/auth/login");
    assert!(api.calls().is_empty());
}

#[test]
fn invalid_price_blocks_submission() {
    let api = FakeApi::new();
    let fields = [
        ("title", "Sunny flat"),
        ("description", "Two bedrooms"),
        ("price", "12.345"),
        ("location", "Antalya"),
    ];
    let resp = handle(post_multipart("/properties/create", &fields, None, Some("tok")), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Enter a valid price"));
    assert!(api.calls().is_empty());
}

#[test]
fn oversized_photo_is_refused_with_a_message() {
    let api = FakeApi::new();
    let photo = vec![0u8; 10 * 1024 * 1024 + 1];
    let resp = handle(
        post_multipart("/properties/create", VALID, Some(("photo", "huge.jpg", &photo[..])), Some("tok")),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 413);
    let body = body_string(resp);
    assert!(body.contains("The photo is too large (max 10 MB)."));
    assert!(body.contains(r#"enctype="multipart/form-data""#));
    assert!(api.calls().is_empty());
}
