// src/tests/router_tests/listing_tests.rs
use crate::domain::listing::LOAD_ERROR;
use crate::handlers::listing::FEATURED_ERROR;
use crate::router::handle;
use crate::tests::utils::{body_string, get, location, post_form, state_with, Call, FakeApi};
use astra::Request;
use http::HeaderValue;
use std::time::Duration;

fn htmx_get(uri: &str) -> Request {
    let mut req = get(uri, None);
    req.headers_mut()
        .insert("hx-request", HeaderValue::from_static("true"));
    req
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn shell_renders_loading_without_backend_calls() {
    let api = FakeApi::new();
    let resp = handle(get("/properties/listing?district=Kepez", None), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Loading properties..."));
    assert!(body.contains(r#"hx-get="/properties/listing-content?district=Kepez""#));
    assert!(api.calls().is_empty());
}

#[test]
fn content_forwards_query_and_mirrors_it_in_the_form() {
    let api = FakeApi::new();
    let resp = handle(
        htmx_get("/properties/listing-content?district=Konyaalt%C4%B1&minPrice=100000"),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.contains(&Call::List(pairs(&[("district", "Konyaaltı"), ("minPrice", "100000")]))));
    assert!(calls.contains(&Call::Lookup));

    let body = body_string(resp);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"<option value="Konyaaltı" selected>"#));
    assert!(body.contains(r#"value="100000""#));
    assert!(body.contains("Gürsu"));
    assert!(body.contains("Sea view flat"));
}

#[test]
fn content_without_htmx_gets_full_page() {
    let api = FakeApi::new();
    let resp = handle(get("/properties/listing-content", None), &state_with(&api)).unwrap();

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Garden villa"));
}

#[test]
fn unknown_parameters_are_forwarded_verbatim() {
    let api = FakeApi::new();
    handle(
        htmx_get("/properties/listing-content?sort=price&type=auction"),
        &state_with(&api),
    )
    .unwrap();

    assert!(api
        .calls()
        .contains(&Call::List(pairs(&[("sort", "price"), ("type", "auction")]))));
}

#[test]
fn either_failure_discards_both_results() {
    for op in ["list", "lookup"] {
        let api = FakeApi::new().failing(op, 500, None);
        let resp = handle(htmx_get("/properties/listing-content"), &state_with(&api)).unwrap();

        let body = body_string(resp);
        assert!(body.contains(LOAD_ERROR), "{op} failure should show the load error");
        assert!(!body.contains("Sea view flat"));
        assert!(!body.contains("<form"));
    }
}

#[test]
fn both_fetches_are_in_flight_together() {
    let api = FakeApi::new().with_delay(Duration::from_millis(150));
    handle(htmx_get("/properties/listing-content"), &state_with(&api)).unwrap();

    assert_eq!(api.max_in_flight(), 2);
}

#[test]
fn empty_result_shows_no_results_message() {
    let mut api = FakeApi::new();
    api.properties.clear();
    let resp = handle(htmx_get("/properties/listing-content?district=Kepez"), &state_with(&api)).unwrap();

    assert!(body_string(resp).contains("No properties found matching your criteria."));
}

#[test]
fn filter_submit_redirects_with_encoded_criteria() {
    let api = FakeApi::new();
    let resp = handle(
        post_form(
            "/properties/listing/filter",
            "city=Antalya&district=Konyaalt%C4%B1&neighborhood=all&type=all&propertyType=all&minPrice=100000&maxPrice=",
            None,
        ),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(
        location(&resp),
        "/properties/listing?city=Antalya&district=Konyaalt%C4%B1&minPrice=100000"
    );
    assert!(api.calls().is_empty());
}

#[test]
fn invalid_filter_is_shown_with_errors_and_not_submitted() {
    let api = FakeApi::new();
    let resp = handle(
        post_form("/properties/listing/filter", "district=Kepez&minPrice=-5", None),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Enter a non-negative number"));
    assert!(body.contains(r#"value="-5""#));
    assert_eq!(api.calls(), vec![Call::Lookup]);
}

#[test]
fn invalid_filter_keeps_its_form_when_lookup_fails() {
    let api = FakeApi::new().failing("lookup", 503, None);
    let resp = handle(
        post_form("/properties/listing/filter", "district=Kepez&minPrice=-5", None),
        &state_with(&api),
    )
    .unwrap();

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("<form"));
    assert!(body.contains("Enter a non-negative number"));
    assert!(body.contains(r#"<option value="Kepez" selected>"#));
    assert!(!body.contains(LOAD_ERROR));
}

#[test]
fn content_is_a_valid_property_id() {
    let api = FakeApi::new();
    let resp = handle(get("/properties/listing/content", None), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 404);
    assert_eq!(api.calls(), vec![Call::Get("content".into())]);
}

#[test]
fn reset_goes_back_to_bare_listing() {
    let api = FakeApi::new();
    let resp = handle(post_form("/properties/listing/reset", "district=Kepez", None), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/properties/listing");
}

#[test]
fn district_change_swaps_neighborhood_options() {
    let api = FakeApi::new();
    let resp = handle(
        htmx_get("/properties/neighborhoods?district=Konyaalt%C4%B1&neighborhood=Liman"),
        &state_with(&api),
    )
    .unwrap();

    let body = body_string(resp);
    assert!(body.contains(r#"id="neighborhood-field""#));
    assert!(body.contains("Gürsu"));
    assert!(body.contains(r#"<option value="all" selected>"#));
    assert!(!body.contains(r#"<option value="Liman" selected>"#));
    assert!(!body.contains("disabled"));
}

#[test]
fn district_all_disables_neighborhoods() {
    let api = FakeApi::new();
    let body = body_string(handle(htmx_get("/properties/neighborhoods?district=all"), &state_with(&api)).unwrap());

    assert!(body.contains("disabled"));
    assert!(!body.contains("Gürsu"));
}

#[test]
fn neighborhoods_fall_back_to_builtin_table() {
    let api = FakeApi::new().failing("lookup", 503, None);
    let body = body_string(
        handle(htmx_get("/properties/neighborhoods?district=Konyaalt%C4%B1"), &state_with(&api)).unwrap(),
    );

    assert!(body.contains("Liman"));
}

#[test]
fn home_shows_three_featured_properties() {
    let api = FakeApi::new();
    let resp = handle(get("/", None), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Sea view flat"));
    assert!(body.contains("Garden villa"));
    assert!(body.contains("Untitled"));
    assert!(!body.contains("Olive grove plot"));
    assert!(body.contains(r#"action="/search""#));
    assert_eq!(api.calls(), vec![Call::List(vec![])]);
}

#[test]
fn home_survives_featured_failure() {
    let api = FakeApi::new().failing("list", 500, None);
    let body = body_string(handle(get("/", None), &state_with(&api)).unwrap());

    assert!(body.contains(FEATURED_ERROR));
    assert!(body.contains(r#"action="/search""#));
}

#[test]
fn landing_search_always_carries_the_city() {
    let api = FakeApi::new();
    let resp = handle(post_form("/search", "district=all&type=sale", None), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/properties/listing?city=Antalya&type=sale");
}

#[test]
fn unknown_route_is_not_found() {
    let api = FakeApi::new();
    assert!(handle(get("/nope", None), &state_with(&api)).is_err());
}

#[test]
fn stylesheet_is_served() {
    let api = FakeApi::new();
    let resp = handle(get("/static/main.css", None), &state_with(&api)).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".property-card"));
}
