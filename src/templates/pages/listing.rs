// templates/pages/listing.rs
use crate::domain::ListingState;
use crate::filters::FilterForm;
use crate::forms::FieldErrors;
use crate::templates::{
    components::{filter_form, property_grid},
    desktop_layout,
};
use maud::{html, Markup};

pub const CONTENT_PATH: &str = "/properties/listing-content";

/// First paint of the listing route. The content partial is requested with
/// the same raw query as soon as the page loads.
pub fn listing_shell(is_authenticated: bool, raw_query: &str) -> Markup {
    let content_url = if raw_query.is_empty() {
        CONTENT_PATH.to_string()
    } else {
        format!("{CONTENT_PATH}?{raw_query}")
    };

    listing_page(
        is_authenticated,
        html! {
            div id="listing-content" hx-get=(content_url) hx-trigger="load" hx-swap="outerHTML" {
                (state_banner(&ListingState::Loading))
            }
        },
    )
}

pub fn listing_page(is_authenticated: bool, content: Markup) -> Markup {
    desktop_layout(
        "Properties",
        is_authenticated,
        html! {
            main class="container" {
                h1 { "Properties" }
                (content)
            }
        },
    )
}

/// Filter panel plus results for a settled state. Validation errors replace
/// the results with a hint until the form is fixed.
pub fn listing_content(state: &ListingState, form: &FilterForm, errors: &FieldErrors) -> Markup {
    html! {
        div id="listing-content" class="listing" {
            @match state {
                ListingState::Ready { properties, lookup } => {
                    aside { (filter_form(form, lookup, errors)) }
                    section class="results" {
                        @if !errors.is_empty() {
                            p class="muted" { "Fix the highlighted fields and filter again." }
                        } @else if properties.is_empty() {
                            p class="muted center" { "No properties found matching your criteria." }
                        } @else {
                            (property_grid(properties))
                        }
                    }
                }
                _ => (state_banner(state)),
            }
        }
    }
}

fn state_banner(state: &ListingState) -> Markup {
    html! {
        @if state.is_loading() {
            p class="loading center" aria-busy="true" { "Loading properties..." }
        } @else if let ListingState::Failed(msg) = state {
            p class="form-error center" role="alert" { (msg) }
        }
    }
}
