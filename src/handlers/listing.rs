// src/handlers/listing.rs
use crate::api::FilterLookupData;
use crate::auth::SessionStore;
use crate::domain::{featured, load_listing, ListingState};
use crate::filters::criteria::DISTRICT;
use crate::filters::{query_pairs, FilterCriteria, FilterForm};
use crate::forms::{FieldErrors, FormData};
use crate::geos::builtin_lookup;
use crate::responses::{html_response, html_response_with_status, see_other, ResultResp};
use crate::state::AppState;
use crate::templates::components::neighborhood_field;
use crate::templates::pages::{home_page, listing_content, listing_page, listing_shell, HomeVm};
use chrono::Datelike;
use tracing::warn;

pub const FEATURED_COUNT: usize = 3;
pub const FEATURED_ERROR: &str = "Something went wrong while loading featured properties.";

pub fn home(state: &AppState, session: &SessionStore) -> ResultResp {
    html_response(home_page(&home_vm(state, session, FilterForm::default(), FieldErrors::default())))
}

/// Landing-page search. Same encoding as the listing filter; the city is
/// always part of the resulting query.
pub fn search(state: &AppState, session: &SessionStore, form: &FormData) -> ResultResp {
    let search = FilterForm::from_form(form);
    match search.submit_location() {
        Ok(location) => see_other(&location),
        Err(errors) => html_response_with_status(422, home_page(&home_vm(state, session, search, errors))),
    }
}

fn home_vm(state: &AppState, session: &SessionStore, search: FilterForm, search_errors: FieldErrors) -> HomeVm {
    let featured = featured(state.api.as_ref(), FEATURED_COUNT).map_err(|e| {
        warn!("featured listings unavailable: {e}");
        FEATURED_ERROR.to_string()
    });

    HomeVm {
        is_authenticated: session.is_authenticated(),
        search,
        search_errors,
        featured,
        year: chrono::Local::now().year(),
    }
}

pub fn shell(session: &SessionStore, query: &str) -> ResultResp {
    html_response(listing_shell(session.is_authenticated(), query))
}

/// Fetch and render the listing for `query`. Browsers that asked for the
/// partial directly (no htmx) get the full page around it.
pub fn content(state: &AppState, session: &SessionStore, query: &str, partial: bool) -> ResultResp {
    let listing = load_listing(state.api.as_ref(), &query_pairs(query));
    let form = FilterForm::from_query(query);
    let markup = listing_content(&listing, &form, &FieldErrors::default());

    if partial {
        html_response(markup)
    } else {
        html_response(listing_page(session.is_authenticated(), markup))
    }
}

pub fn filter(state: &AppState, session: &SessionStore, form: &FormData) -> ResultResp {
    let filters = FilterForm::from_form(form);
    match filters.submit_location() {
        Ok(location) => see_other(&location),
        Err(errors) => {
            // Re-show the form with its errors; results wait for a valid submit.
            let listing = ListingState::settle(Ok(Vec::new()), Ok(lookup_or_builtin(state)));
            let markup = listing_content(&listing, &filters, &errors);
            html_response_with_status(422, listing_page(session.is_authenticated(), markup))
        }
    }
}

/// Back to defaults: the listing route with no query at all.
pub fn reset() -> ResultResp {
    see_other(&FilterCriteria::default().listing_location())
}

/// Neighborhood select for a newly chosen district. The previous choice is
/// always dropped.
pub fn neighborhoods(state: &AppState, query: &str) -> ResultResp {
    let district = query_pairs(query)
        .into_iter()
        .find(|(k, _)| k == DISTRICT)
        .map(|(_, v)| v)
        .unwrap_or_default();

    let mut form = FilterForm::default();
    form.select_district(&district);

    html_response(neighborhood_field(&form, &lookup_or_builtin(state)))
}

/// Lookup data for forms that must stay usable when the backend can't say.
fn lookup_or_builtin(state: &AppState) -> FilterLookupData {
    state.api.lookup_data().unwrap_or_else(|e| {
        warn!("lookup data unavailable, using built-in districts: {e}");
        builtin_lookup()
    })
}
