// templates/components/filter_form.rs
use crate::api::FilterLookupData;
use crate::filters::criteria::{
    CITY, DISTRICT, LISTING_TYPE, MAX_PRICE, MIN_PRICE, NEIGHBORHOOD, PROPERTY_TYPE,
};
use crate::filters::{FilterForm, ALL};
use crate::forms::FieldErrors;
use crate::templates::components::field::{field_error, select_field};
use maud::{html, Markup};

/// Partial swapped in whenever the district select changes.
pub const NEIGHBORHOODS_PATH: &str = "/properties/neighborhoods";

/// Sidebar filter on the listing page. Every option list comes from the
/// backend's lookup data.
pub fn filter_form(form: &FilterForm, lookup: &FilterLookupData, errors: &FieldErrors) -> Markup {
    html! {
        div class="filter-panel" {
            h2 { "Filter" }
            form method="post" action="/properties/listing/filter" class="stack" {
                (criteria_fields(form, lookup, errors))

                div class="actions" {
                    button type="submit" class="primary" { "Filter" }
                    button type="submit" class="secondary" formaction="/properties/listing/reset" { "Reset" }
                }
            }
        }
    }
}

/// Hero search on the landing page.
pub fn search_form(form: &FilterForm, lookup: &FilterLookupData, errors: &FieldErrors) -> Markup {
    html! {
        form method="post" action="/search" class="search-form" {
            (criteria_fields(form, lookup, errors))
            button type="submit" class="primary" { "Search" }
        }
    }
}

fn criteria_fields(form: &FilterForm, lookup: &FilterLookupData, errors: &FieldErrors) -> Markup {
    html! {
        div class="field" {
            label for=(CITY) { "City" }
            input type="text" id=(CITY) name=(CITY) value=(form.city) readonly;
        }

        div class="field" {
            label for=(DISTRICT) { "District" }
            select
                id=(DISTRICT)
                name=(DISTRICT)
                hx-get=(NEIGHBORHOODS_PATH)
                hx-trigger="change"
                hx-target="#neighborhood-field"
                hx-swap="outerHTML"
            {
                option value=(ALL) selected[form.district == ALL] { "All" }
                @for d in &lookup.districts {
                    option value=(d) selected[&form.district == d] { (d) }
                }
                @if unlisted(&form.district, &lookup.districts) {
                    option value=(form.district) selected { (form.district) }
                }
            }
        }

        (neighborhood_field(form, lookup))

        (select_field(
            LISTING_TYPE,
            "Listing type",
            "All",
            ALL,
            &lookup.listing_types,
            &form.listing_type,
            errors.get("listing_type"),
        ))

        (select_field(
            PROPERTY_TYPE,
            "Property type",
            "All",
            ALL,
            &lookup.property_types,
            &form.property_type,
            errors.get("property_type"),
        ))

        div class="field-row" {
            div class="field" {
                label for=(MIN_PRICE) { "Min. price" }
                input type="number" id=(MIN_PRICE) name=(MIN_PRICE) min="0" placeholder="0" value=(form.min_price);
                (field_error(errors.get("min_price")))
            }
            div class="field" {
                label for=(MAX_PRICE) { "Max. price" }
                input type="number" id=(MAX_PRICE) name=(MAX_PRICE) min="0" placeholder="No limit" value=(form.max_price);
                (field_error(errors.get("max_price")))
            }
        }
    }
}

/// The neighborhood select for the form's current district. Disabled while
/// no district is chosen.
pub fn neighborhood_field(form: &FilterForm, lookup: &FilterLookupData) -> Markup {
    let neighborhoods = form.available_neighborhoods(lookup);

    html! {
        div class="field" id="neighborhood-field" {
            label for=(NEIGHBORHOOD) { "Neighborhood" }
            select id=(NEIGHBORHOOD) name=(NEIGHBORHOOD) disabled[form.district == ALL] {
                option value=(ALL) selected[form.neighborhood == ALL] { "All" }
                @for n in neighborhoods {
                    option value=(n) selected[&form.neighborhood == n] { (n) }
                }
                @if form.district != ALL && unlisted(&form.neighborhood, neighborhoods) {
                    option value=(form.neighborhood) selected { (form.neighborhood) }
                }
            }
        }
    }
}

/// A value from the URL that the option list doesn't know. It still gets an
/// option, otherwise the next submit would quietly send `all` instead.
fn unlisted(value: &str, options: &[String]) -> bool {
    value != ALL && !value.is_empty() && !options.iter().any(|o| o == value)
}
