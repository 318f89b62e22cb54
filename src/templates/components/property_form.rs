// templates/components/property_form.rs
use crate::forms::{FieldErrors, PropertyForm};
use crate::geos::{builtin_lookup, LISTING_TYPES, PROPERTY_TYPES};
use crate::templates::components::field::{select_field, text_field, textarea_field};
use maud::{html, Markup};

/// Fields shared by the create and edit forms. The optional selects post an
/// empty value for "not specified".
pub fn property_fields(form: &PropertyForm, errors: &FieldErrors) -> Markup {
    let districts = builtin_lookup().districts;
    let listing_types: Vec<String> = LISTING_TYPES.iter().map(|s| s.to_string()).collect();
    let property_types: Vec<String> = PROPERTY_TYPES.iter().map(|s| s.to_string()).collect();

    html! {
        (text_field("title", "Title", "text", &form.title, errors.get("title")))
        (textarea_field("description", "Description", &form.description, errors.get("description")))
        (text_field("price", "Price", "text", &form.price, errors.get("price")))
        (text_field("location", "Location", "text", &form.location, errors.get("location")))
        (select_field("district", "District", "Not specified", "", &districts, &form.district, errors.get("district")))
        (text_field("neighborhood", "Neighborhood", "text", &form.neighborhood, errors.get("neighborhood")))
        (select_field("type", "Listing type", "Not specified", "", &listing_types, &form.listing_type, errors.get("listing_type")))
        (select_field(
            "propertyType",
            "Property type",
            "Not specified",
            "",
            &property_types,
            &form.property_type,
            errors.get("property_type"),
        ))
    }
}
