// filters/form.rs
use crate::api::FilterLookupData;
use crate::filters::criteria::{
    parse_price, FilterCriteria, ListingType, PropertyType, ALL, DEFAULT_CITY, DISTRICT,
    LISTING_TYPE, MAX_PRICE, MIN_PRICE, NEIGHBORHOOD, PROPERTY_TYPE,
};
use crate::forms::validation::invalid;
use crate::forms::{check, FieldErrors, FormData};
use validator::{Validate, ValidationError};

/// What the filter (and landing-page search) form displays. Values are kept
/// as the raw strings the inputs hold so a rejected submission re-renders
/// exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct FilterForm {
    pub city: String,
    pub district: String,
    pub neighborhood: String,
    #[validate(custom(function = "validate_listing_type"))]
    pub listing_type: String,
    #[validate(custom(function = "validate_property_type"))]
    pub property_type: String,
    #[validate(custom(function = "validate_price_bound"))]
    pub min_price: String,
    #[validate(custom(function = "validate_price_bound"))]
    pub max_price: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            district: ALL.to_string(),
            neighborhood: ALL.to_string(),
            listing_type: ALL.to_string(),
            property_type: ALL.to_string(),
            min_price: String::new(),
            max_price: String::new(),
        }
    }
}

impl FilterForm {
    /// Re-initialise from the listing URL. Anything the query does not carry
    /// falls back to its default, so the form never shows stale criteria.
    pub fn from_query(query: &str) -> Self {
        Self::from_criteria(&FilterCriteria::from_query(query))
    }

    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let defaults = Self::default();
        Self {
            city: criteria.city.clone().unwrap_or(defaults.city),
            district: criteria.district.clone().unwrap_or(defaults.district),
            neighborhood: criteria.neighborhood.clone().unwrap_or(defaults.neighborhood),
            listing_type: criteria.listing_type.as_str().to_string(),
            property_type: criteria.property_type.as_str().to_string(),
            min_price: criteria.min_price.map(|p| p.to_string()).unwrap_or_default(),
            max_price: criteria.max_price.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    /// Read a submitted form. Missing selects read as `all`; the city input
    /// is read-only in the browser, so it is pinned here too.
    pub fn from_form(form: &FormData) -> Self {
        let select = |name: &str| {
            form.get(name)
                .filter(|v| !v.is_empty())
                .unwrap_or(ALL)
                .to_string()
        };

        Self {
            city: DEFAULT_CITY.to_string(),
            district: select(DISTRICT),
            neighborhood: select(NEIGHBORHOOD),
            listing_type: select(LISTING_TYPE),
            property_type: select(PROPERTY_TYPE),
            min_price: form.value(MIN_PRICE),
            max_price: form.value(MAX_PRICE),
        }
    }

    /// District changed: any previously chosen neighborhood may not belong
    /// to the new one, so it goes back to `all`.
    pub fn select_district(&mut self, district: &str) {
        let district = district.trim();
        self.district = if district.is_empty() {
            ALL.to_string()
        } else {
            district.to_string()
        };
        self.neighborhood = ALL.to_string();
    }

    /// Neighborhoods the user may pick for the current district.
    pub fn available_neighborhoods<'a>(&self, lookup: &'a FilterLookupData) -> &'a [String] {
        if self.district == ALL {
            return &[];
        }
        lookup.neighborhoods_of(&self.district)
    }

    pub fn to_criteria(&self) -> Result<FilterCriteria, FieldErrors> {
        check(self)?;

        let criteria = FilterCriteria {
            city: Some(self.city.clone()),
            district: Some(self.district.clone()),
            neighborhood: Some(self.neighborhood.clone()),
            listing_type: self.listing_type.parse().unwrap_or_default(),
            property_type: self.property_type.parse().unwrap_or_default(),
            min_price: parse_price(&self.min_price),
            max_price: parse_price(&self.max_price),
        };
        Ok(criteria.normalized())
    }

    /// Where a submit navigates: the listing route with exactly these
    /// criteria, replacing the previous ones.
    pub fn submit_location(&self) -> Result<String, FieldErrors> {
        Ok(self.to_criteria()?.listing_location())
    }
}

fn validate_listing_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<ListingType>()
        .map(|_| ())
        .map_err(|_| invalid("listing_type", "Choose a listing type from the list"))
}

fn validate_property_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<PropertyType>()
        .map(|_| ())
        .map_err(|_| invalid("property_type", "Choose a property type from the list"))
}

fn validate_price_bound(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_price(value).is_some() {
        Ok(())
    } else {
        Err(invalid("price", "Enter a non-negative number"))
    }
}
