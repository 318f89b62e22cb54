use crate::api::{CreatePropertyRequest, Property, UpdatePropertyRequest};
use crate::filters::{ListingType, PropertyType, ALL};
use crate::forms::validation::invalid;
use crate::forms::FormData;
use regex::Regex;
use std::sync::OnceLock;
use validator::{Validate, ValidationError};

/// Fields of the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct PropertyForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    pub price: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    pub district: String,
    pub neighborhood: String,
    #[validate(custom(function = "validate_listing_type"))]
    pub listing_type: String,
    #[validate(custom(function = "validate_property_type"))]
    pub property_type: String,
}

impl PropertyForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            title: form.value("title"),
            description: form.value("description"),
            price: form.value("price"),
            location: form.value("location"),
            district: form.value("district"),
            neighborhood: form.value("neighborhood"),
            listing_type: form.value("type"),
            property_type: form.value("propertyType"),
        }
    }

    /// Pre-fill the edit form.
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone().unwrap_or_default(),
            description: property.description.clone().unwrap_or_default(),
            price: property.price.map(|p| p.to_string()).unwrap_or_default(),
            location: property.location.clone().unwrap_or_default(),
            district: property.district.clone().unwrap_or_default(),
            neighborhood: property.neighborhood.clone().unwrap_or_default(),
            listing_type: property.listing_type.clone().unwrap_or_default(),
            property_type: property.property_type.clone().unwrap_or_default(),
        }
    }

    /// Payload for `POST /properties`. Photos are filled in once the upload
    /// (if any) has finished. Call only after the form validated.
    pub fn to_create_request(&self) -> CreatePropertyRequest {
        CreatePropertyRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price.parse().unwrap_or_default(),
            location: self.location.clone(),
            district: optional(&self.district),
            neighborhood: optional(&self.neighborhood),
            listing_type: optional(&self.listing_type),
            property_type: optional(&self.property_type),
            photos: Vec::new(),
        }
    }

    pub fn to_update_request(&self) -> UpdatePropertyRequest {
        UpdatePropertyRequest {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            price: self.price.parse().ok(),
            location: Some(self.location.clone()),
            district: optional(&self.district),
            neighborhood: optional(&self.neighborhood),
            listing_type: optional(&self.listing_type),
            property_type: optional(&self.property_type),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty() && value != ALL).then(|| value.to_string())
}

fn price_pattern() -> &'static Regex {
    static PRICE: OnceLock<Regex> = OnceLock::new();
    PRICE.get_or_init(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("price pattern compiles"))
}

fn validate_price(value: &str) -> Result<(), ValidationError> {
    if price_pattern().is_match(value) {
        Ok(())
    } else {
        Err(invalid("price", "Enter a valid price"))
    }
}

// A listing is either for rent or for sale; `all` only makes sense as a filter.
fn validate_listing_type(value: &str) -> Result<(), ValidationError> {
    match value.parse::<ListingType>() {
        _ if value.is_empty() => Ok(()),
        Ok(t) if t != ListingType::All => Ok(()),
        _ => Err(invalid("listing_type", "Choose rental or sale")),
    }
}

fn validate_property_type(value: &str) -> Result<(), ValidationError> {
    match value.parse::<PropertyType>() {
        _ if value.is_empty() => Ok(()),
        Ok(t) if t != PropertyType::All => Ok(()),
        _ => Err(invalid("property_type", "Choose apartment, villa or land")),
    }
}
