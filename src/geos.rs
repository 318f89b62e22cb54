// Districts of the one supported city, with the neighborhoods we know about.
// The listing page uses the backend's lookup data; this table backs the
// landing-page search and stands in when lookup data can't be fetched.

use crate::api::FilterLookupData;

pub const ANTALYA_DISTRICTS: &[(&str, &[&str])] = &[
    ("Muratpaşa", &[]),
    ("Konyaaltı", &["Gürsu", "Liman", "Hurma"]),
    ("Kepez", &[]),
    ("Lara", &[]),
    ("Alanya", &[]),
];

pub const LISTING_TYPES: &[&str] = &["rental", "sale"];
pub const PROPERTY_TYPES: &[&str] = &["apartment", "villa", "land"];

pub fn builtin_lookup() -> FilterLookupData {
    FilterLookupData {
        districts: ANTALYA_DISTRICTS
            .iter()
            .map(|(d, _)| d.to_string())
            .collect(),
        neighborhoods: ANTALYA_DISTRICTS
            .iter()
            .filter(|(_, n)| !n.is_empty())
            .map(|(d, n)| (d.to_string(), n.iter().map(|s| s.to_string()).collect()))
            .collect(),
        property_types: PROPERTY_TYPES.iter().map(|s| s.to_string()).collect(),
        listing_types: LISTING_TYPES.iter().map(|s| s.to_string()).collect(),
    }
}
