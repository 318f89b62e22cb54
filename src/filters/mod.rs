pub mod criteria;
pub mod form;

pub use criteria::{query_pairs, FilterCriteria, ListingType, PropertyType, ALL, DEFAULT_CITY};
pub use form::FilterForm;
