pub mod error;
pub mod field;
pub mod filter_form;
pub mod navbar;
pub mod property_card;
pub mod property_form;

pub use error::html_error_response;
pub use field::{form_messages, select_field, text_field, textarea_field};
pub use filter_form::{filter_form, neighborhood_field, search_form};
pub use navbar::navbar;
pub use property_card::{property_card, property_grid};
