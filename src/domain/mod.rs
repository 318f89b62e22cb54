pub mod create;
pub mod format;
pub mod listing;

pub use create::{submit_new_property, CreateError};
pub use format::format_price;
pub use listing::{featured, load_listing, ListingState};
