// src/domain/listing.rs
use crate::api::{ApiError, FilterLookupData, PortalApi, Property};
use std::thread;
use tracing::error;

pub const LOAD_ERROR: &str =
    "Something went wrong while loading listings. Please try again later.";

/// Listing view state. Starts out `Loading` and settles exactly once, after
/// both backend calls have finished.
#[derive(Debug, Default)]
pub enum ListingState {
    #[default]
    Loading,
    Failed(String),
    Ready {
        properties: Vec<Property>,
        lookup: FilterLookupData,
    },
}

impl ListingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListingState::Loading)
    }

    /// Settle from both results. Either failure wins and the other result
    /// is dropped.
    pub fn settle(
        properties: Result<Vec<Property>, ApiError>,
        lookup: Result<FilterLookupData, ApiError>,
    ) -> Self {
        match (properties, lookup) {
            (Ok(properties), Ok(lookup)) => ListingState::Ready { properties, lookup },
            (Err(e), _) | (_, Err(e)) => {
                error!("listing load failed: {e}");
                ListingState::Failed(LOAD_ERROR.to_string())
            }
        }
    }
}

/// Fetch the filtered properties and the (unfiltered) lookup data side by
/// side, then join. `query` is forwarded to the backend untouched.
pub fn load_listing(api: &dyn PortalApi, query: &[(String, String)]) -> ListingState {
    let (properties, lookup) = thread::scope(|s| {
        let properties = s.spawn(|| api.list_properties(query));
        let lookup = s.spawn(|| api.lookup_data());

        (
            properties
                .join()
                .unwrap_or_else(|_| Err(ApiError::Network("property fetch panicked".into()))),
            lookup
                .join()
                .unwrap_or_else(|_| Err(ApiError::Network("lookup fetch panicked".into()))),
        )
    });

    ListingState::settle(properties, lookup)
}

/// First few properties of the unfiltered list, for the landing page.
pub fn featured(api: &dyn PortalApi, count: usize) -> Result<Vec<Property>, ApiError> {
    let mut all = api.list_properties(&[])?;
    all.truncate(count);
    Ok(all)
}
