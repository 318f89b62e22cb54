// filters/criteria.rs
use std::fmt;
use std::str::FromStr;

/// Reserved value meaning "no constraint on this field".
pub const ALL: &str = "all";

/// The portal only lists properties in one city.
pub const DEFAULT_CITY: &str = "Antalya";

pub const CITY: &str = "city";
pub const DISTRICT: &str = "district";
pub const NEIGHBORHOOD: &str = "neighborhood";
pub const LISTING_TYPE: &str = "type";
pub const PROPERTY_TYPE: &str = "propertyType";
pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingType {
    #[default]
    All,
    Rental,
    Sale,
}

impl ListingType {
    pub const VARIANTS: [ListingType; 3] = [ListingType::All, ListingType::Rental, ListingType::Sale];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::All => ALL,
            ListingType::Rental => "rental",
            ListingType::Sale => "sale",
        }
    }
}

impl FromStr for ListingType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropertyType {
    #[default]
    All,
    Apartment,
    Villa,
    Land,
}

impl PropertyType {
    pub const VARIANTS: [PropertyType; 4] = [
        PropertyType::All,
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Land,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::All => ALL,
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Land => "land",
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for UnknownValue {}

/// Search criteria as carried by the listing URL. `None` and the `All`
/// variants both mean "unconstrained".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
    pub listing_type: ListingType,
    pub property_type: PropertyType,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    /// Parse the recognised parameters of a listing query string. Unknown
    /// parameters are ignored here; malformed values read as unset.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = FilterCriteria::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            match key.as_ref() {
                CITY => criteria.city = present(value),
                DISTRICT => criteria.district = present(value),
                NEIGHBORHOOD => criteria.neighborhood = present(value),
                LISTING_TYPE => criteria.listing_type = value.parse().unwrap_or_default(),
                PROPERTY_TYPE => criteria.property_type = value.parse().unwrap_or_default(),
                MIN_PRICE => criteria.min_price = parse_price(value),
                MAX_PRICE => criteria.max_price = parse_price(value),
                _ => {}
            }
        }

        criteria
    }

    /// Parameters to put in the URL. Empty and `all` fields are left out.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let texts = [
            (CITY, &self.city),
            (DISTRICT, &self.district),
            (NEIGHBORHOOD, &self.neighborhood),
        ];
        for (key, value) in texts {
            if let Some(v) = value.as_deref().and_then(present) {
                pairs.push((key, v));
            }
        }

        if self.listing_type != ListingType::All {
            pairs.push((LISTING_TYPE, self.listing_type.as_str().to_string()));
        }
        if self.property_type != PropertyType::All {
            pairs.push((PROPERTY_TYPE, self.property_type.as_str().to_string()));
        }
        if let Some(min) = self.min_price {
            pairs.push((MIN_PRICE, min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push((MAX_PRICE, max.to_string()));
        }

        pairs
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Listing route for these criteria; replaces whatever was there before.
    pub fn listing_location(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            LISTING_PATH.to_string()
        } else {
            format!("{LISTING_PATH}?{query}")
        }
    }

    /// Same criteria with every `all`/empty field folded into absence.
    pub fn normalized(&self) -> Self {
        Self {
            city: self.city.as_deref().and_then(present),
            district: self.district.as_deref().and_then(present),
            neighborhood: self.neighborhood.as_deref().and_then(present),
            ..self.clone()
        }
    }
}

pub const LISTING_PATH: &str = "/properties/listing";

/// Every pair of a raw query string, decoded and in order. This is what gets
/// forwarded to the backend, recognised or not.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn present(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty() && value != ALL).then(|| value.to_string())
}

pub(crate) fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}
