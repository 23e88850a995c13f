//! Normalized listing search query.
//!
//! Translates the optional, independently-defaulted search parameters into a
//! single well-formed query with no ambiguous states. Every parameter
//! arrives as an optional raw string; absence and malformed values fail
//! closed to the documented defaults and never raise.

use serde::{Deserialize, Serialize};

use crate::domain::entities::listing::ListingKind;

/// Default number of listings per result page
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Tri-state boolean filter for `offer` / `furnished` / `parking`
///
/// `"false"` and absent behave identically: no narrowing. Only the literal
/// `"true"` narrows results, so the type has no `Off` state at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagFilter {
    /// Match listings regardless of the flag
    Any,
    /// Match only listings where the flag is set
    Only,
}

impl FlagFilter {
    fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("true") => FlagFilter::Only,
            _ => FlagFilter::Any,
        }
    }

    /// Whether the given flag value passes this filter
    pub fn matches(&self, value: bool) -> bool {
        match self {
            FlagFilter::Any => true,
            FlagFilter::Only => value,
        }
    }
}

/// Filter on the listing kind
///
/// `"all"`, absence, and unknown values match both sale and rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindFilter {
    /// Match both sale and rent listings
    Any,
    /// Match only the given kind
    Only(ListingKind),
}

impl KindFilter {
    fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("sale") => KindFilter::Only(ListingKind::Sale),
            Some("rent") => KindFilter::Only(ListingKind::Rent),
            _ => KindFilter::Any,
        }
    }

    /// Whether the given kind passes this filter
    pub fn matches(&self, kind: ListingKind) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::Only(wanted) => *wanted == kind,
        }
    }
}

/// Sortable listing fields
///
/// Unknown field names fall back to `CreatedAt`, the store needs a fixed
/// column whitelist anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    CreatedAt,
    RegularPrice,
    Bedrooms,
    Bathrooms,
}

impl SortField {
    fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("regularPrice") => SortField::RegularPrice,
            Some("bedrooms") => SortField::Bedrooms,
            Some("bathrooms") => SortField::Bathrooms,
            _ => SortField::CreatedAt,
        }
    }
}

/// Sort direction; anything other than the literal `"asc"` sorts descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Raw, optional search parameters exactly as they arrive in a request
///
/// Numeric parameters stay strings here so that malformed values can fail
/// closed to the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQueryParams {
    pub search_term: Option<String>,
    pub kind: Option<String>,
    pub offer: Option<String>,
    pub furnished: Option<String>,
    pub parking: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub start_index: Option<String>,
}

/// Normalized listing search query
///
/// The free-text term case-insensitively substring-matches at least one of
/// name, address, description, or the listing code; the remaining filters
/// AND with that clause and with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Free-text term; empty matches all listings
    pub search_term: String,
    pub kind: KindFilter,
    pub offer: FlagFilter,
    pub furnished: FlagFilter,
    pub parking: FlagFilter,
    pub sort: SortField,
    pub order: SortOrder,
    /// Page size
    pub limit: u32,
    /// Offset into the sorted result set
    pub start_index: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::from_params(&ListingQueryParams::default())
    }
}

impl ListingQuery {
    /// Normalize raw request parameters into a well-formed query
    pub fn from_params(params: &ListingQueryParams) -> Self {
        let limit = params
            .limit
            .as_deref()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let start_index = params
            .start_index
            .as_deref()
            .and_then(|raw| raw.parse::<u32>().ok())
            .unwrap_or(0);

        Self {
            search_term: params.search_term.clone().unwrap_or_default(),
            kind: KindFilter::from_param(params.kind.as_deref()),
            offer: FlagFilter::from_param(params.offer.as_deref()),
            furnished: FlagFilter::from_param(params.furnished.as_deref()),
            parking: FlagFilter::from_param(params.parking.as_deref()),
            sort: SortField::from_param(params.sort.as_deref()),
            order: SortOrder::from_param(params.order.as_deref()),
            limit,
            start_index,
        }
    }

    /// Whether the free-text term matches any of the searchable fields
    pub fn term_matches(&self, name: &str, address: &str, description: &str, code: &str) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        [name, address, description, code]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}
