//! Value objects - ephemeral domain types that are never persisted

pub mod listing_query;

pub use listing_query::{
    FlagFilter, KindFilter, ListingQuery, ListingQueryParams, SortField, SortOrder,
    DEFAULT_PAGE_SIZE,
};
