//! Listing request payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

use estate_core::domain::entities::listing::{ListingDraft, ListingKind};
use estate_core::domain::value_objects::listing_query::ListingQueryParams;

/// Body of create and full-update requests
///
/// Shape-level checks live here; the service re-validates the pricing and
/// image invariants before anything reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,

    pub description: String,

    #[validate(length(min = 1, max = 512, message = "must be 1-512 characters"))]
    pub address: String,

    #[serde(rename = "type")]
    pub kind: ListingKind,

    pub bedrooms: u32,
    pub bathrooms: u32,

    pub regular_price: f64,

    #[serde(default)]
    pub discount_price: f64,

    #[serde(default)]
    pub offer: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub furnished: bool,

    #[validate(length(min = 1, max = 6, message = "must contain 1-6 image URLs"))]
    pub image_urls: Vec<String>,
}

impl From<ListingPayload> for ListingDraft {
    fn from(payload: ListingPayload) -> Self {
        ListingDraft {
            name: payload.name,
            description: payload.description,
            address: payload.address,
            kind: payload.kind,
            bedrooms: payload.bedrooms,
            bathrooms: payload.bathrooms,
            regular_price: payload.regular_price,
            discount_price: payload.discount_price,
            offer: payload.offer,
            parking: payload.parking,
            furnished: payload.furnished,
            image_urls: payload.image_urls,
        }
    }
}

/// Raw query string of `GET /api/listing/get`
///
/// Everything is optional and string-typed; normalization happens in the
/// core query builder so malformed numerics fail closed instead of 400ing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListingsQuery {
    pub search_term: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub offer: Option<String>,
    pub furnished: Option<String>,
    pub parking: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub start_index: Option<String>,
}

impl From<SearchListingsQuery> for ListingQueryParams {
    fn from(query: SearchListingsQuery) -> Self {
        ListingQueryParams {
            search_term: query.search_term,
            kind: query.kind,
            offer: query.offer,
            furnished: query.furnished,
            parking: query.parking,
            sort: query.sort,
            order: query.order,
            limit: query.limit,
            start_index: query.start_index,
        }
    }
}
