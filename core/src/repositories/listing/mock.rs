//! In-memory implementation of ListingRepository for testing

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::domain::value_objects::listing_query::{ListingQuery, SortField, SortOrder};
use crate::errors::DomainError;

use super::trait_::ListingRepository;

/// Mock listing repository backed by a HashMap
///
/// Implements the full search semantics (text OR-match, ANDed filters,
/// sort, skip/limit) so service tests can exercise real queries.
pub struct MockListingRepository {
    listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl MockListingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn compare(a: &Listing, b: &Listing, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::RegularPrice => a.regular_price.total_cmp(&b.regular_price),
        SortField::Bedrooms => a.bedrooms.cmp(&b.bedrooms),
        SortField::Bathrooms => a.bathrooms.cmp(&b.bathrooms),
    }
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;
        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings.get(&id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings.values().find(|l| l.code == code).cloned())
    }

    async fn search(&self, query: &ListingQuery) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;

        let mut matches: Vec<Listing> = listings
            .values()
            .filter(|l| {
                query.term_matches(&l.name, &l.address, &l.description, &l.code)
                    && query.kind.matches(l.kind)
                    && query.offer.matches(l.offer)
                    && query.furnished.matches(l.furnished)
                    && query.parking.matches(l.parking)
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort);
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(matches
            .into_iter()
            .skip(query.start_index as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings
            .values()
            .filter(|l| l.user_ref == owner)
            .cloned()
            .collect())
    }

    async fn update(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;

        if !listings.contains_key(&listing.id) {
            return Err(DomainError::not_found("Listing"));
        }

        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut listings = self.listings.write().await;
        Ok(listings.remove(&id).is_some())
    }
}
