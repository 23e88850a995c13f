//! Listing repository trait defining the interface for listing persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::domain::value_objects::listing_query::ListingQuery;
use crate::errors::DomainError;

/// Repository trait for Listing entity persistence operations
///
/// Implementations must support per-record CRUD by primary identifier plus
/// the composed filter/sort/pagination query described by [`ListingQuery`].
/// The store's own per-statement atomicity is the only concurrency
/// guarantee the domain relies on.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a new listing
    async fn create(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Find a listing by its primary identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError>;

    /// Find a listing by its human-readable code (exact match)
    ///
    /// Codes are not guaranteed unique; implementations return an arbitrary
    /// match when duplicates exist.
    async fn find_by_code(&self, code: &str) -> Result<Option<Listing>, DomainError>;

    /// Run the composed filter/sort/pagination query and return one page
    ///
    /// Tie ordering between rows with equal sort keys is store-defined.
    async fn search(&self, query: &ListingQuery) -> Result<Vec<Listing>, DomainError>;

    /// All listings owned by the given user
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Listing>, DomainError>;

    /// Replace an existing listing
    ///
    /// # Returns
    /// * `Ok(Listing)` - The updated listing
    /// * `Err(DomainError::NotFound)` - No listing with that id
    async fn update(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Delete a listing
    ///
    /// # Returns
    /// * `Ok(true)` - Listing was deleted
    /// * `Ok(false)` - Listing not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
