//! Listing service implementation

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::listing::{Listing, ListingDraft};
use crate::domain::value_objects::listing_query::{ListingQuery, ListingQueryParams};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ListingRepository;

use super::code::generate_listing_code;

/// Service for listing CRUD with ownership enforcement
///
/// Ownership and existence checks run before any mutation and
/// short-circuit with the specific error kind. Payload invariants are
/// validated here rather than trusted from the client.
pub struct ListingService<R>
where
    R: ListingRepository,
{
    /// Listing repository for persistence operations
    repository: Arc<R>,
}

impl<R> ListingService<R>
where
    R: ListingRepository,
{
    /// Create a new listing service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a listing owned by `owner_id`
    ///
    /// Validates the draft, assigns a human-readable code, and persists.
    /// The returned record carries the server-assigned identifiers.
    pub async fn create(&self, owner_id: Uuid, draft: ListingDraft) -> DomainResult<Listing> {
        draft.validate()?;

        let listing = Listing::new(generate_listing_code(), draft, owner_id);
        let created = self.repository.create(listing).await?;

        info!(listing_id = %created.id, code = %created.code, "listing created");
        Ok(created)
    }

    /// Fetch a listing by its primary identifier
    pub async fn get(&self, id: Uuid) -> DomainResult<Listing> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))
    }

    /// Fetch a listing by its human-readable code (exact match)
    pub async fn get_by_code(&self, code: &str) -> DomainResult<Listing> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))
    }

    /// Run a search from raw request parameters
    ///
    /// Normalizes the parameters into a [`ListingQuery`] and returns the
    /// matching page. No total count is returned; callers treat a page
    /// shorter than `limit` as the likely end of the result set.
    pub async fn search(&self, params: &ListingQueryParams) -> DomainResult<Vec<Listing>> {
        let query = ListingQuery::from_params(params);
        self.repository.search(&query).await
    }

    /// Replace the mutable fields of a listing
    ///
    /// Not-Found beats Forbidden: the existence check runs first, and
    /// neither failure mutates the record.
    pub async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        draft: ListingDraft,
    ) -> DomainResult<Listing> {
        let mut listing = self.get(id).await?;

        if !listing.is_owned_by(requester_id) {
            return Err(DomainError::forbidden(
                "You can only update your own listings!",
            ));
        }

        draft.validate()?;
        listing.apply(draft);
        self.repository.update(listing).await
    }

    /// Permanently delete a listing
    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> DomainResult<()> {
        let listing = self.get(id).await?;

        if !listing.is_owned_by(requester_id) {
            return Err(DomainError::forbidden(
                "You can only delete your own listings!",
            ));
        }

        self.repository.delete(id).await?;
        info!(listing_id = %id, "listing deleted");
        Ok(())
    }

    /// All listings owned by `owner_id`; callers may only view their own
    pub async fn list_by_owner(
        &self,
        owner_id: Uuid,
        requester_id: Uuid,
    ) -> DomainResult<Vec<Listing>> {
        if owner_id != requester_id {
            return Err(DomainError::forbidden(
                "You can only view your own listings!",
            ));
        }

        self.repository.find_by_owner(owner_id).await
    }
}
